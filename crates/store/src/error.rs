//! Store error types.

use thiserror::Error;
use worthwell_shared::types::ValuationId;

/// Errors from the valuation store.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// No record exists for the given ID.
    #[error("valuation not found: {0}")]
    NotFound(ValuationId),
}
