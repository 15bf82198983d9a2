//! Valuation calculation errors.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors from the valuation calculator.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValuationError {
    /// The calculator received a non-positive SDE.
    ///
    /// The validation gate rejects these inputs before computation, so
    /// reaching this error means the gate was bypassed. It is fatal and
    /// must be logged for investigation, never masked by a zero valuation.
    #[error("calculator received non-positive SDE {0}; validation gate was bypassed")]
    NonPositiveSde(Decimal),
}
