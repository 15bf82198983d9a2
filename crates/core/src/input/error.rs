//! Input validation errors.

use thiserror::Error;

/// Errors raised by the validation gate before any computation runs.
///
/// These are user-facing: they block the valuation and are surfaced to the
/// caller, never silently defaulted.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Business name missing or blank.
    #[error("Business name is required")]
    MissingBusinessName,

    /// SDE missing, non-numeric, or not positive.
    #[error("SDE is required and must be greater than zero")]
    MissingSde,

    /// Annual revenue missing, non-numeric, or not positive.
    #[error("Annual revenue is required and must be greater than zero")]
    MissingRevenue,
}
