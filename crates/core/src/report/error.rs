//! Report assembly errors.

use thiserror::Error;

/// Errors from the report builder state machine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReportError {
    /// A builder method was called out of order.
    #[error("invalid report transition: {attempted} requires state {expected}, builder is in {actual}")]
    InvalidTransition {
        /// The transition that was attempted.
        attempted: &'static str,
        /// The state the builder must be in for that transition.
        expected: &'static str,
        /// The state the builder was actually in.
        actual: &'static str,
    },
}
