//! Render errors.

use thiserror::Error;

/// Errors from the rendering boundary.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    /// The renderer exceeded its time budget.
    ///
    /// No partial artifact is returned, and the caller decides whether to
    /// retry; the service never retries on its own.
    #[error("report render exceeded the {timeout_secs}s budget")]
    Timeout {
        /// The budget that was exceeded, in seconds.
        timeout_secs: u64,
    },

    /// The renderer itself failed.
    #[error("renderer failed: {0}")]
    Failed(String),
}
