//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Business rule violation.
    #[error("Business rule violation: {0}")]
    BusinessRule(String),

    /// Report rendering exceeded its time budget.
    #[error("Render timed out: {0}")]
    RenderTimeout(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::NotFound(_) => 404,
            Self::Validation(_) => 400,
            Self::BusinessRule(_) => 422,
            Self::RenderTimeout(_) => 504,
            Self::Internal(_) => 500,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::BusinessRule(_) => "BUSINESS_RULE_VIOLATION",
            Self::RenderTimeout(_) => "RENDER_TIMEOUT",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(AppError::NotFound(String::new()).status_code(), 404);
        assert_eq!(AppError::Validation(String::new()).status_code(), 400);
        assert_eq!(AppError::BusinessRule(String::new()).status_code(), 422);
        assert_eq!(AppError::RenderTimeout(String::new()).status_code(), 504);
        assert_eq!(AppError::Internal(String::new()).status_code(), 500);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(AppError::NotFound(String::new()).error_code(), "NOT_FOUND");
        assert_eq!(
            AppError::Validation(String::new()).error_code(),
            "VALIDATION_ERROR"
        );
        assert_eq!(
            AppError::BusinessRule(String::new()).error_code(),
            "BUSINESS_RULE_VIOLATION"
        );
        assert_eq!(
            AppError::RenderTimeout(String::new()).error_code(),
            "RENDER_TIMEOUT"
        );
        assert_eq!(
            AppError::Internal(String::new()).error_code(),
            "INTERNAL_ERROR"
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            AppError::Validation("sde is required".into()).to_string(),
            "Validation error: sde is required"
        );
        assert_eq!(
            AppError::RenderTimeout("exceeded 10s".into()).to_string(),
            "Render timed out: exceeded 10s"
        );
    }
}
