//! Unified error handling for the storefront widget.
//!
//! Pipeline operations return `Result<T, AppError>`; front ends map the
//! error to a banner (payment failures become
//! [`crate::notify::Notification::PaymentFailed`], lookup misses become
//! [`crate::notify::Notification::CustomerNotFound`]).

use thiserror::Error;

use crate::db::RepositoryError;
use crate::payment::PaymentError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Record store operation failed.
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    /// Payment gateway declined or failed the charge.
    #[error("Payment error: {0}")]
    Payment(#[from] PaymentError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid input from the client.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::NotFound("customer a@example.com".to_string());
        assert_eq!(err.to_string(), "Not found: customer a@example.com");

        let err = AppError::BadRequest("invalid email".to_string());
        assert_eq!(err.to_string(), "Bad request: invalid email");

        let err = AppError::Payment(PaymentError::Declined);
        assert_eq!(err.to_string(), "Payment error: payment declined");
    }
}
