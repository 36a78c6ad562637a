//! # Application Error Type
//!
//! Fatal errors for the terminal session.
//!
//! Recoverable conditions (unknown item, malformed number, insufficient
//! payment, invalid payment method) never become `AppError`: they are
//! reported and re-prompted at the state that detected them. Only the
//! conditions that end the process live here.

use thiserror::Error;

use karsaz_core::CoreError;

/// Fatal session errors.
#[derive(Debug, Error)]
pub enum AppError {
    /// Credentials did not match; the program exits with a failure status.
    #[error("invalid credentials")]
    AuthenticationFailed,

    /// Console read or write failed.
    #[error("console I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A billing invariant was violated (not reachable through normal
    /// prompt validation).
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            AppError::AuthenticationFailed.to_string(),
            "invalid credentials"
        );

        let err: AppError = CoreError::ItemNotFound("Chips".to_string()).into();
        assert_eq!(err.to_string(), "Item not found in catalog: Chips");
    }
}
