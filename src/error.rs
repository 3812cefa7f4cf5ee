//! Application-wide error types.
//!
//! This module defines the main error type hierarchy for the application,
//! allowing for type-safe error handling throughout the codebase.

pub use crate::config::ConfigError;
pub use crate::eligibility::GatewayError;

/// Main application error type.
///
/// This is the top-level error type that encompasses all error types
/// in the application. It uses `thiserror` for automatic error derivation
/// and conversion.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Eligibility service errors
    #[error("Eligibility service error: {0}")]
    Gateway(#[from] GatewayError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Logger initialization errors
    #[error("Logger error: {0}")]
    Logger(#[from] log::SetLoggerError),
}

/// Convenience type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_from_config_error() {
        let config_error = ConfigError::FilePathNotSet;
        let app_error: AppError = config_error.into();
        assert!(matches!(app_error, AppError::Config(_)));
        assert!(app_error.to_string().contains("Configuration error"));
    }

    #[test]
    fn test_app_error_from_gateway_error() {
        let gateway_error = GatewayError::NotFound {
            message: "not found".to_string(),
        };
        let app_error: AppError = gateway_error.into();
        assert!(matches!(app_error, AppError::Gateway(_)));
        assert_eq!(app_error.to_string(), "Eligibility service error: not found");
    }

    #[test]
    fn test_invalid_service_url_is_a_gateway_error() {
        let app_error: AppError = crate::eligibility::Eligibility::new("not a url", std::time::Duration::from_secs(1))
            .map(|_| ())
            .map_err(AppError::from)
            .unwrap_err();
        assert!(matches!(
            app_error,
            AppError::Gateway(GatewayError::InvalidBaseUrl { .. })
        ));
        assert!(app_error.to_string().starts_with("Eligibility service error: Invalid eligibility service URL"));
    }

    #[test]
    fn test_app_error_from_io_error() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let app_error: AppError = io_error.into();
        assert!(matches!(app_error, AppError::Io(_)));
        assert!(app_error.to_string().contains("I/O error"));
    }

    #[test]
    fn test_app_result_propagates_with_question_mark() {
        fn load() -> AppResult<()> {
            Err(ConfigError::HomeDirectoryNotFound)?;
            Ok(())
        }
        assert!(matches!(load(), Err(AppError::Config(_))));
    }
}
