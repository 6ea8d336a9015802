//! Application-wide error types using thiserror.

use aarohi_i18n::I18nError;

/// Main application error type.
///
/// Only configuration problems are fatal; remote failures stay page-local
/// and never surface here.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A configured URL failed to parse.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Localization error, e.g. an unsupported language code.
    #[error("Language error: {0}")]
    Language(#[from] I18nError),
}

/// Result type for the portal application.
pub type AppResult<T> = Result<T, AppError>;
