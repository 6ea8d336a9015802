//! Error types for localization operations.

use crate::Language;
use thiserror::Error;

/// Errors that can occur during localization operations.
///
/// A translation miss is deliberately not represented here: `translate` is
/// total and falls back to the raw key instead of failing.
#[derive(Error, Debug)]
pub enum I18nError {
    /// A language code outside the supported set.
    #[error("Unsupported language code: {0}")]
    UnsupportedLanguage(String),

    /// The catalog tables diverge for one or more keys.
    #[error("Translation catalog incomplete: {key} missing from {missing_from:?}")]
    IncompleteCatalog {
        /// The diverging key.
        key: String,
        /// Languages lacking the key.
        missing_from: Vec<Language>,
    },
}

/// Result type for i18n operations.
pub type I18nResult<T> = Result<T, I18nError>;
