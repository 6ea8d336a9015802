//! Supported languages of the portal.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of languages the portal renders in.
///
/// Exactly one language is active at any time; the session starts in English
/// and the selection is never persisted across loads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    /// English.
    #[serde(rename = "en")]
    English,
    /// Hindi.
    #[serde(rename = "hi")]
    Hindi,
    /// Marathi.
    #[serde(rename = "mr")]
    Marathi,
}

impl Default for Language {
    fn default() -> Self {
        Self::English
    }
}

impl Language {
    /// Get the short language code for this language.
    pub fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Hindi => "hi",
            Self::Marathi => "mr",
        }
    }

    /// Parse a language from its short code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Self::English),
            "hi" => Some(Self::Hindi),
            "mr" => Some(Self::Marathi),
            _ => None,
        }
    }

    /// Get the native display name shown in the language switcher.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Hindi => "हिंदी",
            Self::Marathi => "मराठी",
        }
    }

    /// Get all supported languages, in switcher order.
    pub fn all() -> [Self; 3] {
        [Self::English, Self::Hindi, Self::Marathi]
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
