//! Application configuration: defaults plus environment overrides.

use crate::error::{AppError, AppResult};
use aarohi_i18n::{I18nError, Language};
use serde::{Deserialize, Serialize};
use std::env;
use url::Url;

/// Portal configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the resource endpoints.
    pub api_base: String,
    /// URL of the emergency trigger endpoint.
    pub trigger_base: String,
    /// Language the session starts in.
    pub default_language: Language,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: "http://localhost:5000/api".to_string(),
            trigger_base: "http://localhost:5000/api/trigger-emergency".to_string(),
            default_language: Language::English,
        }
    }
}

impl AppConfig {
    /// Builds the configuration from defaults and environment overrides.
    ///
    /// `AAROHI_API_BASE` and `AAROHI_TRIGGER_BASE` replace the endpoint URLs;
    /// `AAROHI_LANGUAGE` sets the starting language by short code. An
    /// unsupported code is a hard error rather than a silent fallback.
    pub fn from_env() -> AppResult<Self> {
        let mut config = Self::default();

        if let Ok(base) = env::var("AAROHI_API_BASE") {
            config.api_base = base;
        }

        if let Ok(trigger) = env::var("AAROHI_TRIGGER_BASE") {
            config.trigger_base = trigger;
        }

        if let Ok(code) = env::var("AAROHI_LANGUAGE") {
            config.default_language = Language::from_code(&code)
                .ok_or(I18nError::UnsupportedLanguage(code))?;
        }

        config.validate()?;
        Ok(config)
    }

    /// The parsed resource base URL.
    pub fn api_base_url(&self) -> AppResult<Url> {
        Ok(Url::parse(&self.api_base)?)
    }

    /// The parsed emergency trigger URL.
    pub fn trigger_url(&self) -> AppResult<Url> {
        Ok(Url::parse(&self.trigger_base)?)
    }

    /// Checks that both endpoint URLs parse and use an http scheme.
    pub fn validate(&self) -> AppResult<()> {
        for url in [self.api_base_url()?, self.trigger_url()?] {
            if !matches!(url.scheme(), "http" | "https") {
                return Err(AppError::Config(format!(
                    "unsupported URL scheme: {url}"
                )));
            }
        }
        Ok(())
    }
}
