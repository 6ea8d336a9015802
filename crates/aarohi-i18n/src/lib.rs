//! Localization support for the Aarohi portal.
//!
//! This crate provides the session-scoped language state and the static
//! translation catalog behind it:
//!
//! - A closed [`Language`] set (English, Hindi, Marathi)
//! - A per-language key/text catalog with a startup completeness check
//! - The [`LanguageStore`], a lock-free shared cell holding the active
//!   language, with a total `translate` lookup that falls back to the raw
//!   key on a miss
//!
//! # Example
//!
//! ```rust
//! use aarohi_i18n::{Language, LanguageStore};
//!
//! let store = LanguageStore::mount(Language::English);
//! assert_eq!(store.translate("nav.home"), "Home");
//!
//! store.set_language(Language::Hindi);
//! assert_eq!(store.translate("nav.home"), "होम");
//! assert_eq!(store.translate("no.such.key"), "no.such.key");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod catalog;
pub mod error;
pub mod language;
pub mod store;

pub use catalog::{require_complete, verify_completeness, MissingEntry};
pub use error::{I18nError, I18nResult};
pub use language::Language;
pub use store::{LanguageHandle, LanguageStore};
