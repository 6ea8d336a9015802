//! The session-scoped language state store.
//!
//! The store is an explicit dependency-injection handle: the portal root
//! constructs it at mount, clones the handle into every page, and tears it
//! down when the root unmounts. Reads are lock-free; the setter is the only
//! mutation and bumps a version counter so every mounted consumer observes
//! the new language before the next interaction is processed.

use crate::catalog;
use crate::Language;
use arc_swap::ArcSwap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Shared handle to the language store, cloned into every page.
pub type LanguageHandle = Arc<LanguageStore>;

/// Holds the active language for the lifetime of the session.
#[derive(Debug)]
pub struct LanguageStore {
    active: ArcSwap<Language>,
    version: AtomicU64,
}

impl LanguageStore {
    /// Creates the store with the given initial language.
    ///
    /// Runs the catalog completeness check and logs every divergence; holes
    /// in the tables are surfaced here rather than silently falling back at
    /// lookup time.
    pub fn mount(initial: Language) -> LanguageHandle {
        for entry in catalog::verify_completeness() {
            warn!(
                key = %entry.key,
                missing_from = ?entry.missing_from,
                "translation catalog is incomplete"
            );
        }
        info!(language = %initial, "language store mounted");
        Arc::new(Self {
            active: ArcSwap::from_pointee(initial),
            version: AtomicU64::new(0),
        })
    }

    /// Returns the active language. No failure mode.
    pub fn language(&self) -> Language {
        **self.active.load()
    }

    /// Replaces the active language for the remainder of the session.
    ///
    /// Bumps the version counter so consumers re-render with the new
    /// translations before the next interaction.
    pub fn set_language(&self, language: Language) {
        self.active.store(Arc::new(language));
        self.version.fetch_add(1, Ordering::SeqCst);
        info!(language = %language, "active language changed");
    }

    /// Looks up `key` in the active language's table.
    ///
    /// Total: on a miss the raw key is returned unchanged, even if the key is
    /// missing from every table. A miss is never surfaced as an error.
    pub fn translate(&self, key: &str) -> String {
        let language = self.language();
        match catalog::lookup(language, key) {
            Some(text) => text.to_string(),
            None => {
                debug!(%key, %language, "translation miss, falling back to raw key");
                key.to_string()
            }
        }
    }

    /// Monotone counter incremented on every language change.
    ///
    /// Consumers compare against the value they rendered with to detect that
    /// a re-render is due.
    pub fn version(&self) -> u64 {
        self.version.load(Ordering::SeqCst)
    }
}
