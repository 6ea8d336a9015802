//! Static translation catalog.
//!
//! One key/text table per language. Keys are dotted flat identifiers
//! (`nav.home`, `hero.title`) shared across all tables; the startup
//! completeness check reports any key that is missing from some language so
//! the tables cannot silently diverge.

use crate::Language;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// English table.
static EN: &[(&str, &str)] = &[
    ("nav.home", "Home"),
    ("nav.health", "Health"),
    ("nav.education", "Education"),
    ("nav.help", "Help"),
    ("nav.legal", "Legal"),
    ("nav.stories", "Stories"),
    ("hero.title", "Aarohi – Empowering Every Woman, Everywhere"),
    (
        "hero.subtitle",
        "Rising together, supporting each other, creating a safer world for all women",
    ),
    ("panic.button", "Safe Me"),
    ("panic.failed", "Failed to send emergency alert."),
    ("what.is.aarohi", "What is Aarohi?"),
    (
        "aarohi.description",
        "Aarohi means \"ascending\" in Sanskrit. We are a platform dedicated to empowering women through education, health awareness, legal support, and community building.",
    ),
    ("health.title", "Women's Health & Wellness"),
    ("education.title", "Education & Opportunities"),
    ("help.title", "Emergency Help & Support"),
    ("legal.title", "Legal Rights & Support"),
    ("stories.title", "Inspiring Stories"),
    ("footer.made", "Made with ❤️ by students for Hackathon 2025"),
    ("common.loading", "Loading..."),
    ("common.failed", "Failed to load. Please try again later."),
    ("common.retry", "Try Again"),
];

/// Hindi table.
static HI: &[(&str, &str)] = &[
    ("nav.home", "होम"),
    ("nav.health", "स्वास्थ्य"),
    ("nav.education", "शिक्षा"),
    ("nav.help", "सहायता"),
    ("nav.legal", "कानूनी"),
    ("nav.stories", "कहानियां"),
    ("hero.title", "आरोही – हर महिला को सशक्त बनाना"),
    (
        "hero.subtitle",
        "एक साथ उठना, एक दूसरे का साथ देना, सभी महिलाओं के लिए एक सुरक्षित दुनिया बनाना",
    ),
    ("panic.button", "मुझे बचाओ"),
    ("panic.failed", "आपातकालीन अलर्ट भेजने में विफल।"),
    ("what.is.aarohi", "आरोही क्या है?"),
    (
        "aarohi.description",
        "आरोही का अर्थ संस्कृत में \"ऊपर चढ़ना\" है। हम शिक्षा, स्वास्थ्य जागरूकता, कानूनी सहायता और समुदायिक निर्माण के माध्यम से महिलाओं को सशक्त बनाने के लिए समर्पित एक मंच हैं।",
    ),
    ("health.title", "महिला स्वास्थ्य और कल्याण"),
    ("education.title", "शिक्षा और अवसर"),
    ("help.title", "आपातकालीन सहायता और समर्थन"),
    ("legal.title", "कानूनी अधिकार और समर्थन"),
    ("stories.title", "प्रेरणादायक कहानियां"),
    ("footer.made", "हैकाथॉन 2025 के लिए छात्रों द्वारा ❤️ के साथ बनाया गया"),
    ("common.loading", "लोड हो रहा है..."),
    ("common.failed", "लोड करने में विफल। कृपया बाद में पुनः प्रयास करें।"),
    ("common.retry", "पुनः प्रयास करें"),
];

/// Marathi table.
static MR: &[(&str, &str)] = &[
    ("nav.home", "मुख्यपृष्ठ"),
    ("nav.health", "आरोग्य"),
    ("nav.education", "शिक्षण"),
    ("nav.help", "मदत"),
    ("nav.legal", "कायदेशीर"),
    ("nav.stories", "कथा"),
    ("hero.title", "आरोही – प्रत्येक महिलेला सशक्त करणे"),
    (
        "hero.subtitle",
        "एकत्र उठून, एकमेकांना पाठिंबा देऊन, सर्व महिलांसाठी एक सुरक्षित जग निर्माण करणे",
    ),
    ("panic.button", "मला वाचवा"),
    ("panic.failed", "आपत्कालीन सूचना पाठवण्यात अयशस्वी."),
    ("what.is.aarohi", "आरोही म्हणजे काय?"),
    (
        "aarohi.description",
        "आरोही म्हणजे संस्कृतमध्ये \"वर चढणे\". आम्ही शिक्षण, आरोग्य जागरूकता, कायदेशीर सहाय्य आणि समुदाय निर्माणाद्वारे महिलांना सशक्त करण्यासाठी समर्पित एक व्यासपीठ आहोत.",
    ),
    ("health.title", "महिला आरोग्य आणि कल्याण"),
    ("education.title", "शिक्षण आणि संधी"),
    ("help.title", "आपत्कालीन मदत आणि समर्थन"),
    ("legal.title", "कायदेशीर हक्क आणि समर्थन"),
    ("stories.title", "प्रेरणादायक कथा"),
    ("footer.made", "हॅकॅथॉन 2025 साठी विद्यार्थ्यांनी ❤️ सह बनवले"),
    ("common.loading", "लोड होत आहे..."),
    ("common.failed", "लोड करण्यात अयशस्वी. कृपया नंतर पुन्हा प्रयत्न करा."),
    ("common.retry", "पुन्हा प्रयत्न करा"),
];

static TABLES: Lazy<HashMap<Language, HashMap<&'static str, &'static str>>> = Lazy::new(|| {
    let mut tables = HashMap::new();
    tables.insert(Language::English, EN.iter().copied().collect());
    tables.insert(Language::Hindi, HI.iter().copied().collect());
    tables.insert(Language::Marathi, MR.iter().copied().collect());
    tables
});

/// Looks up `key` in the table for `language`.
///
/// Returns `None` on a miss; the store turns that into the raw-key fallback.
pub(crate) fn lookup(language: Language, key: &str) -> Option<&'static str> {
    TABLES.get(&language).and_then(|table| table.get(key)).copied()
}

/// A key that exists in at least one language table but not in all of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingEntry {
    /// The diverging key.
    pub key: String,
    /// The languages whose tables lack the key.
    pub missing_from: Vec<Language>,
}

/// Compares the union key set of `tables` against every language.
///
/// A language without a table at all counts as missing every key.
fn verify_tables(
    tables: &HashMap<Language, HashMap<&'static str, &'static str>>,
) -> Vec<MissingEntry> {
    let mut union: Vec<&'static str> = tables
        .values()
        .flat_map(|table| table.keys().copied())
        .collect();
    union.sort_unstable();
    union.dedup();

    let mut divergences = Vec::new();
    for key in union {
        let missing_from: Vec<Language> = Language::all()
            .into_iter()
            .filter(|lang| tables.get(lang).map_or(true, |table| !table.contains_key(key)))
            .collect();
        if !missing_from.is_empty() {
            divergences.push(MissingEntry {
                key: key.to_string(),
                missing_from,
            });
        }
    }
    divergences
}

/// Checks the shipped tables for keys missing from some language.
///
/// An empty result means the tables are complete. The store runs this once at
/// mount and logs each divergence as a warning.
pub fn verify_completeness() -> Vec<MissingEntry> {
    verify_tables(&TABLES)
}

/// Strict form of [`verify_tables`]: the first divergence becomes an error.
fn require_tables(
    tables: &HashMap<Language, HashMap<&'static str, &'static str>>,
) -> crate::I18nResult<()> {
    match verify_tables(tables).into_iter().next() {
        None => Ok(()),
        Some(entry) => Err(crate::I18nError::IncompleteCatalog {
            key: entry.key,
            missing_from: entry.missing_from,
        }),
    }
}

/// Strict form of [`verify_completeness`] for callers that want a hard stop.
///
/// Returns the first divergence as an error instead of a warning list.
pub fn require_complete() -> crate::I18nResult<()> {
    require_tables(&TABLES)
}
