//! Test utilities and shared fixtures for the Aarohi portal workspace.
//!
//! Provides common fixtures and helper functions used across crates for unit
//! and integration testing.

#[cfg(feature = "tracing-subscriber")]
use std::sync::Once;

#[cfg(feature = "tracing-subscriber")]
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
#[cfg(feature = "tracing-subscriber")]
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// Safe to call multiple times; only initializes once.
#[cfg(feature = "tracing-subscriber")]
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        fmt().with_test_writer().with_env_filter(filter).init();
    });
}

/// No-op version when tracing-subscriber is not available.
#[cfg(not(feature = "tracing-subscriber"))]
pub fn init_test_logging() {}

/// Fixtures mirroring the records the backend serves.
pub mod record_fixtures {
    use crate::Category;

    /// A generic categorized record for exercising filters and panels.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct TestRecord {
        /// Stable identifier.
        pub id: u32,
        /// Display title.
        pub title: String,
        /// Category tag.
        pub category: Category,
    }

    /// Generates an ordered collection cycling through the given categories.
    pub fn categorized_records(count: usize, categories: &[Category]) -> Vec<TestRecord> {
        (0..count)
            .map(|i| TestRecord {
                id: i as u32,
                title: format!("record-{i}"),
                category: categories[i % categories.len()],
            })
            .collect()
    }

    /// The scholarship category mix the education page filters over.
    pub fn scholarship_categories() -> Vec<Category> {
        vec![
            Category::Technology,
            Category::Medical,
            Category::Arts,
            Category::Engineering,
            Category::Business,
            Category::Science,
        ]
    }

    /// The contact category mix the help page renders.
    pub fn contact_categories() -> Vec<Category> {
        vec![
            Category::General,
            Category::Domestic,
            Category::Police,
            Category::Medical,
            Category::Mental,
            Category::Legal,
        ]
    }
}

/// Envelope payloads matching the backend's `{status, data, message}` shape.
pub mod envelope_fixtures {
    /// A successful education envelope with one scholarship and one resource.
    pub fn education_success_json() -> &'static str {
        r#"{
            "status": "success",
            "data": {
                "scholarships": [
                    {
                        "id": 1,
                        "title": "Women in STEM Scholarship",
                        "amount": "₹50,000",
                        "category": "technology",
                        "deadline": "2025-03-31",
                        "eligibility": "Female students in STEM fields",
                        "description": "Supports women pursuing technology degrees."
                    }
                ],
                "learningResources": [
                    {
                        "title": "Intro to Python",
                        "provider": "CodeHer",
                        "type": "coding",
                        "duration": "6 weeks",
                        "level": "Beginner",
                        "free": true,
                        "url": "https://example.org/python"
                    }
                ]
            },
            "message": "Education data retrieved successfully"
        }"#
    }

    /// A successful emergency envelope with two contacts.
    pub fn emergency_success_json() -> &'static str {
        r#"{
            "status": "success",
            "data": {
                "contacts": [
                    {
                        "id": 1,
                        "name": "Women Helpline",
                        "number": "1091",
                        "category": "general",
                        "description": "24/7 national women helpline",
                        "available": true
                    },
                    {
                        "id": 2,
                        "name": "Police",
                        "number": "100",
                        "category": "police",
                        "description": "Emergency police response",
                        "available": true
                    }
                ]
            },
            "message": "Emergency contacts retrieved successfully"
        }"#
    }

    /// An envelope whose body reports failure despite a 2xx transport status.
    pub fn failed_envelope_json() -> &'static str {
        r#"{"status": "error", "data": null, "message": "database unavailable"}"#
    }
}
