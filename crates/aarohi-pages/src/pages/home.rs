//! The landing page: hero copy and feature tiles, all translated.

use aarohi_i18n::LanguageHandle;

/// A tile linking to one of the feature pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureTile {
    /// Route of the target page.
    pub route: &'static str,
    /// Translated tile heading.
    pub heading: String,
}

/// The landing page view model.
pub struct HomePage {
    lang: LanguageHandle,
}

impl HomePage {
    /// Mounts the page with the shared language handle.
    pub fn mount(lang: LanguageHandle) -> Self {
        Self { lang }
    }

    /// Hero headline.
    pub fn hero_title(&self) -> String {
        self.lang.translate("hero.title")
    }

    /// Hero subline.
    pub fn hero_subtitle(&self) -> String {
        self.lang.translate("hero.subtitle")
    }

    /// Heading of the "what is Aarohi" section.
    pub fn about_heading(&self) -> String {
        self.lang.translate("what.is.aarohi")
    }

    /// Body of the "what is Aarohi" section.
    pub fn about_text(&self) -> String {
        self.lang.translate("aarohi.description")
    }

    /// The four feature tiles, in display order.
    pub fn feature_tiles(&self) -> Vec<FeatureTile> {
        [
            ("/health", "health.title"),
            ("/education", "education.title"),
            ("/help", "help.title"),
            ("/legal", "legal.title"),
        ]
        .into_iter()
        .map(|(route, key)| FeatureTile {
            route,
            heading: self.lang.translate(key),
        })
        .collect()
    }

    /// Footer credit line.
    pub fn footer(&self) -> String {
        self.lang.translate("footer.made")
    }
}
