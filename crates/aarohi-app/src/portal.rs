//! The portal root: owns the language store and the mounted pages.

use crate::config::AppConfig;
use crate::error::AppResult;
use aarohi_api::{ApiClient, PortalData};
use aarohi_i18n::{Language, LanguageHandle, LanguageStore};
use aarohi_pages::{
    EducationPage, HealthPage, HelpPage, HomePage, LegalPage, PanicControl, StoriesPage,
};
use std::sync::Arc;
use tracing::info;

/// The mounted portal.
///
/// Constructs the language store once and clones its handle into every page,
/// so a single `set_language` is observed everywhere. Dropping the portal
/// tears the store down with it.
pub struct Portal {
    lang: LanguageHandle,
    /// Landing page.
    pub home: HomePage,
    /// Health page.
    pub health: HealthPage,
    /// Education page.
    pub education: EducationPage,
    /// Emergency help page.
    pub help: HelpPage,
    /// Legal rights page.
    pub legal: LegalPage,
    /// Stories page.
    pub stories: StoriesPage,
    /// The floating panic control, present on every page.
    pub panic: PanicControl,
}

impl Portal {
    /// Mounts the portal against the configured backend.
    pub fn mount(config: &AppConfig) -> AppResult<Self> {
        config.validate()?;
        let client = ApiClient::new(config.api_base_url()?, config.trigger_url()?);
        Ok(Self::with_data(config.default_language, Arc::new(client)))
    }

    /// Mounts the portal over an explicit data source.
    pub fn with_data(initial: Language, data: Arc<dyn PortalData>) -> Self {
        let lang = LanguageStore::mount(initial);
        Self {
            home: HomePage::mount(lang.clone()),
            health: HealthPage::mount(lang.clone(), data.clone()),
            education: EducationPage::mount(lang.clone(), data.clone()),
            help: HelpPage::mount(lang.clone(), data.clone()),
            legal: LegalPage::mount(lang.clone()),
            stories: StoriesPage::mount(lang.clone(), data.clone()),
            panic: PanicControl::new(lang.clone(), data),
            lang,
        }
    }

    /// The active language.
    pub fn language(&self) -> Language {
        self.lang.language()
    }

    /// Switches the active language for every mounted page.
    pub fn set_language(&self, language: Language) {
        self.lang.set_language(language);
    }

    /// The shared language handle, for switcher rendering.
    pub fn language_handle(&self) -> &LanguageHandle {
        &self.lang
    }

    /// The switcher options, each with its native label.
    pub fn language_options() -> [(Language, &'static str); 3] {
        Language::all().map(|language| (language, language.display_name()))
    }

    /// Runs the on-mount fetch of every remote panel.
    ///
    /// Failures stay page-local; this always completes.
    pub async fn load_all(&mut self) {
        info!("loading remote panels");
        self.education.load().await;
        self.health.load().await;
        self.help.load().await;
        self.stories.load().await;
    }
}
