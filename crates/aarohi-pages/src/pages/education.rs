//! Education page: scholarships and free learning resources.

use crate::remote::RemotePanel;
use crate::select::{filter_by, Selector};
use aarohi_api::{EducationData, LearningResource, PortalData, Scholarship};
use aarohi_i18n::LanguageHandle;
use std::sync::Arc;

/// The education page view model.
///
/// Two independent filters: scholarship category and learning-resource
/// skill. Both default to the identity selector and are untouched by
/// language switches.
pub struct EducationPage {
    lang: LanguageHandle,
    data: Arc<dyn PortalData>,
    panel: RemotePanel<EducationData>,
    scholarship_filter: Selector,
    skill_filter: Selector,
}

impl EducationPage {
    /// Mounts the page; the panel starts in Loading until [`Self::load`].
    pub fn mount(lang: LanguageHandle, data: Arc<dyn PortalData>) -> Self {
        Self {
            lang,
            data,
            panel: RemotePanel::new(),
            scholarship_filter: Selector::All,
            skill_filter: Selector::All,
        }
    }

    /// The single on-mount fetch.
    pub async fn load(&mut self) {
        let ticket = self.panel.begin();
        let result = self.data.education().await;
        self.panel.resolve(ticket, result);
    }

    /// Manual user-triggered re-fetch of the same endpoint.
    pub async fn retry(&mut self) {
        self.load().await;
    }

    /// Translated page title.
    pub fn title(&self) -> String {
        self.lang.translate("education.title")
    }

    /// The loading/failed notice to render, or `None` when data is ready.
    pub fn status_line(&self) -> Option<String> {
        if self.panel.is_loading() {
            Some(self.lang.translate("common.loading"))
        } else if self.panel.is_failed() {
            Some(self.lang.translate("common.failed"))
        } else {
            None
        }
    }

    /// Label of the retry affordance shown in the failed state.
    pub fn retry_label(&self) -> String {
        self.lang.translate("common.retry")
    }

    /// The render state of the remote section.
    pub fn panel(&self) -> &RemotePanel<EducationData> {
        &self.panel
    }

    /// Current scholarship category filter.
    pub fn scholarship_filter(&self) -> Selector {
        self.scholarship_filter
    }

    /// Sets the scholarship category filter.
    pub fn set_scholarship_filter(&mut self, selector: Selector) {
        self.scholarship_filter = selector;
    }

    /// Current learning-resource skill filter.
    pub fn skill_filter(&self) -> Selector {
        self.skill_filter
    }

    /// Sets the learning-resource skill filter.
    pub fn set_skill_filter(&mut self, selector: Selector) {
        self.skill_filter = selector;
    }

    /// Scholarships passing the category filter, in backend order.
    pub fn filtered_scholarships(&self) -> Vec<&Scholarship> {
        self.panel
            .data()
            .map(|data| filter_by(&data.scholarships, self.scholarship_filter))
            .unwrap_or_default()
    }

    /// Learning resources passing the skill filter, in backend order.
    pub fn filtered_resources(&self) -> Vec<&LearningResource> {
        self.panel
            .data()
            .map(|data| filter_by(&data.learning_resources, self.skill_filter))
            .unwrap_or_default()
    }
}
