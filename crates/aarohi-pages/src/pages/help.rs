//! Help page: emergency contacts fetched from the backend.

use crate::remote::RemotePanel;
use aarohi_api::{EmergencyContact, EmergencyData, PortalData};
use aarohi_common::{dial_link, Accent, Glyph};
use aarohi_i18n::LanguageHandle;
use std::sync::Arc;

/// The help page view model.
pub struct HelpPage {
    lang: LanguageHandle,
    data: Arc<dyn PortalData>,
    panel: RemotePanel<EmergencyData>,
}

impl HelpPage {
    /// Mounts the page; the panel starts in Loading until [`Self::load`].
    pub fn mount(lang: LanguageHandle, data: Arc<dyn PortalData>) -> Self {
        Self {
            lang,
            data,
            panel: RemotePanel::new(),
        }
    }

    /// The single on-mount fetch.
    pub async fn load(&mut self) {
        let ticket = self.panel.begin();
        let result = self.data.emergency().await;
        self.panel.resolve(ticket, result);
    }

    /// Manual user-triggered re-fetch of the same endpoint.
    pub async fn retry(&mut self) {
        self.load().await;
    }

    /// Translated page title.
    pub fn title(&self) -> String {
        self.lang.translate("help.title")
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
    pub fn panel(&self) -> &RemotePanel<EmergencyData> {
        &self.panel
    }

    /// Contacts in backend order, empty until ready.
    pub fn contacts(&self) -> &[EmergencyContact] {
        self.panel
            .data()
            .map(|data| data.contacts.as_slice())
            .unwrap_or_default()
    }

    /// The `tel:` link a contact's call shortcut opens.
    pub fn call_link(contact: &EmergencyContact) -> String {
        dial_link(&contact.number)
    }

    /// Icon and gradient accent for a contact's card.
    pub fn card_style(contact: &EmergencyContact) -> (Glyph, Accent) {
        (contact.category.glyph(), contact.category.accent())
    }
}
