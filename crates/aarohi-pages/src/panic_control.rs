//! The floating panic action.
//!
//! Independent of the page data flow: pressing it fires the emergency
//! trigger endpoint once and surfaces a single notice, success or failure.
//! A failure never propagates and never blocks further interaction.

use aarohi_api::PortalData;
use aarohi_i18n::LanguageHandle;
use std::sync::Arc;
use tracing::{error, info};

/// State and behavior of the floating panic control.
pub struct PanicControl {
    lang: LanguageHandle,
    data: Arc<dyn PortalData>,
    pressed: bool,
}

impl PanicControl {
    /// Creates the control.
    pub fn new(lang: LanguageHandle, data: Arc<dyn PortalData>) -> Self {
        Self {
            lang,
            data,
            pressed: false,
        }
    }

    /// The translated tooltip label.
    pub fn label(&self) -> String {
        self.lang.translate("panic.button")
    }

    /// Whether the button is in its pressed animation state.
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Clears the pressed animation state.
    pub fn release(&mut self) {
        self.pressed = false;
    }

    /// Fires the emergency trigger and returns the notice to show.
    ///
    /// On success the backend's own message is surfaced; on any failure a
    /// single translated notice is returned instead. The error itself only
    /// reaches the logs.
    pub async fn trigger(&mut self) -> String {
        self.pressed = true;
        match self.data.trigger_emergency().await {
            Ok(message) => {
                info!("emergency trigger acknowledged");
                message
            }
            Err(err) => {
                error!(%err, "emergency trigger failed");
                self.lang.translate("panic.failed")
            }
        }
    }
}
