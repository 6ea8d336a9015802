//! Health page: static awareness content plus remote health services.

use crate::carousel::Carousel;
use crate::remote::RemotePanel;
use aarohi_api::{HealthData, HealthService, PortalData};
use aarohi_common::dial_link;
use aarohi_i18n::LanguageHandle;
use std::sync::Arc;

/// One slide of the PCOD awareness carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PcodSlide {
    /// Slide heading.
    pub title: &'static str,
    /// Slide body.
    pub content: &'static str,
    /// Bullet tips.
    pub tips: &'static [&'static str],
}

/// A menstrual-health tip card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TipCard {
    /// Card heading.
    pub title: &'static str,
    /// The tip text.
    pub tip: &'static str,
    /// Emoji icon.
    pub icon: &'static str,
}

/// A helpline shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Helpline {
    /// Helpline name.
    pub name: &'static str,
    /// Number to dial.
    pub number: &'static str,
    /// Availability label.
    pub available: &'static str,
}

/// PCOD awareness slides, in carousel order.
pub static PCOD_SLIDES: &[PcodSlide] = &[
    PcodSlide {
        title: "What is PCOD?",
        content: "Polycystic Ovarian Disease is a hormonal disorder common among women of reproductive age.",
        tips: &[
            "Maintain a healthy weight",
            "Exercise regularly",
            "Eat a balanced diet",
        ],
    },
    PcodSlide {
        title: "Symptoms to Watch",
        content: "Irregular periods, weight gain, acne, and excessive hair growth are common symptoms.",
        tips: &[
            "Track your menstrual cycle",
            "Monitor weight changes",
            "Consult a gynecologist regularly",
        ],
    },
    PcodSlide {
        title: "Management Tips",
        content: "PCOD can be managed effectively with lifestyle changes and proper medical care.",
        tips: &[
            "Include whole grains in diet",
            "Practice stress management",
            "Take prescribed medications",
        ],
    },
];

/// Menstrual-health tip cards, in display order.
pub static MENSTRUAL_TIPS: &[TipCard] = &[
    TipCard {
        title: "Pain Relief",
        tip: "Use heating pads and practice gentle yoga",
        icon: "🧘‍♀️",
    },
    TipCard {
        title: "Nutrition",
        tip: "Eat iron-rich foods and stay hydrated",
        icon: "🥗",
    },
    TipCard {
        title: "Hygiene",
        tip: "Change sanitary products regularly",
        icon: "🧴",
    },
    TipCard {
        title: "Exercise",
        tip: "Light walking can reduce cramps",
        icon: "🚶‍♀️",
    },
];

/// Helpline shortcuts, in display order.
pub static HELPLINES: &[Helpline] = &[
    Helpline {
        name: "Women Helpline",
        number: "1091",
        available: "24/7",
    },
    Helpline {
        name: "Mental Health Helpline",
        number: "1800-233-3330",
        available: "24/7",
    },
    Helpline {
        name: "Suicide Prevention",
        number: "1800-599-0019",
        available: "24/7",
    },
    Helpline {
        name: "Women in Distress",
        number: "181",
        available: "24/7",
    },
];

/// The health page view model.
pub struct HealthPage {
    lang: LanguageHandle,
    data: Arc<dyn PortalData>,
    panel: RemotePanel<HealthData>,
    pcod: Carousel,
}

impl HealthPage {
    /// Mounts the page with the carousel on the first slide.
    pub fn mount(lang: LanguageHandle, data: Arc<dyn PortalData>) -> Self {
        Self {
            lang,
            data,
            panel: RemotePanel::new(),
            pcod: Carousel::new(PCOD_SLIDES.len()),
        }
    }

    /// The single on-mount fetch of the services section.
    pub async fn load(&mut self) {
        let ticket = self.panel.begin();
        let result = self.data.health().await;
        self.panel.resolve(ticket, result);
    }

    /// Manual user-triggered re-fetch of the same endpoint.
    pub async fn retry(&mut self) {
        self.load().await;
    }

    /// Translated page title.
    pub fn title(&self) -> String {
        self.lang.translate("health.title")
    }

    /// The loading/failed notice for the services section.
    pub fn status_line(&self) -> Option<String> {
        if self.panel.is_loading() {
            Some(self.lang.translate("common.loading"))
        } else if self.panel.is_failed() {
            Some(self.lang.translate("common.failed"))
        } else {
            None
        }
    }

    /// The render state of the services section.
    pub fn panel(&self) -> &RemotePanel<HealthData> {
        &self.panel
    }

    /// Services in backend order, empty until ready.
    pub fn services(&self) -> &[HealthService] {
        self.panel
            .data()
            .map(|data| data.services.as_slice())
            .unwrap_or_default()
    }

    /// The slide the carousel currently shows.
    pub fn current_slide(&self) -> &'static PcodSlide {
        &PCOD_SLIDES[self.pcod.index()]
    }

    /// Advances the carousel, wrapping.
    pub fn next_slide(&mut self) {
        self.pcod.next();
    }

    /// Steps the carousel back, wrapping.
    pub fn previous_slide(&mut self) {
        self.pcod.previous();
    }

    /// Jumps to the clicked indicator.
    pub fn jump_to_slide(&mut self, index: usize) {
        self.pcod.jump_to(index);
    }

    /// The carousel state, for indicator rendering.
    pub fn carousel(&self) -> &Carousel {
        &self.pcod
    }

    /// The menstrual-health tip cards, in display order.
    pub fn tips(&self) -> &'static [TipCard] {
        MENSTRUAL_TIPS
    }

    /// The helpline shortcuts, in display order.
    pub fn helplines(&self) -> &'static [Helpline] {
        HELPLINES
    }

    /// The `tel:` link a helpline shortcut opens.
    pub fn call_link(helpline: &Helpline) -> String {
        dial_link(helpline.number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aarohi_i18n::{Language, LanguageStore};
    use std::sync::Arc;

    struct NoData;

    #[async_trait::async_trait]
    impl PortalData for NoData {
        async fn education(&self) -> aarohi_api::FetchResult<aarohi_api::EducationData> {
            Err(aarohi_api::FetchError::Status { status: 500 })
        }
        async fn health(&self) -> aarohi_api::FetchResult<HealthData> {
            Err(aarohi_api::FetchError::Status { status: 500 })
        }
        async fn mental_health(&self) -> aarohi_api::FetchResult<aarohi_api::MentalHealthData> {
            Err(aarohi_api::FetchError::Status { status: 500 })
        }
        async fn stories(&self) -> aarohi_api::FetchResult<aarohi_api::StoriesData> {
            Err(aarohi_api::FetchError::Status { status: 500 })
        }
        async fn emergency(&self) -> aarohi_api::FetchResult<aarohi_api::EmergencyData> {
            Err(aarohi_api::FetchError::Status { status: 500 })
        }
        async fn trigger_emergency(&self) -> aarohi_api::FetchResult<String> {
            Err(aarohi_api::FetchError::Status { status: 500 })
        }
    }

    fn page() -> HealthPage {
        HealthPage::mount(LanguageStore::mount(Language::English), Arc::new(NoData))
    }

    #[test]
    fn test_pcod_carousel_wraps_over_three_slides() {
        let mut page = page();
        assert_eq!(page.current_slide().title, "What is PCOD?");
        page.previous_slide();
        assert_eq!(page.current_slide().title, "Management Tips");
        page.next_slide();
        page.next_slide();
        assert_eq!(page.current_slide().title, "Symptoms to Watch");
    }

    #[test]
    fn test_static_content_is_present() {
        let page = page();
        assert_eq!(page.tips().len(), 4);
        assert_eq!(page.helplines().len(), 4);
        assert_eq!(HealthPage::call_link(&page.helplines()[0]), "tel:1091");
    }
}
