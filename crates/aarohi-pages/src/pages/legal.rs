//! Legal page: statute accordion, FIR steps, legal aid contacts, and the
//! legal-aid request form.

use crate::accordion::Accordion;
use crate::form::{FormError, LegalAidDraft, LoggingSink, SubmissionSink};
use aarohi_common::dial_link;
use aarohi_i18n::LanguageHandle;
use std::sync::Arc;

/// A statute entry in the rights accordion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Statute {
    /// Stable accordion key.
    pub id: &'static str,
    /// Statute name.
    pub title: &'static str,
    /// One-line summary shown collapsed.
    pub summary: &'static str,
    /// Detail bullets shown expanded.
    pub details: &'static [&'static str],
    /// Penalty summary shown expanded.
    pub penalties: &'static str,
}

/// One step of the FIR filing guide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FirStep {
    /// Step number.
    pub step: u8,
    /// Step heading.
    pub title: &'static str,
    /// Step description.
    pub description: &'static str,
}

/// A legal aid contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AidContact {
    /// Organization name.
    pub name: &'static str,
    /// Phone number.
    pub phone: &'static str,
    /// What the organization offers.
    pub description: &'static str,
    /// Contact email.
    pub email: &'static str,
}

/// Statutes in accordion order.
pub static STATUTES: &[Statute] = &[
    Statute {
        id: "dowry",
        title: "Dowry Prohibition Act",
        summary: "Protection against dowry demands and harassment",
        details: &[
            "Dowry demand is a criminal offense punishable by imprisonment up to 2 years and fine up to ₹10,000",
            "Both giving and taking dowry is illegal",
            "Harassment for dowry can lead to imprisonment up to 3 years",
            "You can file a complaint at the nearest police station",
            "Women can seek help from local women's commission",
        ],
        penalties: "Imprisonment: 5 years to life, Fine: ₹15,000 or more",
    },
    Statute {
        id: "domestic-violence",
        title: "Domestic Violence Act 2005",
        summary: "Protection from physical, emotional, and economic abuse",
        details: &[
            "Covers physical, sexual, verbal, emotional and economic abuse",
            "Includes harassment by husband or relatives",
            "Right to reside in shared household",
            "Right to maintenance and compensation",
            "Protection officers available in every district",
        ],
        penalties: "Imprisonment: Up to 1 year, Fine: Up to ₹20,000",
    },
    Statute {
        id: "workplace",
        title: "Sexual Harassment at Workplace",
        summary: "Protection against workplace harassment",
        details: &[
            "Every workplace must have Internal Complaints Committee (ICC)",
            "Right to file complaint within 3 months of incident",
            "Employer must provide safe working environment",
            "Protection against retaliation",
            "Right to interim relief during inquiry",
        ],
        penalties: "Compensation up to ₹5 lakhs, Job termination for harasser",
    },
    Statute {
        id: "rape",
        title: "Section 375 & 376 IPC - Rape Laws",
        summary: "Legal protection and justice for sexual assault victims",
        details: &[
            "Minimum punishment of 7 years imprisonment",
            "Death penalty for rape causing death",
            "Special provisions for minors",
            "Right to in-camera trial",
            "Free legal aid available",
        ],
        penalties: "Imprisonment: 7 years to life/death penalty",
    },
];

/// FIR filing steps, in order.
pub static FIR_STEPS: &[FirStep] = &[
    FirStep {
        step: 1,
        title: "Go to Police Station",
        description: "Visit nearest police station immediately",
    },
    FirStep {
        step: 2,
        title: "Provide Details",
        description: "Give complete information about the incident",
    },
    FirStep {
        step: 3,
        title: "Get FIR Copy",
        description: "Ensure you receive a copy of the FIR",
    },
    FirStep {
        step: 4,
        title: "Follow Up",
        description: "Stay in touch with investigating officer",
    },
];

/// Legal aid contacts, in display order.
pub static AID_CONTACTS: &[AidContact] = &[
    AidContact {
        name: "National Legal Services Authority",
        phone: "011-2338-7381",
        description: "Free legal aid for women",
        email: "nalsa@nic.in",
    },
    AidContact {
        name: "Delhi Legal Aid Board",
        phone: "011-2389-0112",
        description: "Legal assistance in Delhi",
        email: "legal.aid.delhi@gov.in",
    },
    AidContact {
        name: "Women's Legal Rights Initiative",
        phone: "1800-300-9933",
        description: "24/7 legal helpline",
        email: "help@womensrights.org",
    },
];

/// The legal page view model.
pub struct LegalPage {
    lang: LanguageHandle,
    accordion: Accordion<&'static str>,
    draft: LegalAidDraft,
    sink: Arc<dyn SubmissionSink<LegalAidDraft>>,
}

impl LegalPage {
    /// Mounts the page with the placeholder submission collaborator.
    pub fn mount(lang: LanguageHandle) -> Self {
        Self::with_sink(lang, Arc::new(LoggingSink))
    }

    /// Mounts the page with an explicit submission collaborator.
    pub fn with_sink(lang: LanguageHandle, sink: Arc<dyn SubmissionSink<LegalAidDraft>>) -> Self {
        Self {
            lang,
            accordion: Accordion::new(),
            draft: LegalAidDraft::default(),
            sink,
        }
    }

    /// Translated page title.
    pub fn title(&self) -> String {
        self.lang.translate("legal.title")
    }

    /// Statutes in accordion order.
    pub fn statutes(&self) -> &'static [Statute] {
        STATUTES
    }

    /// The FIR filing steps, in order.
    pub fn fir_steps(&self) -> &'static [FirStep] {
        FIR_STEPS
    }

    /// Legal aid contacts, in display order.
    pub fn aid_contacts(&self) -> &'static [AidContact] {
        AID_CONTACTS
    }

    /// Handles a click on a statute header.
    pub fn toggle_statute(&mut self, id: &'static str) {
        self.accordion.toggle(id);
    }

    /// The statute whose details are open, if any.
    pub fn expanded_statute(&self) -> Option<&Statute> {
        let id = self.accordion.expanded()?;
        STATUTES.iter().find(|statute| statute.id == *id)
    }

    /// Mutable access to the form draft, for field edits.
    pub fn draft_mut(&mut self) -> &mut LegalAidDraft {
        &mut self.draft
    }

    /// The current form draft.
    pub fn draft(&self) -> &LegalAidDraft {
        &self.draft
    }

    /// Validates and submits the legal-aid request.
    ///
    /// On success the draft is handed to the collaborator, the acknowledgment
    /// is returned for display, and the draft resets to its initial empty
    /// values. An invalid draft is blocked before any hand-off.
    pub fn submit(&mut self) -> Result<String, FormError> {
        self.draft.validate()?;
        let ack = self.sink.accept(&self.draft);
        self.draft.reset();
        Ok(ack)
    }

    /// The `tel:` link an aid contact's call shortcut opens.
    pub fn call_link(contact: &AidContact) -> String {
        dial_link(contact.phone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::Urgency;
    use aarohi_i18n::{Language, LanguageStore};

    fn page() -> LegalPage {
        LegalPage::mount(LanguageStore::mount(Language::English))
    }

    #[test]
    fn test_statute_accordion_expands_one_at_a_time() {
        let mut page = page();
        assert!(page.expanded_statute().is_none());

        page.toggle_statute("dowry");
        assert_eq!(page.expanded_statute().map(|s| s.id), Some("dowry"));

        page.toggle_statute("workplace");
        assert_eq!(page.expanded_statute().map(|s| s.id), Some("workplace"));

        // Double toggle returns to nothing expanded.
        page.toggle_statute("workplace");
        assert!(page.expanded_statute().is_none());
    }

    #[test]
    fn test_submit_blocks_incomplete_draft() {
        let mut page = page();
        page.draft_mut().name = "Meera D.".into();
        assert_eq!(
            page.submit(),
            Err(FormError::MissingField("phone")),
        );
        // A blocked draft keeps what was typed.
        assert_eq!(page.draft().name, "Meera D.");
    }

    #[test]
    fn test_submit_acknowledges_and_resets() {
        let mut page = page();
        let draft = page.draft_mut();
        draft.name = "Meera D.".into();
        draft.phone = "1800-300-9933".into();
        draft.issue = "workplace harassment".into();
        draft.description = "Need help filing a complaint with the ICC.".into();
        draft.urgency = Urgency::High;

        let ack = page.submit().unwrap();
        assert!(ack.contains("submitted"));
        assert_eq!(page.draft(), &LegalAidDraft::default());
        assert_eq!(page.draft().urgency, Urgency::Medium);
    }

    #[test]
    fn test_static_content_is_present() {
        let page = page();
        assert_eq!(page.statutes().len(), 4);
        assert_eq!(page.fir_steps().len(), 4);
        assert_eq!(page.aid_contacts().len(), 3);
        assert_eq!(
            LegalPage::call_link(&page.aid_contacts()[0]),
            "tel:011-2338-7381"
        );
    }
}
