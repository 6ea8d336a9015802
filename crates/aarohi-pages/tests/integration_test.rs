//! Integration tests for the page view models, driven by a stub data source.

use aarohi_api::{
    EducationData, EmergencyContact, EmergencyData, FetchError, FetchResult, HealthData,
    MentalHealthData, PortalData, StoriesData,
};
use aarohi_common::test_utils::{envelope_fixtures, init_test_logging};
use aarohi_common::{Category, Glyph};
use aarohi_i18n::{Language, LanguageStore};
use aarohi_pages::{
    EducationPage, HelpPage, LegalAidDraft, PanicControl, Selector, StoriesPage, StoryDraft,
    SubmissionSink,
};
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Stub backend: serves fixture payloads, optionally failing every call,
/// and counts invocations per endpoint.
#[derive(Default)]
struct StubData {
    fail: AtomicBool,
    education_calls: AtomicUsize,
    emergency_calls: AtomicUsize,
    stories_calls: AtomicUsize,
    trigger_calls: AtomicUsize,
}

impl StubData {
    fn failing() -> Self {
        let stub = Self::default();
        stub.fail.store(true, Ordering::SeqCst);
        stub
    }

    fn recover(&self) {
        self.fail.store(false, Ordering::SeqCst);
    }

    fn check(&self) -> FetchResult<()> {
        if self.fail.load(Ordering::SeqCst) {
            Err(FetchError::Status { status: 500 })
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl PortalData for StubData {
    async fn education(&self) -> FetchResult<EducationData> {
        self.education_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        aarohi_api::envelope::unwrap_envelope(envelope_fixtures::education_success_json())
    }

    async fn health(&self) -> FetchResult<HealthData> {
        self.check()?;
        Ok(HealthData { services: vec![] })
    }

    async fn mental_health(&self) -> FetchResult<MentalHealthData> {
        self.check()?;
        Ok(MentalHealthData { resources: vec![] })
    }

    async fn stories(&self) -> FetchResult<StoriesData> {
        self.stories_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        Ok(StoriesData { stories: vec![] })
    }

    async fn emergency(&self) -> FetchResult<EmergencyData> {
        self.emergency_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        aarohi_api::envelope::unwrap_envelope(envelope_fixtures::emergency_success_json())
    }

    async fn trigger_emergency(&self) -> FetchResult<String> {
        self.trigger_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        Ok("Emergency alert sent. Help is on the way.".to_string())
    }
}

#[tokio::test]
async fn test_education_page_loads_and_filters() {
    init_test_logging();
    let store = LanguageStore::mount(Language::English);
    let stub = Arc::new(StubData::default());
    let mut page = EducationPage::mount(store, stub);

    assert_eq!(page.status_line().as_deref(), Some("Loading..."));
    page.load().await;
    assert_eq!(page.status_line(), None);

    assert_eq!(page.filtered_scholarships().len(), 1);
    page.set_scholarship_filter(Selector::Only(Category::Arts));
    assert!(page.filtered_scholarships().is_empty());
    page.set_scholarship_filter(Selector::All);
    assert_eq!(page.filtered_scholarships().len(), 1);
}

#[tokio::test]
async fn test_http_500_sets_error_state_and_retry_reinvokes_endpoint() {
    init_test_logging();
    let store = LanguageStore::mount(Language::English);
    let stub = Arc::new(StubData::failing());
    let mut page = HelpPage::mount(store, stub.clone());

    page.load().await;
    assert!(page.panel().is_failed());
    assert!(!page.panel().is_loading());
    assert_eq!(page.status_line().as_deref(), Some("Failed to load. Please try again later."));
    assert_eq!(stub.emergency_calls.load(Ordering::SeqCst), 1);

    stub.recover();
    page.retry().await;
    assert_eq!(stub.emergency_calls.load(Ordering::SeqCst), 2);
    assert_eq!(page.contacts().len(), 2);
    assert_eq!(
        HelpPage::call_link(&page.contacts()[0]),
        "tel:1091"
    );
}

#[tokio::test]
async fn test_language_switch_does_not_touch_selection_state() {
    init_test_logging();
    let store = LanguageStore::mount(Language::English);
    let stub = Arc::new(StubData::default());
    let mut page = EducationPage::mount(store.clone(), stub);
    page.load().await;

    page.set_scholarship_filter(Selector::Only(Category::Technology));
    let filtered_before = page.filtered_scholarships().len();
    let title_before = page.title();

    store.set_language(Language::Marathi);

    assert_eq!(page.scholarship_filter(), Selector::Only(Category::Technology));
    assert_eq!(page.filtered_scholarships().len(), filtered_before);
    assert_ne!(page.title(), title_before);
    assert_eq!(page.title(), "शिक्षण आणि संधी");
}

/// Collaborator that records accepted drafts.
#[derive(Default)]
struct RecordingSink {
    accepted: Mutex<Vec<String>>,
}

impl SubmissionSink<StoryDraft> for RecordingSink {
    fn accept(&self, record: &StoryDraft) -> String {
        self.accepted.lock().unwrap().push(record.title.clone());
        "Thank you for sharing your story!".to_string()
    }
}

impl SubmissionSink<LegalAidDraft> for RecordingSink {
    fn accept(&self, record: &LegalAidDraft) -> String {
        self.accepted.lock().unwrap().push(record.issue.clone());
        "Your request has been submitted.".to_string()
    }
}

#[tokio::test]
async fn test_story_share_validates_submits_and_resets() {
    init_test_logging();
    let store = LanguageStore::mount(Language::English);
    let stub = Arc::new(StubData::default());
    let sink = Arc::new(RecordingSink::default());
    let mut page = StoriesPage::with_sink(store, stub, sink.clone());

    page.open_share_form();
    // Incomplete draft is blocked before the collaborator sees it.
    assert!(page.submit_share().is_err());
    assert!(sink.accepted.lock().unwrap().is_empty());

    let draft = page.draft_mut();
    draft.anonymous = true;
    draft.title = "Breaking Barriers".into();
    draft.category = Some(Category::Technology);
    draft.story = "I persevered.".into();

    let ack = page.submit_share().unwrap();
    assert_eq!(ack, "Thank you for sharing your story!");
    assert_eq!(page.draft(), &StoryDraft::default());
    assert!(!page.share_form_open());
    assert_eq!(sink.accepted.lock().unwrap().as_slice(), ["Breaking Barriers"]);
}

#[tokio::test]
async fn test_stories_carousel_scenario() {
    init_test_logging();
    let store = LanguageStore::mount(Language::English);
    let stub = Arc::new(StubData::default());
    let mut page = StoriesPage::mount(store, stub);

    assert_eq!(page.carousel().index(), 0);
    page.previous_story();
    assert_eq!(page.carousel().index(), 4);
    page.next_story();
    assert_eq!(page.carousel().index(), 0);
    page.jump_to_story(2);
    assert_eq!(page.current_story().title, "Education Changed Everything");
}

#[tokio::test]
async fn test_panic_control_success_and_failure_notices() {
    init_test_logging();
    let store = LanguageStore::mount(Language::English);
    let stub = Arc::new(StubData::default());
    let mut control = PanicControl::new(store.clone(), stub.clone());

    assert_eq!(control.label(), "Safe Me");
    let notice = control.trigger().await;
    assert_eq!(notice, "Emergency alert sent. Help is on the way.");
    assert!(control.is_pressed());
    control.release();
    assert!(!control.is_pressed());

    // A failing trigger surfaces the translated notice, not an error.
    stub.fail.store(true, Ordering::SeqCst);
    store.set_language(Language::Hindi);
    let notice = control.trigger().await;
    assert_eq!(notice, "आपातकालीन अलर्ट भेजने में विफल।");
    assert_eq!(stub.trigger_calls.load(Ordering::SeqCst), 2);
}

fn first_contact(data: &EmergencyData) -> &EmergencyContact {
    &data.contacts[0]
}

#[tokio::test]
async fn test_emergency_contacts_keep_backend_order() {
    init_test_logging();
    let store = LanguageStore::mount(Language::English);
    let stub = Arc::new(StubData::default());
    let mut page = HelpPage::mount(store, stub);
    page.load().await;

    let data = page.panel().data().expect("panel should be ready");
    assert_eq!(first_contact(data).name, "Women Helpline");
    assert_eq!(data.contacts[1].category, Category::Police);

    let (glyph, accent) = HelpPage::card_style(&data.contacts[1]);
    assert_eq!(glyph, Glyph::Shield);
    assert_eq!(accent.from, "indigo-500");
}
