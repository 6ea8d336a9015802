//! View binder for the Aarohi portal.
//!
//! Each page is a pure projection of (active language, fetched records,
//! page-local selection state) into renderable content. This crate provides
//! the selection-state primitives shared by the pages:
//!
//! - [`Selector`] — category filtering where `"all"` is the identity
//! - [`Carousel`] — modular-wrapping slide index
//! - [`Accordion`] — at-most-one expanded item
//! - [`RemotePanel`] — the loading / failed / ready projection with
//!   last-request-wins resolution
//! - form drafts with required-field validation
//!
//! plus the six page view models and the floating panic control. Selection
//! state is owned exclusively by its page, reset on remount, and never
//! touched by a language switch.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod accordion;
pub mod carousel;
pub mod form;
pub mod pages;
pub mod panic_control;
pub mod remote;
pub mod select;

pub use accordion::Accordion;
pub use carousel::Carousel;
pub use form::{FormError, LegalAidDraft, LoggingSink, StoryDraft, SubmissionSink, Urgency};
pub use pages::{
    EducationPage, HealthPage, HelpPage, HomePage, LegalPage, StoriesPage,
};
pub use panic_control::PanicControl;
pub use remote::{FetchTicket, Loadable, RemotePanel};
pub use select::{filter_by, Categorized, Selector};
