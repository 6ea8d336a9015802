//! Form drafts with required-field validation.
//!
//! Forms are local-only: validation blocks an incomplete draft before any
//! submission, an accepted draft is handed to an external collaborator that
//! surfaces an acknowledgment, and the draft resets to its initial empty
//! values. Fire-and-forget, no retry.

use aarohi_common::Category;
use thiserror::Error;

/// A draft that failed required-field validation.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum FormError {
    /// A required field is empty.
    #[error("required field '{0}' is empty")]
    MissingField(&'static str),
}

/// External collaborator a validated draft is handed to.
///
/// In the current system this is a placeholder that only surfaces a
/// user-visible acknowledgment; the portal is fire-and-forget once the
/// collaborator accepts.
pub trait SubmissionSink<R>: Send + Sync {
    /// Accepts the record and returns the acknowledgment to show.
    fn accept(&self, record: &R) -> String;
}

/// Placeholder collaborator: logs the record and acknowledges.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingSink;

impl SubmissionSink<StoryDraft> for LoggingSink {
    fn accept(&self, record: &StoryDraft) -> String {
        tracing::info!(title = %record.title, anonymous = record.anonymous, "story shared");
        "Thank you for sharing your story! It will be reviewed and published soon.".to_string()
    }
}

impl SubmissionSink<LegalAidDraft> for LoggingSink {
    fn accept(&self, record: &LegalAidDraft) -> String {
        tracing::info!(issue = %record.issue, urgency = ?record.urgency, "legal aid requested");
        "Your request has been submitted. A legal expert will contact you within 24 hours."
            .to_string()
    }
}

/// How quickly a legal-aid request needs attention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Urgency {
    /// General inquiry.
    Low,
    /// Standard request.
    #[default]
    Medium,
    /// Urgent assistance required.
    High,
}

/// Draft of the share-your-story form.
///
/// Required: title, category, story text; name is required unless the story
/// is shared anonymously.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoryDraft {
    /// Author name; ignored when anonymous.
    pub name: String,
    /// Story title.
    pub title: String,
    /// Story body.
    pub story: String,
    /// Selected category, if any.
    pub category: Option<Category>,
    /// Share without a name.
    pub anonymous: bool,
}

impl StoryDraft {
    /// Checks the enumerated required fields.
    pub fn validate(&self) -> Result<(), FormError> {
        if !self.anonymous && self.name.trim().is_empty() {
            return Err(FormError::MissingField("name"));
        }
        if self.title.trim().is_empty() {
            return Err(FormError::MissingField("title"));
        }
        if self.category.is_none() {
            return Err(FormError::MissingField("category"));
        }
        if self.story.trim().is_empty() {
            return Err(FormError::MissingField("story"));
        }
        Ok(())
    }

    /// Resets the draft to its initial empty values.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Draft of the legal-aid request form.
///
/// Required: name, phone, issue, description; email is optional and urgency
/// defaults to medium.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LegalAidDraft {
    /// Requester name.
    pub name: String,
    /// Contact phone number.
    pub phone: String,
    /// Contact email, optional.
    pub email: String,
    /// Short issue label.
    pub issue: String,
    /// Full description of the situation.
    pub description: String,
    /// Requested urgency.
    pub urgency: Urgency,
}

impl LegalAidDraft {
    /// Checks the enumerated required fields.
    pub fn validate(&self) -> Result<(), FormError> {
        if self.name.trim().is_empty() {
            return Err(FormError::MissingField("name"));
        }
        if self.phone.trim().is_empty() {
            return Err(FormError::MissingField("phone"));
        }
        if self.issue.trim().is_empty() {
            return Err(FormError::MissingField("issue"));
        }
        if self.description.trim().is_empty() {
            return Err(FormError::MissingField("description"));
        }
        Ok(())
    }

    /// Resets the draft to its initial empty values.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
