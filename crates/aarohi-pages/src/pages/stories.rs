//! Stories page: featured-story carousel, share form, and the community
//! stories section fetched from the backend.

use crate::carousel::Carousel;
use crate::form::{FormError, LoggingSink, StoryDraft, SubmissionSink};
use crate::remote::RemotePanel;
use aarohi_api::{PortalData, StoriesData, Story};
use aarohi_common::{truncate_text, Category};
use aarohi_i18n::LanguageHandle;
use std::sync::Arc;

/// A curated featured story shown in the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeaturedStory {
    /// Stable identifier.
    pub id: u32,
    /// Story title.
    pub title: &'static str,
    /// Author display name.
    pub author: &'static str,
    /// Category tag.
    pub category: Category,
    /// Story body.
    pub content: &'static str,
    /// Like count.
    pub likes: u32,
    /// Comment count.
    pub comments: u32,
    /// Publication date label.
    pub date: &'static str,
}

/// The five seeded featured stories, in carousel order.
pub static FEATURED_STORIES: &[FeaturedStory] = &[
    FeaturedStory {
        id: 1,
        title: "From Survivor to Entrepreneur",
        author: "Priya S.",
        category: Category::Entrepreneurship,
        content: "After leaving an abusive marriage with nothing, I started a small tailoring business from home. Today, I employ 15 women and run a successful fashion boutique. Every stitch taught me that we can rebuild our lives stronger than before.",
        likes: 234,
        comments: 18,
        date: "2 days ago",
    },
    FeaturedStory {
        id: 2,
        title: "Breaking Barriers in Tech",
        author: "Anita K.",
        category: Category::Technology,
        content: "As the first woman in my family to pursue engineering, I faced countless challenges. Despite societal pressure to quit, I persevered and now lead a team of 50 engineers at a tech giant. Dreams do come true with determination.",
        likes: 189,
        comments: 24,
        date: "5 days ago",
    },
    FeaturedStory {
        id: 3,
        title: "Education Changed Everything",
        author: "Meera D.",
        category: Category::Education,
        content: "Born in a village where girls weren't sent to school, I fought for my education. Today, I'm a doctor serving my community. Education is the key that unlocks every door and breaks every chain.",
        likes: 312,
        comments: 41,
        date: "1 week ago",
    },
    FeaturedStory {
        id: 4,
        title: "Finding Strength After Loss",
        author: "Sunita M.",
        category: Category::PersonalGrowth,
        content: "When I lost my husband suddenly, I was left with two children and no job. Through sheer determination and support from other women, I started a small catering business. Today, we're financially independent and thriving.",
        likes: 267,
        comments: 33,
        date: "1 week ago",
    },
    FeaturedStory {
        id: 5,
        title: "Sports Saved My Life",
        author: "Kavya R.",
        category: Category::Sports,
        content: "Growing up in poverty, sports gave me hope and direction. Despite having no proper equipment or training facilities, I practiced every day. Now I'm a national-level athlete inspiring other girls to chase their dreams.",
        likes: 198,
        comments: 27,
        date: "2 weeks ago",
    },
];

/// The stories page view model.
pub struct StoriesPage {
    lang: LanguageHandle,
    data: Arc<dyn PortalData>,
    carousel: Carousel,
    show_share_form: bool,
    draft: StoryDraft,
    sink: Arc<dyn SubmissionSink<StoryDraft>>,
    community: RemotePanel<StoriesData>,
}

impl StoriesPage {
    /// Mounts the page with the placeholder submission collaborator.
    pub fn mount(lang: LanguageHandle, data: Arc<dyn PortalData>) -> Self {
        Self::with_sink(lang, data, Arc::new(LoggingSink))
    }

    /// Mounts the page with an explicit submission collaborator.
    pub fn with_sink(
        lang: LanguageHandle,
        data: Arc<dyn PortalData>,
        sink: Arc<dyn SubmissionSink<StoryDraft>>,
    ) -> Self {
        Self {
            lang,
            data,
            carousel: Carousel::new(FEATURED_STORIES.len()),
            show_share_form: false,
            draft: StoryDraft::default(),
            sink,
            community: RemotePanel::new(),
        }
    }

    /// The single on-mount fetch of the community section.
    pub async fn load(&mut self) {
        let ticket = self.community.begin();
        let result = self.data.stories().await;
        self.community.resolve(ticket, result);
    }

    /// Manual user-triggered re-fetch of the same endpoint.
    pub async fn retry(&mut self) {
        self.load().await;
    }

    /// Translated page title.
    pub fn title(&self) -> String {
        self.lang.translate("stories.title")
    }

    /// The featured story the carousel currently shows.
    pub fn current_story(&self) -> &'static FeaturedStory {
        &FEATURED_STORIES[self.carousel.index()]
    }

    /// Advances the carousel, wrapping.
    pub fn next_story(&mut self) {
        self.carousel.next();
    }

    /// Steps the carousel back, wrapping.
    pub fn previous_story(&mut self) {
        self.carousel.previous();
    }

    /// Jumps to the clicked indicator.
    pub fn jump_to_story(&mut self, index: usize) {
        self.carousel.jump_to(index);
    }

    /// The carousel state, for indicator rendering.
    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    /// Whether the share-story modal is open.
    pub fn share_form_open(&self) -> bool {
        self.show_share_form
    }

    /// Opens the share-story modal.
    pub fn open_share_form(&mut self) {
        self.show_share_form = true;
    }

    /// Closes the modal, keeping the draft as typed.
    pub fn close_share_form(&mut self) {
        self.show_share_form = false;
    }

    /// Mutable access to the share draft, for field edits.
    pub fn draft_mut(&mut self) -> &mut StoryDraft {
        &mut self.draft
    }

    /// The current share draft.
    pub fn draft(&self) -> &StoryDraft {
        &self.draft
    }

    /// Validates and submits the shared story.
    ///
    /// On success the draft is handed to the collaborator, the form resets
    /// and closes, and the acknowledgment is returned for display.
    pub fn submit_share(&mut self) -> Result<String, FormError> {
        self.draft.validate()?;
        let ack = self.sink.accept(&self.draft);
        self.draft.reset();
        self.show_share_form = false;
        Ok(ack)
    }

    /// The render state of the community section.
    pub fn community(&self) -> &RemotePanel<StoriesData> {
        &self.community
    }

    /// Community stories in backend order, empty until ready.
    pub fn community_stories(&self) -> &[Story] {
        self.community
            .data()
            .map(|data| data.stories.as_slice())
            .unwrap_or_default()
    }

    /// The loading/failed notice for the community section.
    pub fn status_line(&self) -> Option<String> {
        if self.community.is_loading() {
            Some(self.lang.translate("common.loading"))
        } else if self.community.is_failed() {
            Some(self.lang.translate("common.failed"))
        } else {
            None
        }
    }

    /// Card preview of a community story body.
    pub fn preview(story: &Story) -> String {
        truncate_text(&story.content, 150)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aarohi_common::StoryId;

    #[test]
    fn test_preview_truncates_long_bodies() {
        let story = Story {
            id: StoryId(1),
            title: "Breaking Barriers".into(),
            author: "Anita K.".into(),
            content: "word ".repeat(60),
            category: Category::Technology,
            date: "today".into(),
        };
        let preview = StoriesPage::preview(&story);
        assert!(preview.chars().count() <= 150);
        assert!(preview.ends_with("..."));
    }
}
