//! Wire models for the backend's record collections.
//!
//! Plain immutable records, fetched as ordered collections and owned by the
//! page that fetched them for the duration of its mounted lifetime. Field
//! names follow the backend's JSON (camelCase collection keys).

use aarohi_common::{Category, ContactId, ResourceId, ScholarshipId, ServiceId, StoryId};
use serde::{Deserialize, Serialize};

/// Payload of `GET /education`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationData {
    /// Scholarships, in backend order.
    pub scholarships: Vec<Scholarship>,
    /// Free learning resources, in backend order.
    #[serde(rename = "learningResources")]
    pub learning_resources: Vec<LearningResource>,
}

/// A scholarship listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scholarship {
    /// Stable identifier.
    pub id: ScholarshipId,
    /// Display title.
    pub title: String,
    /// Award amount, preformatted by the backend.
    pub amount: String,
    /// Category tag.
    pub category: Category,
    /// Application deadline, preformatted.
    pub deadline: String,
    /// Eligibility summary.
    pub eligibility: String,
    /// Longer description.
    pub description: String,
}

/// A free learning resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearningResource {
    /// Display title.
    pub title: String,
    /// Course provider.
    pub provider: String,
    /// Skill category tag.
    #[serde(rename = "type")]
    pub skill: Category,
    /// Course duration, preformatted.
    pub duration: String,
    /// Difficulty level label.
    pub level: String,
    /// Whether the course is free.
    pub free: bool,
    /// Course URL.
    pub url: String,
}

/// Payload of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthData {
    /// Health services, in backend order.
    pub services: Vec<HealthService>,
}

/// A women's health service listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthService {
    /// Stable identifier.
    pub id: ServiceId,
    /// Display title.
    pub title: String,
    /// Service description.
    pub description: String,
    /// Category tag.
    pub category: Category,
    /// Contact number.
    pub contact: String,
    /// Location label.
    pub location: String,
}

/// Payload of `GET /mental-health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MentalHealthData {
    /// Mental-health resources, in backend order.
    pub resources: Vec<MentalHealthResource>,
}

/// A mental-health support resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MentalHealthResource {
    /// Stable identifier.
    pub id: ResourceId,
    /// Display title.
    pub title: String,
    /// Resource description.
    pub description: String,
    /// Category tag.
    pub category: Category,
    /// Contact number.
    pub contact: String,
    /// Whether the resource is currently available.
    pub available: bool,
}

/// Payload of `GET /stories`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoriesData {
    /// Community stories, in backend order.
    pub stories: Vec<Story>,
}

/// A community story.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Story {
    /// Stable identifier.
    pub id: StoryId,
    /// Story title.
    pub title: String,
    /// Author display name.
    pub author: String,
    /// Story body.
    pub content: String,
    /// Category tag.
    pub category: Category,
    /// Publication date label.
    pub date: String,
}

/// Payload of `GET /emergency`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmergencyData {
    /// Emergency contacts, in backend order.
    pub contacts: Vec<EmergencyContact>,
}

/// An emergency helpline contact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmergencyContact {
    /// Stable identifier.
    pub id: ContactId,
    /// Contact display name.
    pub name: String,
    /// Phone number to dial.
    pub number: String,
    /// Category tag.
    pub category: Category,
    /// Contact description.
    pub description: String,
    /// Whether the line is currently staffed.
    pub available: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use aarohi_common::test_utils::envelope_fixtures;
    use aarohi_common::{Category, ContactId};
    use crate::envelope::unwrap_envelope;

    #[test]
    fn test_emergency_contacts_decode_in_order() {
        let data: EmergencyData =
            unwrap_envelope(envelope_fixtures::emergency_success_json()).unwrap();
        assert_eq!(data.contacts.len(), 2);
        assert_eq!(data.contacts[0].id, ContactId(1));
        assert_eq!(data.contacts[0].category, Category::General);
        assert_eq!(data.contacts[1].category, Category::Police);
    }

    #[test]
    fn test_learning_resource_type_field_maps_to_skill() {
        let body = r#"{
            "title": "Brand Basics",
            "provider": "SheLearns",
            "type": "marketing",
            "duration": "2 weeks",
            "level": "Beginner",
            "free": true,
            "url": "https://example.org/brand"
        }"#;
        let resource: LearningResource = serde_json::from_str(body).unwrap();
        assert_eq!(resource.skill, Category::Marketing);
    }
}
