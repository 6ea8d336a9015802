//! Category filtering with the `"all"` identity selector.

use aarohi_api::{
    EmergencyContact, HealthService, LearningResource, MentalHealthResource, Scholarship, Story,
};
use aarohi_common::Category;

/// A record that carries a category tag.
pub trait Categorized {
    /// The record's category.
    fn category(&self) -> Category;
}

impl Categorized for Scholarship {
    fn category(&self) -> Category {
        self.category
    }
}

impl Categorized for LearningResource {
    fn category(&self) -> Category {
        self.skill
    }
}

impl Categorized for EmergencyContact {
    fn category(&self) -> Category {
        self.category
    }
}

impl Categorized for HealthService {
    fn category(&self) -> Category {
        self.category
    }
}

impl Categorized for MentalHealthResource {
    fn category(&self) -> Category {
        self.category
    }
}

impl Categorized for Story {
    fn category(&self) -> Category {
        self.category
    }
}

/// A category filter selection.
///
/// `All` matches every record regardless of category and is always a valid
/// selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selector {
    /// The identity filter.
    #[default]
    All,
    /// Only records tagged with the given category.
    Only(Category),
}

impl Selector {
    /// Whether a record with the given category passes the filter.
    pub fn matches(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => category == wanted,
        }
    }

    /// Parse the filter value of a select control; `"all"` is the identity.
    pub fn from_value(value: &str) -> Self {
        if value.eq_ignore_ascii_case("all") {
            Self::All
        } else {
            Self::Only(Category::from_tag(value))
        }
    }
}

/// Filters a record collection, preserving the original relative order.
pub fn filter_by<'a, T: Categorized>(records: &'a [T], selector: Selector) -> Vec<&'a T> {
    records
        .iter()
        .filter(|record| selector.matches(record.category()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use aarohi_common::test_utils::record_fixtures::{
        categorized_records, scholarship_categories, TestRecord,
    };

    impl Categorized for TestRecord {
        fn category(&self) -> Category {
            self.category
        }
    }

    #[test]
    fn test_all_is_identity() {
        let records = categorized_records(12, &scholarship_categories());
        let filtered = filter_by(&records, Selector::All);
        let expected: Vec<&TestRecord> = records.iter().collect();
        assert_eq!(filtered, expected);
    }

    #[test]
    fn test_filter_preserves_relative_order() {
        let records = categorized_records(12, &scholarship_categories());
        let filtered = filter_by(&records, Selector::Only(Category::Technology));
        let ids: Vec<u32> = filtered.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![0, 6]);
    }

    #[test]
    fn test_filter_on_empty_collection() {
        let records: Vec<TestRecord> = Vec::new();
        assert!(filter_by(&records, Selector::All).is_empty());
        assert!(filter_by(&records, Selector::Only(Category::Arts)).is_empty());
    }

    #[test]
    fn test_from_value() {
        assert_eq!(Selector::from_value("all"), Selector::All);
        assert_eq!(Selector::from_value("ALL"), Selector::All);
        assert_eq!(
            Selector::from_value("technology"),
            Selector::Only(Category::Technology)
        );
        // Unknown tags filter on the shared Other bucket.
        assert_eq!(
            Selector::from_value("astrology"),
            Selector::Only(Category::Other)
        );
    }
}
