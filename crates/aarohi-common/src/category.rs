//! The closed category vocabulary shared by every page.
//!
//! The backend tags every record with a lowercase category string. Pages used
//! to carry their own icon and color lookup tables keyed by that string; the
//! tables live here once, as associated data on a single tagged-variant set.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Every category tag the backend emits, across all record kinds.
///
/// An unrecognized tag decodes to [`Category::Other`], which carries the
/// shared default glyph and accent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Technology scholarships and stories.
    Technology,
    /// Medical scholarships and health contacts.
    Medical,
    /// Arts scholarships.
    Arts,
    /// Engineering scholarships.
    Engineering,
    /// Business scholarships.
    Business,
    /// Science scholarships.
    Science,
    /// Coding learning resources.
    Coding,
    /// Design learning resources.
    Design,
    /// Marketing learning resources.
    Marketing,
    /// Finance learning resources.
    Finance,
    /// General-purpose emergency contacts.
    General,
    /// Domestic-violence support contacts.
    Domestic,
    /// Police contacts.
    Police,
    /// Mental-health contacts and resources.
    Mental,
    /// Legal aid contacts.
    Legal,
    /// Entrepreneurship stories.
    Entrepreneurship,
    /// Education stories.
    Education,
    /// Personal-growth stories.
    #[serde(rename = "personal-growth")]
    PersonalGrowth,
    /// Sports stories.
    Sports,
    /// Any tag not in the closed set.
    #[serde(other)]
    Other,
}

/// Icon identifier associated with a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    /// Code brackets.
    Code,
    /// Open book.
    BookOpen,
    /// Painter's palette.
    Palette,
    /// Calculator.
    Calculator,
    /// Telephone handset.
    Phone,
    /// Shield.
    Shield,
    /// Heart.
    Heart,
    /// Group of people.
    Users,
    /// Scales of justice.
    Scale,
}

/// Accent color pair (gradient endpoints) associated with a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Accent {
    /// Gradient start, as a CSS color token.
    pub from: &'static str,
    /// Gradient end, as a CSS color token.
    pub to: &'static str,
}

impl Category {
    /// The lowercase tag the backend uses for this category.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Technology => "technology",
            Self::Medical => "medical",
            Self::Arts => "arts",
            Self::Engineering => "engineering",
            Self::Business => "business",
            Self::Science => "science",
            Self::Coding => "coding",
            Self::Design => "design",
            Self::Marketing => "marketing",
            Self::Finance => "finance",
            Self::General => "general",
            Self::Domestic => "domestic",
            Self::Police => "police",
            Self::Mental => "mental",
            Self::Legal => "legal",
            Self::Entrepreneurship => "entrepreneurship",
            Self::Education => "education",
            Self::PersonalGrowth => "personal-growth",
            Self::Sports => "sports",
            Self::Other => "other",
        }
    }

    /// Parse a backend tag; unknown tags land on [`Category::Other`].
    pub fn from_tag(tag: &str) -> Self {
        match tag.to_lowercase().as_str() {
            "technology" => Self::Technology,
            "medical" => Self::Medical,
            "arts" => Self::Arts,
            "engineering" => Self::Engineering,
            "business" => Self::Business,
            "science" => Self::Science,
            "coding" => Self::Coding,
            "design" => Self::Design,
            "marketing" => Self::Marketing,
            "finance" => Self::Finance,
            "general" => Self::General,
            "domestic" => Self::Domestic,
            "police" => Self::Police,
            "mental" => Self::Mental,
            "legal" => Self::Legal,
            "entrepreneurship" => Self::Entrepreneurship,
            "education" => Self::Education,
            "personal-growth" => Self::PersonalGrowth,
            "sports" => Self::Sports,
            _ => Self::Other,
        }
    }

    /// The icon shown on cards tagged with this category.
    pub fn glyph(self) -> Glyph {
        match self {
            Self::Technology | Self::Coding => Glyph::Code,
            Self::Arts | Self::Design => Glyph::Palette,
            Self::Engineering | Self::Finance => Glyph::Calculator,
            Self::Medical => Glyph::Heart,
            Self::General => Glyph::Phone,
            Self::Domestic | Self::Police => Glyph::Shield,
            Self::Mental => Glyph::Users,
            Self::Legal => Glyph::Scale,
            Self::Business
            | Self::Science
            | Self::Marketing
            | Self::Entrepreneurship
            | Self::Education
            | Self::PersonalGrowth
            | Self::Sports
            | Self::Other => Glyph::BookOpen,
        }
    }

    /// The gradient accent shown on cards tagged with this category.
    pub fn accent(self) -> Accent {
        match self {
            Self::Technology | Self::Coding | Self::General => Accent {
                from: "blue-500",
                to: "blue-600",
            },
            Self::Medical | Self::Science => Accent {
                from: "green-500",
                to: "green-600",
            },
            Self::Arts | Self::Design | Self::Mental => Accent {
                from: "purple-500",
                to: "purple-600",
            },
            Self::Engineering | Self::Legal => Accent {
                from: "orange-500",
                to: "orange-600",
            },
            Self::Business | Self::Marketing => Accent {
                from: "pink-500",
                to: "pink-600",
            },
            Self::Domestic => Accent {
                from: "red-500",
                to: "red-600",
            },
            Self::Police => Accent {
                from: "indigo-500",
                to: "indigo-600",
            },
            Self::Finance
            | Self::Entrepreneurship
            | Self::Education
            | Self::PersonalGrowth
            | Self::Sports
            | Self::Other => Accent {
                from: "gray-500",
                to: "gray-600",
            },
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
