//! Input records supplied by the data-fetching layer.
//!
//! All fields are optional where the upstream feed can omit them; the
//! engine treats every absence as a safe default rather than an error.

use serde::{Deserialize, Serialize};

/// A single customer review. Upstream records carry many more fields
/// (rating, author, context); only the text fields matter here and
/// everything else is ignored on deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Review {
    /// Primary review text, in whatever language it was written.
    #[serde(default)]
    pub text: Option<String>,
    /// Machine-translated text, preferred over `text` when non-empty.
    #[serde(default, rename = "textTranslated")]
    pub text_translated: Option<String>,
}

impl Review {
    /// Effective text for classification: translated if non-empty, else
    /// primary. `None` when the review has nothing usable.
    pub fn effective_text(&self) -> Option<&str> {
        match &self.text_translated {
            Some(t) if !t.trim().is_empty() => Some(t.as_str()),
            _ => match &self.text {
                Some(t) if !t.trim().is_empty() => Some(t.as_str()),
                _ => None,
            },
        }
    }
}

/// A nearby point of interest.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PoiItem {
    #[serde(default)]
    pub name: Option<String>,
    /// Distance from the subject location in feet. Absent distances sort
    /// last and render as "unknown distance".
    #[serde(default)]
    pub distance_ft: Option<f64>,
    /// Precomputed display text; when present it wins over formatting
    /// `distance_ft` ourselves.
    #[serde(default)]
    pub distance_text: Option<String>,
}

/// A labeled group of nearby places (e.g. "Train Stations"). Item order
/// carries no meaning; metadata extraction re-sorts by distance.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PoiGroup {
    pub label: String,
    #[serde(default)]
    pub items: Vec<PoiItem>,
}

/// A page section bucketing one or more groups under a category slug.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PoiSection {
    /// Stable category identifier (e.g. "transportation", "lodging").
    pub slug: String,
    /// Short display name used in aggregate summaries.
    #[serde(default)]
    pub short_name: Option<String>,
    #[serde(default)]
    pub groups: Vec<PoiGroup>,
}

impl PoiSection {
    /// Total places across all groups in this section.
    pub fn total_places(&self) -> usize {
        self.groups.iter().map(|g| g.items.len()).sum()
    }
}

/// Section priority tier for default visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Low
    }
}
