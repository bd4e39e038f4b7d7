//! Default-open and ultra-thin heuristics.
//!
//! A group's prominence comes from three signals: its section's priority
//! tier, its label (matched against high-priority and noise substring
//! sets), and its derived metadata. Rules short-circuit top to bottom.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use tracing::debug;

use placeintel_core::thresholds::{
    OPEN_BOOST_MAX_DISTANCE_FT, OPEN_BOOST_MIN_COUNT, OPEN_MEDIUM_MAX_DISTANCE_FT,
    OPEN_MEDIUM_MIN_COUNT, THIN_MAX_COUNT, THIN_PAIR_MIN_DISTANCE_FT,
    THIN_SINGLE_MIN_DISTANCE_FT,
};
use placeintel_core::{EngineConfig, Priority};

use crate::metadata::GroupMetadata;

/// Section slug → tier. Slugs not listed are low priority.
static SECTION_PRIORITY: Lazy<HashMap<&'static str, Priority>> = Lazy::new(|| {
    let mut m = HashMap::new();
    for slug in ["transportation", "attractions"] {
        m.insert(slug, Priority::High);
    }
    for slug in ["lodging", "dining", "shopping", "parks"] {
        m.insert(slug, Priority::Medium);
    }
    m
});

/// Group labels containing any of these substrings are always prominent.
const HIGH_PRIORITY_GROUP_LABELS: &[&str] = &[
    "airport",
    "train station",
    "subway station",
    "metro station",
    "university",
    "stadium",
    "convention center",
    "hospital",
    "beach",
    "downtown",
];

/// Group labels containing any of these substrings are page noise unless
/// the group is otherwise substantial.
const NOISE_GROUP_LABELS: &[&str] = &[
    "atm",
    "gas station",
    "parking lot",
    "bus stop",
    "convenience store",
    "vending",
];

static BUILTIN_RULES: Lazy<NearbyRules> = Lazy::new(|| NearbyRules {
    section_priorities: SECTION_PRIORITY
        .iter()
        .map(|(slug, tier)| (slug.to_string(), *tier))
        .collect(),
    high_priority_labels: HIGH_PRIORITY_GROUP_LABELS
        .iter()
        .map(|l| l.to_string())
        .collect(),
    noise_labels: NOISE_GROUP_LABELS.iter().map(|l| l.to_string()).collect(),
});

/// Prominence tables: section tiers plus the two label substring sets.
pub struct NearbyRules {
    section_priorities: HashMap<String, Priority>,
    high_priority_labels: Vec<String>,
    noise_labels: Vec<String>,
}

/// Lowercase with underscores treated as spaces, applied to both sides
/// of every label comparison.
fn normalize_label(label: &str) -> String {
    label.to_lowercase().replace('_', " ")
}

impl NearbyRules {
    /// The built-in tables.
    pub fn builtin() -> &'static NearbyRules {
        &BUILTIN_RULES
    }

    /// Tables from a deployment override.
    pub fn from_config(config: &EngineConfig) -> Self {
        Self {
            section_priorities: config.section_priorities.clone(),
            high_priority_labels: config.high_priority_labels.clone(),
            noise_labels: config.noise_labels.clone(),
        }
    }

    /// A section's tier; unknown slugs are low.
    pub fn section_priority(&self, slug: &str) -> Priority {
        self.section_priorities
            .get(slug)
            .copied()
            .unwrap_or_default()
    }

    pub fn is_high_priority_label(&self, label: &str) -> bool {
        let normalized = normalize_label(label);
        self.high_priority_labels
            .iter()
            .any(|l| normalized.contains(&normalize_label(l)))
    }

    pub fn is_noise_label(&self, label: &str) -> bool {
        let normalized = normalize_label(label);
        self.noise_labels
            .iter()
            .any(|l| normalized.contains(&normalize_label(l)))
    }

    /// Should a collapsible group start expanded? High-tier sections and
    /// high-priority labels always open; otherwise a group earns it with
    /// enough close-by places.
    pub fn should_default_open(
        &self,
        section_slug: &str,
        group_label: &str,
        meta: &GroupMetadata,
    ) -> bool {
        let tier = self.section_priority(section_slug);
        if tier == Priority::High {
            return true;
        }
        if self.is_high_priority_label(group_label) {
            return true;
        }
        if meta.poi_count >= OPEN_BOOST_MIN_COUNT
            && meta.nearest_distance_ft <= OPEN_BOOST_MAX_DISTANCE_FT
        {
            return true;
        }
        if tier == Priority::Medium
            && meta.poi_count >= OPEN_MEDIUM_MIN_COUNT
            && meta.nearest_distance_ft <= OPEN_MEDIUM_MAX_DISTANCE_FT
        {
            return true;
        }
        debug!(section = section_slug, label = group_label, "group stays collapsed");
        false
    }

    /// Is the group too sparse or distant to warrant prominent display?
    /// Never true for high-tier sections or high-priority labels.
    pub fn is_ultra_thin(
        &self,
        section_slug: &str,
        group_label: &str,
        meta: &GroupMetadata,
    ) -> bool {
        let tier = self.section_priority(section_slug);
        if tier == Priority::High || self.is_high_priority_label(group_label) {
            return false;
        }
        if meta.poi_count == 1 && meta.nearest_distance_ft > THIN_SINGLE_MIN_DISTANCE_FT {
            return true;
        }
        if meta.poi_count <= THIN_MAX_COUNT
            && meta.nearest_distance_ft > THIN_PAIR_MIN_DISTANCE_FT
            && tier == Priority::Low
        {
            return true;
        }
        if self.is_noise_label(group_label) && meta.poi_count <= THIN_MAX_COUNT {
            return true;
        }
        false
    }
}

/// [`NearbyRules::should_default_open`] with the built-in tables.
pub fn should_default_open(section_slug: &str, group_label: &str, meta: &GroupMetadata) -> bool {
    NearbyRules::builtin().should_default_open(section_slug, group_label, meta)
}

/// [`NearbyRules::is_ultra_thin`] with the built-in tables.
pub fn is_ultra_thin(section_slug: &str, group_label: &str, meta: &GroupMetadata) -> bool {
    NearbyRules::builtin().is_ultra_thin(section_slug, group_label, meta)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::extract_group_metadata;
    use placeintel_core::{PoiGroup, PoiItem};

    fn group_of(count: usize, nearest_ft: f64) -> GroupMetadata {
        let items = (0..count)
            .map(|i| PoiItem {
                name: Some(format!("Place {i}")),
                distance_ft: Some(nearest_ft + (i as f64) * 100.0),
                distance_text: None,
            })
            .collect();
        extract_group_metadata(&PoiGroup {
            label: "Generic".to_string(),
            items,
        })
    }

    #[test]
    fn test_high_tier_always_opens() {
        // Even an empty group in a high-tier section opens.
        let empty = group_of(0, 0.0);
        assert!(should_default_open("transportation", "Ferries", &empty));
    }

    #[test]
    fn test_high_priority_label_opens_regardless_of_tier() {
        let thin = group_of(1, 9000.0);
        assert!(should_default_open("services", "International Airport", &thin));
        // Underscores on either side are treated as spaces.
        assert!(should_default_open("services", "train_station access", &thin));
    }

    #[test]
    fn test_count_distance_booster_on_low_tier() {
        let meta = group_of(7, 1500.0);
        assert!(should_default_open("services", "Laundromats", &meta));
        // Same count but too far away stays collapsed.
        let far = group_of(7, 2500.0);
        assert!(!should_default_open("services", "Laundromats", &far));
    }

    #[test]
    fn test_medium_tier_booster() {
        let meta = group_of(4, 2800.0);
        assert!(should_default_open("lodging", "Guest Houses", &meta));
        // Low tier needs the bigger booster.
        assert!(!should_default_open("services", "Guest Houses", &meta));
    }

    #[test]
    fn test_unknown_slug_is_low_tier() {
        let meta = group_of(5, 500.0);
        assert!(!should_default_open("mystery-section", "Things", &meta));
    }

    #[test]
    fn test_ultra_thin_single_distant_item() {
        let meta = group_of(1, 5000.0);
        assert!(is_ultra_thin("services", "Print Shops", &meta));
        // The same group close by is fine.
        let near = group_of(1, 3000.0);
        assert!(!is_ultra_thin("services", "Print Shops", &near));
    }

    #[test]
    fn test_ultra_thin_pair_far_on_low_tier_only() {
        let meta = group_of(2, 7000.0);
        assert!(is_ultra_thin("services", "Notaries", &meta));
        assert!(!is_ultra_thin("lodging", "Notaries", &meta));
    }

    #[test]
    fn test_ultra_thin_noise_label() {
        let meta = group_of(2, 300.0);
        assert!(is_ultra_thin("services", "ATMs Nearby", &meta));
        // Three noise places are substantial enough to keep.
        let bigger = group_of(3, 300.0);
        assert!(!is_ultra_thin("services", "ATMs Nearby", &bigger));
    }

    #[test]
    fn test_never_thin_when_protected() {
        let meta = group_of(1, 9999.0);
        assert!(!is_ultra_thin("attractions", "Viewpoints", &meta));
        assert!(!is_ultra_thin("services", "Airport Shuttle", &meta));
    }

    #[test]
    fn test_config_rules() {
        let raw = r#"{
            "section_priorities": {"pubs": "high"},
            "high_priority_labels": ["brewery"],
            "noise_labels": ["kiosk"]
        }"#;
        let config = EngineConfig::from_json(raw).unwrap();
        let rules = NearbyRules::from_config(&config);
        let meta = group_of(1, 9000.0);
        assert!(rules.should_default_open("pubs", "Taprooms", &meta));
        assert!(!rules.is_ultra_thin("shops", "Brewery District", &meta));
        assert!(rules.is_ultra_thin("shops", "Ticket Kiosk", &group_of(1, 100.0)));
    }
}
