//! Derived per-group metadata.
//!
//! Computed fresh from the caller's items on every call; nothing here is
//! stored. Item order in the input group carries no meaning — items are
//! re-sorted by distance, with missing distances ordering last.

use serde::Serialize;

use placeintel_core::PoiGroup;

use crate::distance::format_distance;

/// Summary facts about one POI group. Once both distances are finite,
/// `nearest_distance_ft <= farthest_distance_ft`; an empty group has
/// count 0, infinite distances, empty texts, and no name.
#[derive(Debug, Clone, Serialize)]
pub struct GroupMetadata {
    pub poi_count: usize,
    pub nearest_distance_ft: f64,
    pub farthest_distance_ft: f64,
    pub nearest_distance_text: String,
    pub farthest_distance_text: String,
    pub closest_item_name: Option<String>,
}

impl GroupMetadata {
    fn empty() -> Self {
        Self {
            poi_count: 0,
            nearest_distance_ft: f64::INFINITY,
            farthest_distance_ft: f64::INFINITY,
            nearest_distance_text: String::new(),
            farthest_distance_text: String::new(),
            closest_item_name: None,
        }
    }
}

/// Distance used for ordering: missing means infinitely far.
fn sort_distance(ft: Option<f64>) -> f64 {
    ft.unwrap_or(f64::INFINITY)
}

/// Derive [`GroupMetadata`] from a group's items.
pub fn extract_group_metadata(group: &PoiGroup) -> GroupMetadata {
    if group.items.is_empty() {
        return GroupMetadata::empty();
    }

    let mut sorted: Vec<_> = group.items.iter().collect();
    sorted.sort_by(|a, b| sort_distance(a.distance_ft).total_cmp(&sort_distance(b.distance_ft)));

    let nearest = sorted[0];
    let farthest = sorted[sorted.len() - 1];

    // An item's own display text wins over formatting its distance.
    let endpoint_text = |item: &placeintel_core::PoiItem| match &item.distance_text {
        Some(t) if !t.is_empty() => t.clone(),
        _ => format_distance(item.distance_ft),
    };

    GroupMetadata {
        poi_count: sorted.len(),
        nearest_distance_ft: sort_distance(nearest.distance_ft),
        farthest_distance_ft: sort_distance(farthest.distance_ft),
        nearest_distance_text: endpoint_text(nearest),
        farthest_distance_text: endpoint_text(farthest),
        closest_item_name: nearest.name.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use placeintel_core::PoiItem;

    fn item(name: Option<&str>, distance_ft: Option<f64>) -> PoiItem {
        PoiItem {
            name: name.map(|n| n.to_string()),
            distance_ft,
            distance_text: None,
        }
    }

    #[test]
    fn test_empty_group() {
        let meta = extract_group_metadata(&PoiGroup::default());
        assert_eq!(meta.poi_count, 0);
        assert!(meta.nearest_distance_ft.is_infinite());
        assert!(meta.farthest_distance_ft.is_infinite());
        assert!(meta.nearest_distance_text.is_empty());
        assert!(meta.closest_item_name.is_none());
    }

    #[test]
    fn test_sorts_by_distance() {
        let group = PoiGroup {
            label: "Hotels".to_string(),
            items: vec![
                item(Some("Far Inn"), Some(9000.0)),
                item(Some("Close Inn"), Some(400.0)),
                item(Some("Mid Inn"), Some(2500.0)),
            ],
        };
        let meta = extract_group_metadata(&group);
        assert_eq!(meta.poi_count, 3);
        assert_eq!(meta.nearest_distance_ft, 400.0);
        assert_eq!(meta.farthest_distance_ft, 9000.0);
        assert_eq!(meta.closest_item_name.as_deref(), Some("Close Inn"));
        assert_eq!(meta.nearest_distance_text, "~400 ft");
        assert_eq!(meta.farthest_distance_text, "~1.7 mi");
        assert!(meta.nearest_distance_ft <= meta.farthest_distance_ft);
    }

    #[test]
    fn test_missing_distance_sorts_last() {
        let group = PoiGroup {
            label: "Parks".to_string(),
            items: vec![
                item(Some("Mystery Park"), None),
                item(Some("Near Park"), Some(800.0)),
            ],
        };
        let meta = extract_group_metadata(&group);
        assert_eq!(meta.closest_item_name.as_deref(), Some("Near Park"));
        assert!(meta.farthest_distance_ft.is_infinite());
        assert_eq!(meta.farthest_distance_text, "unknown distance");
    }

    #[test]
    fn test_provided_text_wins() {
        let group = PoiGroup {
            label: "Transit".to_string(),
            items: vec![PoiItem {
                name: Some("Main St Station".to_string()),
                distance_ft: Some(1200.0),
                distance_text: Some("3 min walk".to_string()),
            }],
        };
        let meta = extract_group_metadata(&group);
        assert_eq!(meta.nearest_distance_text, "3 min walk");
        assert_eq!(meta.farthest_distance_text, "3 min walk");
    }

    #[test]
    fn test_nameless_nearest() {
        let group = PoiGroup {
            label: "Shops".to_string(),
            items: vec![item(None, Some(600.0)), item(Some("Named"), Some(700.0))],
        };
        let meta = extract_group_metadata(&group);
        assert!(meta.closest_item_name.is_none());
    }
}
