//! Deterministic summary prose for groups, sections, and the whole page.
//!
//! Template choice for multi-item groups rotates on `poi_count % 3` so a
//! page with several groups reads less repetitively. The rotation is a
//! pure function of the count — output stability under identical input is
//! a hard requirement, since results are cached across renders.

use placeintel_core::thresholds::{FEET_PER_MILE, MAX_SUMMARY_CATEGORIES};
use placeintel_core::PoiSection;

use crate::distance::{format_distance, format_distance_feet, format_distance_miles};
use crate::metadata::GroupMetadata;

fn finite(v: f64) -> Option<f64> {
    v.is_finite().then_some(v)
}

/// Nearest-to-farthest range with one unit for both ends, chosen by the
/// farther endpoint. Mixed-unit ranges read worse than a short distance
/// rendered in miles.
fn range_text(meta: &GroupMetadata) -> String {
    let (near, far) = (
        finite(meta.nearest_distance_ft),
        finite(meta.farthest_distance_ft),
    );
    if meta.farthest_distance_ft < FEET_PER_MILE {
        format!(
            "{} to {}",
            format_distance_feet(near),
            format_distance_feet(far)
        )
    } else {
        format!(
            "{} to {}",
            format_distance_miles(near),
            format_distance_miles(far)
        )
    }
}

/// One-line prose for a single group.
pub fn generate_group_summary(meta: &GroupMetadata) -> String {
    match meta.poi_count {
        0 => "No places listed.".to_string(),
        1 => match &meta.closest_item_name {
            Some(name) => format!(
                "1 place is listed ({name}) at {}.",
                meta.nearest_distance_text
            ),
            None => format!("1 place is listed at {}.", meta.nearest_distance_text),
        },
        count => {
            let range = range_text(meta);
            let nearest = &meta.nearest_distance_text;
            match (count % 3, &meta.closest_item_name) {
                (0, Some(name)) => format!(
                    "{count} places are listed, spanning {range}. The closest, {name}, is {nearest} away."
                ),
                (0, None) => format!(
                    "{count} places are listed, spanning {range}. The closest is {nearest} away."
                ),
                (1, Some(name)) => format!(
                    "There are {count} places here, from {range}. {name} is nearest at {nearest}."
                ),
                (1, None) => format!(
                    "There are {count} places here, from {range}. The nearest is {nearest} away."
                ),
                (_, Some(name)) => format!(
                    "This area lists {count} places between {range}, with {name} closest at {nearest}."
                ),
                (_, None) => format!(
                    "This area lists {count} places between {range}, the closest at {nearest}."
                ),
            }
        }
    }
}

/// Page-level one-liner across all sections: total count plus up to five
/// section short names. Empty when nothing is listed.
pub fn build_overall_summary(sections: &[PoiSection]) -> String {
    let total: usize = sections.iter().map(PoiSection::total_places).sum();
    if total == 0 {
        return String::new();
    }
    let names: Vec<&str> = sections
        .iter()
        .filter_map(|s| s.short_name.as_deref())
        .filter(|n| !n.trim().is_empty())
        .take(MAX_SUMMARY_CATEGORIES)
        .collect();
    if names.is_empty() {
        format!("{total} places nearby")
    } else {
        format!("{total} places nearby ({})", names.join(", "))
    }
}

/// Section-level one-liner: place count plus the nearest distance across
/// every item in every group of the section.
pub fn build_section_summary(section: &PoiSection) -> String {
    let count = section.total_places();
    let min_distance = section
        .groups
        .iter()
        .flat_map(|g| g.items.iter())
        .filter_map(|i| i.distance_ft)
        .filter(|d| d.is_finite() && *d >= 0.0)
        .fold(None::<f64>, |acc, d| {
            Some(acc.map_or(d, |m| m.min(d)))
        });

    match count {
        0 => "No places listed".to_string(),
        1 => match min_distance {
            Some(d) => format!("1 place at {}", format_distance(Some(d))),
            None => "1 place".to_string(),
        },
        n => match min_distance {
            Some(d) => format!("{n} places, nearest {}", format_distance(Some(d))),
            None => format!("{n} places"),
        },
    }
}
