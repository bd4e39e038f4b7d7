//! PlaceIntel Nearby — POI group prioritization, distance formatting,
//! and deterministic summary prose.

pub mod distance;
pub mod metadata;
pub mod rules;
pub mod summary;

pub use distance::{format_distance, format_distance_feet, format_distance_miles};
pub use metadata::{extract_group_metadata, GroupMetadata};
pub use rules::{is_ultra_thin, should_default_open, NearbyRules};
pub use summary::{build_overall_summary, build_section_summary, generate_group_summary};
