//! Numeric thresholds for the classifier and the nearby-places heuristics.
//!
//! Process-wide constants; callers that need different cutoffs pass them
//! explicitly to the functions that take overrides.

/// Reviews beyond this prefix are ignored (stable prefix, not a sample).
pub const MAX_REVIEWS: usize = 200;

/// A theme must match at least this many distinct reviews to be reported.
pub const MIN_THEME_COUNT: usize = 2;

/// Themes returned per call, after sorting.
pub const MAX_THEMES: usize = 6;

pub const FEET_PER_MILE: f64 = 5280.0;

/// Distances at or above this render in miles (0.2 mi).
pub const MILES_CUTOVER_FT: f64 = 1056.0;

/// Default-open booster: group size and nearest-distance cutoffs that
/// force a group open regardless of tier.
pub const OPEN_BOOST_MIN_COUNT: usize = 6;
pub const OPEN_BOOST_MAX_DISTANCE_FT: f64 = 2000.0;

/// Default-open booster for medium-tier sections.
pub const OPEN_MEDIUM_MIN_COUNT: usize = 4;
pub const OPEN_MEDIUM_MAX_DISTANCE_FT: f64 = 3000.0;

/// Ultra-thin: a lone item farther than this is not worth prominence.
pub const THIN_SINGLE_MIN_DISTANCE_FT: f64 = 4000.0;

/// Ultra-thin: two or fewer items all farther than this, on a low tier.
pub const THIN_PAIR_MIN_DISTANCE_FT: f64 = 6000.0;
pub const THIN_MAX_COUNT: usize = 2;

/// Section short names listed in the overall one-liner.
pub const MAX_SUMMARY_CATEGORIES: usize = 5;
