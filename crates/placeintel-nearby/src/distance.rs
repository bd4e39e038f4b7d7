//! Distance display text.
//!
//! Short distances render as feet rounded to the nearest 10, longer ones
//! as miles to one decimal. The cutover sits at 1056 ft (0.2 mi). The
//! unit-locked variants exist for range rendering, where both endpoints
//! must share a unit.

use placeintel_core::thresholds::{FEET_PER_MILE, MILES_CUTOVER_FT};

const UNKNOWN: &str = "unknown distance";

/// Auto-unit rendering: `"~870 ft"` below 1056 ft, `"~1.2 mi"` at or
/// above. `None`, negative, or non-finite values render as
/// `"unknown distance"`.
pub fn format_distance(ft: Option<f64>) -> String {
    match usable(ft) {
        Some(v) if v < MILES_CUTOVER_FT => feet_text(v),
        Some(v) => miles_text(v),
        None => UNKNOWN.to_string(),
    }
}

/// Feet rendering regardless of magnitude.
pub fn format_distance_feet(ft: Option<f64>) -> String {
    match usable(ft) {
        Some(v) => feet_text(v),
        None => UNKNOWN.to_string(),
    }
}

/// Miles rendering regardless of magnitude.
pub fn format_distance_miles(ft: Option<f64>) -> String {
    match usable(ft) {
        Some(v) => miles_text(v),
        None => UNKNOWN.to_string(),
    }
}

fn usable(ft: Option<f64>) -> Option<f64> {
    ft.filter(|v| v.is_finite() && *v >= 0.0)
}

fn feet_text(ft: f64) -> String {
    let rounded = (ft / 10.0).round() * 10.0;
    format!("~{} ft", rounded as i64)
}

fn miles_text(ft: f64) -> String {
    format!("~{:.1} mi", ft / FEET_PER_MILE)
}
