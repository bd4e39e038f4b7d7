//! PlaceIntel Themes — keyword-based review theme classification.

pub mod classify;
pub mod dictionary;
pub mod dishes;

pub use classify::{extract_themes, ThemeMatch, ThemeSet};
pub use dishes::mentioned_dishes;
