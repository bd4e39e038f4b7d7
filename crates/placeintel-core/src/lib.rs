//! PlaceIntel Core — shared records, errors, thresholds, table configuration.

pub mod config;
pub mod error;
pub mod thresholds;
pub mod types;

pub use config::{EngineConfig, ThemeConfig};
pub use error::{Error, Result};
pub use types::{PoiGroup, PoiItem, PoiSection, Priority, Review};
