//! Error types for PlaceIntel.
//!
//! The classification and summarization paths never fail — malformed input
//! degrades to safe defaults. Errors only arise at the configuration
//! boundary, when loading and validating table overrides.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
