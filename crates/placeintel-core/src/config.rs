//! Loadable overrides for the static classification tables.
//!
//! The built-in tables ship as process-wide constants in the engine
//! crates; deployments that need a different dictionary or priority map
//! supply an `EngineConfig` JSON file instead. Loaded once at startup and
//! treated as immutable afterwards — determinism depends on the tables
//! never changing mid-process.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::Priority;

/// One theme: a unique key, its keyword/phrase list, and a display label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    pub key: String,
    /// Whole-word keywords and multi-word phrases. Matched literally;
    /// regex metacharacters carry no special meaning.
    pub keywords: Vec<String>,
    /// Display label; a missing label falls back to a capitalization of
    /// the key.
    #[serde(default)]
    pub label: Option<String>,
}

/// Full table override: theme dictionary, tie-break order, section tiers,
/// and the group-label substring sets.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub themes: Vec<ThemeConfig>,
    /// Theme keys in tie-break order; keys not listed rank below all
    /// listed keys.
    #[serde(default)]
    pub priority_order: Vec<String>,
    /// Section slug → tier. Unknown slugs default to low.
    #[serde(default)]
    pub section_priorities: HashMap<String, Priority>,
    /// Substrings marking a group label as high-priority (case-insensitive,
    /// underscores treated as spaces).
    #[serde(default)]
    pub high_priority_labels: Vec<String>,
    /// Substrings marking a group label as noise.
    #[serde(default)]
    pub noise_labels: Vec<String>,
}

impl EngineConfig {
    /// Load and validate a config file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// Parse and validate a config from a JSON string.
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configs that would make classification ill-defined:
    /// duplicate or empty theme keys, themes without a usable keyword,
    /// priority entries naming undefined themes.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashMap::new();
        for theme in &self.themes {
            if theme.key.trim().is_empty() {
                return Err(Error::Config("theme with empty key".to_string()));
            }
            if seen.insert(theme.key.as_str(), ()).is_some() {
                return Err(Error::Config(format!(
                    "duplicate theme key: {}",
                    theme.key
                )));
            }
            if !theme.keywords.iter().any(|k| !k.trim().is_empty()) {
                return Err(Error::Config(format!(
                    "theme {} has no usable keywords",
                    theme.key
                )));
            }
        }
        for key in &self.priority_order {
            if !seen.contains_key(key.as_str()) {
                tracing::warn!("priority_order references unknown theme: {}", key);
                return Err(Error::Config(format!(
                    "priority_order references unknown theme: {}",
                    key
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn sample_json() -> &'static str {
        r#"{
            "themes": [
                {"key": "value", "keywords": ["cheap", "great value"], "label": "Value / Price"},
                {"key": "taste", "keywords": ["tasty", "amazing"]}
            ],
            "priority_order": ["taste", "value"],
            "section_priorities": {"transportation": "high", "lodging": "medium"},
            "high_priority_labels": ["airport"],
            "noise_labels": ["atm"]
        }"#
    }

    #[test]
    fn test_parse_and_validate() {
        let config = EngineConfig::from_json(sample_json()).unwrap();
        assert_eq!(config.themes.len(), 2);
        assert_eq!(
            config.section_priorities.get("transportation"),
            Some(&Priority::High)
        );
        assert_eq!(config.themes[1].label, None);
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(sample_json().as_bytes()).unwrap();
        let config = EngineConfig::from_path(file.path()).unwrap();
        assert_eq!(config.priority_order, vec!["taste", "value"]);
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let raw = r#"{"themes": [
            {"key": "value", "keywords": ["cheap"]},
            {"key": "value", "keywords": ["affordable"]}
        ]}"#;
        assert!(matches!(
            EngineConfig::from_json(raw),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_empty_keywords_rejected() {
        let raw = r#"{"themes": [{"key": "value", "keywords": ["  "]}]}"#;
        assert!(matches!(
            EngineConfig::from_json(raw),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_unknown_priority_reference_rejected() {
        let raw = r#"{
            "themes": [{"key": "value", "keywords": ["cheap"]}],
            "priority_order": ["service"]
        }"#;
        assert!(matches!(
            EngineConfig::from_json(raw),
            Err(Error::Config(_))
        ));
    }
}
