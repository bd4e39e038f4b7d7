//! Review theme extraction.
//!
//! Reduces an unbounded list of free-text reviews to a small ranked set
//! of named themes by whole-word keyword matching. Fully deterministic:
//! identical reviews and tables always produce identical output, so the
//! results are safe to cache across renders.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use tracing::debug;

use placeintel_core::{thresholds, EngineConfig, Error, Result, Review, ThemeConfig};

use crate::dictionary::{capitalize_key, BUILTIN_THEMES, PRIORITY_ORDER};

/// One ranked theme. `count` is the number of distinct reviews that
/// matched, not keyword occurrences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeMatch {
    pub key: String,
    pub label: String,
    pub count: usize,
}

struct CompiledTheme {
    key: String,
    label: Option<String>,
    matcher: Regex,
}

/// A compiled theme dictionary: one word-boundary-anchored alternation
/// per theme, built once and reused across calls.
pub struct ThemeSet {
    themes: Vec<CompiledTheme>,
    priority_rank: HashMap<String, usize>,
}

static BUILTIN_SET: Lazy<ThemeSet> = Lazy::new(|| {
    ThemeSet::new(&BUILTIN_THEMES, PRIORITY_ORDER.iter().map(|k| k.to_string()))
        .expect("built-in theme dictionary compiles")
});

impl ThemeSet {
    /// Compile a theme dictionary and tie-break order.
    pub fn new(
        themes: &[ThemeConfig],
        priority_order: impl IntoIterator<Item = String>,
    ) -> Result<Self> {
        let mut compiled = Vec::with_capacity(themes.len());
        for theme in themes {
            let alternation = theme
                .keywords
                .iter()
                .filter(|k| !k.trim().is_empty())
                .map(|k| regex::escape(&normalize_text(k)))
                .collect::<Vec<_>>()
                .join("|");
            if alternation.is_empty() {
                return Err(Error::Config(format!(
                    "theme {} has no usable keywords",
                    theme.key
                )));
            }
            let matcher = Regex::new(&format!(r"\b(?:{alternation})\b"))
                .map_err(|e| Error::Config(format!("theme {}: {e}", theme.key)))?;
            compiled.push(CompiledTheme {
                key: theme.key.clone(),
                label: theme.label.clone(),
                matcher,
            });
        }
        let priority_rank = priority_order
            .into_iter()
            .enumerate()
            .map(|(i, key)| (key, i))
            .collect();
        Ok(Self {
            themes: compiled,
            priority_rank,
        })
    }

    /// Compile from a validated table override.
    pub fn from_config(config: &EngineConfig) -> Result<Self> {
        config.validate()?;
        Self::new(&config.themes, config.priority_order.iter().cloned())
    }

    /// The built-in dictionary, compiled once per process.
    pub fn builtin() -> &'static ThemeSet {
        &BUILTIN_SET
    }

    /// Classify a stable prefix of `reviews` (the first `max_reviews`)
    /// and return up to [`thresholds::MAX_THEMES`] themes, each matched by
    /// at least `min_count` distinct reviews, ordered by count descending
    /// with ties broken by priority order.
    pub fn extract(
        &self,
        reviews: &[Review],
        max_reviews: usize,
        min_count: usize,
    ) -> Vec<ThemeMatch> {
        let considered = &reviews[..reviews.len().min(max_reviews)];
        let mut counts = vec![0usize; self.themes.len()];

        for review in considered {
            let Some(text) = review.effective_text() else {
                continue;
            };
            let normalized = normalize_text(text);
            if normalized.is_empty() {
                continue;
            }
            // Boolean match per theme: a review increments each matching
            // theme at most once, however many keywords it contains.
            for (i, theme) in self.themes.iter().enumerate() {
                if theme.matcher.is_match(&normalized) {
                    counts[i] += 1;
                }
            }
        }

        // Stable sort over dictionary-ordered counts: count descending,
        // then priority rank ascending; themes absent from the priority
        // order rank last and keep their dictionary positions.
        let mut ranked: Vec<(usize, usize)> = counts
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count >= min_count)
            .map(|(i, &count)| (i, count))
            .collect();
        ranked.sort_by(|a, b| {
            b.1.cmp(&a.1).then_with(|| {
                self.rank_of(&self.themes[a.0].key)
                    .cmp(&self.rank_of(&self.themes[b.0].key))
            })
        });
        ranked.truncate(thresholds::MAX_THEMES);

        let results: Vec<ThemeMatch> = ranked
            .into_iter()
            .map(|(i, count)| {
                let theme = &self.themes[i];
                ThemeMatch {
                    key: theme.key.clone(),
                    label: theme
                        .label
                        .clone()
                        .unwrap_or_else(|| capitalize_key(&theme.key)),
                    count,
                }
            })
            .collect();
        debug!(
            reviews = considered.len(),
            themes = results.len(),
            "extracted review themes"
        );
        results
    }

    fn rank_of(&self, key: &str) -> usize {
        self.priority_rank.get(key).copied().unwrap_or(usize::MAX)
    }
}

/// Extract themes with the built-in dictionary and default thresholds.
pub fn extract_themes(reviews: &[Review]) -> Vec<ThemeMatch> {
    ThemeSet::builtin().extract(
        reviews,
        thresholds::MAX_REVIEWS,
        thresholds::MIN_THEME_COUNT,
    )
}

/// Lowercase, strip punctuation to spaces, collapse whitespace. Phrase
/// keywords with spaces still match contiguous words after this.
fn normalize_text(text: &str) -> String {
    let lowered = text.to_lowercase();
    let spaced: String = lowered
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '_' || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();
    spaced.split_whitespace().collect::<Vec<_>>().join(" ")
}
