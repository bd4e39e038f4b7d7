//! Built-in theme dictionary for restaurant reviews.
//!
//! Twelve themes, each a keyword/phrase set plus a display label. The
//! table is expressed directly as `ThemeConfig` records so a deployment
//! override and the built-in path go through the same compilation code.

use once_cell::sync::Lazy;
use placeintel_core::ThemeConfig;

/// Theme keys in tie-break order. Keys not listed here rank below all
/// listed keys.
pub const PRIORITY_ORDER: &[&str] = &[
    "taste",
    "service",
    "value",
    "freshness",
    "atmosphere",
    "variety",
    "speed",
    "cleanliness",
    "family",
    "seafood",
    "sushi",
    "dessert",
];

fn theme(key: &str, label: &str, keywords: &[&str]) -> ThemeConfig {
    ThemeConfig {
        key: key.to_string(),
        label: Some(label.to_string()),
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
    }
}

/// The built-in dictionary, in the order used for last-resort tie-breaks.
pub static BUILTIN_THEMES: Lazy<Vec<ThemeConfig>> = Lazy::new(|| {
    vec![
        theme("value", "Value / Price", &[
            "cheap", "affordable", "inexpensive", "great value", "good value",
            "reasonably priced", "reasonable prices", "great prices",
            "good prices", "worth the price", "worth every penny",
            "bang for your buck",
        ]),
        theme("variety", "Menu Variety", &[
            "variety", "selection", "so many options", "lots of options",
            "buffet", "all you can eat", "extensive menu", "huge menu",
        ]),
        theme("taste", "Taste / Flavor", &[
            "delicious", "tasty", "amazing", "flavorful", "incredible",
            "so good", "yummy", "mouthwatering", "excellent food",
        ]),
        theme("freshness", "Freshness", &[
            "fresh", "freshly made", "freshly prepared", "made to order",
            "hot and fresh",
        ]),
        theme("service", "Service", &[
            "friendly", "attentive", "helpful", "welcoming", "great service",
            "good service", "excellent service", "staff", "waiter",
            "waitress", "server",
        ]),
        theme("cleanliness", "Cleanliness", &[
            "clean", "spotless", "tidy", "well kept", "sanitary", "immaculate",
        ]),
        theme("atmosphere", "Atmosphere", &[
            "atmosphere", "ambiance", "ambience", "cozy", "decor", "vibe",
            "comfortable", "inviting",
        ]),
        theme("family", "Family Friendly", &[
            "family", "kids", "children", "kid friendly", "family friendly",
            "family owned",
        ]),
        theme("speed", "Speed / Wait", &[
            "fast", "quick", "prompt", "speedy", "no wait",
            "seated right away", "in and out",
        ]),
        theme("dessert", "Desserts", &[
            "dessert", "desserts", "ice cream", "cake", "sweets", "pastries",
            "boba", "mochi",
        ]),
        theme("sushi", "Sushi", &[
            "sushi", "sashimi", "nigiri", "sushi rolls", "hand roll",
        ]),
        theme("seafood", "Seafood", &[
            "seafood", "crab", "shrimp", "lobster", "oysters", "clams",
            "mussels", "scallops", "crab legs", "fish",
        ]),
    ]
});

/// Fallback label for a key with no configured label.
pub fn capitalize_key(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_twelve_builtin_themes() {
        assert_eq!(BUILTIN_THEMES.len(), 12);
        assert!(BUILTIN_THEMES.iter().all(|t| !t.keywords.is_empty()));
    }

    #[test]
    fn test_priority_order_covers_defined_themes() {
        for key in PRIORITY_ORDER {
            assert!(
                BUILTIN_THEMES.iter().any(|t| t.key == *key),
                "priority order references unknown theme {key}"
            );
        }
    }

    #[test]
    fn test_capitalize_key() {
        assert_eq!(capitalize_key("value"), "Value");
        assert_eq!(capitalize_key(""), "");
    }
}
