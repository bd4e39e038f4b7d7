//! Dish-mention detection across a review set.
//!
//! Scans review text for a fixed list of common dish terms and reports
//! them in first-mention order. Substring matching is intentional here
//! ("dumplings" should count for "dumpling" menus and vice versa); the
//! whole-word discipline of the theme classifier is not needed.

use once_cell::sync::Lazy;
use placeintel_core::Review;

static COMMON_DISHES: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "chicken", "duck", "beef", "pork", "shrimp", "lobster", "fish", "crab",
        "rice", "noodles", "soup", "dumplings", "egg roll", "spring roll",
        "fried rice", "chow mein", "lo mein", "chow fun", "wonton",
        "tofu", "vegetables", "broccoli", "mushroom", "seafood",
        "general tso", "kung pao", "orange chicken", "sesame", "sweet and sour",
        "hot pot", "hotpot", "coconut chicken", "peking duck", "crispy",
        "dim sum", "bao", "scallion pancake", "congee", "bbq", "roast",
        "sushi", "sashimi", "buffet", "crab legs", "crab rangoon",
        "egg foo young", "moo shu", "mongolian", "szechuan", "hunan",
        "wings", "ribs", "steak", "oyster", "clam", "mussel", "scallop",
    ]
});

/// Dishes mentioned anywhere in the reviews, first-mention order,
/// deduplicated, truncated to `max_dishes`.
pub fn mentioned_dishes(reviews: &[Review], max_dishes: usize) -> Vec<String> {
    let mut mentions: Vec<String> = Vec::new();
    for review in reviews {
        let text = review.text.as_deref().unwrap_or("").to_lowercase();
        let translated = review.text_translated.as_deref().unwrap_or("").to_lowercase();
        let full_text = format!("{text} {translated}");
        for dish in COMMON_DISHES.iter() {
            if full_text.contains(dish) && !mentions.iter().any(|m| m == dish) {
                mentions.push(dish.to_string());
            }
        }
        if mentions.len() >= max_dishes {
            break;
        }
    }
    mentions.truncate(max_dishes);
    mentions
}
