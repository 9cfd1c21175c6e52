//! Deck-related types.

use serde::Deserialize;

/// Statistics for a deck, as returned by `getDeckStats`.
///
/// AnkiConnect has returned these counters under varying key spellings
/// across versions; missing counters default to 0.
#[derive(Debug, Clone, Deserialize)]
pub struct DeckStats {
    /// The deck name.
    #[serde(default)]
    pub name: String,
    /// Number of new cards.
    #[serde(default, alias = "newCount", alias = "new_count")]
    pub new_count: i64,
    /// Number of cards in learning.
    #[serde(default, alias = "learnCount", alias = "learn_count")]
    pub learn_count: i64,
    /// Number of cards due for review.
    #[serde(default, alias = "reviewCount", alias = "review_count")]
    pub review_count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_counters_default_to_zero() {
        let stats: DeckStats =
            serde_json::from_value(serde_json::json!({"name": "Default"})).unwrap();
        assert_eq!(stats.new_count, 0);
        assert_eq!(stats.learn_count, 0);
        assert_eq!(stats.review_count, 0);
    }

    #[test]
    fn camel_case_keys_are_accepted() {
        let stats: DeckStats = serde_json::from_value(serde_json::json!({
            "name": "Default",
            "newCount": 3,
            "learnCount": 1,
            "reviewCount": 7
        }))
        .unwrap();
        assert_eq!(stats.new_count, 3);
        assert_eq!(stats.learn_count, 1);
        assert_eq!(stats.review_count, 7);
    }
}
