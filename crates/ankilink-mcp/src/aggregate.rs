//! Shared date and numeric helpers for the tool handlers.

use ankilink::{NoteInfo, ReviewDay};
use chrono::NaiveDate;

/// Parse an AnkiConnect `YYYY-MM-DD` date string.
pub fn parse_day(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}

/// Keep review entries on or after the cutoff, preserving the remote order.
///
/// With no cutoff the series passes through untouched. Entries whose date
/// fails to parse count as arbitrarily old, so they never survive a cutoff.
pub fn filter_since(days: Vec<ReviewDay>, cutoff: Option<NaiveDate>) -> Vec<ReviewDay> {
    let Some(cutoff) = cutoff else {
        return days;
    };
    days.into_iter()
        .filter(|day| parse_day(&day.date).is_some_and(|date| date >= cutoff))
        .collect()
}

/// Flatten the card IDs of a batch of notes, in per-note, per-card order.
pub fn flatten_card_ids(notes: &[NoteInfo]) -> Vec<i64> {
    notes
        .iter()
        .flat_map(|note| note.cards.iter().copied())
        .collect()
}

/// Arithmetic mean of a list of ease factors; 0.0 for an empty list.
pub fn average_ease(factors: &[i64]) -> f64 {
    if factors.is_empty() {
        0.0
    } else {
        factors.iter().sum::<i64>() as f64 / factors.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(date: &str, count: i64) -> ReviewDay {
        ReviewDay {
            date: date.to_string(),
            count,
        }
    }

    #[test]
    fn filter_without_cutoff_passes_through() {
        let days = vec![day("2023-01-01", 10), day("not-a-date", 5)];
        let filtered = filter_since(days.clone(), None);
        assert_eq!(filtered, days);
    }

    #[test]
    fn filter_drops_entries_before_cutoff() {
        let cutoff = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let days = vec![
            day("2024-01-09", 10),
            day("2024-01-10", 20),
            day("2024-01-11", 30),
        ];
        let filtered = filter_since(days, Some(cutoff));
        assert_eq!(filtered, vec![day("2024-01-10", 20), day("2024-01-11", 30)]);
    }

    #[test]
    fn unparseable_dates_never_survive_a_cutoff() {
        let cutoff = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let days = vec![day("garbage", 99), day("2024-02-01", 1)];
        let filtered = filter_since(days, Some(cutoff));
        assert_eq!(filtered, vec![day("2024-02-01", 1)]);
    }

    #[test]
    fn flatten_preserves_per_note_per_card_order() {
        let notes: Vec<NoteInfo> = serde_json::from_value(serde_json::json!([
            {"noteId": 1, "modelName": "Basic", "cards": [2001, 2002]},
            {"noteId": 2, "modelName": "Basic", "cards": [2003]},
            {"noteId": 3, "modelName": "Basic", "cards": [2004, 2005]}
        ]))
        .unwrap();
        assert_eq!(flatten_card_ids(&notes), vec![2001, 2002, 2003, 2004, 2005]);
    }

    #[test]
    fn average_ease_is_positional_mean() {
        assert_eq!(average_ease(&[2500, 2300, 2100, 2700, 2400]), 2400.0);
        assert_eq!(average_ease(&[]), 0.0);
    }
}
