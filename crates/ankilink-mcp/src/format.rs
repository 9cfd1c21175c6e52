//! Pure formatters that render AnkiConnect results as readable text blocks.
//!
//! Everything here is deterministic: note fields render in model order, list
//! orderings come from the remote system, and long field values truncate at
//! a fixed width. The exact wording of these blocks is a contract with the
//! tool consumers and is pinned by the handler tests.

use std::borrow::Cow;

use ankilink::{DeckStats, NoteInfo, ReviewDay};
use chrono::{Local, TimeZone};

/// Maximum rendered length of a note field value.
pub const FIELD_PREVIEW_CHARS: usize = 100;

/// Truncate a field value to [`FIELD_PREVIEW_CHARS`], replacing the tail
/// with `...`. Values at or under the limit pass through unchanged, so the
/// operation is idempotent.
pub fn truncate_field(value: &str) -> Cow<'_, str> {
    if value.chars().count() <= FIELD_PREVIEW_CHARS {
        Cow::Borrowed(value)
    } else {
        let head: String = value.chars().take(FIELD_PREVIEW_CHARS - 3).collect();
        Cow::Owned(format!("{head}..."))
    }
}

/// Overview block listing deck or model names.
///
/// `what` is the plural noun for the heading ("decks", "note models").
pub fn overview_list(what: &str, names: &[String]) -> String {
    let mut block = format!("\nAvailable {} in Anki ({}):", what, names.len());
    for name in names {
        block.push_str("\n- ");
        block.push_str(name);
    }
    block
}

/// Overview block listing the tags in use. Callers skip it when empty.
pub fn tags_block(tags: &[String]) -> String {
    format!("\nTags used in Anki ({}): {}", tags.len(), tags.join(", "))
}

/// Overview block for one model's fields, zipping names with descriptions
/// by position. Missing or empty descriptions render as a bare field name.
pub fn model_fields_block(model: &str, names: &[String], descriptions: &[String]) -> String {
    let mut block = format!("\nFields for model '{}' ({}):", model, names.len());
    for (i, name) in names.iter().enumerate() {
        let description = descriptions.get(i).map(String::as_str).unwrap_or("");
        if description.is_empty() {
            block.push_str(&format!("\n  - {name}"));
        } else {
            block.push_str(&format!("\n  - {name}: {description}"));
        }
    }
    block
}

/// Header for a note search result.
pub fn notes_header(total: usize, shown: usize, query: &str) -> String {
    if total > shown {
        format!(
            "Showing {shown} of {total} notes matching query: '{query}' \
             (use a more specific query or increase limit to see more)"
        )
    } else {
        format!("Found {total} notes matching query: '{query}'")
    }
}

/// Header for a card ID search result.
pub fn cards_header(total: usize, shown: usize, query: &str) -> String {
    if total > shown {
        format!(
            "Showing {shown} of {total} card IDs matching query: '{query}' \
             (use a more specific query or increase limit to see more)"
        )
    } else {
        format!("Found {total} card(s) matching query: '{query}'")
    }
}

/// One card ID per line under a literal subheader.
pub fn card_id_list(ids: &[i64]) -> String {
    let lines: Vec<String> = ids.iter().map(i64::to_string).collect();
    format!("Card IDs:\n{}", lines.join("\n"))
}

/// Render a single note: identity, tags, modification time, and fields in
/// model order with long values truncated.
pub fn format_note(note: &NoteInfo) -> String {
    let tags = if note.tags.is_empty() {
        "(no tags)".to_string()
    } else {
        note.tags.join(", ")
    };

    let fields: Vec<String> = note
        .fields_in_order()
        .into_iter()
        .map(|(name, value)| format!("  - {}: {}", name, truncate_field(value)))
        .collect();

    format!(
        "Note ID: {}\nModel: {}\nTags: {}\nModified: {}\nFields:\n{}\n",
        note.note_id,
        note.model_name,
        tags,
        format_mod_time(note.mod_time),
        fields.join("\n")
    )
}

/// Render a unix timestamp as local `YYYY-MM-DD HH:MM:SS`.
fn format_mod_time(timestamp: i64) -> String {
    Local
        .timestamp_opt(timestamp, 0)
        .single()
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| timestamp.to_string())
}

/// Render a filtered review series with a day/total summary line.
pub fn review_series_block(days: &[ReviewDay]) -> String {
    if days.is_empty() {
        return "No reviews found for the specified time range.".to_string();
    }

    let total: i64 = days.iter().map(|day| day.count).sum();
    let mut block = format!(
        "Cards reviewed ({} days, {} total reviews):",
        days.len(),
        total
    );
    for day in days {
        block.push_str(&format!("\n  {}: {} cards", day.date, day.count));
    }
    block
}

/// Render the unfiltered review series used by the combined stats tool.
pub fn reviews_by_day_block(days: &[ReviewDay]) -> String {
    let lines: Vec<String> = days
        .iter()
        .map(|day| format!("{}: {} cards", day.date, day.count))
        .collect();
    format!("Cards reviewed by day:\n{}", lines.join("\n"))
}

/// Render per-deck due-card counters.
pub fn due_block(deck: &str, stats: &[DeckStats]) -> String {
    let mut block = format!("Due cards in {deck}:\n");
    for stat in stats {
        block.push_str(&format!("New: {}\n", stat.new_count));
        block.push_str(&format!("Learning: {}\n", stat.learn_count));
        block.push_str(&format!("Review: {}\n", stat.review_count));
    }
    block
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note_from_json(value: serde_json::Value) -> NoteInfo {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn truncate_leaves_short_values_alone() {
        let value = "A".repeat(100);
        assert_eq!(truncate_field(&value).as_ref(), value.as_str());
    }

    #[test]
    fn truncate_cuts_to_97_chars_plus_ellipsis() {
        let value = "A".repeat(150);
        let truncated = truncate_field(&value);
        assert_eq!(truncated.chars().count(), 100);
        assert!(truncated.starts_with(&"A".repeat(97)));
        assert!(truncated.ends_with("..."));
        // Idempotent: re-formatting the truncated value changes nothing.
        assert_eq!(truncate_field(&truncated), truncated);
    }

    #[test]
    fn truncate_counts_chars_not_bytes() {
        let value = "日".repeat(101);
        let truncated = truncate_field(&value);
        assert_eq!(truncated.chars().count(), 100);
        assert!(truncated.ends_with("..."));
    }

    #[test]
    fn overview_blocks_carry_leading_newline_and_counts() {
        let decks = vec!["Default".to_string(), "Custom Deck".to_string()];
        assert_eq!(
            overview_list("decks", &decks),
            "\nAvailable decks in Anki (2):\n- Default\n- Custom Deck"
        );
        assert_eq!(
            overview_list("note models", &["Basic".to_string()]),
            "\nAvailable note models in Anki (1):\n- Basic"
        );
    }

    #[test]
    fn tags_block_is_comma_joined() {
        let tags = vec![
            "vocabulary".to_string(),
            "grammar".to_string(),
            "test".to_string(),
        ];
        assert_eq!(
            tags_block(&tags),
            "\nTags used in Anki (3): vocabulary, grammar, test"
        );
    }

    #[test]
    fn model_fields_zip_by_position() {
        let names = vec!["Front".to_string(), "Back".to_string()];
        let descriptions = vec!["Front side".to_string(), "Back side".to_string()];
        assert_eq!(
            model_fields_block("Basic", &names, &descriptions),
            "\nFields for model 'Basic' (2):\n  - Front: Front side\n  - Back: Back side"
        );
    }

    #[test]
    fn empty_descriptions_render_bare_field_names() {
        let names = vec!["Front".to_string(), "Back".to_string()];
        // Description list shorter than the field list: missing entries
        // default to empty.
        let descriptions = vec!["".to_string()];
        assert_eq!(
            model_fields_block("Basic", &names, &descriptions),
            "\nFields for model 'Basic' (2):\n  - Front\n  - Back"
        );
    }

    #[test]
    fn headers_distinguish_found_from_truncated() {
        assert_eq!(
            notes_header(2, 2, "deck:Test"),
            "Found 2 notes matching query: 'deck:Test'"
        );
        assert_eq!(
            notes_header(50, 20, "deck:Test"),
            "Showing 20 of 50 notes matching query: 'deck:Test' \
             (use a more specific query or increase limit to see more)"
        );
        assert_eq!(
            cards_header(3, 3, "deck:Test"),
            "Found 3 card(s) matching query: 'deck:Test'"
        );
        assert_eq!(
            cards_header(150, 100, "deck:Test"),
            "Showing 100 of 150 card IDs matching query: 'deck:Test' \
             (use a more specific query or increase limit to see more)"
        );
    }

    #[test]
    fn note_without_tags_renders_placeholder() {
        let note = note_from_json(serde_json::json!({
            "noteId": 5678,
            "modelName": "Cloze",
            "tags": [],
            "fields": {
                "Text": {"value": "{{c1::Python}} is a language", "order": 0}
            },
            "mod": 1700000001
        }));

        let text = format_note(&note);
        assert!(text.starts_with("Note ID: 5678\nModel: Cloze\nTags: (no tags)\n"));
        assert!(text.contains("  - Text: {{c1::Python}} is a language"));
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn note_fields_render_in_model_order() {
        let note = note_from_json(serde_json::json!({
            "noteId": 1234,
            "modelName": "Basic",
            "tags": ["test", "example"],
            "fields": {
                "Back": {"value": "A programming language", "order": 1},
                "Front": {"value": "What is Python?", "order": 0}
            },
            "mod": 1700000000
        }));

        let text = format_note(&note);
        assert!(text.contains("Tags: test, example"));
        let front = text.find("  - Front: What is Python?").unwrap();
        let back = text.find("  - Back: A programming language").unwrap();
        assert!(front < back);
    }

    #[test]
    fn review_series_sums_counts() {
        let days = vec![
            ReviewDay {
                date: "2024-01-01".to_string(),
                count: 50,
            },
            ReviewDay {
                date: "2024-01-02".to_string(),
                count: 75,
            },
        ];
        assert_eq!(
            review_series_block(&days),
            "Cards reviewed (2 days, 125 total reviews):\n  2024-01-01: 50 cards\n  2024-01-02: 75 cards"
        );
    }

    #[test]
    fn empty_review_series_has_literal_message() {
        assert_eq!(
            review_series_block(&[]),
            "No reviews found for the specified time range."
        );
    }

    #[test]
    fn card_id_list_is_one_per_line() {
        assert_eq!(card_id_list(&[1, 2, 3]), "Card IDs:\n1\n2\n3");
    }

    #[test]
    fn due_block_lists_counters_per_deck() {
        let stats: Vec<DeckStats> = serde_json::from_value(serde_json::json!([
            {"name": "TestDeck", "new_count": 10, "learn_count": 5, "review_count": 25}
        ]))
        .unwrap();
        assert_eq!(
            due_block("TestDeck", &stats),
            "Due cards in TestDeck:\nNew: 10\nLearning: 5\nReview: 25\n"
        );
    }
}
