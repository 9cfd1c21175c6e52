//! The combined get-stats tool.

use ankilink::AnkiClient;
use tracing::debug;

use crate::aggregate;
use crate::format;

/// Arguments for [`get_stats`].
#[derive(Debug, Clone, Default)]
pub struct StatsRequest {
    /// One of `reviews`, `difficulty`, `due`, `retention`, or `all`.
    pub stat_type: String,
    /// Optional deck filter; required for the `due` section.
    pub deck_name: Option<String>,
    /// Include per-card ease factors in the `difficulty` section.
    pub include_cards: bool,
}

/// Difficulty aggregation caps at this many matched notes.
const DIFFICULTY_NOTE_CAP: usize = 100;

/// Gather statistics across independent sections.
///
/// Unlike the fail-fast tools, every requested section runs regardless of
/// the others' outcomes; errors are collected and appended under an
/// `Errors encountered:` footer after whatever sections succeeded.
pub async fn get_stats(client: &AnkiClient, request: &StatsRequest) -> Vec<String> {
    let wants = |section: &str| request.stat_type == section || request.stat_type == "all";

    let mut sections: Vec<String> = Vec::new();
    let mut errors: Vec<String> = Vec::new();

    if wants("reviews") {
        match client.statistics().cards_reviewed_by_day().await {
            Ok(days) => sections.push(format::reviews_by_day_block(&days)),
            Err(e) => errors.push(format!("Failed to retrieve review statistics: {e}")),
        }
    }

    if wants("difficulty") {
        difficulty_section(client, request, &mut sections, &mut errors).await;
    }

    if wants("due") {
        // Due counts are per-deck; without a deck filter this section
        // contributes nothing (not an error).
        if let Some(deck) = request.deck_name.as_deref() {
            match client.decks().stats(&[deck]).await {
                Ok(stats) => sections.push(format::due_block(deck, &stats)),
                Err(e) => errors.push(format!("Failed to retrieve deck statistics: {e}")),
            }
        }
    }

    if wants("retention") {
        sections.push(
            "Retention statistics are not directly available through the AnkiConnect API."
                .to_string(),
        );
    }

    debug!(
        sections = sections.len(),
        errors = errors.len(),
        stat_type = %request.stat_type,
        "Stats gathered"
    );

    let mut combined = if sections.is_empty() {
        "No statistics available for the requested parameters.".to_string()
    } else {
        sections.join("\n\n")
    };

    if !errors.is_empty() {
        combined.push_str("\n\nErrors encountered:\n");
        combined.push_str(&errors.join("\n"));
    }

    vec![combined]
}

/// The dependent-call chain for the difficulty section: find notes, fetch
/// their records, flatten to card IDs, fetch ease factors aligned to that
/// list.
async fn difficulty_section(
    client: &AnkiClient,
    request: &StatsRequest,
    sections: &mut Vec<String>,
    errors: &mut Vec<String>,
) {
    let query = request
        .deck_name
        .as_deref()
        .map(|deck| format!("deck:{deck}"))
        .unwrap_or_default();

    let note_ids = match client.notes().find(&query).await {
        Ok(ids) if !ids.is_empty() => ids,
        Ok(_) => {
            errors.push("Failed to find notes or no notes found: No notes found".to_string());
            return;
        }
        Err(e) => {
            errors.push(format!("Failed to find notes or no notes found: {e}"));
            return;
        }
    };

    let capped = &note_ids[..note_ids.len().min(DIFFICULTY_NOTE_CAP)];
    let notes = match client.notes().info(capped).await {
        Ok(notes) => notes,
        Err(e) => {
            errors.push(format!("Failed to retrieve cards info: {e}"));
            return;
        }
    };

    let card_ids = aggregate::flatten_card_ids(&notes);
    let factors = match client.cards().get_ease(&card_ids).await {
        Ok(factors) => factors,
        Err(e) => {
            errors.push(format!("Failed to retrieve ease factors: {e}"));
            return;
        }
    };

    let mut section = format!("Average ease factor: {:.2}\n", aggregate::average_ease(&factors));

    if request.include_cards && !card_ids.is_empty() && card_ids.len() == factors.len() {
        section.push_str("Individual card ease factors:\n");
        let lines: Vec<String> = card_ids
            .iter()
            .zip(&factors)
            .map(|(card_id, ease)| format!("Card {card_id}: {ease}"))
            .collect();
        section.push_str(&lines.join("\n"));
    }

    sections.push(section);
}
