//! The find-cards tool.

use ankilink::AnkiClient;
use tracing::debug;

use crate::format;

/// Default maximum number of card IDs rendered per search.
pub const DEFAULT_LIMIT: usize = 100;

/// Find card IDs matching an Anki search query.
///
/// Fails fast: a remote error produces a single error block. IDs are listed
/// in the order the remote system returned them, truncated to `limit`.
pub async fn find_cards(client: &AnkiClient, query: &str, limit: usize) -> Vec<String> {
    let card_ids = match client.cards().find(query).await {
        Ok(ids) => ids,
        Err(e) => return vec![format!("Failed to find cards: {e}")],
    };

    if card_ids.is_empty() {
        return vec![format!("No cards found matching query: '{query}'")];
    }

    let total = card_ids.len();
    let shown = &card_ids[..total.min(limit)];
    debug!(total, shown = shown.len(), query, "Found cards");

    let header = format::cards_header(total, shown.len(), query);
    vec![format!("{header}\n\n{}", format::card_id_list(shown))]
}
