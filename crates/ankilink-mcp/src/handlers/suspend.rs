//! The suspend-cards and unsuspend-cards tools.

use ankilink::AnkiClient;
use tracing::{debug, info};

/// Suspend cards by ID.
pub async fn suspend_cards(client: &AnkiClient, card_ids: &[i64]) -> Vec<String> {
    toggle_suspended(client, card_ids, Direction::Suspend).await
}

/// Unsuspend cards by ID.
pub async fn unsuspend_cards(client: &AnkiClient, card_ids: &[i64]) -> Vec<String> {
    toggle_suspended(client, card_ids, Direction::Unsuspend).await
}

#[derive(Debug, Clone, Copy)]
enum Direction {
    Suspend,
    Unsuspend,
}

impl Direction {
    fn verb(self) -> &'static str {
        match self {
            Direction::Suspend => "suspend",
            Direction::Unsuspend => "unsuspend",
        }
    }
}

/// Shared implementation for both directions.
///
/// An empty ID list is rejected before any remote call. On success the
/// reported count is the input count: the remote system only confirms with
/// a coarse boolean, not per-card detail.
async fn toggle_suspended(
    client: &AnkiClient,
    card_ids: &[i64],
    direction: Direction,
) -> Vec<String> {
    let verb = direction.verb();

    if card_ids.is_empty() {
        return vec![format!(
            "No card IDs provided. Please specify at least one card ID to {verb}."
        )];
    }

    debug!(count = card_ids.len(), verb, "Toggling card suspension");

    let result = match direction {
        Direction::Suspend => client.cards().suspend(card_ids).await,
        Direction::Unsuspend => client.cards().unsuspend(card_ids).await,
    };

    match result {
        Ok(true) => {
            info!(count = card_ids.len(), verb, "Cards toggled");
            vec![format!(
                "Successfully {verb}ed {} card(s).",
                card_ids.len()
            )]
        }
        Ok(false) => vec![match direction {
            Direction::Suspend => {
                "No cards were suspended (all cards were already suspended).".to_string()
            }
            Direction::Unsuspend => {
                "No cards were unsuspended (no cards were previously suspended).".to_string()
            }
        }],
        Err(e) => vec![format!("Failed to {verb} cards: {e}")],
    }
}
