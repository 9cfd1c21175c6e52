//! Card-related AnkiConnect actions.
//!
//! # Example
//!
//! ```no_run
//! use ankilink::AnkiClient;
//!
//! # async fn example() -> ankilink::Result<()> {
//! let client = AnkiClient::new();
//!
//! let due = client.cards().find("is:due").await?;
//! client.cards().suspend(&due).await?;
//! # Ok(())
//! # }
//! ```

use serde::Serialize;

use crate::client::AnkiClient;
use crate::error::Result;

/// Provides access to card-related AnkiConnect operations.
///
/// Obtained via [`AnkiClient::cards()`].
#[derive(Debug)]
pub struct CardActions<'a> {
    pub(crate) client: &'a AnkiClient,
}

#[derive(Serialize)]
struct QueryParams<'a> {
    query: &'a str,
}

#[derive(Serialize)]
struct CardsParams<'a> {
    cards: &'a [i64],
}

impl<'a> CardActions<'a> {
    /// Find card IDs matching an Anki search query.
    pub async fn find(&self, query: &str) -> Result<Vec<i64>> {
        self.client.invoke("findCards", QueryParams { query }).await
    }

    /// Suspend cards.
    ///
    /// Returns `true` if at least one card changed state; AnkiConnect does
    /// not report which cards were affected.
    pub async fn suspend(&self, card_ids: &[i64]) -> Result<bool> {
        self.client
            .invoke("suspend", CardsParams { cards: card_ids })
            .await
    }

    /// Unsuspend cards.
    ///
    /// Returns `true` if at least one card changed state.
    pub async fn unsuspend(&self, card_ids: &[i64]) -> Result<bool> {
        self.client
            .invoke("unsuspend", CardsParams { cards: card_ids })
            .await
    }

    /// Get ease factors for cards, positionally aligned with the input list.
    pub async fn get_ease(&self, card_ids: &[i64]) -> Result<Vec<i64>> {
        self.client
            .invoke("getEaseFactors", CardsParams { cards: card_ids })
            .await
    }
}
