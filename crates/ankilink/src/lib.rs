//! Async Rust client for the AnkiConnect API.
//!
//! This crate provides typed access to the AnkiConnect actions needed to
//! inspect and mutate a running Anki collection: decks, note models, notes,
//! cards, and review statistics.
//!
//! # Quick Start
//!
//! ```no_run
//! use ankilink::AnkiClient;
//!
//! # async fn example() -> ankilink::Result<()> {
//! // Create a client with default settings (localhost:8765)
//! let client = AnkiClient::new();
//!
//! let decks = client.decks().names().await?;
//! println!("Decks: {:?}", decks);
//! # Ok(())
//! # }
//! ```
//!
//! # Client Configuration
//!
//! Use the builder pattern for custom configuration:
//!
//! ```no_run
//! use std::time::Duration;
//! use ankilink::AnkiClient;
//!
//! let client = AnkiClient::builder()
//!     .url("http://localhost:8765")
//!     .api_key("your-api-key")
//!     .timeout(Duration::from_secs(60))
//!     .build();
//! ```
//!
//! # Action Groups
//!
//! Operations are organized into groups accessible from the client:
//!
//! - [`AnkiClient::decks()`] - Deck names and due-count statistics
//! - [`AnkiClient::models()`] - Note type names, fields, and field descriptions
//! - [`AnkiClient::notes()`] - Add, find, update, and inspect notes
//! - [`AnkiClient::cards()`] - Find, suspend, and read ease factors for cards
//! - [`AnkiClient::statistics()`] - Review history
//!
//! # Error Handling
//!
//! Every operation returns [`Result`]. Connection problems, malformed
//! responses, and application-level errors reported by AnkiConnect all
//! surface as an [`Error`] variant; nothing panics on remote failure.
//!
//! # Requirements
//!
//! - Anki must be running with the [AnkiConnect](https://ankiweb.net/shared/info/2055492159) add-on installed
//! - By default, the client connects to `http://127.0.0.1:8765`

pub mod actions;
pub mod client;
pub mod error;
mod request;
pub mod types;

pub use client::{AnkiClient, ClientBuilder};
pub use error::{Error, Result};
pub use types::{DeckStats, Note, NoteField, NoteInfo, ReviewDay};
