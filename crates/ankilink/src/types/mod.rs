//! Domain types for AnkiConnect.
//!
//! This module contains the data structures used to represent Anki entities
//! like decks, notes, and review history.

mod deck;
mod note;
mod review;

pub use deck::DeckStats;
pub use note::{Note, NoteField, NoteInfo};
pub use review::ReviewDay;
