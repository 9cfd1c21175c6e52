//! Action modules for AnkiConnect operations.
//!
//! Each module provides a set of related operations grouped by domain.

mod cards;
mod decks;
mod models;
mod notes;
mod statistics;

pub use cards::CardActions;
pub use decks::DeckActions;
pub use models::ModelActions;
pub use notes::NoteActions;
pub use statistics::StatisticsActions;
