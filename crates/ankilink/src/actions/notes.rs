//! Note-related AnkiConnect actions.
//!
//! # Example
//!
//! ```no_run
//! use ankilink::AnkiClient;
//!
//! # async fn example() -> ankilink::Result<()> {
//! let client = AnkiClient::new();
//!
//! let ids = client.notes().find("deck:Japanese tag:verb").await?;
//! let notes = client.notes().info(&ids).await?;
//! # Ok(())
//! # }
//! ```

use std::collections::HashMap;

use serde::Serialize;

use crate::client::AnkiClient;
use crate::error::Result;
use crate::types::{Note, NoteInfo};

/// Provides access to note-related AnkiConnect operations.
///
/// Obtained via [`AnkiClient::notes()`].
#[derive(Debug)]
pub struct NoteActions<'a> {
    pub(crate) client: &'a AnkiClient,
}

#[derive(Serialize)]
struct AddNoteParams<'a> {
    note: &'a Note,
}

#[derive(Serialize)]
struct QueryParams<'a> {
    query: &'a str,
}

#[derive(Serialize)]
struct NotesInfoParams<'a> {
    notes: &'a [i64],
}

#[derive(Serialize)]
struct UpdateNoteFieldsParams<'a> {
    note: UpdateNoteFieldsInner<'a>,
}

#[derive(Serialize)]
struct UpdateNoteFieldsInner<'a> {
    id: i64,
    fields: &'a HashMap<String, String>,
}

impl<'a> NoteActions<'a> {
    /// Add a new note. Returns the new note ID.
    ///
    /// Fails with an AnkiConnect error if the note is a duplicate or the
    /// deck/model does not exist.
    pub async fn add(&self, note: &Note) -> Result<i64> {
        self.client.invoke("addNote", AddNoteParams { note }).await
    }

    /// Find note IDs matching an Anki search query.
    pub async fn find(&self, query: &str) -> Result<Vec<i64>> {
        self.client.invoke("findNotes", QueryParams { query }).await
    }

    /// Get detailed information for the given note IDs.
    pub async fn info(&self, note_ids: &[i64]) -> Result<Vec<NoteInfo>> {
        self.client
            .invoke("notesInfo", NotesInfoParams { notes: note_ids })
            .await
    }

    /// Get detailed information for all notes matching a search query.
    ///
    /// Single round trip; equivalent to [`find`](Self::find) followed by
    /// [`info`](Self::info).
    pub async fn info_for_query(&self, query: &str) -> Result<Vec<NoteInfo>> {
        self.client.invoke("notesInfo", QueryParams { query }).await
    }

    /// Update the field values of an existing note.
    pub async fn update_fields(&self, note_id: i64, fields: &HashMap<String, String>) -> Result<()> {
        self.client
            .invoke_void(
                "updateNoteFields",
                UpdateNoteFieldsParams {
                    note: UpdateNoteFieldsInner {
                        id: note_id,
                        fields,
                    },
                },
            )
            .await
    }

    /// Get all tags used in the collection.
    pub async fn all_tags(&self) -> Result<Vec<String>> {
        self.client.invoke_without_params("getTags").await
    }
}
