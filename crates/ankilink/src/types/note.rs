//! Note-related types.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A new note to be added to Anki.
///
/// # Field Values
///
/// Field values are HTML. If you need literal `<` or `>`, use `&lt;` and `&gt;`.
/// Field names are case-sensitive and must match the model's field names exactly.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// The deck to add the note to.
    pub deck_name: String,
    /// The note type (model) name.
    pub model_name: String,
    /// Field values, keyed by field name.
    pub fields: HashMap<String, String>,
    /// Tags for the note.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// Information about an existing note, as returned by `notesInfo`.
///
/// This is a read-only snapshot; AnkiConnect responses can omit the
/// modification time and card list, in which case they default.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteInfo {
    /// The note ID.
    pub note_id: i64,
    /// The note type (model) name.
    pub model_name: String,
    /// Tags on the note.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Field values and metadata.
    #[serde(default)]
    pub fields: HashMap<String, NoteField>,
    /// Card IDs generated from this note.
    #[serde(default)]
    pub cards: Vec<i64>,
    /// Modification timestamp (seconds since epoch).
    #[serde(rename = "mod", default)]
    pub mod_time: i64,
}

impl NoteInfo {
    /// Field names and values sorted by the field's position in the model.
    ///
    /// The wire format is a JSON object, so map iteration order is not
    /// meaningful; the `order` metadata carries the model's field order.
    pub fn fields_in_order(&self) -> Vec<(&str, &str)> {
        let mut fields: Vec<_> = self.fields.iter().collect();
        fields.sort_by_key(|(_, f)| f.order);
        fields
            .into_iter()
            .map(|(name, f)| (name.as_str(), f.value.as_str()))
            .collect()
    }
}

/// A field value with metadata.
#[derive(Debug, Clone, Deserialize)]
pub struct NoteField {
    /// The field value (HTML).
    pub value: String,
    /// The field's position in the note type.
    #[serde(default)]
    pub order: i32,
}
