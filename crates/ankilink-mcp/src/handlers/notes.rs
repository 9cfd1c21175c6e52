//! The find-notes tool.

use ankilink::AnkiClient;
use tracing::debug;

use crate::format;

/// Default maximum number of notes rendered per search.
pub const DEFAULT_LIMIT: usize = 20;

/// Find notes matching an Anki search query and render them in full.
///
/// Fails fast: a remote error produces a single error block. Results are
/// rendered in the order the remote system returned them, truncated to
/// `limit`.
pub async fn find_notes(client: &AnkiClient, query: &str, limit: usize) -> Vec<String> {
    let notes = match client.notes().info_for_query(query).await {
        Ok(notes) => notes,
        Err(e) => return vec![format!("Failed to retrieve notes: {e}")],
    };

    if notes.is_empty() {
        return vec![format!("No notes found matching query: '{query}'")];
    }

    let total = notes.len();
    let shown = &notes[..total.min(limit)];
    debug!(total, shown = shown.len(), query, "Found notes");

    let header = format::notes_header(total, shown.len(), query);
    let rendered: Vec<String> = shown.iter().map(format::format_note).collect();

    vec![format!("{header}\n\n{}", rendered.join("\n\n"))]
}
