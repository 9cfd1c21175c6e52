//! The add-or-update-notes tool.

use std::collections::HashMap;

use ankilink::{AnkiClient, Error, Note};
use tracing::{debug, info};

/// One requested note, to be created or matched against an existing note.
#[derive(Debug, Clone)]
pub struct NoteUpsert {
    pub deck_name: String,
    pub model_name: String,
    pub fields: HashMap<String, String>,
    pub tags: Vec<String>,
}

/// Create or update a batch of notes, one result line per item.
///
/// Items are independent: a failing note never aborts the batch. A note
/// that Anki rejects as a duplicate is updated in place instead, located by
/// a field-value search.
pub async fn add_or_update_notes(client: &AnkiClient, requests: &[NoteUpsert]) -> Vec<String> {
    if requests.is_empty() {
        return vec![
            "No notes provided. Please specify at least one note to add or update.".to_string(),
        ];
    }

    let mut created = 0usize;
    let mut updated = 0usize;
    let mut failed = 0usize;
    let mut lines = Vec::with_capacity(requests.len());

    for (i, request) in requests.iter().enumerate() {
        let note = Note {
            deck_name: request.deck_name.clone(),
            model_name: request.model_name.clone(),
            fields: request.fields.clone(),
            tags: request.tags.clone(),
        };

        match client.notes().add(&note).await {
            Ok(note_id) => {
                created += 1;
                debug!(note_id, deck = %request.deck_name, "Note created");
                lines.push(format!("Note {}: created with ID {}", i + 1, note_id));
            }
            Err(Error::AnkiConnect(msg)) if msg.contains("duplicate") => {
                match update_existing(client, request).await {
                    Ok(note_id) => {
                        updated += 1;
                        debug!(note_id, "Duplicate note updated");
                        lines.push(format!("Note {}: updated existing note {}", i + 1, note_id));
                    }
                    Err(reason) => {
                        failed += 1;
                        lines.push(format!("Note {}: failed ({})", i + 1, reason));
                    }
                }
            }
            Err(e) => {
                failed += 1;
                lines.push(format!("Note {}: failed ({})", i + 1, e));
            }
        }
    }

    info!(created, updated, failed, "Note batch processed");

    let header = format!(
        "Processed {} note(s): {} created, {} updated, {} failed",
        requests.len(),
        created,
        updated,
        failed
    );
    vec![format!("{header}\n{}", lines.join("\n"))]
}

/// Locate the existing duplicate by a field-value search and update it.
///
/// The search key is the alphabetically first field name, so the lookup is
/// deterministic regardless of map iteration order.
async fn update_existing(client: &AnkiClient, request: &NoteUpsert) -> Result<i64, String> {
    let Some((name, value)) = request.fields.iter().min_by(|a, b| a.0.cmp(b.0)) else {
        return Err("no fields provided".to_string());
    };

    let query = format!("\"{}:{}\"", name, value.replace('"', "\\\""));
    match client.notes().find(&query).await {
        Ok(existing) if !existing.is_empty() => {
            client
                .notes()
                .update_fields(existing[0], &request.fields)
                .await
                .map_err(|e| e.to_string())?;
            Ok(existing[0])
        }
        Ok(_) => Err("duplicate reported but no existing note found".to_string()),
        Err(e) => Err(e.to_string()),
    }
}
