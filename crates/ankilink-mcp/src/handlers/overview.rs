//! The get-collection-overview tool.

use ankilink::AnkiClient;
use tracing::debug;

use crate::format;

/// Summarize the collection: decks, models, tags, and per-model fields.
///
/// Deck, model, and tag fetches are fatal - any failure there returns a
/// single error block and issues no further calls. Field lookups are
/// per-model and non-fatal: a failing model contributes an error block and
/// the remaining models are still reported.
pub async fn collection_overview(client: &AnkiClient) -> Vec<String> {
    let decks = match client.decks().names().await {
        Ok(decks) => decks,
        Err(e) => return vec![format!("\nFailed to retrieve decks: {e}")],
    };

    let models = match client.models().names().await {
        Ok(models) => models,
        Err(e) => return vec![format!("\nFailed to retrieve models: {e}")],
    };

    let tags = match client.notes().all_tags().await {
        Ok(tags) => tags,
        Err(e) => return vec![format!("\nFailed to retrieve tags: {e}")],
    };

    debug!(
        decks = decks.len(),
        models = models.len(),
        tags = tags.len(),
        "Collection overview fetched"
    );

    let mut blocks = vec![
        format::overview_list("decks", &decks),
        format::overview_list("note models", &models),
    ];
    if !tags.is_empty() {
        blocks.push(format::tags_block(&tags));
    }

    for model in &models {
        let names = match client.models().field_names(model).await {
            Ok(names) => names,
            Err(e) => {
                blocks.push(format!("\nFailed to retrieve field names for '{model}': {e}"));
                continue;
            }
        };

        let descriptions = match client.models().field_descriptions(model).await {
            Ok(descriptions) => descriptions,
            Err(e) => {
                blocks.push(format!(
                    "\nFailed to retrieve field descriptions for '{model}': {e}"
                ));
                continue;
            }
        };

        blocks.push(format::model_fields_block(model, &names, &descriptions));
    }

    blocks
}
