//! Model-related AnkiConnect actions.
//!
//! # Example
//!
//! ```no_run
//! use ankilink::AnkiClient;
//!
//! # async fn example() -> ankilink::Result<()> {
//! let client = AnkiClient::new();
//!
//! // List all models
//! let models = client.models().names().await?;
//! println!("Models: {:?}", models);
//!
//! // Get field names for a model
//! let fields = client.models().field_names("Basic").await?;
//! # Ok(())
//! # }
//! ```

use serde::Serialize;

use crate::client::AnkiClient;
use crate::error::Result;

/// Provides access to model-related AnkiConnect operations.
///
/// Obtained via [`AnkiClient::models()`].
#[derive(Debug)]
pub struct ModelActions<'a> {
    pub(crate) client: &'a AnkiClient,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ModelNameParams<'a> {
    model_name: &'a str,
}

impl<'a> ModelActions<'a> {
    /// Get all model (note type) names.
    pub async fn names(&self) -> Result<Vec<String>> {
        self.client.invoke_without_params("modelNames").await
    }

    /// Get the field names for a model, in field order.
    pub async fn field_names(&self, model_name: &str) -> Result<Vec<String>> {
        self.client
            .invoke("modelFieldNames", ModelNameParams { model_name })
            .await
    }

    /// Get the field descriptions for a model, positionally aligned with
    /// [`field_names`](Self::field_names).
    ///
    /// Descriptions are often empty strings; the list may be shorter than
    /// the field list on older Anki versions.
    pub async fn field_descriptions(&self, model_name: &str) -> Result<Vec<String>> {
        self.client
            .invoke("modelFieldDescriptions", ModelNameParams { model_name })
            .await
    }
}
