//! Stored document representation.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A document stored in an Astra collection.
///
/// Matches the schema used by vector-store ingestors against the Data API:
/// the original text lives in `content`, provenance fields in `metadata`, and
/// `$similarity` is present only when the query requested it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AstraDocument {
    /// Document identifier.
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// The text payload of the document.
    #[serde(default)]
    pub content: String,

    /// Provenance metadata (source identifiers and similar).
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, serde_json::Value>,

    /// Similarity score reported by the service, when requested.
    #[serde(
        rename = "$similarity",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub similarity: Option<f32>,
}

impl AstraDocument {
    /// Creates a new document with the given text payload.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            id: None,
            content: content.into(),
            metadata: HashMap::new(),
            similarity: None,
        }
    }

    /// Adds a single metadata field.
    pub fn with_field(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }
}
