//! Caller-facing retrieved document record.

use std::collections::HashMap;

use prodassist_astra::AstraDocument;
use serde::{Deserialize, Serialize};

/// An immutable document returned from a similarity query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetrievedDocument {
    /// The text payload.
    pub text: String,

    /// Provenance metadata (source identifiers and similar).
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, serde_json::Value>,
}

impl RetrievedDocument {
    /// Creates a new document with the given text and no metadata.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            metadata: HashMap::new(),
        }
    }

    /// Adds metadata to the document.
    pub fn with_metadata(
        mut self,
        metadata: impl IntoIterator<Item = (impl Into<String>, serde_json::Value)>,
    ) -> Self {
        self.metadata = metadata.into_iter().map(|(k, v)| (k.into(), v)).collect();
        self
    }
}

impl From<AstraDocument> for RetrievedDocument {
    fn from(doc: AstraDocument) -> Self {
        Self {
            text: doc.content,
            metadata: doc.metadata,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversion_keeps_text_and_metadata() {
        let astra = AstraDocument::new("the text")
            .with_field("source", serde_json::json!("catalog"))
            .with_field("product_id", serde_json::json!("P42"));

        let doc = RetrievedDocument::from(astra);
        assert_eq!(doc.text, "the text");
        assert_eq!(doc.metadata["source"], "catalog");
        assert_eq!(doc.metadata["product_id"], "P42");
    }
}
