//! Retrieval configuration.

use serde::{Deserialize, Serialize};

/// Number of documents returned per query when the configuration omits it.
pub const DEFAULT_TOP_K: usize = 3;

/// Static configuration for the retrieval client.
///
/// Resolved once at construction; later changes require a new client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetrievalConfig {
    /// Name of the Astra collection holding the documents.
    pub collection_name: String,

    /// Maximum documents to retrieve per query. Defaults to
    /// [`DEFAULT_TOP_K`] when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_k: Option<usize>,
}

impl RetrievalConfig {
    /// Creates a configuration for the given collection with default limits.
    pub fn new(collection_name: impl Into<String>) -> Self {
        Self {
            collection_name: collection_name.into(),
            top_k: None,
        }
    }

    /// Sets the per-query result limit.
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = Some(top_k);
        self
    }

    /// The effective per-query result limit.
    pub fn top_k(&self) -> usize {
        self.top_k.unwrap_or(DEFAULT_TOP_K)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_k_defaults_to_three() {
        let config = RetrievalConfig::new("product_data");
        assert_eq!(config.top_k(), 3);
    }

    #[test]
    fn top_k_override_is_honored() {
        let config = RetrievalConfig::new("product_data").with_top_k(7);
        assert_eq!(config.top_k(), 7);
    }
}
