//! Type-safe embedding model references.

use serde::{Deserialize, Serialize};

/// Google Gemini embedding models.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GeminiEmbeddingModel {
    /// text-embedding-004 (768 dimensions)
    #[default]
    TextEmbedding004,
}

impl GeminiEmbeddingModel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TextEmbedding004 => "text-embedding-004",
        }
    }

    pub fn dimensions(&self) -> usize {
        768
    }
}

impl AsRef<str> for GeminiEmbeddingModel {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
