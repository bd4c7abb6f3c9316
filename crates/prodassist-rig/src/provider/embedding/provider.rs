//! Embedding provider abstraction.

use std::sync::Arc;

use rig::embeddings::{Embedding, EmbeddingModel as RigEmbeddingModel};
use rig::prelude::EmbeddingsClient;
use rig::providers::gemini;

use super::model::GeminiEmbeddingModel;
use crate::{Error, Result};

/// Embedding provider wrapping the rig Gemini embedding model.
///
/// This is a cheaply cloneable wrapper around an `Arc<EmbeddingService>`.
#[derive(Clone)]
pub struct EmbeddingProvider(Arc<EmbeddingService>);

struct EmbeddingService {
    model: gemini::embedding::EmbeddingModel,
    model_name: String,
}

impl EmbeddingProvider {
    /// Connects to Gemini with the given API key and model.
    ///
    /// Construction configures the client only; no request is sent until the
    /// first embedding call.
    pub fn connect(api_key: &str, model: GeminiEmbeddingModel) -> Result<Self> {
        let client = gemini::Client::new(api_key)
            .map_err(|e| Error::provider("gemini", e.to_string()))?;

        let inner = EmbeddingService {
            model: client.embedding_model_with_ndims(model.as_ref(), model.dimensions()),
            model_name: model.as_str().to_string(),
        };
        Ok(Self(Arc::new(inner)))
    }

    /// Returns the model name.
    pub fn model_name(&self) -> &str {
        &self.0.model_name
    }

    /// Returns the provider name.
    pub fn provider_name(&self) -> &'static str {
        "gemini"
    }

    /// Embed a single text document.
    pub async fn embed_text(&self, text: &str) -> Result<Embedding> {
        self.0
            .model
            .embed_text(text)
            .await
            .map_err(|e| Error::provider(self.provider_name(), e.to_string()))
    }
}

impl std::fmt::Debug for EmbeddingProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmbeddingProvider::Gemini")
            .field("model", &self.0.model_name)
            .field("ndims", &self.0.model.ndims())
            .finish()
    }
}
