//! Store construction seam.

use std::sync::Arc;

use async_trait::async_trait;
use prodassist_astra::{AstraClient, AstraConfig};

use super::config::RetrievalConfig;
use super::store::{AstraDocumentStore, DocumentStore};
use crate::TRACING_TARGET_RETRIEVAL;
use crate::provider::{Credentials, EmbeddingProvider, GeminiEmbeddingModel};
use crate::{Error, Result};

/// Builds the document store from validated credentials and configuration.
///
/// This is the seam between the retrieval client and the external services:
/// production uses [`AstraStoreLoader`]; tests substitute counting stubs.
#[async_trait]
pub trait StoreLoader: Send + Sync {
    /// Constructs a ready-to-query store bound to the configured collection.
    async fn load(
        &self,
        credentials: &Credentials,
        config: &RetrievalConfig,
    ) -> Result<Arc<dyn DocumentStore>>;
}

/// Production loader: Gemini embeddings over an Astra Data API collection.
#[derive(Debug, Clone, Default)]
pub struct AstraStoreLoader {
    model: GeminiEmbeddingModel,
}

impl AstraStoreLoader {
    /// Creates a loader using the given embedding model.
    pub fn new(model: GeminiEmbeddingModel) -> Self {
        Self { model }
    }
}

#[async_trait]
impl StoreLoader for AstraStoreLoader {
    async fn load(
        &self,
        credentials: &Credentials,
        config: &RetrievalConfig,
    ) -> Result<Arc<dyn DocumentStore>> {
        let embedding = EmbeddingProvider::connect(&credentials.google_api_key, self.model.clone())?;

        let astra_config = AstraConfig::new(
            &credentials.astra_endpoint,
            &credentials.astra_token,
            &credentials.astra_keyspace,
        )
        .map_err(Error::config)?;

        let client = AstraClient::new(astra_config).map_err(Error::config)?;

        tracing::info!(
            target: TRACING_TARGET_RETRIEVAL,
            collection = %config.collection_name,
            model = %self.model.as_str(),
            "Vector store loaded"
        );

        Ok(Arc::new(AstraDocumentStore::new(
            embedding,
            client,
            config.collection_name.clone(),
        )))
    }
}
