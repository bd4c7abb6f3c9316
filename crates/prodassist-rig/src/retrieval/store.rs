//! Document store trait and the Astra-backed implementation.

use async_trait::async_trait;
use prodassist_astra::AstraClient;

use super::document::RetrievedDocument;
use crate::TRACING_TARGET_RETRIEVAL;
use crate::provider::EmbeddingProvider;
use crate::{Error, Result};

/// A vector store bound to one collection and one embedding function.
///
/// Implementations embed the query text themselves and return documents in
/// the service's relevance order.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Returns up to `limit` documents most similar to `query`.
    async fn similarity_search(&self, query: &str, limit: usize)
    -> Result<Vec<RetrievedDocument>>;
}

/// Astra-backed document store.
///
/// Owns the embedding provider and the Data API client; each query is one
/// embedding call followed by one `find`.
pub struct AstraDocumentStore {
    embedding: EmbeddingProvider,
    client: AstraClient,
    collection: String,
}

impl AstraDocumentStore {
    /// Creates a store over one collection.
    pub fn new(
        embedding: EmbeddingProvider,
        client: AstraClient,
        collection: impl Into<String>,
    ) -> Self {
        Self {
            embedding,
            client,
            collection: collection.into(),
        }
    }

    /// Returns the collection name this store queries.
    pub fn collection(&self) -> &str {
        &self.collection
    }
}

#[async_trait]
impl DocumentStore for AstraDocumentStore {
    async fn similarity_search(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<RetrievedDocument>> {
        let embedding = self
            .embedding
            .embed_text(query)
            .await
            .map_err(|e| Error::embedding(format!("failed to embed query: {e}")))?;

        let vector: Vec<f32> = embedding.vec.iter().map(|&x| x as f32).collect();

        tracing::debug!(
            target: TRACING_TARGET_RETRIEVAL,
            collection = %self.collection,
            dimensions = vector.len(),
            limit = %limit,
            "Searching collection"
        );

        let documents = self
            .client
            .find_similar(&self.collection, vector, limit)
            .await
            .map_err(|e| Error::retrieval(format!("vector search failed: {e}")))?;

        Ok(documents.into_iter().map(RetrievedDocument::from).collect())
    }
}

impl std::fmt::Debug for AstraDocumentStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AstraDocumentStore")
            .field("collection", &self.collection)
            .field("embedding", &self.embedding)
            .finish()
    }
}
