//! Retrieval client over the Astra vector store.
//!
//! The client validates credentials up front, then lazily constructs the
//! vector-store handle and the retriever on first query and caches both for
//! the lifetime of the instance.

mod config;
mod document;
mod loader;
mod store;

use std::sync::Arc;

pub use self::config::{DEFAULT_TOP_K, RetrievalConfig};
pub use self::document::RetrievedDocument;
pub use self::loader::{AstraStoreLoader, StoreLoader};
pub use self::store::{AstraDocumentStore, DocumentStore};
use crate::TRACING_TARGET_RETRIEVAL;
use crate::provider::Credentials;
use crate::{Error, Result};

/// A query-configured view over a document store.
///
/// Derived from the store with a fixed result-count limit; cheap to use
/// repeatedly.
pub struct Retriever {
    store: Arc<dyn DocumentStore>,
    top_k: usize,
}

impl Retriever {
    /// Creates a retriever over the given store.
    pub fn new(store: Arc<dyn DocumentStore>, top_k: usize) -> Self {
        Self { store, top_k }
    }

    /// The per-query result limit.
    pub fn top_k(&self) -> usize {
        self.top_k
    }

    /// Returns up to `top_k` documents most similar to `query`, most relevant
    /// first. An empty result is a valid outcome, not an error.
    pub async fn invoke(&self, query: &str) -> Result<Vec<RetrievedDocument>> {
        self.store.similarity_search(query, self.top_k).await
    }
}

impl std::fmt::Debug for Retriever {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Retriever").field("top_k", &self.top_k).finish()
    }
}

/// Retrieval client for the product-catalog vector store.
///
/// Construction validates credentials and configuration without touching the
/// network; the store and retriever handles are created on the first call to
/// [`query`](Self::query) and reused afterwards. The cached handles are plain
/// instance state: the client is not meant for concurrent use, callers
/// needing concurrency create one instance per task.
pub struct Retrieval {
    credentials: Credentials,
    config: RetrievalConfig,
    loader: Box<dyn StoreLoader>,
    store: Option<Arc<dyn DocumentStore>>,
    retriever: Option<Retriever>,
}

impl Retrieval {
    /// Creates a client from credentials in the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] listing every missing environment variable.
    pub fn from_env(config: RetrievalConfig) -> Result<Self> {
        let credentials = Credentials::from_env()?;
        Ok(Self::new(credentials, config))
    }

    /// Creates a client with the production Astra store loader.
    pub fn new(credentials: Credentials, config: RetrievalConfig) -> Self {
        Self::with_loader(credentials, config, Box::new(AstraStoreLoader::default()))
    }

    /// Creates a client with a custom store loader.
    pub fn with_loader(
        credentials: Credentials,
        config: RetrievalConfig,
        loader: Box<dyn StoreLoader>,
    ) -> Self {
        Self {
            credentials,
            config,
            loader,
            store: None,
            retriever: None,
        }
    }

    /// The static configuration this client was created with.
    pub fn config(&self) -> &RetrievalConfig {
        &self.config
    }

    /// Returns up to `top_k` documents most similar to `query`.
    ///
    /// The first call constructs the vector-store and retriever handles;
    /// subsequent calls reuse them. Service failures propagate to the caller
    /// unmodified; no retry is attempted.
    pub async fn query(&mut self, query: &str) -> Result<Vec<RetrievedDocument>> {
        let retriever = self.ensure_retriever().await?;
        retriever.invoke(query).await
    }

    /// Constructs the vector-store handle on first use; no-op afterwards.
    async fn ensure_store(&mut self) -> Result<Arc<dyn DocumentStore>> {
        if let Some(store) = &self.store {
            return Ok(Arc::clone(store));
        }

        tracing::info!(
            target: TRACING_TARGET_RETRIEVAL,
            collection = %self.config.collection_name,
            "Loading vector store"
        );

        let store = self.loader.load(&self.credentials, &self.config).await?;
        self.store = Some(Arc::clone(&store));
        Ok(store)
    }

    /// Derives the retriever on first use and returns the cached one afterwards.
    async fn ensure_retriever(&mut self) -> Result<&Retriever> {
        if self.retriever.is_none() {
            let store = self.ensure_store().await?;
            let top_k = self.config.top_k();

            tracing::debug!(
                target: TRACING_TARGET_RETRIEVAL,
                top_k = %top_k,
                "Retriever loaded"
            );

            self.retriever = Some(Retriever::new(store, top_k));
        }

        self.retriever
            .as_ref()
            .ok_or_else(|| Error::retrieval("retriever not initialized"))
    }
}

impl std::fmt::Debug for Retrieval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Retrieval")
            .field("collection", &self.config.collection_name)
            .field("top_k", &self.config.top_k())
            .field("store_loaded", &self.store.is_some())
            .field("retriever_loaded", &self.retriever.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;

    const EXAMPLE_QUERY: &str = "What are the top features of the latest smartphone models?";

    fn test_credentials() -> Credentials {
        Credentials::new(
            "google-key",
            "https://example.apps.astra.datastax.com",
            "AstraCS:test",
            "default_keyspace",
        )
    }

    /// Stub store recording each call and its limit.
    struct StubStore {
        documents: Vec<RetrievedDocument>,
        fail: bool,
        calls: Arc<AtomicUsize>,
        last_limit: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl DocumentStore for StubStore {
        async fn similarity_search(
            &self,
            _query: &str,
            limit: usize,
        ) -> Result<Vec<RetrievedDocument>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.last_limit.store(limit, Ordering::SeqCst);
            if self.fail {
                return Err(Error::retrieval("connection refused"));
            }
            Ok(self.documents.clone())
        }
    }

    /// Stub loader counting store constructions.
    struct StubLoader {
        documents: Vec<RetrievedDocument>,
        fail_search: bool,
        loads: Arc<AtomicUsize>,
        search_calls: Arc<AtomicUsize>,
        last_limit: Arc<AtomicUsize>,
    }

    impl StubLoader {
        fn new(documents: Vec<RetrievedDocument>) -> Self {
            Self {
                documents,
                fail_search: false,
                loads: Arc::new(AtomicUsize::new(0)),
                search_calls: Arc::new(AtomicUsize::new(0)),
                last_limit: Arc::new(AtomicUsize::new(0)),
            }
        }

        fn failing() -> Self {
            Self {
                fail_search: true,
                ..Self::new(Vec::new())
            }
        }
    }

    #[async_trait]
    impl StoreLoader for StubLoader {
        async fn load(
            &self,
            _credentials: &Credentials,
            _config: &RetrievalConfig,
        ) -> Result<Arc<dyn DocumentStore>> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            Ok(Arc::new(StubStore {
                documents: self.documents.clone(),
                fail: self.fail_search,
                calls: Arc::clone(&self.search_calls),
                last_limit: Arc::clone(&self.last_limit),
            }))
        }
    }

    fn two_documents() -> Vec<RetrievedDocument> {
        vec![
            RetrievedDocument::new("The X200 Pro has a 6.8\" display and a 200 MP camera.")
                .with_metadata([("product_id", serde_json::json!("P1"))]),
            RetrievedDocument::new("The Z Fold introduces a folding display and stylus support.")
                .with_metadata([("product_id", serde_json::json!("P2"))]),
        ]
    }

    fn client_with(loader: StubLoader, config: RetrievalConfig) -> (Retrieval, Arc<AtomicUsize>, Arc<AtomicUsize>, Arc<AtomicUsize>) {
        let loads = Arc::clone(&loader.loads);
        let calls = Arc::clone(&loader.search_calls);
        let limit = Arc::clone(&loader.last_limit);
        let client = Retrieval::with_loader(test_credentials(), config, Box::new(loader));
        (client, loads, calls, limit)
    }

    #[test]
    fn construction_loads_no_handles() {
        let (client, loads, _, _) = client_with(
            StubLoader::new(two_documents()),
            RetrievalConfig::new("product_data"),
        );
        assert_eq!(loads.load(Ordering::SeqCst), 0);
        assert!(client.store.is_none());
        assert!(client.retriever.is_none());
    }

    #[tokio::test]
    async fn repeated_queries_construct_store_once() {
        let (mut client, loads, calls, _) = client_with(
            StubLoader::new(two_documents()),
            RetrievalConfig::new("product_data"),
        );

        client.query(EXAMPLE_QUERY).await.unwrap();
        client.query(EXAMPLE_QUERY).await.unwrap();

        assert_eq!(loads.load(Ordering::SeqCst), 1);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn default_top_k_is_three() {
        let (mut client, _, _, limit) = client_with(
            StubLoader::new(two_documents()),
            RetrievalConfig::new("product_data"),
        );

        client.query(EXAMPLE_QUERY).await.unwrap();
        assert_eq!(limit.load(Ordering::SeqCst), DEFAULT_TOP_K);
    }

    #[tokio::test]
    async fn configured_top_k_is_passed_through() {
        let (mut client, _, _, limit) = client_with(
            StubLoader::new(two_documents()),
            RetrievalConfig::new("product_data").with_top_k(7),
        );

        client.query(EXAMPLE_QUERY).await.unwrap();
        assert_eq!(limit.load(Ordering::SeqCst), 7);
    }

    #[tokio::test]
    async fn returns_documents_unchanged_and_in_order() {
        let expected = two_documents();
        let (mut client, _, _, _) = client_with(
            StubLoader::new(expected.clone()),
            RetrievalConfig::new("product_data"),
        );

        let results = client.query(EXAMPLE_QUERY).await.unwrap();
        assert_eq!(results, expected);
    }

    #[tokio::test]
    async fn zero_matches_is_not_an_error() {
        let (mut client, _, _, _) = client_with(
            StubLoader::new(Vec::new()),
            RetrievalConfig::new("product_data"),
        );

        let results = client.query(EXAMPLE_QUERY).await.unwrap();
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn store_failure_propagates_without_retry() {
        let (mut client, _, calls, _) = client_with(
            StubLoader::failing(),
            RetrievalConfig::new("product_data"),
        );

        let error = client.query(EXAMPLE_QUERY).await.unwrap_err();
        assert!(matches!(error, Error::Retrieval(_)));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn first_query_populates_both_handles() {
        let (mut client, loads, _, _) = client_with(
            StubLoader::new(two_documents()),
            RetrievalConfig::new("product_data"),
        );

        client.query(EXAMPLE_QUERY).await.unwrap();
        assert!(client.store.is_some());
        assert!(client.retriever.is_some());

        // A later query finds both handles in place and loads nothing new.
        client.query(EXAMPLE_QUERY).await.unwrap();
        assert_eq!(loads.load(Ordering::SeqCst), 1);
    }
}
