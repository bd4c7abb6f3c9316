//! High-level Astra Data API client.

use std::sync::Arc;

use reqwest::StatusCode;
use reqwest::header::{HeaderMap, HeaderValue};

use crate::client::AstraConfig;
use crate::error::{AstraError, AstraResult};
use crate::types::{ApiResponse, AstraDocument, FindRequest};
use crate::{TRACING_TARGET_CLIENT, TRACING_TARGET_SEARCH};

/// Authentication header used by the Data API.
const TOKEN_HEADER: &str = "Token";

/// High-level Astra Data API client.
///
/// Bound to one endpoint and one keyspace; collections are addressed per call.
/// Cheaply cloneable.
///
/// # Examples
///
/// ```rust,no_run
/// use prodassist_astra::{AstraClient, AstraConfig};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = AstraConfig::new(
///         "https://db-id-region.apps.astra.datastax.com",
///         "AstraCS:your-token",
///         "default_keyspace",
///     )?;
///     let client = AstraClient::new(config)?;
///
///     let documents = client
///         .find_similar("product_data", vec![0.1; 768], 3)
///         .await?;
///     println!("{} matches", documents.len());
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct AstraClient {
    inner: Arc<AstraClientInner>,
}

struct AstraClientInner {
    /// The underlying HTTP client
    http: reqwest::Client,

    /// Configuration used to create this client
    config: AstraConfig,
}

impl AstraClient {
    /// Create a new Astra client with the given configuration.
    ///
    /// Construction only builds the HTTP client; no request is sent until the
    /// first operation.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be built.
    pub fn new(config: AstraConfig) -> AstraResult<Self> {
        config.validate()?;

        tracing::info!(
            target: TRACING_TARGET_CLIENT,
            endpoint = %config.endpoint,
            keyspace = %config.keyspace,
            "Creating new Astra client"
        );

        let mut headers = HeaderMap::new();
        let token = HeaderValue::from_str(&config.token)
            .map_err(|_| AstraError::invalid_config("token contains invalid header characters"))?;
        headers.insert(TOKEN_HEADER, token);

        let mut builder = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout);

        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent.clone());
        }

        let http = builder.build().map_err(|e| {
            tracing::error!(
                target: TRACING_TARGET_CLIENT,
                error = %e,
                "Failed to build HTTP client"
            );
            AstraError::connection(e.to_string())
        })?;

        let inner = Arc::new(AstraClientInner { http, config });

        Ok(Self { inner })
    }

    /// Get the client configuration.
    pub fn config(&self) -> &AstraConfig {
        &self.inner.config
    }

    /// Run a vector similarity `find` against a collection.
    ///
    /// Returns up to `limit` documents ordered by the service's relevance
    /// ranking, most similar first. An empty result is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error on connection failure, authentication rejection, or
    /// any error reported by the Data API.
    pub async fn find_similar(
        &self,
        collection: &str,
        vector: Vec<f32>,
        limit: usize,
    ) -> AstraResult<Vec<AstraDocument>> {
        tracing::debug!(
            target: TRACING_TARGET_SEARCH,
            collection = %collection,
            dimensions = vector.len(),
            limit = %limit,
            "Running similarity find"
        );

        let url = self.inner.config.collection_url(collection);
        let request = FindRequest::similarity(vector, limit);

        let response = self.inner.http.post(&url).json(&request).send().await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            tracing::error!(
                target: TRACING_TARGET_SEARCH,
                collection = %collection,
                status = %status,
                "Astra rejected the application token"
            );
            return Err(AstraError::authentication(format!(
                "token rejected with status {status}"
            )));
        }
        if !status.is_success() {
            return Err(AstraError::api(format!(
                "unexpected status {status} from Data API"
            )));
        }

        let body: ApiResponse = response.json().await?;

        if let Some(errors) = body.errors.filter(|errors| !errors.is_empty()) {
            let joined = errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ");
            tracing::error!(
                target: TRACING_TARGET_SEARCH,
                collection = %collection,
                errors = %joined,
                "Data API reported errors"
            );
            return Err(AstraError::api(joined));
        }

        let documents = body.data.unwrap_or_default().documents;

        tracing::debug!(
            target: TRACING_TARGET_SEARCH,
            collection = %collection,
            matches = documents.len(),
            "Similarity find completed"
        );

        Ok(documents)
    }
}

impl std::fmt::Debug for AstraClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AstraClient")
            .field("endpoint", &self.inner.config.endpoint)
            .field("keyspace", &self.inner.config.keyspace)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_config() -> AstraConfig {
        AstraConfig::new(
            "https://0000-us-east-2.apps.astra.datastax.com",
            "AstraCS:test-token",
            "default_keyspace",
        )
        .unwrap()
    }

    #[test]
    fn test_client_creation() {
        let client = AstraClient::new(create_test_config()).unwrap();
        assert_eq!(client.config().keyspace, "default_keyspace");
    }

    #[test]
    fn test_client_rejects_invalid_token_header() {
        let config = AstraConfig::new("https://example.com", "bad\ntoken", "ks").unwrap();
        assert!(matches!(
            AstraClient::new(config),
            Err(AstraError::InvalidConfig(_))
        ));
    }
}
