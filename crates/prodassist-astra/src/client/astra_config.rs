//! Astra client configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{AstraError, AstraResult};

/// Configuration for Astra Data API connections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AstraConfig {
    /// Database API endpoint (e.g., "https://<db-id>-<region>.apps.astra.datastax.com")
    pub endpoint: String,

    /// Application token used for authentication
    pub token: String,

    /// Keyspace (namespace) holding the collections
    pub keyspace: String,

    /// Request timeout
    pub timeout: Duration,

    /// User agent string
    pub user_agent: Option<String>,
}

impl AstraConfig {
    /// Create a new Astra configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint, token, or keyspace is invalid.
    pub fn new(
        endpoint: impl Into<String>,
        token: impl Into<String>,
        keyspace: impl Into<String>,
    ) -> AstraResult<Self> {
        let config = Self {
            endpoint: endpoint.into(),
            token: token.into(),
            keyspace: keyspace.into(),
            timeout: Duration::from_secs(30),
            user_agent: Some(format!(
                "prodassist-astra/{} ({})",
                env!("CARGO_PKG_VERSION"),
                std::env::consts::OS
            )),
        };
        config.validate()?;
        Ok(config)
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set a custom user agent string.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> AstraResult<()> {
        if self.endpoint.is_empty() {
            return Err(AstraError::invalid_config("endpoint cannot be empty"));
        }

        if !self.endpoint.starts_with("http://") && !self.endpoint.starts_with("https://") {
            return Err(AstraError::invalid_config(
                "endpoint must start with http:// or https://",
            ));
        }

        if self.token.is_empty() {
            return Err(AstraError::invalid_config("token cannot be empty"));
        }

        if self.keyspace.is_empty() {
            return Err(AstraError::invalid_config("keyspace cannot be empty"));
        }

        if self.timeout.is_zero() {
            return Err(AstraError::invalid_config(
                "request timeout must be greater than zero",
            ));
        }

        Ok(())
    }

    /// URL of the Data API endpoint for one collection in the keyspace.
    pub(crate) fn collection_url(&self, collection: &str) -> String {
        let endpoint = self.endpoint.trim_end_matches('/');
        format!("{endpoint}/api/json/v1/{}/{collection}", self.keyspace)
    }
}
