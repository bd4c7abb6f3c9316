//! Error types for prodassist-rig.

use std::fmt;

/// Result type alias for retrieval operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during retrieval operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration error (missing environment variables, invalid settings).
    #[error("configuration error: {0}")]
    Config(String),

    /// Provider error (API call failed, rate limited, etc.)
    #[error("provider error: {provider}: {message}")]
    Provider { provider: String, message: String },

    /// Embedding error.
    #[error("embedding error: {0}")]
    Embedding(String),

    /// Retrieval error.
    #[error("retrieval error: {0}")]
    Retrieval(String),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Creates a configuration error.
    pub fn config(message: impl fmt::Display) -> Self {
        Self::Config(message.to_string())
    }

    /// Creates a configuration error listing every missing environment variable.
    pub fn missing_env(names: &[&str]) -> Self {
        Self::Config(format!("missing environment variables: {}", names.join(", ")))
    }

    /// Creates a provider error.
    pub fn provider(provider: impl fmt::Display, message: impl fmt::Display) -> Self {
        Self::Provider {
            provider: provider.to_string(),
            message: message.to_string(),
        }
    }

    /// Creates an embedding error.
    pub fn embedding(message: impl fmt::Display) -> Self {
        Self::Embedding(message.to_string())
    }

    /// Creates a retrieval error.
    pub fn retrieval(message: impl fmt::Display) -> Self {
        Self::Retrieval(message.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_env_lists_every_name() {
        let error = Error::missing_env(&["GOOGLE_API_KEY", "ASTRA_DB_KEYSPACE"]);
        assert_eq!(
            error.to_string(),
            "configuration error: missing environment variables: GOOGLE_API_KEY, ASTRA_DB_KEYSPACE"
        );
    }
}
