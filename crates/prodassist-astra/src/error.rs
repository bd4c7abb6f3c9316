//! Astra client error types.

use thiserror::Error;

/// Result type for Astra client operations.
pub type AstraResult<T> = Result<T, AstraError>;

/// Astra client errors.
#[derive(Debug, Error)]
pub enum AstraError {
    /// Invalid configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Connection error.
    #[error("connection error: {0}")]
    Connection(String),

    /// Authentication error.
    #[error("authentication error: {0}")]
    Authentication(String),

    /// Error reported by the Data API itself.
    #[error("api error: {0}")]
    Api(String),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl AstraError {
    /// Creates an invalid config error.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Creates a connection error.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::Connection(msg.into())
    }

    /// Creates an authentication error.
    pub fn authentication(msg: impl Into<String>) -> Self {
        Self::Authentication(msg.into())
    }

    /// Creates an API error.
    pub fn api(msg: impl Into<String>) -> Self {
        Self::Api(msg.into())
    }

    /// Creates a serialization error.
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }
}

impl From<reqwest::Error> for AstraError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::serialization(err.to_string())
        } else {
            Self::connection(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AstraError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}
