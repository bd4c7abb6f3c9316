//! Credentials for the external embedding and vector-store services.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Gemini API key used for embedding computation.
pub const ENV_GOOGLE_API_KEY: &str = "GOOGLE_API_KEY";
/// Astra database API endpoint URL.
pub const ENV_ASTRA_DB_API_ENDPOINT: &str = "ASTRA_DB_API_ENDPOINT";
/// Astra application token.
pub const ENV_ASTRA_DB_APPLICATION_TOKEN: &str = "ASTRA_DB_APPLICATION_TOKEN";
/// Astra keyspace holding the collections.
pub const ENV_ASTRA_DB_KEYSPACE: &str = "ASTRA_DB_KEYSPACE";

const REQUIRED_VARS: [&str; 4] = [
    ENV_GOOGLE_API_KEY,
    ENV_ASTRA_DB_API_ENDPOINT,
    ENV_ASTRA_DB_APPLICATION_TOKEN,
    ENV_ASTRA_DB_KEYSPACE,
];

/// Validated credentials for the embedding provider and the Astra database.
///
/// Loaded once at client construction; environment changes afterwards are not
/// observed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    /// Gemini API key.
    pub google_api_key: String,
    /// Astra Data API endpoint URL.
    pub astra_endpoint: String,
    /// Astra application token.
    pub astra_token: String,
    /// Astra keyspace.
    pub astra_keyspace: String,
}

impl Credentials {
    /// Creates credentials from explicit values.
    pub fn new(
        google_api_key: impl Into<String>,
        astra_endpoint: impl Into<String>,
        astra_token: impl Into<String>,
        astra_keyspace: impl Into<String>,
    ) -> Self {
        Self {
            google_api_key: google_api_key.into(),
            astra_endpoint: astra_endpoint.into(),
            astra_token: astra_token.into(),
            astra_keyspace: astra_keyspace.into(),
        }
    }

    /// Loads and validates the required credentials from the process environment.
    ///
    /// Validation is batched: the error lists every missing variable at once
    /// rather than failing on the first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] naming all missing variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads credentials through an arbitrary variable lookup.
    ///
    /// The lookup is consulted once per required name; `None` marks the
    /// variable as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let values: Vec<Option<String>> = REQUIRED_VARS.iter().map(|name| lookup(name)).collect();

        let missing: Vec<&str> = REQUIRED_VARS
            .iter()
            .zip(&values)
            .filter(|(_, value)| value.is_none())
            .map(|(name, _)| *name)
            .collect();

        if !missing.is_empty() {
            return Err(Error::missing_env(&missing));
        }

        let mut values = values.into_iter().flatten();
        Ok(Self {
            google_api_key: values.next().unwrap_or_default(),
            astra_endpoint: values.next().unwrap_or_default(),
            astra_token: values.next().unwrap_or_default(),
            astra_keyspace: values.next().unwrap_or_default(),
        })
    }
}
