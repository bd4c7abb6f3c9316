//! External provider handles: embedding model and credentials.

mod credentials;
pub mod embedding;

pub use credentials::{
    Credentials, ENV_ASTRA_DB_API_ENDPOINT, ENV_ASTRA_DB_APPLICATION_TOKEN, ENV_ASTRA_DB_KEYSPACE,
    ENV_GOOGLE_API_KEY,
};
pub use embedding::{EmbeddingProvider, GeminiEmbeddingModel};
