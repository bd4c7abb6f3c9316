//! Embedding model configuration and provider.

mod model;
mod provider;

pub use model::GeminiEmbeddingModel;
pub use provider::EmbeddingProvider;
