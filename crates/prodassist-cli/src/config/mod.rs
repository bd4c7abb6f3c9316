//! CLI configuration management.
//!
//! Retrieval settings (collection, result limit, query text) come from CLI
//! arguments or environment variables; the service credentials are loaded
//! separately from the environment as a one-shot validated read.

use clap::Parser;
use prodassist_rig::RetrievalConfig;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::TRACING_TARGET_CONFIG;

/// Query issued when none is given on the command line.
pub const DEFAULT_QUERY: &str = "What are the top features of the latest smartphone models?";

/// Complete CLI configuration.
#[derive(Debug, Clone, Parser)]
#[command(name = "prodassist")]
#[command(about = "Product-catalog retrieval assistant")]
#[command(version)]
pub struct Cli {
    /// Astra collection holding the product documents.
    #[arg(
        long = "collection-name",
        env = "ASTRA_DB_COLLECTION",
        default_value = "product_data"
    )]
    pub collection_name: String,

    /// Number of documents to retrieve per query (defaults to 3).
    #[arg(long = "top-k", env = "RETRIEVER_TOP_K")]
    pub top_k: Option<usize>,

    /// Free-text query to run against the collection.
    #[arg(default_value = DEFAULT_QUERY)]
    pub query: String,
}

impl Cli {
    /// Loads environment variables from a .env file and parses CLI arguments.
    ///
    /// The .env file is loaded before clap parses arguments so its values can
    /// serve as argument defaults.
    pub fn init() -> Self {
        if let Err(err) = dotenvy::dotenv()
            && !err.not_found()
        {
            eprintln!("Warning: failed to load .env file: {err}");
        }
        Self::parse()
    }

    /// Initializes tracing with environment-based filtering.
    pub fn init_tracing() {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    /// Builds the retrieval configuration from the parsed arguments.
    pub fn retrieval_config(&self) -> RetrievalConfig {
        let config = RetrievalConfig::new(self.collection_name.clone());
        match self.top_k {
            Some(top_k) => config.with_top_k(top_k),
            None => config,
        }
    }

    /// Logs configuration at startup (no sensitive information).
    pub fn log(&self) {
        tracing::info!(
            target: TRACING_TARGET_CONFIG,
            collection = %self.collection_name,
            top_k = ?self.top_k,
            "Retrieval configuration"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_example_run() {
        let cli = Cli::try_parse_from(["prodassist"]).unwrap();
        assert_eq!(cli.collection_name, "product_data");
        assert_eq!(cli.top_k, None);
        assert_eq!(cli.query, DEFAULT_QUERY);
    }

    #[test]
    fn arguments_override_defaults() {
        let cli = Cli::try_parse_from([
            "prodassist",
            "--collection-name",
            "reviews",
            "--top-k",
            "5",
            "which laptop has the best battery life?",
        ])
        .unwrap();

        assert_eq!(cli.collection_name, "reviews");
        assert_eq!(cli.retrieval_config().top_k(), 5);
        assert_eq!(cli.query, "which laptop has the best battery life?");
    }
}
