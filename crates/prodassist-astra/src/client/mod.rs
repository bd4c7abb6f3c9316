//! Astra Data API client and its configuration.

mod astra_client;
mod astra_config;

pub use astra_client::AstraClient;
pub use astra_config::AstraConfig;
