#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

/// Tracing target for Astra client operations.
///
/// Use this target for logging client initialization, configuration, and client-level errors.
pub const TRACING_TARGET_CLIENT: &str = "prodassist_astra::client";

/// Tracing target for Astra find/search operations.
///
/// Use this target for logging similarity queries and search-related errors.
pub const TRACING_TARGET_SEARCH: &str = "prodassist_astra::search";

mod client;
mod error;
pub mod types;

pub use client::{AstraClient, AstraConfig};
pub use error::{AstraError, AstraResult};
pub use types::AstraDocument;
