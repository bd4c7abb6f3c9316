#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod error;
pub mod provider;
pub mod retrieval;

pub use error::{Error, Result};
pub use retrieval::{Retrieval, RetrievalConfig, RetrievedDocument, Retriever};

/// Tracing target for the main library.
pub const TRACING_TARGET: &str = "prodassist_rig";

/// Tracing target for retrieval operations.
pub const TRACING_TARGET_RETRIEVAL: &str = "prodassist_rig::retrieval";
