#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod config;

use std::process;

use anyhow::Context;
use prodassist_rig::{Retrieval, RetrievedDocument};

use crate::config::Cli;

// Tracing target constants
pub const TRACING_TARGET_STARTUP: &str = "prodassist_cli::startup";
pub const TRACING_TARGET_CONFIG: &str = "prodassist_cli::config";

#[tokio::main]
async fn main() {
    let Err(error) = run().await else {
        process::exit(0);
    };

    if tracing::enabled!(tracing::Level::ERROR) {
        tracing::error!(
            target: TRACING_TARGET_STARTUP,
            error = %error,
            "application terminated with error"
        );
    } else {
        eprintln!("Error: {error:#}");
    }

    process::exit(1);
}

/// Main application entry point.
async fn run() -> anyhow::Result<()> {
    let cli = Cli::init();

    Cli::init_tracing();
    log_startup_info();
    cli.log();

    let mut retrieval = Retrieval::from_env(cli.retrieval_config())
        .context("failed to initialize retrieval client")?;

    let results = retrieval
        .query(&cli.query)
        .await
        .context("retrieval query failed")?;

    print_results(&results)?;

    Ok(())
}

/// Prints each result's text and metadata, numbered from 1.
fn print_results(results: &[RetrievedDocument]) -> anyhow::Result<()> {
    for (idx, doc) in results.iter().enumerate() {
        let metadata = serde_json::to_string(&doc.metadata)?;
        println!("Result {}: {}", idx + 1, doc.text);
        println!("Metadata: {metadata}");
        println!();
    }
    Ok(())
}

/// Logs startup information.
fn log_startup_info() {
    tracing::info!(
        target: TRACING_TARGET_STARTUP,
        version = env!("CARGO_PKG_VERSION"),
        "starting prodassist retrieval client"
    );

    tracing::debug!(
        target: TRACING_TARGET_STARTUP,
        pid = process::id(),
        arch = std::env::consts::ARCH,
        os = std::env::consts::OS,
        "build information"
    );
}
