//! Dedenter - Main Entry Point
//!
//! An in-place indentation normalizer for source trees.

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dedenter::runner;
use dedenter::types::NormalizerConfig;

fn main() -> Result<()> {
    // Initialize tracing; diagnostics go to stderr so the report on stdout
    // stays clean.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "dedenter=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = NormalizerConfig::from_env();

    info!("Starting Dedenter v{}", env!("CARGO_PKG_VERSION"));
    info!(
        root = %config.root.display(),
        extension = %config.extension,
        "Configuration loaded"
    );

    runner::run(&config)?;

    Ok(())
}
