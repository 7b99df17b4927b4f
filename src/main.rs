//! gapscan - NIST 800-171 / CMMC gap analysis CLI
//!
//! A local-first compliance tool: control catalogs and assessment data
//! stay on your machine; analysis is a deterministic single pass.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    // Parse CLI args and run
    let cli = gapscan::cli::Cli::parse();
    gapscan::cli::run(cli)
}
