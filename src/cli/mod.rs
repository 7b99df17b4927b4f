//! CLI command definitions and handlers

mod analyze;
mod export;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Parse and validate a trend window (1-365 days)
fn parse_window(s: &str) -> Result<i64, String> {
    let n: i64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if n < 1 {
        Err("trend window must be at least 1 day".to_string())
    } else if n > 365 {
        Err("trend window cannot exceed 365 days".to_string())
    } else {
        Ok(n)
    }
}

/// gapscan - NIST 800-171 / CMMC gap analysis
///
/// 100% LOCAL - assessment data never leaves your machine.
#[derive(Parser, Debug)]
#[command(name = "gapscan")]
#[command(
    version,
    about = "NIST 800-171 / CMMC gap analysis — deterministic compliance scoring, severity-ranked gaps, and remediation planning",
    long_about = "gapscan reads a control catalog and an assessment-state snapshot and \
produces a severity-ranked remediation plan: compliance score, weighted risk \
score, gap list, recommendations, prioritized actions, and effort estimate.\n\n\
100% LOCAL — assessment data never leaves your machine.",
    after_help = "\
Examples:
  gapscan analyze catalog.json --state state.json          Analyze an assessment
  gapscan analyze catalog.json --state state.json \\
      --format json --output report.json                   Machine-readable report
  gapscan analyze catalog.json --state state.json \\
      --fail-on high                                       CI gate on high+ gaps
  gapscan export catalog.json --state state.json \\
      --output report.json                                 Write the JSON export document
  gapscan summary catalog.json --state state.json          Counters and score only"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a full gap analysis and render the report
    Analyze {
        /// Path to the control catalog JSON
        catalog: PathBuf,
        /// Path to the assessment-state JSON
        #[arg(long)]
        state: PathBuf,
        /// Optional edit-history JSON for trend analysis
        #[arg(long)]
        history: Option<PathBuf>,
        /// Output format: text, json, markdown
        #[arg(long)]
        format: Option<String>,
        /// Write the report to a file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
        /// Exit 1 when any gap at or above this severity exists
        #[arg(long)]
        fail_on: Option<String>,
        /// Trend window in days (default 30, or [analysis] in gapscan.toml)
        #[arg(long, value_parser = parse_window)]
        trend_window: Option<i64>,
    },
    /// Write the JSON export document
    Export {
        /// Path to the control catalog JSON
        catalog: PathBuf,
        /// Path to the assessment-state JSON
        #[arg(long)]
        state: PathBuf,
        /// Optional edit-history JSON for trend analysis
        #[arg(long)]
        history: Option<PathBuf>,
        /// Destination file
        #[arg(long)]
        output: PathBuf,
    },
    /// Show objective counters, score, and readiness only
    Summary {
        /// Path to the control catalog JSON
        catalog: PathBuf,
        /// Path to the assessment-state JSON
        #[arg(long)]
        state: PathBuf,
    },
}

/// Dispatch the parsed CLI to its handler
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Analyze {
            catalog,
            state,
            history,
            format,
            output,
            fail_on,
            trend_window,
        } => analyze::run(analyze::AnalyzeArgs {
            catalog,
            state,
            history,
            format,
            output,
            fail_on,
            trend_window,
        }),
        Commands::Export {
            catalog,
            state,
            history,
            output,
        } => export::run(&catalog, &state, history.as_deref(), &output),
        Commands::Summary { catalog, state } => summary::run(&catalog, &state),
    }
}
