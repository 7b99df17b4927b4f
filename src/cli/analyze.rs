//! Analyze command implementation
//!
//! This command runs a full assessment analysis:
//! 1. Load project config (gapscan.toml) if present
//! 2. Load and validate the catalog, state, and optional history
//! 3. Run the gap analysis engine
//! 4. Render the report (text, json, markdown)
//! 5. Apply the --fail-on CI gate

use crate::catalog::{load_catalog, load_history, load_state};
use crate::config::load_project_config;
use crate::engine;
use crate::models::Severity;
use crate::reporters;

use anyhow::{Context, Result};
use chrono::Utc;
use std::path::{Path, PathBuf};
use tracing::info;

pub struct AnalyzeArgs {
    pub catalog: PathBuf,
    pub state: PathBuf,
    pub history: Option<PathBuf>,
    pub format: Option<String>,
    pub output: Option<PathBuf>,
    pub fail_on: Option<String>,
    pub trend_window: Option<i64>,
}

pub fn run(args: AnalyzeArgs) -> Result<()> {
    let config = load_project_config(Path::new("."))?;

    let catalog = load_catalog(&args.catalog)
        .with_context(|| format!("loading catalog {}", args.catalog.display()))?;
    let state = load_state(&args.state)
        .with_context(|| format!("loading assessment state {}", args.state.display()))?;
    let history = args
        .history
        .as_deref()
        .map(|p| load_history(p).with_context(|| format!("loading edit history {}", p.display())))
        .transpose()?;

    let window = args.trend_window.unwrap_or(config.analysis.trend_window_days);
    let report =
        engine::analyze_with_window(&state, &catalog, history.as_ref(), Utc::now(), window);

    let format = args.format.unwrap_or(config.output.format);
    let rendered = reporters::report(&report, &format)?;
    match &args.output {
        Some(path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("writing report to {}", path.display()))?;
            info!(path = %path.display(), "report written");
        }
        None => println!("{rendered}"),
    }

    // CI gate: flag wins over config
    let threshold = args.fail_on.or(config.gate.fail_on);
    if let Some(threshold) = threshold {
        let threshold: Severity = threshold
            .parse()
            .map_err(|e: String| anyhow::anyhow!(e))
            .context("invalid --fail-on value")?;
        // Severity orders most severe first, so "at or above" is <=.
        if report.gaps.iter().any(|g| g.severity <= threshold) {
            info!(%threshold, "gaps at or above threshold, failing");
            std::process::exit(1);
        }
    }

    Ok(())
}
