//! Export command implementation
//!
//! Writes the JSON export document — the same report the analyze
//! command renders, always pretty-printed JSON, always to a file.

use crate::catalog::{load_catalog, load_history, load_state};
use crate::engine;
use crate::reporters::{self, OutputFormat};

use anyhow::{Context, Result};
use chrono::Utc;
use console::style;
use std::path::Path;

pub fn run(
    catalog_path: &Path,
    state_path: &Path,
    history_path: Option<&Path>,
    output: &Path,
) -> Result<()> {
    let catalog = load_catalog(catalog_path)
        .with_context(|| format!("loading catalog {}", catalog_path.display()))?;
    let state = load_state(state_path)
        .with_context(|| format!("loading assessment state {}", state_path.display()))?;
    let history = history_path
        .map(|p| load_history(p).with_context(|| format!("loading edit history {}", p.display())))
        .transpose()?;

    let report = engine::analyze(&state, &catalog, history.as_ref(), Utc::now());
    let json = reporters::report_with_format(&report, OutputFormat::Json)?;
    std::fs::write(output, &json)
        .with_context(|| format!("writing export to {}", output.display()))?;

    println!(
        "{} {} ({} gaps, score {})",
        style("Exported").green().bold(),
        output.display(),
        report.gaps.len(),
        report.compliance_score.score
    );
    Ok(())
}
