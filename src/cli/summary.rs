//! Summary command implementation
//!
//! Quick status view: objective counters, compliance score, and
//! readiness level, without the full gap listing.

use crate::catalog::{load_catalog, load_state};
use crate::engine;

use anyhow::{Context, Result};
use chrono::Utc;
use console::style;
use std::path::Path;

pub fn run(catalog_path: &Path, state_path: &Path) -> Result<()> {
    let catalog = load_catalog(catalog_path)
        .with_context(|| format!("loading catalog {}", catalog_path.display()))?;
    let state = load_state(state_path)
        .with_context(|| format!("loading assessment state {}", state_path.display()))?;

    let report = engine::analyze(&state, &catalog, None, Utc::now());
    let s = &report.summary;

    println!("\n{}", style("Assessment Summary").bold());
    println!("{}", style("──────────────────────────────────────").dim());
    println!(
        "Score: {}  Grade: {}  Readiness: {}",
        style(format!("{}/100", report.compliance_score.score)).bold(),
        style(&report.compliance_score.grade).bold(),
        s.readiness_level
    );
    println!(
        "Objectives: {} total — {} met, {} partial, {} not met, {} not assessed",
        s.total_objectives,
        style(s.met).green(),
        style(s.partial).yellow(),
        style(s.not_met).red(),
        style(s.not_assessed).dim()
    );
    println!(
        "Gaps: {} ({} risk, raw weight {})",
        report.gaps.len(),
        report.risk_score.level,
        report.risk_score.raw_weight
    );
    Ok(())
}
