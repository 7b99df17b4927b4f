//! JSON reporter
//!
//! Outputs the full AnalysisReport as pretty-printed JSON. This is the
//! export document the assessment tooling downloads and re-imports, so
//! the field names (`generatedAt`, `complianceScore`, ...) are part of
//! the contract.

use crate::models::AnalysisReport;
use anyhow::Result;

/// Render report as JSON
pub fn render(report: &AnalysisReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Render report as compact JSON (single line)
pub fn render_compact(report: &AnalysisReport) -> Result<String> {
    Ok(serde_json::to_string(report)?)
}
