//! Markdown reporter for GitHub-flavored Markdown output
//!
//! Generates reports suitable for:
//! - Assessment readouts shared with stakeholders
//! - Pull request / ticket comments
//! - Documentation

use crate::models::{AnalysisReport, Severity};
use anyhow::Result;

/// Maximum gaps listed in the detailed table
const MAX_GAPS_LISTED: usize = 25;

/// Render report as GitHub-flavored Markdown
pub fn render(report: &AnalysisReport) -> Result<String> {
    let mut md = String::new();

    md.push_str(&render_header(report));
    md.push('\n');
    md.push_str(&render_summary(report));
    md.push('\n');
    md.push_str(&render_gaps(report));
    md.push('\n');
    md.push_str(&render_actions(report));
    md.push('\n');
    md.push_str(&render_recommendations(report));
    md.push('\n');
    md.push_str(&render_effort(report));

    Ok(md)
}

fn severity_badge(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical => "🔴 Critical",
        Severity::High => "🟠 High",
        Severity::Medium => "🟡 Medium",
        Severity::Low => "🔵 Low",
    }
}

fn render_header(report: &AnalysisReport) -> String {
    format!(
        r#"# Gap Analysis Report

**Score: {}/100 (Grade {})** | **Risk: {} ({})** | **Readiness: {}**

Generated: {}
"#,
        report.compliance_score.score,
        report.compliance_score.grade,
        report.risk_score.level,
        report.risk_score.score,
        report.summary.readiness_level,
        report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    )
}

fn render_summary(report: &AnalysisReport) -> String {
    let s = &report.summary;
    format!(
        r#"## Summary

| Status | Objectives |
|---|---|
| Met | {} |
| Partial | {} |
| Not Met | {} |
| Not Assessed | {} |
| **Total** | **{}** |
"#,
        s.met, s.partial, s.not_met, s.not_assessed, s.total_objectives
    )
}

fn render_gaps(report: &AnalysisReport) -> String {
    let mut md = format!("## Gaps ({})\n\n", report.gaps.len());
    if report.gaps.is_empty() {
        md.push_str("No gaps identified.\n");
        return md;
    }
    md.push_str("| Severity | Objective | Control | Family | Impact |\n");
    md.push_str("|---|---|---|---|---|\n");
    for gap in report.gaps.iter().take(MAX_GAPS_LISTED) {
        md.push_str(&format!(
            "| {} | `{}` | `{}` | {} | {} |\n",
            severity_badge(gap.severity),
            gap.objective_id,
            gap.control_id,
            gap.family_name,
            gap.impact.join(", ")
        ));
    }
    if report.gaps.len() > MAX_GAPS_LISTED {
        md.push_str(&format!(
            "\n_... and {} more gaps._\n",
            report.gaps.len() - MAX_GAPS_LISTED
        ));
    }
    md
}

fn render_actions(report: &AnalysisReport) -> String {
    let mut md = String::from("## Prioritized Actions\n\n");
    if report.prioritized_actions.is_empty() {
        md.push_str("Nothing to do.\n");
        return md;
    }
    md.push_str("| # | Control | Severity | Reason | Est. Hours |\n");
    md.push_str("|---|---|---|---|---|\n");
    for action in &report.prioritized_actions {
        md.push_str(&format!(
            "| {} | `{}` | {} | {} | {} |\n",
            action.rank,
            action.control_id,
            severity_badge(action.severity),
            action.reason,
            action.estimated_hours
        ));
    }
    md
}

fn render_recommendations(report: &AnalysisReport) -> String {
    let mut md = String::from("## Recommendations\n\n");
    for rec in &report.recommendations {
        md.push_str(&format!(
            "- **P{}: {}** ({}h) — {}\n",
            rec.priority, rec.title, rec.estimated_effort, rec.description
        ));
    }
    md
}

fn render_effort(report: &AnalysisReport) -> String {
    let e = &report.estimated_effort;
    format!(
        r#"## Estimated Effort

{} hours total (~{} days / ~{} weeks)

- Planning: {}h
- Implementation: {}h
- Testing: {}h

_Trends: {} edits in window, {} improvements, {} regressions — momentum {}._
"#,
        e.total_hours,
        e.total_days,
        e.total_weeks,
        e.phases.planning,
        e.phases.implementation,
        e.phases.testing,
        report.trends.recent_activity,
        report.trends.improvements,
        report.trends.regressions,
        report.trends.momentum
    )
}
