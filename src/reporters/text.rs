//! Text (terminal) reporter with colors and formatting

use crate::models::{AnalysisReport, RiskLevel, Severity};
use anyhow::Result;

/// Grade colors (ANSI escape codes)
fn grade_color(grade: &str) -> &'static str {
    match grade {
        "A" => "\x1b[32m", // Green
        "B" => "\x1b[92m", // Light green
        "C" => "\x1b[33m", // Yellow
        "D" => "\x1b[91m", // Light red
        "F" => "\x1b[31m", // Red
        _ => "\x1b[0m",
    }
}

/// Severity colors
fn severity_color(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical => "\x1b[31m", // Red
        Severity::High => "\x1b[91m",     // Light red
        Severity::Medium => "\x1b[33m",   // Yellow
        Severity::Low => "\x1b[34m",      // Blue
    }
}

fn risk_color(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Low => "\x1b[32m",
        RiskLevel::Medium => "\x1b[33m",
        RiskLevel::High => "\x1b[91m",
        RiskLevel::Critical => "\x1b[31m",
    }
}

/// Reset ANSI color
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

/// Severity tag
fn severity_tag(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical => "[C]",
        Severity::High => "[H]",
        Severity::Medium => "[M]",
        Severity::Low => "[L]",
    }
}

/// Render report as formatted terminal output
pub fn render(report: &AnalysisReport) -> Result<String> {
    let mut out = String::new();

    // Header
    let grade_c = grade_color(&report.compliance_score.grade);
    let risk_c = risk_color(report.risk_score.level);
    out.push_str(&format!("\n{BOLD}Gap Analysis{RESET}\n"));
    out.push_str(&format!(
        "{DIM}──────────────────────────────────────{RESET}\n"
    ));
    out.push_str(&format!(
        "Score: {BOLD}{}/100{RESET}  Grade: {grade_c}{BOLD}{}{RESET}  ",
        report.compliance_score.score, report.compliance_score.grade
    ));
    out.push_str(&format!(
        "Risk: {risk_c}{}{RESET} ({})  Readiness: {}\n\n",
        report.risk_score.level, report.risk_score.score, report.summary.readiness_level
    ));

    // Objective counters
    let s = &report.summary;
    out.push_str(&format!(
        "{BOLD}OBJECTIVES{RESET} ({} total)\n  \x1b[32m{} met{RESET} | \x1b[33m{} partial{RESET} | \x1b[31m{} not met{RESET} | {DIM}{} not assessed{RESET}\n\n",
        s.total_objectives, s.met, s.partial, s.not_met, s.not_assessed
    ));

    // Gap table
    out.push_str(&format!("{BOLD}GAPS{RESET} ({} total)\n", report.gaps.len()));
    if !report.gaps.is_empty() {
        out.push_str(&format!(
            "{DIM}  #   SEV   OBJECTIVE       CONTROL    IMPACT{RESET}\n"
        ));
        out.push_str(&format!(
            "{DIM}  ──────────────────────────────────────────────────────────{RESET}\n"
        ));
        for (i, gap) in report.gaps.iter().take(10).enumerate() {
            let sev_c = severity_color(gap.severity);
            out.push_str(&format!(
                "  {:<3} {sev_c}{}{RESET}   {:<15} {:<10} {}\n",
                i + 1,
                severity_tag(gap.severity),
                gap.objective_id,
                gap.control_id,
                gap.impact.join(", ")
            ));
        }
        if report.gaps.len() > 10 {
            out.push_str(&format!(
                "{DIM}  ... and {} more{RESET}\n",
                report.gaps.len() - 10
            ));
        }
    }
    out.push('\n');

    // Next actions
    if !report.prioritized_actions.is_empty() {
        out.push_str(&format!("{BOLD}NEXT ACTIONS{RESET}\n"));
        for action in &report.prioritized_actions {
            let sev_c = severity_color(action.severity);
            out.push_str(&format!(
                "  {}. {sev_c}{}{RESET} {} — {} ({}h)\n",
                action.rank,
                severity_tag(action.severity),
                action.control_id,
                action.reason,
                action.estimated_hours
            ));
        }
        out.push('\n');
    }

    // Recommendations
    if !report.recommendations.is_empty() {
        out.push_str(&format!("{BOLD}RECOMMENDATIONS{RESET}\n"));
        for rec in &report.recommendations {
            out.push_str(&format!(
                "  P{} {} {DIM}({}h, {} controls){RESET}\n",
                rec.priority,
                rec.title,
                rec.estimated_effort,
                rec.affected_controls.len()
            ));
        }
        out.push('\n');
    }

    // Effort + trends footer
    let effort = &report.estimated_effort;
    out.push_str(&format!(
        "{BOLD}EFFORT{RESET}  {}h total (~{} weeks)  plan {}h / implement {}h / test {}h\n",
        effort.total_hours,
        effort.total_weeks,
        effort.phases.planning,
        effort.phases.implementation,
        effort.phases.testing
    ));
    out.push_str(&format!(
        "{BOLD}TRENDS{RESET}  {} recent edits, {} improvements, {} regressions — momentum {}\n",
        report.trends.recent_activity,
        report.trends.improvements,
        report.trends.regressions,
        report.trends.momentum
    ));

    Ok(out)
}
