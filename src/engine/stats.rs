//! Objective counters, compliance scoring, and readiness level
//!
//! One walk over the catalog produces the status counters every later
//! stage shares; nothing downstream recounts.

use crate::models::{status_of, AssessmentState, Catalog, ComplianceScore, Status, Summary};

/// Status counters from a single family → control → objective pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub total: usize,
    pub met: usize,
    pub partial: usize,
    pub not_met: usize,
    pub not_assessed: usize,
}

/// Count every objective's status exactly once, in catalog order.
pub fn count_statuses(state: &AssessmentState, catalog: &Catalog) -> StatusCounts {
    let mut counts = StatusCounts::default();
    for family in &catalog.families {
        for control in &family.controls {
            for objective in &control.objectives {
                counts.total += 1;
                match status_of(state, &objective.id) {
                    Status::Met => counts.met += 1,
                    Status::Partial => counts.partial += 1,
                    Status::NotMet => counts.not_met += 1,
                    Status::NotAssessed => counts.not_assessed += 1,
                }
            }
        }
    }
    counts
}

/// Compliance score: full credit for met objectives, half for partial.
///
/// An empty catalog scores 0 rather than dividing by zero.
pub fn compliance_score(counts: &StatusCounts) -> ComplianceScore {
    let score = if counts.total == 0 {
        0
    } else {
        let earned = counts.met as f64 * 100.0 + counts.partial as f64 * 50.0;
        (earned / counts.total as f64).round() as u32
    };
    ComplianceScore {
        score,
        grade: grade_from_score(score),
    }
}

/// Letter grade from a 0-100 score.
pub fn grade_from_score(score: u32) -> String {
    match score {
        s if s >= 90 => "A".to_string(),
        s if s >= 80 => "B".to_string(),
        s if s >= 70 => "C".to_string(),
        s if s >= 60 => "D".to_string(),
        _ => "F".to_string(),
    }
}

/// Readiness level from the fully-met percentage.
pub fn readiness_level(counts: &StatusCounts) -> &'static str {
    let met_pct = if counts.total == 0 {
        0.0
    } else {
        counts.met as f64 / counts.total as f64 * 100.0
    };
    match met_pct {
        p if p >= 95.0 => "Ready for Assessment",
        p if p >= 80.0 => "Near Ready",
        p if p >= 60.0 => "In Progress",
        p if p >= 30.0 => "Early Stage",
        _ => "Getting Started",
    }
}

/// Build the report summary from the shared counters.
pub fn summarize(counts: &StatusCounts) -> Summary {
    Summary {
        total_objectives: counts.total,
        met: counts.met,
        partial: counts.partial,
        not_met: counts.not_met,
        not_assessed: counts.not_assessed,
        readiness_level: readiness_level(counts).to_string(),
    }
}
