//! Prioritized actions and effort estimation
//!
//! The top gaps (already sorted most severe first) become a ranked
//! action list; the effort estimate spans ALL gaps, not just the ranked
//! ones.

use crate::models::{Action, EffortEstimate, EffortPhases, Gap, Severity, Status};

/// How many gaps make the ranked action list.
const TOP_ACTIONS: usize = 10;

const HOURS_PER_DAY: u32 = 8;
const HOURS_PER_WEEK: u32 = 40;

/// Rank the top gaps into remediation actions.
pub fn prioritize(gaps: &[Gap]) -> Vec<Action> {
    gaps.iter()
        .take(TOP_ACTIONS)
        .enumerate()
        .map(|(i, gap)| Action {
            rank: i + 1,
            objective_id: gap.objective_id.clone(),
            control_id: gap.control_id.clone(),
            description: gap.description.clone(),
            severity: gap.severity,
            reason: reason_for(gap),
            estimated_hours: gap.severity.remediation_hours(),
        })
        .collect()
}

fn reason_for(gap: &Gap) -> String {
    if gap.severity == Severity::Critical {
        "Cannot be on POA&M - must be implemented".to_string()
    } else if gap.status == Status::NotMet {
        "Currently not implemented".to_string()
    } else {
        "Partially implemented - needs completion".to_string()
    }
}

/// Total remediation effort across every gap, with the 20/60/20
/// planning / implementation / testing split.
///
/// The three phase values round independently, so their sum can drift a
/// point or two from `total_hours`.
pub fn estimate_effort(gaps: &[Gap]) -> EffortEstimate {
    let total_hours: u32 = gaps.iter().map(|g| g.severity.remediation_hours()).sum();
    EffortEstimate {
        total_hours,
        total_days: total_hours.div_ceil(HOURS_PER_DAY),
        total_weeks: total_hours.div_ceil(HOURS_PER_WEEK),
        phases: EffortPhases {
            planning: (total_hours as f64 * 0.2).round() as u32,
            implementation: (total_hours as f64 * 0.6).round() as u32,
            testing: (total_hours as f64 * 0.2).round() as u32,
        },
    }
}
