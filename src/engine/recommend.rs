//! Recommendation synthesis
//!
//! Three kinds, emitted in priority order: per-family critical-gap
//! remediation (priority 1), the fixed foundational-controls pattern
//! (priority 2), and a quick-win batch of the easiest gaps (priority 3).

use crate::models::{Gap, Recommendation, Severity};
use indexmap::IndexMap;

/// Canonical controls behind the fixed pattern recommendation:
/// multifactor authentication, CUI encryption in transit, audit logging.
const PATTERN_CONTROLS: &[&str] = &["3.5.3", "3.13.11", "3.3.1"];

const CRITICAL_HOURS_EACH: u32 = 40;
const PATTERN_HOURS: u32 = 80;
const QUICK_WIN_HOURS_EACH: u32 = 8;
const QUICK_WIN_LIMIT: usize = 5;

/// Synthesize recommendations from the sorted gap list.
pub fn recommend(gaps: &[Gap]) -> Vec<Recommendation> {
    let mut recs = Vec::new();

    // Families in first-critical-gap order; IndexMap keeps that order
    // deterministic across runs.
    let mut critical_by_family: IndexMap<&str, (&str, Vec<&Gap>)> = IndexMap::new();
    for gap in gaps.iter().filter(|g| g.severity == Severity::Critical) {
        critical_by_family
            .entry(gap.family_id.as_str())
            .or_insert_with(|| (gap.family_name.as_str(), Vec::new()))
            .1
            .push(gap);
    }

    for (_, (family_name, family_gaps)) in &critical_by_family {
        let count = family_gaps.len();
        recs.push(Recommendation {
            title: format!(
                "Remediate {} critical gap{} in {}",
                count,
                if count == 1 { "" } else { "s" },
                family_name
            ),
            description: format!(
                "{} has {} critical finding{} that cannot be deferred. \
                 Prioritize these controls before the next assessment cycle.",
                family_name,
                count,
                if count == 1 { "" } else { "s" }
            ),
            priority: 1,
            estimated_effort: count as u32 * CRITICAL_HOURS_EACH,
            affected_controls: family_gaps.iter().map(|g| g.control_id.clone()).collect(),
        });
    }

    recs.push(Recommendation {
        title: "Implement foundational security controls".to_string(),
        description: "Multifactor authentication, encryption of data in transit, \
                      and centralized audit logging close the most common gap \
                      patterns across assessments."
            .to_string(),
        priority: 2,
        estimated_effort: PATTERN_HOURS,
        affected_controls: PATTERN_CONTROLS.iter().map(|s| s.to_string()).collect(),
    });

    let quick_wins: Vec<&Gap> = gaps
        .iter()
        .filter(|g| g.severity == Severity::Medium || g.severity == Severity::Low)
        .take(QUICK_WIN_LIMIT)
        .collect();
    if !quick_wins.is_empty() {
        recs.push(Recommendation {
            title: format!(
                "Close {} quick-win gap{}",
                quick_wins.len(),
                if quick_wins.len() == 1 { "" } else { "s" }
            ),
            description: "Lower-severity gaps with small remediation effort; \
                          closing them lifts the compliance score quickly."
                .to_string(),
            priority: 3,
            estimated_effort: quick_wins.len() as u32 * QUICK_WIN_HOURS_EACH,
            affected_controls: quick_wins.iter().map(|g| g.control_id.clone()).collect(),
        });
    }

    recs.sort_by_key(|r| r.priority);
    recs
}
