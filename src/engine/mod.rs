//! Gap analysis engine
//!
//! Reduces an assessment-state snapshot plus a control catalog into a
//! severity-ranked remediation plan: compliance score, risk score, gap
//! list, recommendations, prioritized actions, effort estimate, and
//! trend summary.
//!
//! The engine is a pure function of its inputs. `now` is a parameter so
//! the trailing trend window is reproducible under test; callers pass
//! `Utc::now()`. One catalog pass produces the status counters that
//! every later stage shares.

mod actions;
mod gaps;
mod recommend;
mod risk;
mod stats;
mod trends;

pub use stats::{count_statuses, StatusCounts};
pub use trends::DEFAULT_WINDOW_DAYS;

use crate::models::{AnalysisReport, AssessmentState, Catalog, EditHistory};
use chrono::{DateTime, Utc};
use tracing::{debug, info};

/// Run a full analysis with the default 30-day trend window.
pub fn analyze(
    state: &AssessmentState,
    catalog: &Catalog,
    history: Option<&EditHistory>,
    now: DateTime<Utc>,
) -> AnalysisReport {
    analyze_with_window(state, catalog, history, now, DEFAULT_WINDOW_DAYS)
}

/// Run a full analysis with an explicit trend window.
pub fn analyze_with_window(
    state: &AssessmentState,
    catalog: &Catalog,
    history: Option<&EditHistory>,
    now: DateTime<Utc>,
    trend_window_days: i64,
) -> AnalysisReport {
    let counts = stats::count_statuses(state, catalog);
    debug!(
        total = counts.total,
        met = counts.met,
        partial = counts.partial,
        not_met = counts.not_met,
        not_assessed = counts.not_assessed,
        "counted objective statuses"
    );

    let compliance_score = stats::compliance_score(&counts);
    let gaps = gaps::collect_gaps(state, catalog);
    let recommendations = recommend::recommend(&gaps);
    let risk_score = risk::risk_score(&gaps, counts.total);
    let prioritized_actions = actions::prioritize(&gaps);
    let estimated_effort = actions::estimate_effort(&gaps);
    let trends = trends::analyze_trends(history, now, trend_window_days);

    info!(
        score = compliance_score.score,
        grade = %compliance_score.grade,
        gaps = gaps.len(),
        risk = %risk_score.level,
        "analysis complete"
    );

    AnalysisReport {
        generated_at: now,
        summary: stats::summarize(&counts),
        compliance_score,
        risk_score,
        gaps,
        recommendations,
        prioritized_actions,
        estimated_effort,
        trends,
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::{
        AssessmentEntry, Control, Family, Gap, Objective, PoamEligibility, SelfAssessment,
        Severity, Status,
    };
    use chrono::TimeZone;

    /// Build a one-family catalog. Each entry is
    /// `(control_id, point_value, poam_eligible, objective_suffixes)`;
    /// objective ids come out as `"{control_id}[{suffix}]"`.
    pub(crate) fn catalog_with(controls: &[(&str, u32, bool, &[&str])]) -> Catalog {
        Catalog {
            families: vec![Family {
                id: "FAM-1".into(),
                name: "Test Family".into(),
                controls: controls
                    .iter()
                    .map(|(id, point_value, poam_eligible, suffixes)| Control {
                        id: id.to_string(),
                        name: format!("Control {id}"),
                        point_value: *point_value,
                        poam_eligibility: Some(PoamEligibility {
                            self_assessment: SelfAssessment {
                                can_be_on_poam: *poam_eligible,
                            },
                        }),
                        objectives: suffixes
                            .iter()
                            .map(|s| Objective {
                                id: format!("{id}[{s}]"),
                                description: format!("Objective {id}[{s}]"),
                            })
                            .collect(),
                    })
                    .collect(),
            }],
        }
    }

    pub(crate) fn state_of(entries: &[(&str, Status)]) -> AssessmentState {
        entries
            .iter()
            .map(|(id, status)| (id.to_string(), AssessmentEntry { status: *status }))
            .collect()
    }

    pub(crate) fn gap(
        objective_id: &str,
        control_id: &str,
        family_id: &str,
        family_name: &str,
        severity: Severity,
    ) -> Gap {
        Gap {
            objective_id: objective_id.into(),
            control_id: control_id.into(),
            family_id: family_id.into(),
            family_name: family_name.into(),
            description: format!("Objective {objective_id}"),
            status: Status::NotMet,
            severity,
            impact: vec!["General Security".into()],
            dependencies: vec![],
        }
    }

    pub(crate) fn gap_with_status(
        objective_id: &str,
        control_id: &str,
        severity: Severity,
        status: Status,
    ) -> Gap {
        Gap {
            status,
            ..gap(objective_id, control_id, "FAM-1", "Test Family", severity)
        }
    }

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_analyze_is_deterministic() {
        let catalog = catalog_with(&[
            ("3.1.1", 5, false, &["a", "b"]),
            ("3.1.2", 3, true, &["a"]),
        ]);
        let state = state_of(&[
            ("3.1.1[a]", Status::NotMet),
            ("3.1.1[b]", Status::Met),
            ("3.1.2[a]", Status::Partial),
        ]);
        let now = fixed_now();
        let a = analyze(&state, &catalog, None, now);
        let b = analyze(&state, &catalog, None, now);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn test_single_critical_control_scenario() {
        // 1 control, 5 points, POA&M-ineligible, 2 objectives, one not met.
        let catalog = catalog_with(&[("3.1.1", 5, false, &["a", "b"])]);
        let state = state_of(&[("3.1.1[a]", Status::NotMet), ("3.1.1[b]", Status::Met)]);
        let report = analyze(&state, &catalog, None, fixed_now());

        assert_eq!(report.summary.total_objectives, 2);
        assert_eq!(report.summary.met, 1);
        assert_eq!(report.summary.not_met, 1);
        assert_eq!(report.compliance_score.score, 50);
        assert_eq!(report.compliance_score.grade, "F");
        assert_eq!(report.gaps.len(), 1);
        assert_eq!(report.gaps[0].severity, Severity::Critical);
        assert_eq!(
            report.prioritized_actions[0].reason,
            "Cannot be on POA&M - must be implemented"
        );
        assert_eq!(report.estimated_effort.total_hours, 40);
    }

    #[test]
    fn test_empty_catalog_does_not_crash() {
        let catalog = Catalog { families: vec![] };
        let state = AssessmentState::new();
        let report = analyze(&state, &catalog, None, fixed_now());
        assert_eq!(report.summary.total_objectives, 0);
        assert_eq!(report.compliance_score.score, 0);
        assert!(report.gaps.is_empty());
        assert!(report.prioritized_actions.is_empty());
        assert_eq!(report.risk_score.score, 0);
    }
}
