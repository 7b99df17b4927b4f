//! Core data models for gapscan
//!
//! These models cover both sides of the engine contract: the control
//! catalog and assessment state consumed as input, and the analysis
//! report produced as output. Wire names are camelCase to match the
//! JSON documents the surrounding tooling exchanges.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Assessment status of a single objective.
///
/// A missing entry in the assessment state is equivalent to `NotAssessed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    Met,
    Partial,
    NotMet,
    #[default]
    NotAssessed,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Met => write!(f, "met"),
            Status::Partial => write!(f, "partial"),
            Status::NotMet => write!(f, "not-met"),
            Status::NotAssessed => write!(f, "not-assessed"),
        }
    }
}

/// Severity tiers for gaps, most severe first.
///
/// The derive order matters: sorting gaps ascending by `Severity` puts
/// critical gaps ahead of high, high ahead of medium, and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    /// Risk weight contributed by one gap of this severity.
    pub fn weight(self) -> u32 {
        match self {
            Severity::Critical => 10,
            Severity::High => 7,
            Severity::Medium => 4,
            Severity::Low => 2,
        }
    }

    /// Estimated remediation hours for one gap of this severity.
    pub fn remediation_hours(self) -> u32 {
        match self {
            Severity::Critical => 40,
            Severity::High => 24,
            Severity::Medium => 16,
            Severity::Low => 8,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Critical => write!(f, "critical"),
            Severity::High => write!(f, "high"),
            Severity::Medium => write!(f, "medium"),
            Severity::Low => write!(f, "low"),
        }
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "critical" => Ok(Severity::Critical),
            "high" => Ok(Severity::High),
            "medium" => Ok(Severity::Medium),
            "low" => Ok(Severity::Low),
            _ => Err(format!(
                "unknown severity '{}'. Valid: critical, high, medium, low",
                s
            )),
        }
    }
}

// ── Catalog (external, read-only input) ─────────────────────────────────────

/// A control catalog: ordered families of ordered controls of ordered
/// objectives. Traversal order is significant (dependency picks and
/// quick-win selection follow it), so everything is a `Vec`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub families: Vec<Family>,
}

/// A named grouping of related controls (e.g. Access Control).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Family {
    pub id: String,
    pub name: String,
    pub controls: Vec<Control>,
}

/// A named requirement grouping one or more objectives.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Control {
    pub id: String,
    pub name: String,
    pub point_value: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poam_eligibility: Option<PoamEligibility>,
    pub objectives: Vec<Objective>,
}

impl Control {
    /// Whether this control may be deferred via a POA&M.
    ///
    /// Missing eligibility data defaults to eligible.
    pub fn poam_eligible(&self) -> bool {
        self.poam_eligibility
            .as_ref()
            .map(|p| p.self_assessment.can_be_on_poam)
            .unwrap_or(true)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoamEligibility {
    pub self_assessment: SelfAssessment,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelfAssessment {
    pub can_be_on_poam: bool,
}

/// Atomic yes/no assessment checkpoint under a control.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Objective {
    pub id: String,
    pub description: String,
}

// ── Assessment state and edit history (external inputs) ────────────────────

/// Per-objective assessment entry, keyed by objective id in the state map.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct AssessmentEntry {
    pub status: Status,
}

/// Mapping from objective id to its assessment entry.
pub type AssessmentState = HashMap<String, AssessmentEntry>;

/// Look up an objective's status, defaulting absent keys to `NotAssessed`.
pub fn status_of(state: &AssessmentState, objective_id: &str) -> Status {
    state
        .get(objective_id)
        .map(|e| e.status)
        .unwrap_or(Status::NotAssessed)
}

/// One recorded edit to an objective's assessment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditEvent {
    pub timestamp: DateTime<Utc>,
    pub action: String,
    #[serde(default)]
    pub old_value: Option<String>,
    #[serde(default)]
    pub new_value: Option<String>,
}

/// Chronological edit lists keyed by `"{controlId}_{objectiveId}"`.
///
/// Keys that do not match any catalog objective are ignored, not rejected.
pub type EditHistory = HashMap<String, Vec<EditEvent>>;

// ── Analysis report (engine output) ─────────────────────────────────────────

/// Objective counters plus the derived readiness level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_objectives: usize,
    pub met: usize,
    pub partial: usize,
    pub not_met: usize,
    pub not_assessed: usize,
    pub readiness_level: String,
}

/// SPRS-style compliance score with a letter grade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceScore {
    pub score: u32,
    pub grade: String,
}

/// An objective whose assessed status indicates non-compliance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gap {
    pub objective_id: String,
    pub control_id: String,
    pub family_id: String,
    pub family_name: String,
    pub description: String,
    pub status: Status,
    pub severity: Severity,
    pub impact: Vec<String>,
    /// Up to 3 sibling control ids in catalog order.
    pub dependencies: Vec<String>,
}

/// A synthesized remediation recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub title: String,
    pub description: String,
    pub priority: u8,
    /// Hours.
    pub estimated_effort: u32,
    pub affected_controls: Vec<String>,
}

/// Risk level bands, derived from the raw weighted sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "Low"),
            RiskLevel::Medium => write!(f, "Medium"),
            RiskLevel::High => write!(f, "High"),
            RiskLevel::Critical => write!(f, "Critical"),
        }
    }
}

/// Weighted risk score.
///
/// `score` is normalized against the catalog's worst case (0-100);
/// `level` is banded on `raw_weight`, not on `score`. The two scales are
/// intentionally different and must stay that way for parity with the
/// assessment data this tool exchanges reports with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskScore {
    pub score: u32,
    pub level: RiskLevel,
    pub raw_weight: u32,
}

/// One ranked remediation action derived from the top gaps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Action {
    pub rank: usize,
    pub objective_id: String,
    pub control_id: String,
    pub description: String,
    pub severity: Severity,
    pub reason: String,
    pub estimated_hours: u32,
}

/// Phase split of the total remediation effort (20/60/20).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffortPhases {
    pub planning: u32,
    pub implementation: u32,
    pub testing: u32,
}

/// Remediation effort estimate across all gaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EffortEstimate {
    pub total_hours: u32,
    pub total_days: u32,
    pub total_weeks: u32,
    pub phases: EffortPhases,
}

/// Direction of recent assessment activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Momentum {
    Positive,
    Negative,
    Stable,
}

impl std::fmt::Display for Momentum {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Momentum::Positive => write!(f, "positive"),
            Momentum::Negative => write!(f, "negative"),
            Momentum::Stable => write!(f, "stable"),
        }
    }
}

/// Edit-history trend summary over the trailing window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trends {
    pub recent_activity: usize,
    pub improvements: usize,
    pub regressions: usize,
    pub momentum: Momentum,
}

/// Complete analysis report. Immutable once produced; a new run builds a
/// wholly new report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub generated_at: DateTime<Utc>,
    pub summary: Summary,
    pub compliance_score: ComplianceScore,
    pub risk_score: RiskScore,
    pub gaps: Vec<Gap>,
    pub recommendations: Vec<Recommendation>,
    pub prioritized_actions: Vec<Action>,
    pub estimated_effort: EffortEstimate,
    pub trends: Trends,
}
