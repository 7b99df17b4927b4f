//! Gap extraction and severity classification
//!
//! A gap is an objective assessed `not-met` or `partial`. Unassessed
//! objectives are unknowns, not gaps; they are reported through the
//! summary counters instead.
//!
//! Catalog traversal order is load-bearing here: dependency picks take
//! the first three sibling controls in authored order, and the severity
//! sort must be stable so equal-severity gaps keep their discovery order.

use crate::models::{status_of, AssessmentState, Catalog, Control, Gap, Severity, Status};

/// Impact tags by control-id prefix, checked in order. A control id can
/// accumulate every tag whose prefix matches; in the NIST 800-171 catalog
/// the prefixes are disjoint, so in practice each gap gets one tag.
const IMPACT_TAGS: &[(&str, &str)] = &[
    ("3.1.", "Access Control"),
    ("3.3.", "Audit & Accountability"),
    ("3.4.", "Configuration Management"),
    ("3.5.", "Identification & Authentication"),
    ("3.6.", "Incident Response"),
    ("3.12.", "Security Assessment"),
    ("3.13.", "System & Communications Protection"),
    ("3.14.", "System & Information Integrity"),
];

const FALLBACK_TAG: &str = "General Security";

/// Maximum sibling controls listed as dependencies of a gap.
const MAX_DEPENDENCIES: usize = 3;

/// Classify a gap's severity from its owning control.
///
/// POA&M ineligibility overrides the point value: a control that cannot
/// be deferred is critical even at 1 point.
pub fn classify_severity(control: &Control) -> Severity {
    if !control.poam_eligible() || control.point_value >= 5 {
        Severity::Critical
    } else if control.point_value >= 3 {
        Severity::High
    } else if control.point_value >= 2 {
        Severity::Medium
    } else {
        Severity::Low
    }
}

/// Impact tags for a control id. Every matching prefix contributes its
/// tag; no match falls back to "General Security".
pub fn impact_tags(control_id: &str) -> Vec<String> {
    let tags: Vec<String> = IMPACT_TAGS
        .iter()
        .filter(|(prefix, _)| control_id.starts_with(prefix))
        .map(|(_, tag)| tag.to_string())
        .collect();
    if tags.is_empty() {
        vec![FALLBACK_TAG.to_string()]
    } else {
        tags
    }
}

/// Two-segment family prefix of a control id (`"3.1"` from `"3.1.5"`).
fn family_prefix(control_id: &str) -> String {
    control_id.split('.').take(2).collect::<Vec<_>>().join(".")
}

/// First 3 other controls sharing the gap's family prefix, in catalog
/// traversal order.
fn related_controls(control_id: &str, all_control_ids: &[String]) -> Vec<String> {
    let prefix = family_prefix(control_id);
    all_control_ids
        .iter()
        .filter(|id| id.as_str() != control_id && family_prefix(id) == prefix)
        .take(MAX_DEPENDENCIES)
        .cloned()
        .collect()
}

/// Walk the catalog and collect every gap, sorted most severe first.
///
/// The sort is stable: gaps of equal severity stay in discovery order.
pub fn collect_gaps(state: &AssessmentState, catalog: &Catalog) -> Vec<Gap> {
    let all_control_ids: Vec<String> = catalog
        .families
        .iter()
        .flat_map(|f| f.controls.iter().map(|c| c.id.clone()))
        .collect();

    let mut gaps = Vec::new();
    for family in &catalog.families {
        for control in &family.controls {
            for objective in &control.objectives {
                let status = status_of(state, &objective.id);
                if status != Status::NotMet && status != Status::Partial {
                    continue;
                }
                gaps.push(Gap {
                    objective_id: objective.id.clone(),
                    control_id: control.id.clone(),
                    family_id: family.id.clone(),
                    family_name: family.name.clone(),
                    description: objective.description.clone(),
                    status,
                    severity: classify_severity(control),
                    impact: impact_tags(&control.id),
                    dependencies: related_controls(&control.id, &all_control_ids),
                });
            }
        }
    }

    gaps.sort_by_key(|g| g.severity);
    gaps
}
