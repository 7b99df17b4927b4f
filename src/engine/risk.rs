//! Weighted risk scoring
//!
//! The 0-100 score normalizes the raw weighted sum against the catalog's
//! theoretical worst case (every objective a critical gap). The level
//! bands apply to the RAW sum, not the normalized score. Downstream
//! consumers compare levels across reports, so the band thresholds stay
//! pinned to the raw sum.

use crate::models::{Gap, RiskLevel, RiskScore, Severity};

/// Level bands over the raw weighted sum.
const MEDIUM_FLOOR: u32 = 50;
const HIGH_FLOOR: u32 = 150;
const CRITICAL_FLOOR: u32 = 300;

/// Compute the risk score for a gap list against a catalog of
/// `total_objectives` objectives.
pub fn risk_score(gaps: &[Gap], total_objectives: usize) -> RiskScore {
    let raw_weight: u32 = gaps.iter().map(|g| g.severity.weight()).sum();
    let max_possible = total_objectives as u32 * Severity::Critical.weight();

    let score = if max_possible == 0 {
        0
    } else {
        let normalized = (raw_weight as f64 / max_possible as f64 * 100.0).round() as u32;
        normalized.min(100)
    };

    RiskScore {
        score,
        level: level_for(raw_weight),
        raw_weight,
    }
}

fn level_for(raw_weight: u32) -> RiskLevel {
    match raw_weight {
        w if w < MEDIUM_FLOOR => RiskLevel::Low,
        w if w < HIGH_FLOOR => RiskLevel::Medium,
        w if w < CRITICAL_FLOOR => RiskLevel::High,
        _ => RiskLevel::Critical,
    }
}
