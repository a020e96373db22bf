use serde::{Deserialize, Serialize};

use super::super::domain::{RiskFlag, Severity};
use super::ComponentScores;

/// Fixed component weights in assessor evaluation order: document, farmer,
/// farm, historical, fraud. They sum to 1.0 and are not configurable.
pub(crate) const WEIGHTS: [f64; 5] = [0.25, 0.20, 0.20, 0.20, 0.15];

/// Combine the five component scores into the overall 0-100 risk score.
pub(crate) fn weighted_score(components: &ComponentScores) -> u8 {
    let scores = [
        components.document.score,
        components.farmer.score,
        components.farm.score,
        components.historical.score,
        components.fraud.score,
    ];

    let total: f64 = scores
        .iter()
        .zip(WEIGHTS)
        .map(|(score, weight)| *score as f64 * weight)
        .sum();

    total.round() as u8
}

/// Banded risk level derived from the overall score. Higher scores mean
/// lower risk; 70 itself is Low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn from_score(score: u8) -> Self {
        if score < 50 {
            RiskLevel::High
        } else if score < 70 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
        }
    }
}

/// Routing verdict surfaced to the reviewer workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    Reject,
    ManualReview,
    StandardReview,
    FastTrack,
}

impl Recommendation {
    pub const fn label(self) -> &'static str {
        match self {
            Recommendation::Reject => "REJECT — Critical issues detected",
            Recommendation::ManualReview => "MANUAL_REVIEW — High risk, route to a senior reviewer",
            Recommendation::StandardReview => {
                "STANDARD_REVIEW — Review flagged findings before approval"
            }
            Recommendation::FastTrack => "FAST_TRACK — Low risk, eligible for expedited review",
        }
    }
}

/// First matching rule wins: critical flags reject outright, then the level
/// and the HIGH-severity flag count widen the review path.
pub(crate) fn recommend(level: RiskLevel, flags: &[RiskFlag]) -> Recommendation {
    if flags.iter().any(|flag| flag.severity == Severity::Critical) {
        return Recommendation::Reject;
    }

    let high_count = flags
        .iter()
        .filter(|flag| flag.severity == Severity::High)
        .count();

    if level == RiskLevel::High || high_count >= 3 {
        return Recommendation::ManualReview;
    }

    if level == RiskLevel::Medium || high_count >= 1 {
        return Recommendation::StandardReview;
    }

    Recommendation::FastTrack
}
