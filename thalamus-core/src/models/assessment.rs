use serde::{Deserialize, Serialize};

/// Qualitative band for a grounding risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLabel {
    VeryLow,
    Low,
    Medium,
    High,
    VeryHigh,
}

impl RiskLabel {
    /// Band for a clamped score in [0, 1].
    pub fn from_score(score: f64) -> Self {
        if score >= 0.8 {
            RiskLabel::VeryHigh
        } else if score >= 0.6 {
            RiskLabel::High
        } else if score >= 0.4 {
            RiskLabel::Medium
        } else if score >= 0.2 {
            RiskLabel::Low
        } else {
            RiskLabel::VeryLow
        }
    }
}

/// Why the scorer raised the risk estimate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum RiskReason {
    /// No evidence reached the generation prompt.
    NoContext,
    /// Evidence was retrieved but its mean relevance is poor.
    LowRelevance,
    /// The answer hedges ("probably", "it seems", ...).
    Hedging { count: usize },
    /// The answer carries fabrication markers ("as far as i know", ...).
    FabricationMarkers { count: usize },
    /// Specific figures (prices, dates, phones) with no evidence at all.
    UnsupportedSpecifics,
    /// The answer lexically opposes the evidence (yes/no, can/cannot).
    Contradiction,
    /// Too short or shares no content words with the question.
    GenericAnswer,
    /// The answer declares it cannot help.
    Refusal,
}

/// Heuristic estimate of how well an answer is supported by its evidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroundingAssessment {
    /// Additive signal total, clamped to [0, 1].
    pub risk_score: f64,
    pub label: RiskLabel,
    pub reasons: Vec<RiskReason>,
    /// Whether the score crossed the configured risk threshold.
    pub is_risky: bool,
}
