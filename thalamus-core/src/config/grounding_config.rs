use serde::{Deserialize, Serialize};

use super::defaults;

/// Grounding scorer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GroundingConfig {
    /// Score at and above which an answer is flagged risky.
    pub risk_threshold: f64,
    /// Score at and above which the assessment is surfaced to the caller.
    pub surface_threshold: f64,
}

impl Default for GroundingConfig {
    fn default() -> Self {
        Self {
            risk_threshold: defaults::DEFAULT_RISK_THRESHOLD,
            surface_threshold: defaults::DEFAULT_SURFACE_THRESHOLD,
        }
    }
}
