pub mod defaults;

mod generation_config;
mod grounding_config;
mod observability_config;
mod reformulation_config;
mod retrieval_config;
mod session_config;

pub use generation_config::GenerationConfig;
pub use grounding_config::GroundingConfig;
pub use observability_config::ObservabilityConfig;
pub use reformulation_config::ReformulationConfig;
pub use retrieval_config::RetrievalConfig;
pub use session_config::SessionConfig;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Top-level engine configuration.
///
/// Every field has a default, so an empty TOML document is a valid config.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ThalamusConfig {
    pub retrieval: RetrievalConfig,
    pub reformulation: ReformulationConfig,
    pub session: SessionConfig,
    pub generation: GenerationConfig,
    pub grounding: GroundingConfig,
    pub observability: ObservabilityConfig,
}

impl ThalamusConfig {
    /// Parse from a TOML string; missing fields fall back to defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseFailed {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a TOML file on disk.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml(&raw)
    }

    /// Reject values the engine cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.retrieval.top_k == 0 {
            return Err(invalid("retrieval.top_k", "must be at least 1"));
        }
        if self.retrieval.filter_overfetch == 0 {
            return Err(invalid("retrieval.filter_overfetch", "must be at least 1"));
        }
        let weights = [
            ("retrieval.semantic_weight", self.retrieval.semantic_weight),
            ("retrieval.keyword_weight", self.retrieval.keyword_weight),
            (
                "retrieval.reformulated_weight",
                self.retrieval.reformulated_weight,
            ),
        ];
        for (field, weight) in weights {
            if !weight.is_finite() || weight < 0.0 {
                return Err(invalid(field, "must be a non-negative number"));
            }
        }
        if weights.iter().all(|(_, w)| *w == 0.0) {
            return Err(invalid(
                "retrieval",
                "at least one fusion weight must be positive",
            ));
        }
        if self.reformulation.history_window == 0 {
            return Err(invalid(
                "reformulation.history_window",
                "must be at least 1",
            ));
        }
        if self.session.max_history == 0 {
            return Err(invalid("session.max_history", "must be at least 1"));
        }
        if self.session.timeout_secs == 0 {
            return Err(invalid("session.timeout_secs", "must be at least 1"));
        }
        for (field, threshold) in [
            ("grounding.risk_threshold", self.grounding.risk_threshold),
            (
                "grounding.surface_threshold",
                self.grounding.surface_threshold,
            ),
        ] {
            if !threshold.is_finite() || !(0.0..=1.0).contains(&threshold) {
                return Err(invalid(field, "must be in [0, 1]"));
            }
        }
        if self.grounding.surface_threshold > self.grounding.risk_threshold {
            return Err(invalid(
                "grounding.surface_threshold",
                "must not exceed grounding.risk_threshold",
            ));
        }
        Ok(())
    }
}

fn invalid(field: &str, reason: &str) -> ConfigError {
    ConfigError::Invalid {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}
