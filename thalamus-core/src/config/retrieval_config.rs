use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::FusionWeights;

/// Retrieval subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Documents returned to the caller after fusion.
    pub top_k: usize,
    /// Fusion weight for the semantic pass with the original query.
    pub semantic_weight: f64,
    /// Fusion weight for the keyword pass.
    pub keyword_weight: f64,
    /// Fusion weight for the semantic pass with the reformulated query.
    pub reformulated_weight: f64,
    /// Over-fetch multiplier applied before metadata filtering.
    pub filter_overfetch: usize,
}

impl RetrievalConfig {
    /// The configured weights as a `FusionWeights` value.
    pub fn fusion_weights(&self) -> FusionWeights {
        FusionWeights {
            semantic_original: self.semantic_weight,
            keyword: self.keyword_weight,
            semantic_reformulated: self.reformulated_weight,
        }
    }
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            top_k: defaults::DEFAULT_TOP_K,
            semantic_weight: defaults::DEFAULT_SEMANTIC_WEIGHT,
            keyword_weight: defaults::DEFAULT_KEYWORD_WEIGHT,
            reformulated_weight: defaults::DEFAULT_REFORMULATED_WEIGHT,
            filter_overfetch: defaults::DEFAULT_FILTER_OVERFETCH,
        }
    }
}
