use serde::{Deserialize, Serialize};

use super::defaults;

/// Answer generation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Per-attempt budget for answer generation (milliseconds).
    pub timeout_ms: u64,
    /// Retries after a failed generation attempt.
    pub max_retries: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            timeout_ms: defaults::DEFAULT_GENERATION_TIMEOUT_MS,
            max_retries: defaults::DEFAULT_GENERATION_RETRIES,
        }
    }
}
