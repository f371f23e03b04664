use serde::{Deserialize, Serialize};

use super::defaults;

/// Query reformulation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReformulationConfig {
    /// Whether reformulation runs at all.
    pub enabled: bool,
    /// History messages included in the rewrite prompt.
    pub history_window: usize,
    /// Per-call budget for rewrite generation (milliseconds).
    pub timeout_ms: u64,
}

impl Default for ReformulationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            history_window: defaults::DEFAULT_HISTORY_WINDOW,
            timeout_ms: defaults::DEFAULT_REFORMULATION_TIMEOUT_MS,
        }
    }
}
