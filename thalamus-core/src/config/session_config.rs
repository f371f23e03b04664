use serde::{Deserialize, Serialize};

use super::defaults;

/// Session subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Conversation turns kept per session; the stored message bound is
    /// twice this (a turn is a user/assistant pair).
    pub max_history: usize,
    /// Idle seconds before a session expires.
    pub timeout_secs: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_history: defaults::DEFAULT_MAX_HISTORY,
            timeout_secs: defaults::DEFAULT_SESSION_TIMEOUT_SECS,
        }
    }
}
