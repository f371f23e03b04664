//! Default values backing the `Default` impls of every config struct.

/// Documents returned to the caller after fusion.
pub const DEFAULT_TOP_K: usize = 5;

/// Fusion weight for the semantic pass with the original query.
pub const DEFAULT_SEMANTIC_WEIGHT: f64 = 0.5;

/// Fusion weight for the keyword pass.
pub const DEFAULT_KEYWORD_WEIGHT: f64 = 0.3;

/// Fusion weight for the semantic pass with the reformulated query.
pub const DEFAULT_REFORMULATED_WEIGHT: f64 = 0.2;

/// Over-fetch multiplier applied before metadata filtering.
pub const DEFAULT_FILTER_OVERFETCH: usize = 2;

/// History messages included in the rewrite prompt.
pub const DEFAULT_HISTORY_WINDOW: usize = 6;

/// Per-call budget for rewrite generation (milliseconds).
pub const DEFAULT_REFORMULATION_TIMEOUT_MS: u64 = 10_000;

/// Conversation turns kept per session; the stored bound is twice this.
pub const DEFAULT_MAX_HISTORY: usize = 10;

/// Idle seconds before a session expires.
pub const DEFAULT_SESSION_TIMEOUT_SECS: u64 = 3_600;

/// Per-attempt budget for answer generation (milliseconds).
pub const DEFAULT_GENERATION_TIMEOUT_MS: u64 = 30_000;

/// Retries after a failed generation attempt.
pub const DEFAULT_GENERATION_RETRIES: u32 = 1;

/// Score at and above which an answer is flagged risky.
pub const DEFAULT_RISK_THRESHOLD: f64 = 0.6;

/// Score at and above which the assessment is surfaced to the caller.
pub const DEFAULT_SURFACE_THRESHOLD: f64 = 0.4;

/// Log level filter applied when the host installs the subscriber.
pub const DEFAULT_LOG_LEVEL: &str = "info";
