/// Thalamus system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Damping constant in the reciprocal-rank contribution `1 / (rank + RRF_DAMPING)`.
///
/// Fixed rather than configurable: every published RRF variant uses 60 and
/// the fusion weights already provide the tuning surface.
pub const RRF_DAMPING: f64 = 60.0;

/// BM25 term-frequency saturation parameter.
pub const BM25_K1: f64 = 1.5;

/// BM25 document-length normalization strength.
pub const BM25_B: f64 = 0.75;

/// A rewrite longer than this multiple of the original query is rejected.
pub const REFORMULATION_MAX_GROWTH: usize = 3;

/// Minimum whitespace tokens for a rewrite to be accepted.
pub const REFORMULATION_MIN_TOKENS: usize = 3;
