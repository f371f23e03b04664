use serde::{Deserialize, Serialize};

/// Surface statistics about an answer and the evidence behind it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseQuality {
    pub word_count: usize,
    pub sentence_count: usize,
    pub evidence_count: usize,
    /// Mean `1 / (1 + distance)` across evidence, 0 when empty.
    pub mean_relevance: f64,
    pub has_hedging: bool,
    pub has_fabrication_marker: bool,
}
