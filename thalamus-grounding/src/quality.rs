//! Surface quality metrics for an answer and its evidence.

use thalamus_core::models::{ResponseQuality, ScoredDocument};

use crate::phrases::{FABRICATION_MARKERS, HEDGING_PHRASES};
use crate::scorer::mean_relevance;

/// Summarize an answer for logging and feedback storage.
///
/// Sentence counting is a plain period split; abbreviations over-count
/// slightly, which is acceptable for a trend metric.
pub fn quality(answer: &str, evidence: &[ScoredDocument]) -> ResponseQuality {
    let answer_lower = answer.to_lowercase();
    ResponseQuality {
        word_count: answer.split_whitespace().count(),
        sentence_count: answer
            .split('.')
            .filter(|segment| !segment.trim().is_empty())
            .count(),
        evidence_count: evidence.len(),
        mean_relevance: mean_relevance(evidence),
        has_hedging: HEDGING_PHRASES
            .iter()
            .any(|phrase| answer_lower.contains(phrase)),
        has_fabrication_marker: FABRICATION_MARKERS
            .iter()
            .any(|phrase| answer_lower.contains(phrase)),
    }
}
