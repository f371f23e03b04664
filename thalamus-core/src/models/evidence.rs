use serde::{Deserialize, Serialize};

use super::scored_document::ScoredDocument;

/// Caller-facing projection of one evidence hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceMetadata {
    pub source: String,
    pub category: String,
    /// `1 / (1 + distance)`, rounded to 3 decimals.
    pub relevance: f64,
    pub chunk_id: String,
}

impl From<&ScoredDocument> for EvidenceMetadata {
    fn from(hit: &ScoredDocument) -> Self {
        Self {
            source: hit.document.source().to_string(),
            category: hit.document.category().to_string(),
            relevance: (hit.relevance() * 1000.0).round() / 1000.0,
            chunk_id: hit.document.chunk_id().to_string(),
        }
    }
}
