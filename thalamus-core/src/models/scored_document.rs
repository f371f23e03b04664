use serde::{Deserialize, Serialize};

use super::document::Document;

/// A document plus the distance assigned by the retriever that found it.
///
/// Distance is the cross-retriever convention: lower is more relevant.
/// Vector backends report their metric directly; keyword similarity `s` is
/// converted at the source via `distance = 1 / (1 + s)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredDocument {
    pub document: Document,
    pub distance: f64,
}

impl ScoredDocument {
    pub fn new(document: Document, distance: f64) -> Self {
        Self { document, distance }
    }

    /// Relevance in (0, 1]: `1 / (1 + distance)`.
    pub fn relevance(&self) -> f64 {
        1.0 / (1.0 + self.distance)
    }
}
