use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::document::MetadataValue;
use crate::config::defaults;

/// Which retrieval pass produced a ranked list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RetrievalSource {
    /// Vector search with the user's original query.
    SemanticOriginal,
    /// BM25 keyword search with the original query.
    Keyword,
    /// Vector search with the reformulated query.
    SemanticReformulated,
}

impl RetrievalSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            RetrievalSource::SemanticOriginal => "semantic_original",
            RetrievalSource::Keyword => "keyword",
            RetrievalSource::SemanticReformulated => "semantic_reformulated",
        }
    }
}

/// Per-source weights applied during reciprocal-rank fusion.
///
/// Weights are relative and need not sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FusionWeights {
    pub semantic_original: f64,
    pub keyword: f64,
    pub semantic_reformulated: f64,
}

impl FusionWeights {
    pub fn for_source(&self, source: RetrievalSource) -> f64 {
        match source {
            RetrievalSource::SemanticOriginal => self.semantic_original,
            RetrievalSource::Keyword => self.keyword,
            RetrievalSource::SemanticReformulated => self.semantic_reformulated,
        }
    }
}

impl Default for FusionWeights {
    fn default() -> Self {
        Self {
            semantic_original: defaults::DEFAULT_SEMANTIC_WEIGHT,
            keyword: defaults::DEFAULT_KEYWORD_WEIGHT,
            semantic_reformulated: defaults::DEFAULT_REFORMULATED_WEIGHT,
        }
    }
}

/// Exact-match metadata constraints applied to retrieval hits.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentFilter {
    pub equals: BTreeMap<String, MetadataValue>,
}

impl DocumentFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_equals(mut self, key: impl Into<String>, value: impl Into<MetadataValue>) -> Self {
        self.equals.insert(key.into(), value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.equals.is_empty()
    }

    /// True when every constrained key is present with an equal value.
    pub fn matches(&self, metadata: &BTreeMap<String, MetadataValue>) -> bool {
        self.equals.iter().all(|(k, v)| metadata.get(k) == Some(v))
    }
}
