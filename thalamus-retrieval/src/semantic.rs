//! Vector-search adapter implementing the retriever seam.

use std::sync::Arc;

use async_trait::async_trait;
use thalamus_core::config::defaults;
use thalamus_core::errors::ThalamusResult;
use thalamus_core::models::{DocumentFilter, ScoredDocument};
use thalamus_core::traits::{IEmbeddingSearch, IRetriever};
use tracing::debug;

/// Adapter over an external vector index.
///
/// With a metadata filter set, over-fetches `overfetch × limit` hits so
/// filtering still leaves enough candidates, then truncates to `limit`.
/// The backend returns hits already sorted by its own distance metric.
pub struct SemanticRetriever {
    backend: Arc<dyn IEmbeddingSearch>,
    filter: Option<DocumentFilter>,
    overfetch: usize,
}

impl SemanticRetriever {
    pub fn new(backend: Arc<dyn IEmbeddingSearch>) -> Self {
        Self {
            backend,
            filter: None,
            overfetch: defaults::DEFAULT_FILTER_OVERFETCH,
        }
    }

    /// Restrict results to documents matching the filter.
    pub fn with_filter(mut self, filter: DocumentFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn with_overfetch(mut self, overfetch: usize) -> Self {
        self.overfetch = overfetch.max(1);
        self
    }

    pub fn backend_name(&self) -> &str {
        self.backend.name()
    }
}

#[async_trait]
impl IRetriever for SemanticRetriever {
    async fn search(&self, query: &str, limit: usize) -> ThalamusResult<Vec<ScoredDocument>> {
        let filter = self.filter.as_ref().filter(|f| !f.is_empty());
        let fetch = if filter.is_some() {
            limit * self.overfetch
        } else {
            limit
        };

        let mut hits = self.backend.search(query, fetch).await?;
        if let Some(filter) = filter {
            hits.retain(|hit| filter.matches(&hit.document.metadata));
        }
        hits.truncate(limit);
        debug!(
            %query,
            hits = hits.len(),
            backend = self.backend.name(),
            "semantic search complete"
        );
        Ok(hits)
    }

    fn name(&self) -> &str {
        "semantic"
    }

    fn is_available(&self) -> bool {
        true
    }
}
