use async_trait::async_trait;

use crate::errors::ThalamusResult;
use crate::models::ScoredDocument;

/// External vector index searched by embedding similarity.
///
/// Embedding generation and index persistence live behind this seam.
/// Distances follow the index's own metric, lower meaning closer, and
/// results arrive already sorted.
#[async_trait]
pub trait IEmbeddingSearch: Send + Sync {
    /// Return the `k` nearest documents for the query text.
    async fn search(&self, query: &str, k: usize) -> ThalamusResult<Vec<ScoredDocument>>;

    /// Human-readable backend name.
    fn name(&self) -> &str;
}
