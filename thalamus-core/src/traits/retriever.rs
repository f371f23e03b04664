use async_trait::async_trait;

use crate::errors::ThalamusResult;
use crate::models::ScoredDocument;

/// A ranked-retrieval strategy over the corpus.
///
/// Implementations are deterministic for a fixed corpus and query, return
/// at most `limit` hits sorted by ascending distance, and report an empty
/// list rather than an error when nothing matches.
#[async_trait]
pub trait IRetriever: Send + Sync {
    /// Search the corpus, returning at most `limit` scored documents.
    async fn search(&self, query: &str, limit: usize) -> ThalamusResult<Vec<ScoredDocument>>;

    /// Human-readable retriever name.
    fn name(&self) -> &str;

    /// Whether this retriever can currently serve queries.
    fn is_available(&self) -> bool;
}
