//! In-memory BM25 keyword retrieval.
//!
//! Okapi BM25 over a corpus snapshot held in memory. Raw similarity `s`
//! is exposed as `distance = 1 / (1 + s)` so fusion and relevance
//! reporting see the same convention as vector search.

mod index;
mod tokenizer;

use std::cmp::Ordering;
use std::collections::HashMap;

use async_trait::async_trait;
use thalamus_core::constants::{BM25_B, BM25_K1};
use thalamus_core::errors::ThalamusResult;
use thalamus_core::models::{Document, ScoredDocument};
use thalamus_core::traits::IRetriever;
use tracing::debug;

use self::index::InvertedIndex;
use self::tokenizer::tokenize;

/// BM25 keyword retriever over an in-memory corpus.
///
/// Only documents containing at least one query term are scored, so a
/// query with no corpus overlap returns an empty list rather than padding
/// with zero-score hits.
pub struct KeywordRetriever {
    documents: Vec<Document>,
    index: InvertedIndex,
}

impl KeywordRetriever {
    /// Build from a corpus snapshot.
    ///
    /// Returns `None` for an empty corpus; the caller logs the degradation
    /// and continues semantic-only.
    pub fn from_corpus(documents: Vec<Document>) -> Option<Self> {
        if documents.is_empty() {
            return None;
        }
        let mut index = InvertedIndex::default();
        for doc in &documents {
            index.add_document(&doc.content);
        }
        debug!(documents = documents.len(), "built keyword index");
        Some(Self { documents, index })
    }

    pub fn doc_count(&self) -> usize {
        self.documents.len()
    }

    /// Accumulated BM25 score per document ordinal for the query terms.
    fn scores_for(&self, query: &str) -> HashMap<usize, f64> {
        let mut scores: HashMap<usize, f64> = HashMap::new();
        let query_tokens = tokenize(query);
        if query_tokens.is_empty() {
            return scores;
        }

        let n = self.index.doc_count() as f64;
        let avgdl = self.index.average_doc_length();

        for token in &query_tokens {
            let Some(postings) = self.index.postings(token) else {
                continue;
            };
            let df = postings.len() as f64;
            // IDF: log((N - df + 0.5) / (df + 0.5) + 1)
            let idf = ((n - df + 0.5) / (df + 0.5) + 1.0).ln();

            for posting in postings {
                let dl = self.index.doc_length(posting.doc) as f64;
                let tf = posting.term_frequency as f64;
                let tf_norm =
                    (tf * (BM25_K1 + 1.0)) / (tf + BM25_K1 * (1.0 - BM25_B + BM25_B * dl / avgdl));
                *scores.entry(posting.doc).or_insert(0.0) += idf * tf_norm;
            }
        }
        scores
    }
}

#[async_trait]
impl IRetriever for KeywordRetriever {
    async fn search(&self, query: &str, limit: usize) -> ThalamusResult<Vec<ScoredDocument>> {
        let mut ranked: Vec<(usize, f64)> = self.scores_for(query).into_iter().collect();
        // Descending score; equal scores break by corpus ordinal so results
        // are deterministic for a fixed corpus and query.
        ranked.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(Ordering::Equal)
                .then(a.0.cmp(&b.0))
        });
        ranked.truncate(limit);

        let hits: Vec<ScoredDocument> = ranked
            .into_iter()
            .map(|(doc, score)| {
                ScoredDocument::new(self.documents[doc].clone(), 1.0 / (1.0 + score))
            })
            .collect();
        debug!(%query, hits = hits.len(), "keyword search complete");
        Ok(hits)
    }

    fn name(&self) -> &str {
        "keyword"
    }

    fn is_available(&self) -> bool {
        !self.documents.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> Vec<Document> {
        vec![
            Document::new("the return policy allows returns within 30 days"),
            Document::new("shipping is free for orders over fifty dollars"),
            Document::new("payment methods include visa and mastercard"),
        ]
    }

    #[tokio::test]
    async fn exact_term_match_ranks_first() {
        let retriever = KeywordRetriever::from_corpus(corpus()).unwrap();
        let hits = retriever.search("return policy", 3).await.unwrap();
        assert!(!hits.is_empty());
        assert!(hits[0].document.content.contains("return policy"));
    }

    #[tokio::test]
    async fn non_matching_query_returns_empty() {
        let retriever = KeywordRetriever::from_corpus(corpus()).unwrap();
        let hits = retriever.search("quantum chromodynamics", 3).await.unwrap();
        assert!(hits.is_empty());
    }

    #[tokio::test]
    async fn empty_query_returns_empty() {
        let retriever = KeywordRetriever::from_corpus(corpus()).unwrap();
        assert!(retriever.search("", 3).await.unwrap().is_empty());
    }

    #[test]
    fn empty_corpus_yields_no_retriever() {
        assert!(KeywordRetriever::from_corpus(Vec::new()).is_none());
    }

    #[tokio::test]
    async fn distances_invert_similarity() {
        let retriever = KeywordRetriever::from_corpus(corpus()).unwrap();
        let hits = retriever.search("shipping orders", 3).await.unwrap();
        // A positive BM25 score maps below 1.0; relevance stays in (0.5, 1.0).
        for hit in &hits {
            assert!(hit.distance > 0.0 && hit.distance < 1.0);
            assert!(hit.relevance() > 0.5);
        }
    }

    #[tokio::test]
    async fn respects_limit() {
        let retriever = KeywordRetriever::from_corpus(corpus()).unwrap();
        let hits = retriever.search("the and for is", 1).await.unwrap();
        assert!(hits.len() <= 1);
    }
}
