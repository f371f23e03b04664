//! Weighted Reciprocal Rank Fusion: score = Σ weight × 1/(rank + 60)
//!
//! Combines ranked lists from heterogeneous retrievers into one ranking
//! without score normalization across retrieval methods. The damping
//! constant flattens the steep early-rank advantage typical of small
//! corpora and is fixed, not tunable per call.

use std::collections::HashMap;

use thalamus_core::constants::RRF_DAMPING;
use thalamus_core::models::{RetrievalSource, ScoredDocument};

/// One fusion input: a ranked list tagged with its source and weight.
#[derive(Debug, Clone)]
pub struct SourceList {
    pub source: RetrievalSource,
    pub weight: f64,
    pub hits: Vec<ScoredDocument>,
}

impl SourceList {
    pub fn new(source: RetrievalSource, weight: f64, hits: Vec<ScoredDocument>) -> Self {
        Self {
            source,
            weight,
            hits,
        }
    }
}

/// A candidate after fusion.
#[derive(Debug, Clone)]
pub struct FusedHit {
    /// First-seen hit for this identity; its distance is preserved so
    /// downstream relevance reporting stays consistent.
    pub hit: ScoredDocument,
    /// Cumulative fused score (higher = more relevant).
    pub score: f64,
}

/// Fuse ranked lists into one list of at most `limit` candidates.
///
/// A document at 0-based rank `r` in a list with weight `w` contributes
/// `w / (r + RRF_DAMPING)` to its cumulative score. Identity for merging
/// is the blake3 hash of the full content, so lexically distinct chunks
/// never merge. Ordering is descending cumulative score with ties broken
/// by overall first-seen order.
///
/// A single input list passes through in its original order apart from
/// truncation.
pub fn fuse(lists: Vec<SourceList>, limit: usize) -> Vec<FusedHit> {
    if lists.len() == 1 {
        let list = lists.into_iter().next().unwrap_or_else(|| unreachable!());
        return list
            .hits
            .into_iter()
            .enumerate()
            .take(limit)
            .map(|(rank, hit)| FusedHit {
                hit,
                score: contribution(list.weight, rank),
            })
            .collect();
    }

    struct Entry {
        hit: ScoredDocument,
        score: f64,
        first_seen: usize,
    }

    let mut merged: HashMap<String, Entry> = HashMap::new();
    let mut seen = 0usize;

    for list in &lists {
        for (rank, hit) in list.hits.iter().enumerate() {
            let key = hit.document.content_hash();
            match merged.get_mut(&key) {
                Some(entry) => entry.score += contribution(list.weight, rank),
                None => {
                    merged.insert(
                        key,
                        Entry {
                            hit: hit.clone(),
                            score: contribution(list.weight, rank),
                            first_seen: seen,
                        },
                    );
                    seen += 1;
                }
            }
        }
    }

    let mut entries: Vec<Entry> = merged.into_values().collect();
    entries.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.first_seen.cmp(&b.first_seen))
    });
    entries.truncate(limit);
    entries
        .into_iter()
        .map(|e| FusedHit {
            hit: e.hit,
            score: e.score,
        })
        .collect()
}

fn contribution(weight: f64, rank: usize) -> f64 {
    weight * (1.0 / (rank as f64 + RRF_DAMPING))
}
