//! # thalamus-retrieval
//!
//! Retrieval strategies and rank fusion: a vector-search adapter, an
//! in-memory BM25 keyword retriever, weighted reciprocal-rank fusion,
//! and history-aware query reformulation.

pub mod fusion;
pub mod keyword;
pub mod reformulate;
pub mod semantic;

pub use fusion::{fuse, FusedHit, SourceList};
pub use keyword::KeywordRetriever;
pub use reformulate::{QueryReformulator, ReformulationOutcome};
pub use semantic::SemanticRetriever;
