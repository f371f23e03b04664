//! # thalamus-pipeline
//!
//! The answer pipeline: sequences history, query reformulation, concurrent
//! hybrid retrieval, rank fusion, answer generation, and grounding
//! assessment behind one `process_query` call.

pub mod engine;
pub mod prompts;
pub mod telemetry;

pub use engine::{AnswerPipeline, PipelineStatus, QueryRequest};
