//! # thalamus-grounding
//!
//! Heuristic grounding assessment: scores how likely an answer is
//! unsupported by its evidence, plus surface quality metrics. Everything
//! here is pure and synchronous so assessments can be re-run against
//! stored answers.

mod phrases;

pub mod quality;
pub mod scorer;

pub use quality::quality;
pub use scorer::GroundingScorer;
