//! # thalamus-core
//!
//! Foundation crate for the Thalamus answer engine.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::ThalamusConfig;
pub use errors::{ThalamusError, ThalamusResult};
pub use models::{Document, Message, Role, ScoredDocument};
