pub mod config_error;
pub mod generation_error;
pub mod retrieval_error;
pub mod session_error;

pub use config_error::ConfigError;
pub use generation_error::GenerationError;
pub use retrieval_error::RetrievalError;
pub use session_error::SessionError;

/// Umbrella error for the whole engine.
///
/// Subsystem errors convert in via `From`; the handful of variants defined
/// here carry context that belongs to no single subsystem.
#[derive(Debug, thiserror::Error)]
pub enum ThalamusError {
    #[error("deadline exceeded during {stage}")]
    DeadlineExceeded { stage: String },

    #[error("retrieval error: {0}")]
    RetrievalError(#[from] RetrievalError),

    #[error("session error: {0}")]
    SessionError(#[from] SessionError),

    #[error("generation error: {0}")]
    GenerationError(#[from] GenerationError),

    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Convenience alias used across the workspace.
pub type ThalamusResult<T> = Result<T, ThalamusError>;
