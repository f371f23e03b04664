/// Text generation errors.
///
/// `RequestFailed` is what a generator implementation reports for one
/// call; the remaining variants are produced by the pipeline's retry and
/// timeout wrapper.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("generation request failed: {reason}")]
    RequestFailed { reason: String },

    #[error("generation failed after {attempts} attempt(s): {reason}")]
    RetriesExhausted { attempts: u32, reason: String },

    #[error("generation timed out after {waited_ms}ms")]
    TimedOut { waited_ms: u64 },

    #[error("generator returned an empty response")]
    EmptyResponse,
}
