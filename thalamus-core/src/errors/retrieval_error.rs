/// Retrieval subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    #[error("search failed on {retriever}: {reason}")]
    SearchFailed { retriever: String, reason: String },

    #[error("retrieval backend unavailable: {name}")]
    BackendUnavailable { name: String },
}
