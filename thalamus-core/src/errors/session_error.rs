/// Session subsystem errors.
///
/// An expired session is indistinguishable from a missing one: expiry is
/// applied lazily on access, so both surface as `NotFound`.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("session not found: {id}")]
    NotFound { id: String },
}
