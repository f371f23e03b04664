//! # thalamus-session
//!
//! Conversation session management: bounded transcripts, idle-timeout
//! expiry, and concurrent access via `DashMap`.

pub mod session;
pub mod store;

pub use session::Session;
pub use store::SessionStore;
