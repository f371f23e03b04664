//! Session: one conversation's transcript and activity timestamps.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use thalamus_core::models::Message;

/// Per-conversation state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Unique session identifier.
    pub id: String,
    /// Transcript, oldest first.
    pub messages: Vec<Message>,
    /// When this session was created.
    pub created_at: DateTime<Utc>,
    /// Last append timestamp; expiry is measured from here.
    pub last_active_at: DateTime<Utc>,
}

impl Session {
    /// Create an empty session.
    pub fn new(id: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            messages: Vec::new(),
            created_at: now,
            last_active_at: now,
        }
    }

    /// Append a message and refresh the activity timestamp.
    ///
    /// The transcript keeps at most `retain` messages; older ones are
    /// dropped from the front.
    pub fn append(&mut self, message: Message, retain: usize) {
        self.messages.push(message);
        if self.messages.len() > retain {
            let overflow = self.messages.len() - retain;
            self.messages.drain(..overflow);
        }
        self.last_active_at = Utc::now();
    }

    /// The most recent `limit` messages, oldest first.
    pub fn recent(&self, limit: usize) -> &[Message] {
        let start = self.messages.len().saturating_sub(limit);
        &self.messages[start..]
    }

    /// Duration since the last append (or creation).
    pub fn idle_duration(&self) -> chrono::Duration {
        Utc::now() - self.last_active_at
    }
}
