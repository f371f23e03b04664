//! SessionStore: concurrent session lifecycle via DashMap.

use chrono::Duration;
use dashmap::DashMap;
use tracing::{debug, info};
use uuid::Uuid;

use thalamus_core::config::SessionConfig;
use thalamus_core::errors::{SessionError, ThalamusResult};
use thalamus_core::models::Message;

use crate::session::Session;

/// How many messages a transcript retains, as a multiple of the
/// configured history window. Keeping twice the window lets the window
/// slide without ever re-reading dropped turns.
const RETAIN_FACTOR: usize = 2;

/// Thread-safe session store with idle-timeout expiry.
///
/// Expiry is lazy: reads and appends treat an idle session as missing and
/// drop it on contact. `sweep_expired` covers sessions nothing touches
/// anymore.
pub struct SessionStore {
    sessions: DashMap<String, Session>,
    config: SessionConfig,
}

impl SessionStore {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            sessions: DashMap::new(),
            config,
        }
    }

    /// Create a session and return its generated ID.
    pub fn create_session(&self) -> String {
        let id = Uuid::new_v4().to_string();
        self.sessions.insert(id.clone(), Session::new(id.clone()));
        debug!(session_id = %id, "session created");
        id
    }

    /// Cloned snapshot of a live session.
    ///
    /// An expired session is removed here and reported as absent.
    pub fn get_session(&self, session_id: &str) -> Option<Session> {
        let snapshot = self.sessions.get(session_id).map(|r| r.clone())?;
        if self.is_expired(&snapshot) {
            self.sessions.remove(session_id);
            debug!(session_id, "expired session dropped on read");
            return None;
        }
        Some(snapshot)
    }

    /// Replace a stored session wholesale.
    pub fn update_session(&self, session: Session) {
        self.sessions.insert(session.id.clone(), session);
    }

    /// Append one message to a live session's transcript.
    ///
    /// Fails with `SessionError::NotFound` when the session never existed
    /// or has idled out; callers decide whether that is fatal.
    pub fn append_message(&self, session_id: &str, message: Message) -> ThalamusResult<()> {
        let expired = match self.sessions.get_mut(session_id) {
            Some(mut entry) => {
                if self.is_expired(&entry) {
                    true
                } else {
                    entry.append(message, RETAIN_FACTOR * self.config.max_history);
                    return Ok(());
                }
            }
            None => false,
        };
        if expired {
            self.sessions.remove(session_id);
            debug!(session_id, "expired session dropped on append");
        }
        Err(SessionError::NotFound {
            id: session_id.to_string(),
        }
        .into())
    }

    /// The most recent `limit` messages of a session, oldest first.
    ///
    /// Unknown and expired sessions yield an empty history; reading is
    /// forgiving where appending is not.
    pub fn history(&self, session_id: &str, limit: usize) -> Vec<Message> {
        self.get_session(session_id)
            .map(|s| s.recent(limit).to_vec())
            .unwrap_or_default()
    }

    /// Remove a session. Returns whether it was present.
    pub fn delete_session(&self, session_id: &str) -> bool {
        self.sessions.remove(session_id).is_some()
    }

    /// Drop every session idle longer than the configured timeout.
    pub fn sweep_expired(&self) -> usize {
        let before = self.sessions.len();
        let timeout = self.timeout();
        self.sessions
            .retain(|_, session| session.idle_duration() <= timeout);
        let removed = before - self.sessions.len();
        if removed > 0 {
            info!(removed, "swept expired sessions");
        }
        removed
    }

    /// Number of stored sessions, expired ones included until swept.
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// IDs of all stored sessions.
    pub fn session_ids(&self) -> Vec<String> {
        self.sessions.iter().map(|r| r.key().clone()).collect()
    }

    fn timeout(&self) -> Duration {
        Duration::seconds(self.config.timeout_secs as i64)
    }

    fn is_expired(&self, session: &Session) -> bool {
        session.idle_duration() > self.timeout()
    }
}
