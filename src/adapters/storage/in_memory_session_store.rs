//! In-Memory Session Store Adapter
//!
//! Keeps conversation sessions in memory for the lifetime of the process.
//! The store is bounded: saving a new session into a full store first evicts
//! the session that was updated least recently.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::conversation::ConversationSession;
use crate::domain::foundation::ConversationId;
use crate::ports::{SessionStore, SessionStoreError};

const DEFAULT_MAX_SESSIONS: usize = 10_000;

/// In-memory storage for conversation sessions
#[derive(Debug, Clone)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<ConversationId, ConversationSession>>>,
    capacity: usize,
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_MAX_SESSIONS)
    }
}

impl InMemorySessionStore {
    /// Create a new in-memory store with the default capacity
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that keeps at most `capacity` sessions (minimum 1)
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            sessions: Arc::default(),
            capacity: capacity.max(1),
        }
    }

    #[cfg(test)]
    pub(crate) async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

fn least_recently_updated(
    sessions: &HashMap<ConversationId, ConversationSession>,
) -> Option<ConversationId> {
    sessions
        .values()
        .min_by_key(|session| *session.updated_at())
        .map(ConversationSession::id)
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn save(&self, session: &ConversationSession) -> Result<(), SessionStoreError> {
        let mut sessions = self.sessions.write().await;
        if !sessions.contains_key(&session.id()) && sessions.len() >= self.capacity {
            if let Some(oldest) = least_recently_updated(&sessions) {
                sessions.remove(&oldest);
                tracing::debug!(
                    conversation_id = %oldest,
                    capacity = self.capacity,
                    "evicted least recently updated conversation"
                );
            }
        }
        sessions.insert(session.id(), session.clone());
        Ok(())
    }

    async fn load(&self, id: ConversationId) -> Result<ConversationSession, SessionStoreError> {
        let sessions = self.sessions.read().await;
        sessions
            .get(&id)
            .cloned()
            .ok_or(SessionStoreError::NotFound(id))
    }

    async fn exists(&self, id: ConversationId) -> Result<bool, SessionStoreError> {
        Ok(self.sessions.read().await.contains_key(&id))
    }

    async fn delete(&self, id: ConversationId) -> Result<(), SessionStoreError> {
        self.sessions.write().await.remove(&id);
        Ok(())
    }
}
