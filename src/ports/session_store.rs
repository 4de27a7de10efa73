//! Session Store Port - Interface for keeping conversation sessions.
//!
//! Sessions live only for the running process; this port lets the HTTP
//! layer load, mutate and save them by id.

use async_trait::async_trait;

use crate::domain::conversation::ConversationSession;
use crate::domain::foundation::ConversationId;

/// Errors that can occur during session store operations
#[derive(Debug, thiserror::Error)]
pub enum SessionStoreError {
    #[error("Conversation not found: {0}")]
    NotFound(ConversationId),

    #[error("Session storage unavailable: {0}")]
    Unavailable(String),
}

/// Port for saving and loading conversation sessions
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Saves a session, replacing any previous version with the same id.
    async fn save(&self, session: &ConversationSession) -> Result<(), SessionStoreError>;

    /// Loads a session.
    ///
    /// # Errors
    /// Returns `SessionStoreError::NotFound` if no session has this id
    async fn load(&self, id: ConversationId) -> Result<ConversationSession, SessionStoreError>;

    /// Returns true if a session with this id exists.
    async fn exists(&self, id: ConversationId) -> Result<bool, SessionStoreError>;

    /// Removes a session. Removing an unknown id is not an error.
    async fn delete(&self, id: ConversationId) -> Result<(), SessionStoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_mentions_conversation_id() {
        let id = ConversationId::new();
        let err = SessionStoreError::NotFound(id);
        assert!(err.to_string().contains(&id.to_string()));
    }

    #[test]
    fn unavailable_carries_reason() {
        let err = SessionStoreError::Unavailable("lock poisoned".to_string());
        assert_eq!(err.to_string(), "Session storage unavailable: lock poisoned");
    }
}
