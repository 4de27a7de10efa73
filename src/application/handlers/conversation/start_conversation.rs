//! StartConversationHandler - Open a new conversation session

use std::sync::Arc;

use super::ConversationHandlerError;
use crate::domain::conversation::ConversationSession;
use crate::ports::SessionStore;

/// Result of starting a conversation
#[derive(Debug, Clone)]
pub struct StartConversationResult {
    pub session: ConversationSession,
}

/// Handler for starting conversations
pub struct StartConversationHandler {
    store: Arc<dyn SessionStore>,
}

impl StartConversationHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self) -> Result<StartConversationResult, ConversationHandlerError> {
        let session = ConversationSession::new();
        self.store.save(&session).await?;

        tracing::info!(conversation_id = %session.id(), "conversation started");

        Ok(StartConversationResult { session })
    }
}
