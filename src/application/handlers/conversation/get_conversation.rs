//! GetConversationHandler - Query handler for retrieving a conversation.

use std::sync::Arc;

use super::ConversationHandlerError;
use crate::domain::conversation::ConversationSession;
use crate::domain::foundation::ConversationId;
use crate::ports::SessionStore;

/// Query to get a conversation.
#[derive(Debug, Clone)]
pub struct GetConversationQuery {
    pub conversation_id: ConversationId,
}

/// Handler for getting conversations.
pub struct GetConversationHandler {
    store: Arc<dyn SessionStore>,
}

impl GetConversationHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        query: GetConversationQuery,
    ) -> Result<ConversationSession, ConversationHandlerError> {
        Ok(self.store.load(query.conversation_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemorySessionStore;

    #[tokio::test]
    async fn returns_stored_session() {
        let store = Arc::new(InMemorySessionStore::new());
        let session = ConversationSession::new();
        store.save(&session).await.unwrap();

        let handler = GetConversationHandler::new(store);
        let found = handler
            .handle(GetConversationQuery {
                conversation_id: session.id(),
            })
            .await
            .unwrap();

        assert_eq!(found, session);
    }

    #[tokio::test]
    async fn unknown_conversation_is_not_found() {
        let handler = GetConversationHandler::new(Arc::new(InMemorySessionStore::new()));
        let id = ConversationId::new();

        let result = handler
            .handle(GetConversationQuery { conversation_id: id })
            .await;

        assert!(matches!(result, Err(ConversationHandlerError::NotFound(found)) if found == id));
    }
}
