//! DeleteConversationHandler - Discard a conversation and its transcript

use std::sync::Arc;

use super::ConversationHandlerError;
use crate::domain::foundation::ConversationId;
use crate::ports::SessionStore;

/// Command to delete a conversation
#[derive(Debug, Clone)]
pub struct DeleteConversationCommand {
    pub conversation_id: ConversationId,
}

/// Handler for deleting conversations
pub struct DeleteConversationHandler {
    store: Arc<dyn SessionStore>,
}

impl DeleteConversationHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Deletes the session.
    ///
    /// # Errors
    /// `NotFound` when no session has this id, so a second delete is a 404.
    pub async fn handle(
        &self,
        cmd: DeleteConversationCommand,
    ) -> Result<(), ConversationHandlerError> {
        if !self.store.exists(cmd.conversation_id).await? {
            return Err(ConversationHandlerError::NotFound(cmd.conversation_id));
        }

        self.store.delete(cmd.conversation_id).await?;

        tracing::info!(conversation_id = %cmd.conversation_id, "conversation deleted");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemorySessionStore;
    use crate::domain::conversation::ConversationSession;

    #[tokio::test]
    async fn test_delete_removes_session() {
        let store = Arc::new(InMemorySessionStore::new());
        let session = ConversationSession::new();
        store.save(&session).await.unwrap();
        let handler = DeleteConversationHandler::new(store.clone());

        handler
            .handle(DeleteConversationCommand {
                conversation_id: session.id(),
            })
            .await
            .unwrap();

        assert!(!store.exists(session.id()).await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_twice_is_not_found() {
        let store = Arc::new(InMemorySessionStore::new());
        let session = ConversationSession::new();
        store.save(&session).await.unwrap();
        let handler = DeleteConversationHandler::new(store);
        let cmd = DeleteConversationCommand {
            conversation_id: session.id(),
        };

        handler.handle(cmd.clone()).await.unwrap();
        let result = handler.handle(cmd).await;

        assert!(matches!(result, Err(ConversationHandlerError::NotFound(id)) if id == session.id()));
    }
}
