//! CancelIntentHandler - Abandon a pending clarification

use std::sync::Arc;

use super::ConversationHandlerError;
use crate::domain::conversation::ConversationSession;
use crate::domain::foundation::ConversationId;
use crate::ports::SessionStore;

/// Command to cancel the pending clarification
#[derive(Debug, Clone)]
pub struct CancelIntentCommand {
    pub conversation_id: ConversationId,
}

/// Result of cancelling
#[derive(Debug, Clone)]
pub struct CancelIntentResult {
    /// Whether a clarification was actually pending.
    pub cancelled: bool,
    pub session: ConversationSession,
}

/// Handler for cancelling clarifications
pub struct CancelIntentHandler {
    store: Arc<dyn SessionStore>,
}

impl CancelIntentHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: CancelIntentCommand,
    ) -> Result<CancelIntentResult, ConversationHandlerError> {
        let mut session = self.store.load(cmd.conversation_id).await?;

        let cancelled = session.cancel_intent();
        if cancelled {
            self.store.save(&session).await?;
        }

        Ok(CancelIntentResult { cancelled, session })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemorySessionStore;
    use crate::domain::advice::AdviceResolver;
    use crate::domain::conversation::ConversationState;

    #[tokio::test]
    async fn cancels_pending_clarification() {
        let store = Arc::new(InMemorySessionStore::new());
        let mut session = ConversationSession::new();
        session
            .submit_question(&AdviceResolver::default(), "cravate rouge ?")
            .unwrap();
        store.save(&session).await.unwrap();
        let handler = CancelIntentHandler::new(store.clone());

        let result = handler
            .handle(CancelIntentCommand {
                conversation_id: session.id(),
            })
            .await
            .unwrap();

        assert!(result.cancelled);
        let saved = store.load(session.id()).await.unwrap();
        assert_eq!(saved.state(), ConversationState::AwaitingVerdict);
        assert_eq!(saved.messages().len(), session.messages().len());
    }

    #[tokio::test]
    async fn cancel_is_idempotent() {
        let store = Arc::new(InMemorySessionStore::new());
        let session = ConversationSession::new();
        store.save(&session).await.unwrap();
        let handler = CancelIntentHandler::new(store);

        let result = handler
            .handle(CancelIntentCommand {
                conversation_id: session.id(),
            })
            .await
            .unwrap();

        assert!(!result.cancelled);
        assert_eq!(result.session.state(), ConversationState::AwaitingVerdict);
    }
}
