//! SelectIntentHandler - Answer a pending clarification with an intent

use std::sync::Arc;

use super::ConversationHandlerError;
use crate::domain::advice::{Advisor, Intent};
use crate::domain::conversation::{ConversationSession, Turn};
use crate::domain::foundation::ConversationId;
use crate::ports::SessionStore;

/// Command to select an intent for the pending question
#[derive(Debug, Clone)]
pub struct SelectIntentCommand {
    pub conversation_id: ConversationId,
    pub intent: Intent,
}

/// Result of selecting an intent
#[derive(Debug, Clone)]
pub struct SelectIntentResult {
    pub turn: Turn,
    pub session: ConversationSession,
}

/// Handler for intent selection
pub struct SelectIntentHandler {
    store: Arc<dyn SessionStore>,
    advisor: Arc<dyn Advisor>,
}

impl SelectIntentHandler {
    pub fn new(store: Arc<dyn SessionStore>, advisor: Arc<dyn Advisor>) -> Self {
        Self { store, advisor }
    }

    pub async fn handle(
        &self,
        cmd: SelectIntentCommand,
    ) -> Result<SelectIntentResult, ConversationHandlerError> {
        let mut session = self.store.load(cmd.conversation_id).await?;

        let turn = session.select_intent(self.advisor.as_ref(), cmd.intent.clone())?;

        self.store.save(&session).await?;

        tracing::debug!(
            conversation_id = %cmd.conversation_id,
            intent = %cmd.intent,
            "intent selected"
        );

        Ok(SelectIntentResult { turn, session })
    }
}
