//! SubmitQuestionHandler - Ask a new question in a conversation

use std::sync::Arc;

use super::ConversationHandlerError;
use crate::domain::advice::Advisor;
use crate::domain::conversation::{ConversationSession, Turn};
use crate::domain::foundation::ConversationId;
use crate::ports::SessionStore;

/// Command to submit a question
#[derive(Debug, Clone)]
pub struct SubmitQuestionCommand {
    pub conversation_id: ConversationId,
    pub question: String,
}

/// Result of submitting a question
#[derive(Debug, Clone)]
pub struct SubmitQuestionResult {
    pub turn: Turn,
    pub session: ConversationSession,
}

/// Handler for new questions
pub struct SubmitQuestionHandler {
    store: Arc<dyn SessionStore>,
    advisor: Arc<dyn Advisor>,
}

impl SubmitQuestionHandler {
    pub fn new(store: Arc<dyn SessionStore>, advisor: Arc<dyn Advisor>) -> Self {
        Self { store, advisor }
    }

    pub async fn handle(
        &self,
        cmd: SubmitQuestionCommand,
    ) -> Result<SubmitQuestionResult, ConversationHandlerError> {
        // 1. Load session
        let mut session = self.store.load(cmd.conversation_id).await?;

        // 2. Resolve and record the exchange
        let turn = session.submit_question(self.advisor.as_ref(), &cmd.question)?;

        // 3. Persist
        self.store.save(&session).await?;

        tracing::debug!(
            conversation_id = %cmd.conversation_id,
            state = ?session.state(),
            "question submitted"
        );

        Ok(SubmitQuestionResult { turn, session })
    }
}
