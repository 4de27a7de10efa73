//! ExportConversationHandler - Render a conversation as a plain-text transcript

use std::sync::Arc;

use super::ConversationHandlerError;
use crate::domain::conversation::{export_transcript, TRANSCRIPT_FILE_NAME};
use crate::domain::foundation::ConversationId;
use crate::ports::SessionStore;

/// Query to export a conversation
#[derive(Debug, Clone)]
pub struct ExportConversationQuery {
    pub conversation_id: ConversationId,
}

/// Exported transcript and its suggested file name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationTranscript {
    pub file_name: &'static str,
    pub content: String,
}

/// Handler for transcript export
pub struct ExportConversationHandler {
    store: Arc<dyn SessionStore>,
}

impl ExportConversationHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        query: ExportConversationQuery,
    ) -> Result<ConversationTranscript, ConversationHandlerError> {
        let session = self.store.load(query.conversation_id).await?;
        Ok(ConversationTranscript {
            file_name: TRANSCRIPT_FILE_NAME,
            content: export_transcript(session.messages()),
        })
    }
}
