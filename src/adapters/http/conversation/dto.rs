//! DTOs for conversation endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::advice::{AdviceResult, Intent};
use crate::domain::conversation::{ConversationMessage, ConversationSession, ConversationState, Turn};
use crate::domain::foundation::Timestamp;

/// Full view of a conversation.
#[derive(Debug, Clone, Serialize)]
pub struct ConversationResponse {
    pub conversation_id: String,
    pub state: ConversationState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending_question: Option<String>,
    pub messages: Vec<ConversationMessage>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<&ConversationSession> for ConversationResponse {
    fn from(session: &ConversationSession) -> Self {
        Self {
            conversation_id: session.id().to_string(),
            state: session.state(),
            pending_question: session.pending_question().map(str::to_string),
            messages: session.messages().to_vec(),
            created_at: *session.created_at(),
            updated_at: *session.updated_at(),
        }
    }
}

/// Request body for POST /api/conversations/:id/questions
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitQuestionRequest {
    pub question: String,
}

/// Request body for POST /api/conversations/:id/intent
#[derive(Debug, Clone, Deserialize)]
pub struct SelectIntentRequest {
    pub intent: Intent,
}

/// Outcome of one protocol step: what was appended and the resolver output.
#[derive(Debug, Clone, Serialize)]
pub struct TurnResponse {
    pub conversation_id: String,
    pub state: ConversationState,
    pub result: AdviceResult,
    pub messages: Vec<ConversationMessage>,
}

impl TurnResponse {
    pub fn new(session: &ConversationSession, turn: Turn) -> Self {
        Self {
            conversation_id: session.id().to_string(),
            state: session.state(),
            result: turn.result,
            messages: turn.messages,
        }
    }
}

/// Response for POST /api/conversations/:id/intent/cancel
#[derive(Debug, Clone, Serialize)]
pub struct CancelIntentResponse {
    pub conversation_id: String,
    pub cancelled: bool,
    pub state: ConversationState,
}
