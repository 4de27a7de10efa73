//! Route configuration for conversation endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{
    cancel_intent, delete_conversation, export_conversation, get_conversation, select_intent, start_conversation,
    submit_question,
};
use crate::adapters::http::state::AppState;

/// Creates the conversation router with all endpoints.
///
/// Routes:
/// - `POST /api/conversations` - Start a conversation
/// - `GET /api/conversations/:id` - Conversation state and messages
/// - `DELETE /api/conversations/:id` - Discard a conversation
/// - `POST /api/conversations/:id/questions` - Submit a question
/// - `POST /api/conversations/:id/intent` - Select an intent
/// - `POST /api/conversations/:id/intent/cancel` - Cancel the clarification
/// - `GET /api/conversations/:id/export` - Download the transcript
pub fn conversation_router() -> Router<AppState> {
    Router::new()
        .route("/api/conversations", post(start_conversation))
        .route(
            "/api/conversations/:id",
            get(get_conversation).delete(delete_conversation),
        )
        .route("/api/conversations/:id/questions", post(submit_question))
        .route("/api/conversations/:id/intent", post(select_intent))
        .route("/api/conversations/:id/intent/cancel", post(cancel_intent))
        .route("/api/conversations/:id/export", get(export_conversation))
}
