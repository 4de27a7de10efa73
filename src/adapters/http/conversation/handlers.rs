//! HTTP handlers for conversation endpoints.
//!
//! These handlers connect Axum routes to the conversation command and query
//! handlers. Every path id is parsed before any handler runs.

use axum::extract::{Json, Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;

use crate::application::handlers::{
    CancelIntentCommand, DeleteConversationCommand, ExportConversationQuery, GetConversationQuery, SelectIntentCommand,
    SubmitQuestionCommand,
};
use crate::domain::foundation::ConversationId;

use super::dto::{
    CancelIntentResponse, ConversationResponse, SelectIntentRequest, SubmitQuestionRequest,
    TurnResponse,
};
use crate::adapters::http::error::ApiError;
use crate::adapters::http::extract::ApiJson;
use crate::adapters::http::state::AppState;

fn parse_conversation_id(raw: &str) -> Result<ConversationId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::invalid_conversation_id(raw))
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers (POST endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/conversations - Start a new conversation
pub async fn start_conversation(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let result = state
        .start_conversation_handler()
        .handle()
        .await
        .map_err(|e| state.reject(e))?;

    Ok((
        StatusCode::CREATED,
        Json(ConversationResponse::from(&result.session)),
    ))
}

/// POST /api/conversations/:id/questions - Ask a question
pub async fn submit_question(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(request): ApiJson<SubmitQuestionRequest>,
) -> Result<Json<TurnResponse>, ApiError> {
    let cmd = SubmitQuestionCommand {
        conversation_id: parse_conversation_id(&id)?,
        question: request.question,
    };

    let result = state
        .submit_question_handler()
        .handle(cmd)
        .await
        .map_err(|e| state.reject(e))?;

    Ok(Json(TurnResponse::new(&result.session, result.turn)))
}

/// POST /api/conversations/:id/intent - Answer the pending clarification
pub async fn select_intent(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(request): ApiJson<SelectIntentRequest>,
) -> Result<Json<TurnResponse>, ApiError> {
    let cmd = SelectIntentCommand {
        conversation_id: parse_conversation_id(&id)?,
        intent: request.intent,
    };

    let result = state
        .select_intent_handler()
        .handle(cmd)
        .await
        .map_err(|e| state.reject(e))?;

    Ok(Json(TurnResponse::new(&result.session, result.turn)))
}

/// POST /api/conversations/:id/intent/cancel - Abandon the pending clarification
pub async fn cancel_intent(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CancelIntentResponse>, ApiError> {
    let cmd = CancelIntentCommand {
        conversation_id: parse_conversation_id(&id)?,
    };

    let result = state
        .cancel_intent_handler()
        .handle(cmd)
        .await
        .map_err(|e| state.reject(e))?;

    Ok(Json(CancelIntentResponse {
        conversation_id: result.session.id().to_string(),
        cancelled: result.cancelled,
        state: result.session.state(),
    }))
}

/// DELETE /api/conversations/:id - Discard a conversation
pub async fn delete_conversation(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let cmd = DeleteConversationCommand {
        conversation_id: parse_conversation_id(&id)?,
    };

    state
        .delete_conversation_handler()
        .handle(cmd)
        .await
        .map_err(|e| state.reject(e))?;

    Ok(StatusCode::NO_CONTENT)
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers (GET endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/conversations/:id - Conversation state and messages
pub async fn get_conversation(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ConversationResponse>, ApiError> {
    let query = GetConversationQuery {
        conversation_id: parse_conversation_id(&id)?,
    };

    let session = state
        .get_conversation_handler()
        .handle(query)
        .await
        .map_err(|e| state.reject(e))?;

    Ok(Json(ConversationResponse::from(&session)))
}

/// GET /api/conversations/:id/export - Plain-text transcript download
pub async fn export_conversation(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let query = ExportConversationQuery {
        conversation_id: parse_conversation_id(&id)?,
    };

    let transcript = state
        .export_conversation_handler()
        .handle(query)
        .await
        .map_err(|e| state.reject(e))?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", transcript.file_name),
            ),
        ],
        transcript.content,
    ))
}
