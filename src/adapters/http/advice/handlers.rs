//! HTTP handlers for stateless advice endpoints.

use axum::extract::{Json, State};

use crate::application::handlers::{PreviewMatchQuery, ResolveAdviceCommand};
use crate::domain::advice::{AdviceResult, Intent};

use super::dto::{IntentOption, MatchRequest, MatchResponse, ResolveAdviceRequest};
use crate::adapters::http::error::ApiError;
use crate::adapters::http::extract::ApiJson;
use crate::adapters::http::state::AppState;

/// POST /api/advice/resolve - One-shot resolution without a session
pub async fn resolve_advice(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<ResolveAdviceRequest>,
) -> Result<Json<AdviceResult>, ApiError> {
    let cmd = ResolveAdviceCommand {
        question: request.question,
        intent: request.intent,
    };
    let result = state
        .resolve_advice_handler()
        .handle(cmd)
        .map_err(|e| state.reject(e))?;

    Ok(Json(result))
}

/// POST /api/advice/match - Which rule a question falls under
pub async fn preview_match(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<MatchRequest>,
) -> Json<MatchResponse> {
    let rule = state.preview_match_handler().handle(PreviewMatchQuery {
        question: request.question,
    });
    Json(MatchResponse { rule })
}

/// GET /api/advice/intents - The intent selector menu
pub async fn list_intents() -> Json<Vec<IntentOption>> {
    Json(Intent::menu().into_iter().map(IntentOption::from).collect())
}
