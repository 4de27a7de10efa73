//! Route configuration for advice endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{list_intents, preview_match, resolve_advice};
use crate::adapters::http::state::AppState;

/// Creates the advice router.
///
/// Routes:
/// - `POST /api/advice/resolve` - Resolve a question, optionally with an intent
/// - `POST /api/advice/match` - Preview the matching rule
/// - `GET /api/advice/intents` - Intent selector choices
pub fn advice_router() -> Router<AppState> {
    Router::new()
        .route("/api/advice/resolve", post(resolve_advice))
        .route("/api/advice/match", post(preview_match))
        .route("/api/advice/intents", get(list_intents))
}
