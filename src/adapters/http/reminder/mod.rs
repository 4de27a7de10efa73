//! HTTP adapter for reminder endpoints.

mod handlers;

use axum::routing::post;
use axum::Router;

use super::state::AppState;

pub use handlers::SendReminderRequest;

/// Routes:
/// - `POST /api/reminders` - Dispatch a prayer or good-deed reminder
pub fn reminder_router() -> Router<AppState> {
    Router::new().route("/api/reminders", post(handlers::send_reminder))
}
