//! HTTP handlers for reminder endpoints.

use axum::extract::{Json, State};
use serde::Deserialize;

use crate::application::handlers::SendReminderCommand;
use crate::domain::reminder::{Reminder, ReminderKind};

use crate::adapters::http::error::ApiError;
use crate::adapters::http::extract::ApiJson;
use crate::adapters::http::state::AppState;

/// Request body for POST /api/reminders
#[derive(Debug, Clone, Deserialize)]
pub struct SendReminderRequest {
    pub kind: ReminderKind,
}

/// POST /api/reminders - Dispatch a reminder and echo it back for display
pub async fn send_reminder(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<SendReminderRequest>,
) -> Result<Json<Reminder>, ApiError> {
    let reminder = state
        .send_reminder_handler()
        .handle(SendReminderCommand { kind: request.kind })
        .await
        .map_err(|e| state.reject(e))?;

    Ok(Json(reminder))
}
