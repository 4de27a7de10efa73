//! Shared HTTP error mapping.
//!
//! Every handler error is first lowered into a [`DomainError`], whose code
//! decides the status. The body is always `{code, message}`.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::application::handlers::{
    ConversationHandlerError, ResolveAdviceError, SendReminderError,
};
use crate::domain::foundation::{DomainError, ErrorCode};

const REDACTED_MESSAGE: &str = "An internal error occurred";

/// Standard error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Additional error details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl From<&DomainError> for ErrorResponse {
    fn from(err: &DomainError) -> Self {
        let details = if err.details.is_empty() {
            None
        } else {
            serde_json::to_value(&err.details).ok()
        };
        Self {
            code: err.code.to_string(),
            message: err.message.clone(),
            details,
        }
    }
}

/// API error type that converts domain errors to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(DomainError),
    NotFound(DomainError),
    Conflict(DomainError),
    Internal(DomainError),
}

impl ApiError {
    pub fn invalid_conversation_id(raw: &str) -> Self {
        ApiError::BadRequest(
            DomainError::new(ErrorCode::InvalidFormat, "Invalid conversation ID format")
                .with_detail("conversation_id", raw),
        )
    }

    /// Replaces internal failure messages with a generic one unless
    /// `verbose` is set.
    pub fn redacted(self, verbose: bool) -> Self {
        match self {
            ApiError::Internal(err) if !verbose => {
                tracing::error!(error = %err, "internal error");
                ApiError::Internal(DomainError::new(err.code, REDACTED_MESSAGE))
            }
            other => other,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed | ErrorCode::EmptyField | ErrorCode::InvalidFormat => {
                ApiError::BadRequest(err)
            }
            ErrorCode::ConversationNotFound => ApiError::NotFound(err),
            ErrorCode::NoPendingQuestion | ErrorCode::RemindersDisabled => {
                ApiError::Conflict(err)
            }
            ErrorCode::StorageError | ErrorCode::InternalError => ApiError::Internal(err),
        }
    }
}

impl From<ConversationHandlerError> for ApiError {
    fn from(err: ConversationHandlerError) -> Self {
        DomainError::from(err).into()
    }
}

impl From<ResolveAdviceError> for ApiError {
    fn from(err: ResolveAdviceError) -> Self {
        match err {
            ResolveAdviceError::Validation(e) => DomainError::from(e).into(),
        }
    }
}

impl From<SendReminderError> for ApiError {
    fn from(err: SendReminderError) -> Self {
        DomainError::from(err).into()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let error = match &self {
            ApiError::BadRequest(e)
            | ApiError::NotFound(e)
            | ApiError::Conflict(e)
            | ApiError::Internal(e) => ErrorResponse::from(e),
        };

        (status, Json(error)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{ConversationId, ValidationError};

    #[test]
    fn not_found_maps_to_404() {
        let err: ApiError = ConversationHandlerError::NotFound(ConversationId::new()).into();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn empty_question_maps_to_400_with_field_detail() {
        let err: ApiError = ResolveAdviceError::Validation(ValidationError::empty_field("question")).into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        let ApiError::BadRequest(domain) = &err else {
            panic!("expected bad request");
        };
        let body = ErrorResponse::from(domain);
        assert_eq!(body.code, "EMPTY_FIELD");
        assert_eq!(body.details.unwrap()["field"], "question");
    }

    #[test]
    fn missing_clarification_maps_to_409() {
        let err: ApiError = ConversationHandlerError::NoPendingQuestion.into();
        assert_eq!(err.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn disabled_reminders_map_to_409() {
        let err: ApiError = SendReminderError::Disabled.into();
        assert_eq!(err.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn storage_errors_are_redacted_unless_verbose() {
        let err: ApiError = ConversationHandlerError::Storage("lock poisoned".to_string()).into();
        match err.redacted(false) {
            ApiError::Internal(e) => assert_eq!(e.message, REDACTED_MESSAGE),
            other => panic!("unexpected {:?}", other),
        }

        let err: ApiError = ConversationHandlerError::Storage("lock poisoned".to_string()).into();
        match err.redacted(true) {
            ApiError::Internal(e) => assert!(e.message.contains("lock poisoned")),
            other => panic!("unexpected {:?}", other),
        }
    }
}
