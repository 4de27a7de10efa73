//! Error type shared by the conversation handlers.

use thiserror::Error;

use crate::domain::conversation::SessionError;
use crate::domain::foundation::{ConversationId, DomainError, ErrorCode, ValidationError};
use crate::ports::SessionStoreError;

#[derive(Debug, Error)]
pub enum ConversationHandlerError {
    #[error("Conversation not found: {0}")]
    NotFound(ConversationId),

    #[error(transparent)]
    Validation(ValidationError),

    #[error("No question is awaiting an intent")]
    NoPendingQuestion,

    #[error("Storage error: {0}")]
    Storage(String),
}

impl ConversationHandlerError {
    /// Maps the error onto the domain error vocabulary.
    pub fn code(&self) -> ErrorCode {
        match self {
            ConversationHandlerError::NotFound(_) => ErrorCode::ConversationNotFound,
            ConversationHandlerError::Validation(err) => ErrorCode::from(err),
            ConversationHandlerError::NoPendingQuestion => ErrorCode::NoPendingQuestion,
            ConversationHandlerError::Storage(_) => ErrorCode::StorageError,
        }
    }
}

impl From<SessionStoreError> for ConversationHandlerError {
    fn from(err: SessionStoreError) -> Self {
        match err {
            SessionStoreError::NotFound(id) => ConversationHandlerError::NotFound(id),
            other => ConversationHandlerError::Storage(other.to_string()),
        }
    }
}

impl From<SessionError> for ConversationHandlerError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::Validation(e) => ConversationHandlerError::Validation(e),
            SessionError::NoPendingQuestion => ConversationHandlerError::NoPendingQuestion,
        }
    }
}

impl From<ConversationHandlerError> for DomainError {
    fn from(err: ConversationHandlerError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}
