//! HTTP adapter for conversation endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    CancelIntentResponse, ConversationResponse, SelectIntentRequest, SubmitQuestionRequest,
    TurnResponse,
};
pub use routes::conversation_router;
