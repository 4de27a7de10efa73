//! Conversation command and query handlers.
//!
//! Each handler loads a session from the store, drives one protocol step
//! and saves the session back.

mod cancel_intent;
mod delete_conversation;
mod errors;
mod export_conversation;
mod get_conversation;
mod select_intent;
mod start_conversation;
mod submit_question;

pub use errors::ConversationHandlerError;

pub use start_conversation::{StartConversationHandler, StartConversationResult};

pub use submit_question::{SubmitQuestionCommand, SubmitQuestionHandler, SubmitQuestionResult};

pub use select_intent::{SelectIntentCommand, SelectIntentHandler, SelectIntentResult};

pub use cancel_intent::{CancelIntentCommand, CancelIntentHandler, CancelIntentResult};

pub use delete_conversation::{DeleteConversationCommand, DeleteConversationHandler};

pub use get_conversation::{GetConversationHandler, GetConversationQuery};

pub use export_conversation::{
    ConversationTranscript, ExportConversationHandler, ExportConversationQuery,
};
