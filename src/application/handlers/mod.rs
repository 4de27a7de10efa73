//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod advice;
pub mod conversation;
pub mod reminder;

pub use advice::{
    PreviewMatchHandler, PreviewMatchQuery, ResolveAdviceCommand, ResolveAdviceError,
    ResolveAdviceHandler, RuleSummary,
};

pub use conversation::{
    CancelIntentCommand, CancelIntentHandler, CancelIntentResult, ConversationHandlerError,
    ConversationTranscript, DeleteConversationCommand, DeleteConversationHandler,
    ExportConversationHandler, ExportConversationQuery,
    GetConversationHandler, GetConversationQuery, SelectIntentCommand, SelectIntentHandler,
    SelectIntentResult, StartConversationHandler, StartConversationResult, SubmitQuestionCommand,
    SubmitQuestionHandler, SubmitQuestionResult,
};

pub use reminder::{SendReminderCommand, SendReminderError, SendReminderHandler};
