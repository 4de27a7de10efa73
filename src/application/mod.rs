//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).

pub mod handlers;

pub use handlers::{
    // Advice handlers
    PreviewMatchHandler, PreviewMatchQuery, ResolveAdviceCommand, ResolveAdviceError,
    ResolveAdviceHandler, RuleSummary,
    // Conversation handlers
    CancelIntentCommand, CancelIntentHandler, CancelIntentResult, ConversationHandlerError,
    ConversationTranscript, DeleteConversationCommand, DeleteConversationHandler,
    ExportConversationHandler, ExportConversationQuery,
    GetConversationHandler, GetConversationQuery, SelectIntentCommand, SelectIntentHandler,
    SelectIntentResult, StartConversationHandler, StartConversationResult,
    SubmitQuestionCommand, SubmitQuestionHandler, SubmitQuestionResult,
    // Reminder handlers
    SendReminderCommand, SendReminderError, SendReminderHandler,
};
