//! Conversation domain module.
//!
//! The orchestration layer around the advice core: keeps the message list,
//! assigns message ids, and holds the single outstanding clarification
//! while the user picks an intent.

mod export;
mod message;
mod session;
mod state;

pub use export::{export_transcript, TRANSCRIPT_FILE_NAME};
pub use message::{ConversationMessage, Followup, MessageId, MessageMeta, Role};
pub use session::{ConversationSession, SessionError, Turn, DISCLAIMER};
pub use state::ConversationState;
