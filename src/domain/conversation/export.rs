//! Plain-text transcript rendering.

use super::message::ConversationMessage;

/// Suggested file name for downloaded transcripts.
pub const TRANSCRIPT_FILE_NAME: &str = "conversation.txt";

/// Renders messages as `ROLE: text` blocks separated by a blank line.
pub fn export_transcript(messages: &[ConversationMessage]) -> String {
    messages
        .iter()
        .map(|m| format!("{}: {}", m.role().label(), m.text()))
        .collect::<Vec<_>>()
        .join("\n\n")
}
