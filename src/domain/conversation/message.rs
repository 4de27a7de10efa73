//! Message entity for conversations.
//!
//! Messages are immutable records of system/user/assistant exchanges. The
//! advice core never builds them; the session wraps the core's text output.

use serde::{Deserialize, Serialize};

use crate::domain::advice::{Intent, Tone};

/// Sequential identifier of a message within one conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(u64);

impl MessageId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    /// The id that follows this one.
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Role of a message sender in a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Disclaimers and other notices from the application.
    System,
    /// User input.
    User,
    /// Advisor output.
    Assistant,
}

impl Role {
    /// Upper-case label used in plain-text transcripts.
    pub fn label(&self) -> &'static str {
        match self {
            Role::System => "SYSTEM",
            Role::User => "USER",
            Role::Assistant => "ASSISTANT",
        }
    }
}

/// Follow-up action a message asks the UI to take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Followup {
    /// Open the intent selector.
    AskIntent,
}

/// Optional rendering hints attached to a message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub followup: Option<Followup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tone: Option<Tone>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent: Option<Intent>,
}

impl MessageMeta {
    pub fn source(source: impl Into<String>) -> Self {
        Self {
            source: Some(source.into()),
            ..Default::default()
        }
    }

    pub fn followup(followup: Followup) -> Self {
        Self {
            followup: Some(followup),
            ..Default::default()
        }
    }

    pub fn tone(tone: Tone) -> Self {
        Self {
            tone: Some(tone),
            ..Default::default()
        }
    }

    pub fn with_intent(mut self, intent: Intent) -> Self {
        self.intent = Some(intent);
        self
    }
}

/// An immutable message within a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationMessage {
    id: MessageId,
    role: Role,
    text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    meta: Option<MessageMeta>,
}

impl ConversationMessage {
    pub fn new(id: MessageId, role: Role, text: impl Into<String>, meta: Option<MessageMeta>) -> Self {
        Self {
            id,
            role,
            text: text.into(),
            meta,
        }
    }

    pub fn id(&self) -> MessageId {
        self.id
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn meta(&self) -> Option<&MessageMeta> {
        self.meta.as_ref()
    }

    /// Returns true if this message asks the UI to collect an intent.
    pub fn asks_for_intent(&self) -> bool {
        self.meta
            .as_ref()
            .and_then(|m| m.followup)
            .is_some_and(|f| f == Followup::AskIntent)
    }
}
