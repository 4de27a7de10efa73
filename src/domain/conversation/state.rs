//! Clarification state machine.
//!
//! Tracks whether a conversation is free to take a new question or is
//! waiting for the user to state the intent behind the last one.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// The orchestration state of a conversation.
///
/// - `AwaitingVerdict`: no clarification outstanding; the next question is
///   resolved without an intent
/// - `AwaitingIntent`: the last question needs an intent before a verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ConversationState {
    #[default]
    AwaitingVerdict,
    AwaitingIntent,
}

impl ConversationState {
    /// Returns true if the intent selector should be offered.
    pub fn awaits_intent(&self) -> bool {
        matches!(self, Self::AwaitingIntent)
    }
}

impl StateMachine for ConversationState {
    fn can_transition_to(&self, target: &Self) -> bool {
        use ConversationState::*;
        matches!(
            (self, target),
            // Unmatched question without intent
            (AwaitingVerdict, AwaitingIntent) |
            // Verdict delivered, or clarification cancelled
            (AwaitingIntent, AwaitingVerdict) |
            // Question overwritten, or the resolver asked again
            (AwaitingIntent, AwaitingIntent)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use ConversationState::*;
        match self {
            AwaitingVerdict => vec![AwaitingIntent],
            AwaitingIntent => vec![AwaitingVerdict, AwaitingIntent],
        }
    }
}
