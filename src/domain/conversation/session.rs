//! Conversation session aggregate.
//!
//! Owns one conversation thread: the message list, the message id counter
//! and the single outstanding clarification. Drives the two-step protocol
//! (ask intent, then answer) against any [`Advisor`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::message::{ConversationMessage, Followup, MessageId, MessageMeta, Role};
use super::state::ConversationState;
use crate::domain::advice::{AdviceRequest, AdviceResult, Advisor, Intent};
use crate::domain::foundation::{ConversationId, StateMachine, Timestamp, ValidationError};

/// System message seeded into every new conversation.
pub const DISCLAIMER: &str = "Bienvenue — cette IA donne des conseils basés sur le Coran, la Sunna et la sagesse. Pour les cas complexes, consultez un savant.";

const DISCLAIMER_SOURCE: &str = "disclaimer";

/// Errors raised by session operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("No question is awaiting an intent")]
    NoPendingQuestion,
}

/// Messages appended by one session operation, with the resolver output
/// that produced them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub messages: Vec<ConversationMessage>,
    pub result: AdviceResult,
}

/// A single conversation thread.
///
/// # Invariants
///
/// - message ids start at 1 and increase by one per appended message
/// - `state == AwaitingIntent` exactly when a pending question is held
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationSession {
    id: ConversationId,
    messages: Vec<ConversationMessage>,
    next_id: MessageId,
    state: ConversationState,
    pending_question: Option<String>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl ConversationSession {
    /// Starts a conversation with the disclaimer as its first message.
    pub fn new() -> Self {
        let now = Timestamp::now();
        let mut session = Self {
            id: ConversationId::new(),
            messages: Vec::new(),
            next_id: MessageId::new(1),
            state: ConversationState::default(),
            pending_question: None,
            created_at: now,
            updated_at: now,
        };
        session.append(
            Role::System,
            DISCLAIMER,
            Some(MessageMeta::source(DISCLAIMER_SOURCE)),
        );
        session
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> ConversationId {
        self.id
    }

    pub fn messages(&self) -> &[ConversationMessage] {
        &self.messages
    }

    pub fn state(&self) -> ConversationState {
        self.state
    }

    /// The question waiting for an intent, if any.
    pub fn pending_question(&self) -> Option<&str> {
        self.pending_question.as_deref()
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Protocol
    // ─────────────────────────────────────────────────────────────────────────

    /// Submits a new top-level question.
    ///
    /// A clarification still pending is replaced by this question.
    ///
    /// # Errors
    ///
    /// - `Validation` if the question is empty or whitespace-only
    pub fn submit_question(
        &mut self,
        advisor: &dyn Advisor,
        question: &str,
    ) -> Result<Turn, SessionError> {
        let request = AdviceRequest::new(question, None)?;

        if let Some(previous) = &self.pending_question {
            tracing::debug!(
                conversation_id = %self.id,
                previous = %previous,
                "new question replaces pending clarification"
            );
        }

        let mut messages = vec![self.append(Role::User, question, None)];
        let result = advisor.resolve(&request);

        match &result {
            AdviceResult::Verdict(verdict) => {
                messages.push(self.append(
                    Role::Assistant,
                    verdict.render_text(),
                    Some(MessageMeta::tone(verdict.tone)),
                ));
                self.settle()?;
            }
            AdviceResult::NeedsIntent { prompt } => {
                messages.push(self.append(
                    Role::Assistant,
                    prompt.clone(),
                    Some(MessageMeta::followup(Followup::AskIntent)),
                ));
                self.await_intent(question.to_string())?;
            }
        }

        Ok(Turn { messages, result })
    }

    /// Answers the pending question with the intent the user selected.
    ///
    /// If the advisor still asks for an intent, the prompt is shown again
    /// and the session keeps waiting on the same question.
    ///
    /// # Errors
    ///
    /// - `NoPendingQuestion` if no clarification is outstanding
    pub fn select_intent(
        &mut self,
        advisor: &dyn Advisor,
        intent: Intent,
    ) -> Result<Turn, SessionError> {
        let question = self
            .pending_question
            .clone()
            .ok_or(SessionError::NoPendingQuestion)?;
        let request = AdviceRequest::new(question.clone(), Some(intent.clone()))?;
        let result = advisor.resolve(&request);

        let messages = match &result {
            AdviceResult::Verdict(verdict) => {
                let meta = MessageMeta::tone(verdict.tone).with_intent(intent);
                let message = self.append(Role::Assistant, verdict.render_text(), Some(meta));
                self.settle()?;
                vec![message]
            }
            AdviceResult::NeedsIntent { prompt } => {
                tracing::warn!(
                    conversation_id = %self.id,
                    %intent,
                    "advisor asked for an intent again after one was supplied"
                );
                let message = self.append(
                    Role::Assistant,
                    prompt.clone(),
                    Some(MessageMeta::followup(Followup::AskIntent)),
                );
                self.await_intent(question)?;
                vec![message]
            }
        };

        Ok(Turn { messages, result })
    }

    /// Abandons the pending clarification without rendering anything.
    ///
    /// Returns whether a clarification was actually pending.
    pub fn cancel_intent(&mut self) -> bool {
        if !self.state.awaits_intent() {
            return false;
        }
        self.state = ConversationState::AwaitingVerdict;
        self.pending_question = None;
        self.updated_at = Timestamp::now();
        tracing::debug!(conversation_id = %self.id, "clarification cancelled");
        true
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn append(
        &mut self,
        role: Role,
        text: impl Into<String>,
        meta: Option<MessageMeta>,
    ) -> ConversationMessage {
        let message = ConversationMessage::new(self.next_id, role, text, meta);
        self.next_id = self.next_id.next();
        self.messages.push(message.clone());
        self.updated_at = Timestamp::now();
        message
    }

    fn await_intent(&mut self, question: String) -> Result<(), ValidationError> {
        self.state = self.state.transition_to(ConversationState::AwaitingIntent)?;
        self.pending_question = Some(question);
        Ok(())
    }

    fn settle(&mut self) -> Result<(), ValidationError> {
        if self.state.awaits_intent() {
            self.state = self.state.transition_to(ConversationState::AwaitingVerdict)?;
        }
        self.pending_question = None;
        Ok(())
    }
}

impl Default for ConversationSession {
    fn default() -> Self {
        Self::new()
    }
}
