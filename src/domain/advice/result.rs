//! Request and result types exchanged with the advice resolver.

use serde::{Deserialize, Serialize};

use super::intent::Intent;
use crate::domain::foundation::ValidationError;

/// A single resolver call: the question and, after a clarification round,
/// the intent the user selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdviceRequest {
    question: String,
    intent: Option<Intent>,
}

impl AdviceRequest {
    /// Builds a request, rejecting empty or whitespace-only questions and
    /// blank free-text intents.
    pub fn new(question: impl Into<String>, intent: Option<Intent>) -> Result<Self, ValidationError> {
        let question = question.into();
        if question.trim().is_empty() {
            return Err(ValidationError::empty_field("question"));
        }
        if intent.as_ref().is_some_and(Intent::is_blank) {
            return Err(ValidationError::empty_field("intent"));
        }
        Ok(Self { question, intent })
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn intent(&self) -> Option<&Intent> {
        self.intent.as_ref()
    }
}

/// Tone tag attached to a verdict for the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    /// Rule-based verdicts.
    Encouraging,
    /// Generic intent-aware verdicts.
    Positive,
}

/// The core's final structured answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub outcome_good: String,
    pub outcome_bad: String,
    pub explanation: String,
    pub citation: String,
    pub tone: Tone,
}

impl Verdict {
    /// Renders the verdict as a single message body, one paragraph per
    /// field.
    pub fn render_text(&self) -> String {
        format!(
            "{}\n\n{}\n\n{}\n\n{}",
            self.outcome_good, self.outcome_bad, self.explanation, self.citation
        )
    }
}

/// Outcome of a resolver call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AdviceResult {
    /// The caller must collect an intent and call again with the same
    /// question.
    NeedsIntent { prompt: String },
    /// Final answer.
    Verdict(Verdict),
}

impl AdviceResult {
    pub fn is_verdict(&self) -> bool {
        matches!(self, AdviceResult::Verdict(_))
    }

    pub fn verdict(&self) -> Option<&Verdict> {
        match self {
            AdviceResult::Verdict(verdict) => Some(verdict),
            AdviceResult::NeedsIntent { .. } => None,
        }
    }
}
