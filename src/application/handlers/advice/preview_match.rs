//! PreviewMatchHandler - Shows which rule, if any, a question falls under

use std::sync::Arc;

use serde::Serialize;

use crate::domain::advice::{AdviceResolver, Rule};

/// Query to preview rule matching
#[derive(Debug, Clone)]
pub struct PreviewMatchQuery {
    pub question: String,
}

/// Read model of a matched rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleSummary {
    pub name: String,
    pub outcome_good: String,
    pub outcome_bad: String,
    pub citation: String,
    pub advice: String,
}

impl From<&Rule> for RuleSummary {
    fn from(rule: &Rule) -> Self {
        Self {
            name: rule.name().to_string(),
            outcome_good: rule.outcome_good().to_string(),
            outcome_bad: rule.outcome_bad().to_string(),
            citation: rule.citation().to_string(),
            advice: rule.advice().to_string(),
        }
    }
}

/// Handler for match previews
pub struct PreviewMatchHandler {
    resolver: Arc<AdviceResolver>,
}

impl PreviewMatchHandler {
    pub fn new(resolver: Arc<AdviceResolver>) -> Self {
        Self { resolver }
    }

    /// Returns the first matching rule. Blank questions match nothing.
    pub fn handle(&self, query: PreviewMatchQuery) -> Option<RuleSummary> {
        self.resolver
            .matcher()
            .match_question(&query.question)
            .map(RuleSummary::from)
    }
}
