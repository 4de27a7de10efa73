//! Advice resolver: turns a request into a verdict or a clarification
//! request.

use super::matcher::RuleMatcher;
use super::result::{AdviceRequest, AdviceResult, Tone, Verdict};
use super::rule::{Rule, RuleTable};

/// Prompt returned when no rule matches and no intent is known yet.
pub const CLARIFICATION_PROMPT: &str = "Je voudrais mieux comprendre ton intention avant de répondre : pourquoi veux-tu faire cela ? Pour plaire à Allah, pour plaire aux gens, par curiosité, ou autre ?";

const EXPLANATION_PREFIX: &str = "Explication logique : ";

const GENERIC_GOOD: &str = "✅ Bien : Si l'intention est pure et qu'il n'y a pas de préjudice, l'action peut être acceptable dans certains cadres.";
const GENERIC_BAD: &str = "❌ Mal : Si l'action cause du tort, mène au péché, ou nuit à ta relation avec Allah, il faut l'éviter.";
const GENERIC_EXPLANATION: &str = "Explication logique : Analyse l'intention, les conséquences publiques/privées, et cherche une alternative vertueuse.";
const GENERIC_CITATION: &str = "Rappel : Consulte un savant pour les cas juridiques ou ambigus.";

/// Anything that can answer an advice request.
///
/// The conversation layer depends on this rather than on
/// [`AdviceResolver`] directly.
pub trait Advisor: Send + Sync {
    fn resolve(&self, request: &AdviceRequest) -> AdviceResult;
}

/// Rule-first resolver with a single clarification round.
#[derive(Debug, Clone, Default)]
pub struct AdviceResolver {
    matcher: RuleMatcher,
}

impl AdviceResolver {
    pub fn new(table: RuleTable) -> Self {
        Self {
            matcher: RuleMatcher::new(table),
        }
    }

    pub fn matcher(&self) -> &RuleMatcher {
        &self.matcher
    }

    /// Resolves a request.
    ///
    /// 1. A matching rule yields an encouraging verdict built from that rule.
    /// 2. No match and no intent yields [`AdviceResult::NeedsIntent`].
    /// 3. No match with an intent yields the generic positive verdict. The
    ///    intent value only unlocks this branch; it does not change the text.
    pub fn resolve(&self, request: &AdviceRequest) -> AdviceResult {
        if let Some(rule) = self.matcher.match_question(request.question()) {
            return AdviceResult::Verdict(rule_verdict(rule));
        }

        match request.intent() {
            None => AdviceResult::NeedsIntent {
                prompt: CLARIFICATION_PROMPT.to_string(),
            },
            Some(intent) => {
                tracing::debug!(%intent, "answering unmatched question with generic verdict");
                AdviceResult::Verdict(generic_verdict())
            }
        }
    }
}

impl Advisor for AdviceResolver {
    fn resolve(&self, request: &AdviceRequest) -> AdviceResult {
        AdviceResolver::resolve(self, request)
    }
}

fn rule_verdict(rule: &Rule) -> Verdict {
    Verdict {
        outcome_good: rule.outcome_good().to_string(),
        outcome_bad: rule.outcome_bad().to_string(),
        explanation: format!("{}{}", EXPLANATION_PREFIX, rule.advice()),
        citation: rule.citation().to_string(),
        tone: Tone::Encouraging,
    }
}

/// The intent-aware fallback verdict.
pub fn generic_verdict() -> Verdict {
    Verdict {
        outcome_good: GENERIC_GOOD.to_string(),
        outcome_bad: GENERIC_BAD.to_string(),
        explanation: GENERIC_EXPLANATION.to_string(),
        citation: GENERIC_CITATION.to_string(),
        tone: Tone::Positive,
    }
}
