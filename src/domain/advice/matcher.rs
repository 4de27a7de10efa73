//! Rule matcher: first-match classification of a question.

use super::rule::{Rule, RuleTable};

/// Normalizes question text for matching: surrounding whitespace is
/// trimmed and the text lower-cased. Internal whitespace and punctuation
/// are kept as-is.
pub fn normalize_question(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Evaluates an ordered rule table against questions.
///
/// Pure and deterministic: the same question always yields the same rule
/// (or none) for a given table.
#[derive(Debug, Clone, Default)]
pub struct RuleMatcher {
    table: RuleTable,
}

impl RuleMatcher {
    pub fn new(table: RuleTable) -> Self {
        Self { table }
    }

    /// Returns the first rule whose matcher accepts the normalized question.
    ///
    /// Empty or whitespace-only questions never match.
    pub fn match_question(&self, question: &str) -> Option<&Rule> {
        let normalized = normalize_question(question);
        if normalized.is_empty() {
            return None;
        }

        let matched = self.table.rules().iter().find(|rule| rule.matches(&normalized));
        match matched {
            Some(rule) => tracing::debug!(rule = rule.name(), "question matched rule"),
            None => tracing::debug!("no rule matched question"),
        }
        matched
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::advice::rule::Matcher;

    fn rule(name: &str, matcher: Matcher) -> Rule {
        Rule::new(name, matcher, "good", "bad", "cite", "advice").unwrap()
    }

    fn overlapping_table() -> RuleTable {
        RuleTable::new(vec![
            rule("first", Matcher::keywords(["vin"])),
            rule("second", Matcher::keywords(["vin", "bière"])),
        ])
    }

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(normalize_question("  Puis-JE Boire ?\n"), "puis-je boire ?");
    }

    #[test]
    fn normalize_keeps_internal_whitespace() {
        assert_eq!(normalize_question(" a   b "), "a   b");
    }

    #[test]
    fn first_matching_rule_wins() {
        let matcher = RuleMatcher::new(overlapping_table());
        let matched = matcher.match_question("un verre de vin").unwrap();
        assert_eq!(matched.name(), "first");
    }

    #[test]
    fn later_rule_matches_when_earlier_does_not() {
        let matcher = RuleMatcher::new(overlapping_table());
        let matched = matcher.match_question("une bière").unwrap();
        assert_eq!(matched.name(), "second");
    }

    #[test]
    fn no_match_returns_none() {
        let matcher = RuleMatcher::default();
        assert!(matcher.match_question("Puis-je porter une cravate rouge ?").is_none());
    }

    #[test]
    fn whitespace_only_never_matches_even_catch_all_pattern() {
        let table = RuleTable::new(vec![rule("all", Matcher::pattern(".*").unwrap())]);
        let matcher = RuleMatcher::new(table);
        assert!(matcher.match_question("   \t ").is_none());
        assert!(matcher.match_question("").is_none());
    }

    #[test]
    fn builtin_matching_ignores_case() {
        let matcher = RuleMatcher::default();
        let lower = matcher.match_question("Je vais boire de l'alcool").unwrap();
        let upper = matcher.match_question("JE VAIS BOIRE DE L'ALCOOL").unwrap();
        assert_eq!(lower.name(), upper.name());
        assert_eq!(lower.name(), "alcohol");
    }

    #[test]
    fn builtin_matches_accented_uppercase_keyword() {
        let matcher = RuleMatcher::default();
        assert_eq!(matcher.match_question("UNE SOIRÉE").unwrap().name(), "alcohol");
    }

    #[test]
    fn builtin_lying_rule_matches() {
        let matcher = RuleMatcher::default();
        assert_eq!(
            matcher.match_question("Puis-je mentir à mon ami ?").unwrap().name(),
            "lying"
        );
    }
}
