//! Property tests for the advice core.

use proptest::prelude::*;

use conseiller::domain::advice::{
    generic_verdict, AdviceRequest, AdviceResolver, AdviceResult, Intent, RuleMatcher, RuleTable,
};

fn resolve(question: &str, intent: Option<Intent>) -> AdviceResult {
    let request = AdviceRequest::new(question, intent).unwrap();
    AdviceResolver::default().resolve(&request)
}

fn matched_rule(question: &str) -> Option<String> {
    RuleMatcher::new(RuleTable::builtin())
        .match_question(question)
        .map(|rule| rule.name().to_string())
}

fn any_intent() -> impl Strategy<Value = Intent> {
    prop_oneof![
        Just(Intent::PleaseAllah),
        Just(Intent::PleaseOthers),
        Just(Intent::Curiosity),
        "[a-z][a-z ]{0,19}".prop_map(Intent::from),
    ]
}

// Consonants only, so none of the built-in keywords or patterns can appear.
const UNMATCHABLE: &str = "[bcdfghjklpqrstvwxz ]{0,30}";

proptest! {
    #[test]
    fn resolution_is_idempotent(question in "[^\\s]{1}.{0,60}") {
        prop_assert_eq!(resolve(&question, None), resolve(&question, None));
    }

    #[test]
    fn resolution_ignores_ascii_case(question in "[a-zA-Z' ]{0,30}[a-zA-Z]") {
        let lower = resolve(&question.to_lowercase(), None);
        prop_assert_eq!(resolve(&question.to_uppercase(), None), lower.clone());
        prop_assert_eq!(resolve(&question, None), lower);
    }

    #[test]
    fn surrounding_whitespace_does_not_change_the_match(
        left in "[ \t\n]{0,5}",
        right in "[ \t\n]{0,5}",
    ) {
        let padded = format!("{}Puis-je mentir ?{}", left, right);
        prop_assert_eq!(matched_rule(&padded), Some("lying".to_string()));
    }

    #[test]
    fn keyword_anywhere_in_text_matches(prefix in UNMATCHABLE, suffix in UNMATCHABLE) {
        let question = format!("{}alcool{}", prefix, suffix);
        prop_assert_eq!(matched_rule(&question), Some("alcohol".to_string()));
    }

    #[test]
    fn earlier_rule_wins_when_several_match(filler in UNMATCHABLE) {
        let question = format!("mentir {} boire", filler);
        prop_assert_eq!(matched_rule(&question), Some("alcohol".to_string()));
    }

    #[test]
    fn unmatched_question_needs_intent(filler in UNMATCHABLE) {
        let question = format!("q{}", filler);
        let result = resolve(&question, None);
        let needs_intent_with_prompt = matches!(result, AdviceResult::NeedsIntent { ref prompt } if !prompt.is_empty());
        prop_assert!(needs_intent_with_prompt);
    }

    #[test]
    fn any_intent_yields_the_generic_verdict(filler in UNMATCHABLE, intent in any_intent()) {
        let question = format!("q{}", filler);
        prop_assert_eq!(resolve(&question, Some(intent)), AdviceResult::Verdict(generic_verdict()));
    }

    #[test]
    fn blank_questions_are_rejected(blank in "[ \t\n\r]{0,10}") {
        prop_assert!(AdviceRequest::new(blank, None).is_err());
    }
}
