//! DTOs for stateless advice endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::RuleSummary;
use crate::domain::advice::Intent;

/// Request body for POST /api/advice/resolve
#[derive(Debug, Clone, Deserialize)]
pub struct ResolveAdviceRequest {
    pub question: String,
    #[serde(default)]
    pub intent: Option<Intent>,
}

/// Request body for POST /api/advice/match
#[derive(Debug, Clone, Deserialize)]
pub struct MatchRequest {
    pub question: String,
}

/// Response for POST /api/advice/match; `rule` is null when nothing matches.
#[derive(Debug, Clone, Serialize)]
pub struct MatchResponse {
    pub rule: Option<RuleSummary>,
}

/// One entry of the intent selector.
#[derive(Debug, Clone, Serialize)]
pub struct IntentOption {
    pub intent: Intent,
    pub label: String,
}

impl From<Intent> for IntentOption {
    fn from(intent: Intent) -> Self {
        let label = intent.label().to_string();
        Self { intent, label }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_request_intent_is_optional() {
        let req: ResolveAdviceRequest = serde_json::from_str(r#"{"question": "q"}"#).unwrap();
        assert!(req.intent.is_none());

        let req: ResolveAdviceRequest =
            serde_json::from_str(r#"{"question": "q", "intent": "curiosite"}"#).unwrap();
        assert_eq!(req.intent, Some(Intent::Curiosity));
    }

    #[test]
    fn intent_option_serializes_tag_and_label() {
        let json = serde_json::to_value(IntentOption::from(Intent::PleaseAllah)).unwrap();
        assert_eq!(json["intent"], "plaire_allah");
        assert_eq!(json["label"], "Pour plaire à Allah / Ibadah");
    }

    #[test]
    fn empty_match_serializes_null_rule() {
        let json = serde_json::to_value(MatchResponse { rule: None }).unwrap();
        assert!(json["rule"].is_null());
    }
}
