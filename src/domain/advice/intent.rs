//! The user's declared motivation for an action.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Why the user wants to perform the action they asked about.
///
/// Collected only from an explicit user selection after the resolver asked
/// for clarification; never inferred from the question text. Serializes as
/// a plain string: the three menu choices use their fixed tags and anything
/// else round-trips as free text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Intent {
    /// To please Allah / act of worship.
    PleaseAllah,
    /// To please other people / reputation.
    PleaseOthers,
    /// Curiosity / experience.
    Curiosity,
    /// Free-text motivation outside the fixed menu.
    Other(String),
}

impl Intent {
    pub const PLEASE_ALLAH_TAG: &'static str = "plaire_allah";
    pub const PLEASE_OTHERS_TAG: &'static str = "plaire_aux_autres";
    pub const CURIOSITY_TAG: &'static str = "curiosite";

    /// The fixed choices offered by the intent selector, in menu order.
    pub fn menu() -> [Intent; 3] {
        [Intent::PleaseAllah, Intent::PleaseOthers, Intent::Curiosity]
    }

    /// Returns the wire tag (or the free text for `Other`).
    pub fn as_str(&self) -> &str {
        match self {
            Intent::PleaseAllah => Self::PLEASE_ALLAH_TAG,
            Intent::PleaseOthers => Self::PLEASE_OTHERS_TAG,
            Intent::Curiosity => Self::CURIOSITY_TAG,
            Intent::Other(text) => text,
        }
    }

    /// Human-readable label shown on the selector button.
    pub fn label(&self) -> &str {
        match self {
            Intent::PleaseAllah => "Pour plaire à Allah / Ibadah",
            Intent::PleaseOthers => "Pour plaire aux gens / réputation",
            Intent::Curiosity => "Curiosité / Expérience",
            Intent::Other(text) => text,
        }
    }

    /// True for a free-text intent with nothing but whitespace in it.
    pub fn is_blank(&self) -> bool {
        matches!(self, Intent::Other(text) if text.trim().is_empty())
    }
}

impl From<String> for Intent {
    fn from(value: String) -> Self {
        match value.as_str() {
            Self::PLEASE_ALLAH_TAG => Intent::PleaseAllah,
            Self::PLEASE_OTHERS_TAG => Intent::PleaseOthers,
            Self::CURIOSITY_TAG => Intent::Curiosity,
            _ => Intent::Other(value),
        }
    }
}

impl From<&str> for Intent {
    fn from(value: &str) -> Self {
        Intent::from(value.to_string())
    }
}

impl From<Intent> for String {
    fn from(intent: Intent) -> Self {
        match intent {
            Intent::Other(text) => text,
            tagged => tagged.as_str().to_string(),
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tags_map_to_menu_variants() {
        assert_eq!(Intent::from("plaire_allah"), Intent::PleaseAllah);
        assert_eq!(Intent::from("plaire_aux_autres"), Intent::PleaseOthers);
        assert_eq!(Intent::from("curiosite"), Intent::Curiosity);
    }

    #[test]
    fn unknown_text_becomes_other() {
        assert_eq!(
            Intent::from("pour mon travail"),
            Intent::Other("pour mon travail".to_string())
        );
    }

    #[test]
    fn only_whitespace_free_text_is_blank() {
        assert!(Intent::from("").is_blank());
        assert!(Intent::from(" \t").is_blank());
        assert!(!Intent::from("pour ma famille").is_blank());
        assert!(!Intent::Curiosity.is_blank());
    }

    #[test]
    fn serializes_as_plain_string() {
        assert_eq!(serde_json::to_string(&Intent::Curiosity).unwrap(), "\"curiosite\"");
        assert_eq!(
            serde_json::to_string(&Intent::Other("autre".into())).unwrap(),
            "\"autre\""
        );
    }

    #[test]
    fn deserializes_from_plain_string() {
        let intent: Intent = serde_json::from_str("\"plaire_allah\"").unwrap();
        assert_eq!(intent, Intent::PleaseAllah);
    }

    #[test]
    fn menu_lists_three_fixed_choices_in_order() {
        let menu = Intent::menu();
        let tags: Vec<&str> = menu.iter().map(|i| i.as_str()).collect();
        assert_eq!(tags, vec!["plaire_allah", "plaire_aux_autres", "curiosite"]);
    }
}
