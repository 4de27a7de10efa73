//! Classification rules.
//!
//! A rule pairs a text matcher with fixed advisory content. Rules are plain
//! data: new rules are added to a table (built-in or YAML) without touching
//! the resolver's control flow.

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::foundation::ValidationError;

/// Errors raised while building a rule or a rule table.
#[derive(Debug, Error)]
pub enum RuleError {
    #[error("Rule '{name}': {source}")]
    Invalid {
        name: String,
        #[source]
        source: ValidationError,
    },

    #[error("Rule '{name}' has an invalid pattern: {source}")]
    InvalidPattern {
        name: String,
        #[source]
        source: regex::Error,
    },

    #[error("Rule '{name}' must define exactly one of `keywords` or `pattern`")]
    AmbiguousMatcher { name: String },

    #[error("Rule table is not valid YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
}

impl RuleError {
    fn invalid(name: &str, source: ValidationError) -> Self {
        RuleError::Invalid {
            name: name.to_string(),
            source,
        }
    }
}

/// How a rule recognises a question.
///
/// Matchers always receive normalized (trimmed, lower-cased) text.
#[derive(Debug, Clone)]
pub enum Matcher {
    /// Matches when any keyword occurs as a substring.
    Keywords(Vec<String>),
    /// Matches when the case-insensitive regex finds a match.
    Pattern(Regex),
}

impl Matcher {
    /// Builds a keyword matcher. Keywords are lower-cased to line up with
    /// normalized input.
    pub fn keywords<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Matcher::Keywords(
            keywords
                .into_iter()
                .map(|k| k.as_ref().to_lowercase())
                .collect(),
        )
    }

    /// Compiles a case-insensitive regex matcher.
    pub fn pattern(source: &str) -> Result<Self, regex::Error> {
        let regex = RegexBuilder::new(source).case_insensitive(true).build()?;
        Ok(Matcher::Pattern(regex))
    }

    /// Returns true if the normalized text satisfies this matcher.
    pub fn is_match(&self, normalized: &str) -> bool {
        match self {
            Matcher::Keywords(keywords) => keywords.iter().any(|k| normalized.contains(k.as_str())),
            Matcher::Pattern(regex) => regex.is_match(normalized),
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if let Matcher::Keywords(keywords) = self {
            if keywords.is_empty() || keywords.iter().any(|k| k.trim().is_empty()) {
                return Err(ValidationError::empty_field("keywords"));
            }
        }
        Ok(())
    }
}

/// A pattern plus the fixed advisory text returned when it matches.
///
/// # Invariants
///
/// - every text field is non-empty
/// - keyword matchers contain at least one non-blank keyword
#[derive(Debug, Clone)]
pub struct Rule {
    name: String,
    matcher: Matcher,
    outcome_good: String,
    outcome_bad: String,
    citation: String,
    advice: String,
}

impl Rule {
    /// Creates a rule, validating its text fields and matcher.
    pub fn new(
        name: impl Into<String>,
        matcher: Matcher,
        outcome_good: impl Into<String>,
        outcome_bad: impl Into<String>,
        citation: impl Into<String>,
        advice: impl Into<String>,
    ) -> Result<Self, RuleError> {
        let rule = Self {
            name: name.into(),
            matcher,
            outcome_good: outcome_good.into(),
            outcome_bad: outcome_bad.into(),
            citation: citation.into(),
            advice: advice.into(),
        };
        rule.validate()?;
        Ok(rule)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    pub fn outcome_good(&self) -> &str {
        &self.outcome_good
    }

    pub fn outcome_bad(&self) -> &str {
        &self.outcome_bad
    }

    pub fn citation(&self) -> &str {
        &self.citation
    }

    pub fn advice(&self) -> &str {
        &self.advice
    }

    /// Returns true if this rule classifies the normalized text.
    pub fn matches(&self, normalized: &str) -> bool {
        self.matcher.is_match(normalized)
    }

    fn validate(&self) -> Result<(), RuleError> {
        if self.name.trim().is_empty() {
            return Err(RuleError::invalid(&self.name, ValidationError::empty_field("name")));
        }
        let fields = [
            ("outcome_good", &self.outcome_good),
            ("outcome_bad", &self.outcome_bad),
            ("citation", &self.citation),
            ("advice", &self.advice),
        ];
        for (field, value) in fields {
            if value.trim().is_empty() {
                return Err(RuleError::invalid(&self.name, ValidationError::empty_field(field)));
            }
        }
        self.matcher
            .validate()
            .map_err(|e| RuleError::invalid(&self.name, e))
    }
}

/// Serializable form of a rule, as written in a YAML rule file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleDefinition {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    pub outcome_good: String,
    pub outcome_bad: String,
    pub citation: String,
    pub advice: String,
}

impl TryFrom<RuleDefinition> for Rule {
    type Error = RuleError;

    fn try_from(def: RuleDefinition) -> Result<Self, Self::Error> {
        let matcher = match (def.keywords, def.pattern) {
            (Some(keywords), None) => Matcher::keywords(keywords),
            (None, Some(pattern)) => {
                Matcher::pattern(&pattern).map_err(|source| RuleError::InvalidPattern {
                    name: def.name.clone(),
                    source,
                })?
            }
            _ => return Err(RuleError::AmbiguousMatcher { name: def.name }),
        };
        Rule::new(
            def.name,
            matcher,
            def.outcome_good,
            def.outcome_bad,
            def.citation,
            def.advice,
        )
    }
}

#[derive(Debug, Deserialize)]
struct RuleFile {
    rules: Vec<RuleDefinition>,
}

/// Ordered rule sequence. Order is significant: the first match wins.
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: Vec<Rule>,
}

impl RuleTable {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// The rule table shipped with the application.
    pub fn builtin() -> Self {
        BUILTIN_RULES.clone()
    }

    /// Parses a YAML document of the form `rules: [ ... ]`.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, RuleError> {
        let file: RuleFile = serde_yaml::from_str(yaml)?;
        let rules = file
            .rules
            .into_iter()
            .map(Rule::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(rules))
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::builtin()
    }
}

static BUILTIN_RULES: Lazy<RuleTable> = Lazy::new(|| {
    let definitions = vec![
        RuleDefinition {
            name: "alcohol".to_string(),
            keywords: Some(vec!["alcool".into(), "boire".into(), "soirée".into()]),
            pattern: None,
            outcome_good: "✅ Bien : Cherche des rassemblements et des amis dans des cadres halal — cela apporte paix et bénédiction.".to_string(),
            outcome_bad: "❌ Mal : Être présent dans un endroit où l'alcool est servi peut te mettre en position de complicité et de tentation. Le Prophète ﷺ déconseille de s'asseoir autour d'alcool.".to_string(),
            citation: "Hadith: prox. – règle générale (consultez un savant pour les détails).".to_string(),
            advice: "👉 Conseil : Privilégie une alternative halal et souviens-toi qu'Allah aide ceux qui choisissent le bien.".to_string(),
        },
        RuleDefinition {
            name: "lying".to_string(),
            keywords: None,
            pattern: Some("mensonge|mentir".to_string()),
            outcome_good: "✅ Bien : Dire la vérité construit la confiance et est aimé d'Allah.".to_string(),
            outcome_bad: "❌ Mal : Le mensonge mène à la rupture des relations et à des conséquences morales et sociales.".to_string(),
            citation: "Coran: nombreux versets exhortant à la vérité; Sunna: louange de la véracité.".to_string(),
            advice: "👉 Conseil : Cherche à être honnête en gardant la bienveillance ; parfois choisir de ne pas répondre vaut mieux que mentir.".to_string(),
        },
    ];

    let rules = definitions
        .into_iter()
        .map(Rule::try_from)
        .collect::<Result<Vec<_>, _>>()
        .expect("built-in rules are valid");
    RuleTable::new(rules)
});
