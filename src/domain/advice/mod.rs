//! Advice domain module.
//!
//! The decision engine: classifies a question against an ordered rule
//! table and, when no rule applies, asks for the user's intent before
//! producing a generic verdict.
//!
//! # Architecture
//!
//! - **RuleMatcher**: first-match evaluation of [`Rule`]s on normalized text
//! - **AdviceResolver**: rule verdict, clarification request, or generic verdict
//! - **Advisor**: trait seam the conversation layer depends on
//!
//! # Example
//!
//! ```
//! use conseiller::domain::advice::{AdviceRequest, AdviceResolver, AdviceResult, Intent};
//!
//! let resolver = AdviceResolver::default();
//! let first = resolver.resolve(&AdviceRequest::new("Puis-je porter une cravate rouge ?", None).unwrap());
//! assert!(matches!(first, AdviceResult::NeedsIntent { .. }));
//!
//! let second = resolver.resolve(
//!     &AdviceRequest::new("Puis-je porter une cravate rouge ?", Some(Intent::Curiosity)).unwrap(),
//! );
//! assert!(second.is_verdict());
//! ```

mod intent;
mod matcher;
mod resolver;
mod result;
mod rule;

pub use intent::Intent;
pub use matcher::{normalize_question, RuleMatcher};
pub use resolver::{generic_verdict, AdviceResolver, Advisor, CLARIFICATION_PROMPT};
pub use result::{AdviceRequest, AdviceResult, Tone, Verdict};
pub use rule::{Matcher, Rule, RuleDefinition, RuleError, RuleTable};
