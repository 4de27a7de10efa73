//! Stateless advice handlers.

mod preview_match;
mod resolve_advice;

pub use preview_match::{PreviewMatchHandler, PreviewMatchQuery, RuleSummary};
pub use resolve_advice::{ResolveAdviceCommand, ResolveAdviceError, ResolveAdviceHandler};
