//! HTTP adapter for stateless advice endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{IntentOption, MatchRequest, MatchResponse, ResolveAdviceRequest};
pub use routes::advice_router;
