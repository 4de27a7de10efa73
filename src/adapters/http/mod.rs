//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure.
//! [`build_router`] merges them and applies the shared middleware stack.

pub mod advice;
pub mod conversation;
pub mod error;
pub mod extract;
pub mod health;
pub mod reminder;
pub mod state;

use ::http::{HeaderName, HeaderValue, Method};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

// Re-export key types for convenience
pub use advice::advice_router;
pub use conversation::conversation_router;
pub use error::{ApiError, ErrorResponse};
pub use extract::ApiJson;
pub use health::health_router;
pub use reminder::reminder_router;
pub use state::AppState;

/// All API routes bound to `state`, without middleware.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .merge(health_router())
        .merge(advice_router())
        .merge(conversation_router())
        .merge(reminder_router())
        .with_state(state)
}

/// The full application: routes plus tracing, CORS and request timeout.
pub fn build_router(state: AppState, server: &ServerConfig) -> Router {
    api_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(build_cors_layer(server))
            .layer(TimeoutLayer::new(server.request_timeout())),
    )
}

/// Build a CORS layer from `server.cors_origins`.
///
/// Without configured origins any origin is allowed in development. In
/// production the wildcard is never used: only listed origins pass.
pub fn build_cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .allowed_origins()
        .into_iter()
        .filter_map(|origin| origin.parse::<HeaderValue>().ok())
        .collect();

    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([HeaderName::from_static("content-type")]);

    if origins.is_empty() && !server.is_production() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(origins)
    }
}
