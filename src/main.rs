use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use conseiller::adapters::{
    build_router, rule_table_from, AppState, InMemorySessionStore, LogReminderNotifier,
};
use conseiller::config::AppConfig;
use conseiller::domain::advice::AdviceResolver;

#[tokio::main]
async fn main() {
    let config = AppConfig::load().expect("Failed to load configuration");

    // Structured JSON logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.server.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    config.validate().expect("Invalid configuration");

    let rules = rule_table_from(config.advice.rules_path.as_deref())
        .expect("Failed to load rule table");
    tracing::info!(rules = rules.len(), "advice engine ready");

    let state = AppState::new(
        Arc::new(InMemorySessionStore::with_capacity(config.server.max_sessions)),
        Arc::new(AdviceResolver::new(rules)),
        Arc::new(LogReminderNotifier::new()),
        config.effective_features(),
    );
    let app = build_router(state, &config.server);

    let addr = config
        .server
        .socket_addr()
        .expect("Invalid listen address");
    tracing::info!(
        environment = ?config.server.environment,
        "Conseiller listening on {}",
        addr
    );

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app).await.expect("Server error");
}
