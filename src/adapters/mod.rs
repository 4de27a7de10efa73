//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - Axum REST API
//! - `notify` - Reminder delivery
//! - `rules` - Rule table loading
//! - `storage` - Session persistence

pub mod http;
pub mod notify;
pub mod rules;
pub mod storage;

pub use http::{api_router, build_router, AppState};
pub use notify::LogReminderNotifier;
pub use rules::{load_rule_table, rule_table_from, RuleSourceError};
pub use storage::InMemorySessionStore;
