//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `SessionStore` - Keeps conversation sessions between requests
//! - `ReminderNotifier` - Delivers spiritual reminders

mod reminder_notifier;
mod session_store;

pub use reminder_notifier::{NotifyError, ReminderNotifier};
pub use session_store::{SessionStore, SessionStoreError};
