//! Reminder Notifier Port - delivers spiritual reminders to the user.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::reminder::Reminder;

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("Notification channel unavailable: {0}")]
    Unavailable(String),
}

/// Port for dispatching reminder notifications.
///
/// Implementations decide the channel (desktop notification, push, log).
#[async_trait]
pub trait ReminderNotifier: Send + Sync {
    async fn notify(&self, reminder: &Reminder) -> Result<(), NotifyError>;
}
