//! Reminder notifier that emits structured log events.
//!
//! Used when no user-facing notification channel is wired in; the
//! calling UI is expected to display the reminder it gets back.

use async_trait::async_trait;

use crate::domain::reminder::Reminder;
use crate::ports::{NotifyError, ReminderNotifier};

#[derive(Debug, Clone, Default)]
pub struct LogReminderNotifier;

impl LogReminderNotifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ReminderNotifier for LogReminderNotifier {
    async fn notify(&self, reminder: &Reminder) -> Result<(), NotifyError> {
        tracing::info!(
            kind = ?reminder.kind,
            title = %reminder.title,
            body = %reminder.body,
            "reminder dispatched"
        );
        Ok(())
    }
}
