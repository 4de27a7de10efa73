//! SendReminderHandler - Dispatch a spiritual reminder

use std::sync::Arc;

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::reminder::{Reminder, ReminderKind};
use crate::ports::{NotifyError, ReminderNotifier};

/// Command to send a reminder
#[derive(Debug, Clone, Copy)]
pub struct SendReminderCommand {
    pub kind: ReminderKind,
}

#[derive(Debug, Error)]
pub enum SendReminderError {
    #[error("Reminders are disabled")]
    Disabled,

    #[error(transparent)]
    Notify(#[from] NotifyError),
}

impl SendReminderError {
    pub fn code(&self) -> ErrorCode {
        match self {
            SendReminderError::Disabled => ErrorCode::RemindersDisabled,
            SendReminderError::Notify(_) => ErrorCode::InternalError,
        }
    }
}

impl From<SendReminderError> for DomainError {
    fn from(err: SendReminderError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}

/// Handler for reminders
pub struct SendReminderHandler {
    notifier: Arc<dyn ReminderNotifier>,
    enabled: bool,
}

impl SendReminderHandler {
    pub fn new(notifier: Arc<dyn ReminderNotifier>, enabled: bool) -> Self {
        Self { notifier, enabled }
    }

    pub async fn handle(&self, cmd: SendReminderCommand) -> Result<Reminder, SendReminderError> {
        if !self.enabled {
            return Err(SendReminderError::Disabled);
        }

        let reminder = Reminder::for_kind(cmd.kind);
        self.notifier.notify(&reminder).await?;

        tracing::info!(kind = ?cmd.kind, "reminder sent");

        Ok(reminder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingNotifier {
        sent: Mutex<Vec<Reminder>>,
    }

    #[async_trait]
    impl ReminderNotifier for RecordingNotifier {
        async fn notify(&self, reminder: &Reminder) -> Result<(), NotifyError> {
            self.sent.lock().unwrap().push(reminder.clone());
            Ok(())
        }
    }

    struct BrokenNotifier;

    #[async_trait]
    impl ReminderNotifier for BrokenNotifier {
        async fn notify(&self, _reminder: &Reminder) -> Result<(), NotifyError> {
            Err(NotifyError::Unavailable("offline".to_string()))
        }
    }

    #[tokio::test]
    async fn sends_reminder_through_notifier() {
        let notifier = Arc::new(RecordingNotifier::default());
        let handler = SendReminderHandler::new(notifier.clone(), true);

        let reminder = handler
            .handle(SendReminderCommand {
                kind: ReminderKind::Prayer,
            })
            .await
            .unwrap();

        assert_eq!(reminder.kind, ReminderKind::Prayer);
        assert_eq!(notifier.sent.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn disabled_reminders_are_rejected() {
        let notifier = Arc::new(RecordingNotifier::default());
        let handler = SendReminderHandler::new(notifier.clone(), false);

        let result = handler
            .handle(SendReminderCommand {
                kind: ReminderKind::GoodDeed,
            })
            .await;

        assert!(matches!(result, Err(SendReminderError::Disabled)));
        assert!(notifier.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn notifier_failure_is_reported() {
        let handler = SendReminderHandler::new(Arc::new(BrokenNotifier), true);

        let err = handler
            .handle(SendReminderCommand {
                kind: ReminderKind::Prayer,
            })
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::InternalError);
    }
}
