//! Reminder handlers.

mod send_reminder;

pub use send_reminder::{SendReminderCommand, SendReminderError, SendReminderHandler};
