//! Notification adapters implementing the ReminderNotifier port.

mod log_notifier;

pub use log_notifier::LogReminderNotifier;
