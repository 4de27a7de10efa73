//! Spiritual reminders.
//!
//! Short notifications the user can trigger from the conversation screen.
//! They do not touch the advice engine or the message list.

use serde::{Deserialize, Serialize};

const REMINDER_TITLE: &str = "Rappel spirituel";

/// Which reminder to send.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReminderKind {
    Prayer,
    GoodDeed,
}

/// A notification ready for dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    pub kind: ReminderKind,
    pub title: String,
    pub body: String,
}

impl Reminder {
    pub fn for_kind(kind: ReminderKind) -> Self {
        let body = match kind {
            ReminderKind::Prayer => {
                "C'est l'heure de la prière — prends un moment pour te rapprocher d'Allah."
            }
            ReminderKind::GoodDeed => {
                "Rappel : Fais une bonne action aujourd'hui — sourie, aide, donne du temps."
            }
        };
        Self {
            kind,
            title: REMINDER_TITLE.to_string(),
            body: body.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prayer_reminder_mentions_prayer() {
        let reminder = Reminder::for_kind(ReminderKind::Prayer);
        assert_eq!(reminder.title, "Rappel spirituel");
        assert!(reminder.body.contains("prière"));
    }

    #[test]
    fn good_deed_reminder_mentions_good_action() {
        let reminder = Reminder::for_kind(ReminderKind::GoodDeed);
        assert!(reminder.body.contains("bonne action"));
    }

    #[test]
    fn kind_deserializes_from_snake_case() {
        let kind: ReminderKind = serde_json::from_str("\"good_deed\"").unwrap();
        assert_eq!(kind, ReminderKind::GoodDeed);
    }
}
