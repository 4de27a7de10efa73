//! Feature flags configuration

use serde::Deserialize;

/// Feature flags for enabling/disabling functionality
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureFlags {
    /// Allow reminder notifications to be dispatched
    #[serde(default = "default_enable_reminders")]
    pub enable_reminders: bool,

    /// Show detailed error messages (disable in production!)
    #[serde(default)]
    pub verbose_errors: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            enable_reminders: default_enable_reminders(),
            verbose_errors: false,
        }
    }
}

fn default_enable_reminders() -> bool {
    true
}
