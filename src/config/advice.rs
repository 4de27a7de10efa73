//! Advice engine configuration

use std::path::PathBuf;

use serde::Deserialize;

use super::error::ValidationError;

/// Where the rule table comes from
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdviceConfig {
    /// YAML rule file replacing the built-in table
    pub rules_path: Option<PathBuf>,
}

impl AdviceConfig {
    /// Validate advice configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        match &self.rules_path {
            Some(path) if !path.is_file() => Err(ValidationError::RulesFileMissing(path.clone())),
            _ => Ok(()),
        }
    }
}
