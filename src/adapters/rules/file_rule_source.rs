//! Loads a rule table from a YAML file on disk.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::advice::{RuleError, RuleTable};

#[derive(Debug, Error)]
pub enum RuleSourceError {
    #[error("Failed to read rule file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid rule file {path}: {source}")]
    Invalid {
        path: PathBuf,
        #[source]
        source: RuleError,
    },
}

/// Reads and compiles the rule table at `path`.
pub fn load_rule_table(path: &Path) -> Result<RuleTable, RuleSourceError> {
    let yaml = std::fs::read_to_string(path).map_err(|source| RuleSourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let table = RuleTable::from_yaml_str(&yaml).map_err(|source| RuleSourceError::Invalid {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), rules = table.len(), "loaded rule table");
    Ok(table)
}

/// Uses the file at `path` when given, otherwise the built-in table.
pub fn rule_table_from(path: Option<&Path>) -> Result<RuleTable, RuleSourceError> {
    match path {
        Some(path) => load_rule_table(path),
        None => Ok(RuleTable::builtin()),
    }
}
