//! Configuration error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Session capacity must be at least 1")]
    InvalidSessionCapacity,

    #[error("CORS origins must be listed explicitly in production")]
    CorsOriginsRequired,

    #[error("Invalid listen address {0}")]
    InvalidAddress(String),

    #[error("Rule file not found: {}", .0.display())]
    RulesFileMissing(PathBuf),
}
