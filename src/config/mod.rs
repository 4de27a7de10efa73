//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `CONSEILLER` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use conseiller::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {:?}", config.server.socket_addr());
//! ```

mod advice;
mod error;
mod features;
mod server;

pub use advice::AdviceConfig;
pub use error::{ConfigError, ValidationError};
pub use features::FeatureFlags;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a runnable
/// development configuration with the built-in rule table.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Rule table source
    #[serde(default)]
    pub advice: AdviceConfig,

    /// Feature flags
    #[serde(default)]
    pub features: FeatureFlags,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `CONSEILLER` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `CONSEILLER__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `CONSEILLER__ADVICE__RULES_PATH=rules.yaml` -> `advice.rules_path = rules.yaml`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("CONSEILLER")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for an unusable port, timeout, session
    /// capacity or listen address, a production deployment without CORS
    /// origins, or a rule file that does not exist.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.advice.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }

    /// Feature flags as the running service should apply them.
    ///
    /// Production never returns internal error details to clients, whatever
    /// `features.verbose_errors` says.
    pub fn effective_features(&self) -> FeatureFlags {
        let mut features = self.features.clone();
        if self.is_production() && features.verbose_errors {
            tracing::warn!("verbose_errors ignored in production");
            features.verbose_errors = false;
        }
        features
    }
}
