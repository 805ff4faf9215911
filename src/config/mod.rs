//! Application configuration module
//!
//! Configuration is read from environment variables (and a `.env` file when
//! present) using the `config` and `dotenvy` crates. Variables carry the
//! `PREFERENCE_STORE` prefix and nested values are separated by `__`.
//!
//! # Example
//!
//! ```no_run
//! use preference_store::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Database at {}", config.database.url);
//! ```

mod database;
mod error;
mod logging;
mod seed;

pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use seed::SeedConfig;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Database configuration (SQLite connection)
    pub database: DatabaseConfig,

    /// Seed document locations
    #[serde(default)]
    pub seed: SeedConfig,

    /// Log filter and output format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Environment Variable Format
    ///
    /// - `PREFERENCE_STORE__DATABASE__URL=sqlite://prefs.db` -> `database.url`
    /// - `PREFERENCE_STORE__SEED__PREFERENCES_PATH=...` -> `seed.preferences_path`
    /// - `PREFERENCE_STORE__LOGGING__JSON=true` -> `logging.json`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or values
    /// cannot be parsed into the expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("PREFERENCE_STORE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.database.validate()?;
        self.seed.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
