//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `LOGINAPP_` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use loginapp::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr().unwrap());
//! ```

mod auth;
mod database;
mod error;
mod server;

pub use auth::AuthConfig;
pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, LogFormat, ServerConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a
/// configuration pointing at a local development database.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, logging)
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration (PostgreSQL connection)
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Password hashing configuration
    #[serde(default)]
    pub auth: AuthConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Uses plain `DATABASE_URL` as the default database URL when set
    /// 3. Reads environment variables with `LOGINAPP` prefix
    /// 4. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `LOGINAPP__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `LOGINAPP__DATABASE__URL=...` -> `database.url = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let mut builder = config::Config::builder();
        if let Ok(url) = std::env::var("DATABASE_URL") {
            builder = builder.set_default("database.url", url)?;
        }

        let config = builder
            .add_source(
                config::Environment::default()
                    .prefix("LOGINAPP")
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
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "DATABASE_URL",
        "LOGINAPP__DATABASE__URL",
        "LOGINAPP__DATABASE__IN_MEMORY",
        "LOGINAPP__SERVER__PORT",
        "LOGINAPP__SERVER__ENVIRONMENT",
        "LOGINAPP__AUTH__HASH_ITERATIONS",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_with_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.server.port, 8080);
        assert!(config.database.url.starts_with("postgresql://"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_plain_database_url_is_used() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("DATABASE_URL", "postgresql://plain@localhost/plain");
        let result = AppConfig::load();
        clear_env();

        assert_eq!(result.unwrap().database.url, "postgresql://plain@localhost/plain");
    }

    #[test]
    fn test_prefixed_database_url_wins() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("DATABASE_URL", "postgresql://plain@localhost/plain");
        env::set_var("LOGINAPP__DATABASE__URL", "postgresql://prefixed@localhost/app");
        let result = AppConfig::load();
        clear_env();

        assert_eq!(result.unwrap().database.url, "postgresql://prefixed@localhost/app");
    }

    #[test]
    fn test_environment_from_env() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("LOGINAPP__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        assert_eq!(result.unwrap().server.environment, Environment::Production);
    }

    #[test]
    fn test_custom_values() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("LOGINAPP__SERVER__PORT", "3000");
        env::set_var("LOGINAPP__DATABASE__IN_MEMORY", "true");
        env::set_var("LOGINAPP__AUTH__HASH_ITERATIONS", "3");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
        assert!(config.database.in_memory);
        assert_eq!(config.auth.hash_iterations, 3);
    }

    #[test]
    fn test_validate_rejects_bad_section() {
        let mut config = AppConfig::default();
        config.auth.hash_iterations = 0;
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidHashParams(_))
        ));
    }
}
