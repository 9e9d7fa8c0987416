//! Application configuration module
//!
//! This module provides type-safe configuration loading from optional TOML
//! files and environment variables using the `config` and `dotenvy` crates.
//! Environment variables carry the `INITIATIVE_COMPASS_` prefix and nested
//! values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use initiative_compass::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Tracker API at {}", config.api.base_url);
//! ```

mod api;
mod assistant;
mod error;
mod identity;

pub use api::ApiConfig;
pub use assistant::AssistantConfig;
pub use error::{ConfigError, ValidationError};
pub use identity::{IdentityConfig, IdentityMode};

use serde::Deserialize;

/// Root application configuration
///
/// Every section carries defaults, so an empty environment yields a
/// working development configuration. Load using [`AppConfig::load()`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Tracker API configuration (base URL, timeout)
    #[serde(default)]
    pub api: ApiConfig,

    /// Assistant flow configuration (pacing, submit timeout)
    #[serde(default)]
    pub assistant: AssistantConfig,

    /// Attribution identity configuration
    #[serde(default)]
    pub identity: IdentityConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Layers optional `config/default.toml` then `config/local.toml`
    /// 3. Overrides with `INITIATIVE_COMPASS`-prefixed environment
    ///    variables, using `__` to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `INITIATIVE_COMPASS__API__BASE_URL=...` -> `api.base_url = ...`
    /// - `INITIATIVE_COMPASS__ASSISTANT__PACING_MS=250` -> `assistant.pacing_ms = 250`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into the expected
    /// types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::default()
                    .prefix("INITIATIVE_COMPASS")
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
        self.api.validate()?;
        self.assistant.validate()?;
        self.identity.validate()?;
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

    fn clear_env() {
        env::remove_var("INITIATIVE_COMPASS__API__BASE_URL");
        env::remove_var("INITIATIVE_COMPASS__API__TIMEOUT_SECS");
        env::remove_var("INITIATIVE_COMPASS__ASSISTANT__PACING_MS");
        env::remove_var("INITIATIVE_COMPASS__IDENTITY__MODE");
    }

    #[test]
    fn test_load_defaults_from_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.assistant.pacing_ms, 500);
        assert_eq!(config.identity.mode, IdentityMode::Dev);
    }

    #[test]
    fn test_environment_overrides_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("INITIATIVE_COMPASS__API__BASE_URL", "http://tracker:9000");
        env::set_var("INITIATIVE_COMPASS__ASSISTANT__PACING_MS", "250");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.api.base_url, "http://tracker:9000");
        assert_eq!(config.assistant.pacing_ms, 250);
    }

    #[test]
    fn test_validate_default_config() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_surfaces_section_errors() {
        let mut config = AppConfig::default();
        config.api.timeout_secs = 0;
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidTimeout)
        ));
    }
}
