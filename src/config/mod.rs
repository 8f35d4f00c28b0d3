//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `WEATHERDECK_` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use weatherdeck::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr());
//! ```

mod database;
mod error;
mod scheduler;
mod server;
mod smtp;
mod weather;

pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use scheduler::{OverlapPolicy, SchedulerConfig};
pub use server::ServerConfig;
pub use smtp::SmtpConfig;
pub use weather::WeatherConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Contains all configuration sections for the Weatherdeck service.
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, timeouts)
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration (PostgreSQL connection)
    pub database: DatabaseConfig,

    /// Weather API configuration (OpenWeatherMap)
    pub weather: WeatherConfig,

    /// SMTP configuration (alert emails)
    pub smtp: SmtpConfig,

    /// Scheduler configuration (background task intervals)
    #[serde(default)]
    pub scheduler: SchedulerConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `WEATHERDECK` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `WEATHERDECK__SERVER__PORT=5000` -> `server.port = 5000`
    /// - `WEATHERDECK__DATABASE__URL=...` -> `database.url = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Required environment variables are missing
    /// - Values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("WEATHERDECK")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("weather.cities")
                    .try_parsing(true),
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
        self.weather.validate()?;
        self.smtp.validate()?;
        self.scheduler.validate()?;
        Ok(())
    }
}
