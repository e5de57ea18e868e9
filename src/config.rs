use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use crate::models::GeoMarkets;

/// Errors raised while loading settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("unknown log level: {0}")]
    UnknownLogLevel(String),

    #[error("unknown log format: {0} (expected json or pretty)")]
    UnknownLogFormat(String),
}

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub markets: MarketsConfig,
}

/// High-value market overrides for the geography calculator
#[derive(Debug, Clone, Deserialize)]
pub struct MarketsConfig {
    #[serde(default = "default_high_value_states")]
    pub high_value_states: Vec<String>,
    #[serde(default = "default_high_value_cities")]
    pub high_value_cities: Vec<String>,
}

impl Default for MarketsConfig {
    fn default() -> Self {
        Self {
            high_value_states: default_high_value_states(),
            high_value_cities: default_high_value_cities(),
        }
    }
}

impl From<MarketsConfig> for GeoMarkets {
    fn from(markets: MarketsConfig) -> Self {
        GeoMarkets {
            high_value_states: markets.high_value_states,
            high_value_cities: markets.high_value_cities,
        }
    }
}

fn default_high_value_states() -> Vec<String> {
    GeoMarkets::default().high_value_states
}

fn default_high_value_cities() -> Vec<String> {
    GeoMarkets::default().high_value_cities
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with WEDLEAD_)
    pub fn load() -> Result<Self, SettingsError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., WEDLEAD_LOGGING__LEVEL -> logging.level
            .add_source(
                Environment::with_prefix("WEDLEAD")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings: Settings = settings.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("WEDLEAD")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings: Settings = settings.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), SettingsError> {
        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            other => return Err(SettingsError::UnknownLogLevel(other.to_string())),
        }
        match self.logging.format.as_str() {
            "json" | "pretty" => Ok(()),
            other => Err(SettingsError::UnknownLogFormat(other.to_string())),
        }
    }
}
