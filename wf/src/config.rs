//! Configuration types and loading

use clap::ValueEnum;
use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::runner::RunnerConfig;

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Runner limits and deadlines
    pub runner: RunnerConfig,

    /// Remote API settings
    pub fetch: FetchConfig,

    /// Report units
    pub units: UnitsConfig,

    /// Log level used when no --log-level flag is given
    #[serde(rename = "log-level")]
    pub log_level: Option<String>,
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // If explicit config path provided, try to load it
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        // Try project-local config: .weatherfan.yml
        let local_config = PathBuf::from(".weatherfan.yml");
        if local_config.exists() {
            match Self::load_from_file(&local_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    tracing::warn!("Failed to load config from {}: {}", local_config.display(), e);
                }
            }
        }

        // Try user config: ~/.config/weatherfan/weatherfan.yml
        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("weatherfan").join("weatherfan.yml");
            if user_config.exists() {
                match Self::load_from_file(&user_config) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        tracing::warn!("Failed to load config from {}: {}", user_config.display(), e);
                    }
                }
            }
        }

        // No config file found, use defaults
        tracing::debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Peek at the configured log level before logging is set up
    pub fn load_log_level(config_path: Option<&PathBuf>) -> Option<String> {
        Self::load(config_path).ok().and_then(|c| c.log_level)
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        tracing::debug!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }
}

/// Remote API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Forecast endpoint URL
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Per-request transport timeout in milliseconds
    #[serde(rename = "timeout-ms")]
    pub timeout_ms: u64,

    /// User-Agent header sent with every request
    #[serde(rename = "user-agent")]
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.open-meteo.com/v1/forecast".to_string(),
            timeout_ms: 8_000,
            user_agent: "weatherfan/0.1 (+https://example.local)".to_string(),
        }
    }
}

/// Report units
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UnitsConfig {
    pub temperature: TemperatureUnit,
    pub wind: WindSpeedUnit,
}

/// Temperature unit choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    #[default]
    Fahrenheit,
    Celsius,
}

impl TemperatureUnit {
    /// Query-parameter value for the API
    pub fn api_value(&self) -> &'static str {
        match self {
            Self::Fahrenheit => "fahrenheit",
            Self::Celsius => "celsius",
        }
    }
}

/// Wind speed unit choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum WindSpeedUnit {
    #[default]
    Mph,
    Kmh,
}

impl WindSpeedUnit {
    /// Query-parameter value for the API
    pub fn api_value(&self) -> &'static str {
        match self {
            Self::Mph => "mph",
            Self::Kmh => "kmh",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.runner.concurrency, 10);
        assert_eq!(config.runner.timeout_ms, 20_000);
        assert_eq!(config.fetch.timeout_ms, 8_000);
        assert!(config.fetch.base_url.contains("open-meteo.com"));
        assert_eq!(config.units.temperature, TemperatureUnit::Fahrenheit);
        assert_eq!(config.units.wind, WindSpeedUnit::Mph);
        assert!(config.log_level.is_none());
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let yaml = r#"
runner:
  concurrency: 4
units:
  temperature: celsius
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.runner.concurrency, 4);
        assert_eq!(config.runner.timeout_ms, 20_000);
        assert_eq!(config.units.temperature, TemperatureUnit::Celsius);
        assert_eq!(config.units.wind, WindSpeedUnit::Mph);
    }

    #[test]
    fn test_kebab_keys_parse() {
        let yaml = r#"
log-level: DEBUG
fetch:
  timeout-ms: 2000
  base-url: "http://localhost:9999/v1/forecast"
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.log_level.as_deref(), Some("DEBUG"));
        assert_eq!(config.fetch.timeout_ms, 2000);
        assert!(config.fetch.base_url.starts_with("http://localhost"));
    }

    #[test]
    fn test_api_values() {
        assert_eq!(TemperatureUnit::Fahrenheit.api_value(), "fahrenheit");
        assert_eq!(TemperatureUnit::Celsius.api_value(), "celsius");
        assert_eq!(WindSpeedUnit::Mph.api_value(), "mph");
        assert_eq!(WindSpeedUnit::Kmh.api_value(), "kmh");
    }
}
