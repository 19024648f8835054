//! CLI flag definitions
//!
//! Flags default to None so values from the config file survive unless the
//! user overrides them; the documented defaults live in the config types.

use clap::Parser;
use std::path::PathBuf;
use tracing::debug;

use crate::config::{Config, TemperatureUnit, WindSpeedUnit};

/// WeatherFan - concurrent current-conditions report for US state capitals
#[derive(Debug, Parser)]
#[command(
    name = "wf",
    about = "Concurrent current-conditions report for US state capitals",
    version
)]
pub struct Cli {
    /// Max number of simultaneous requests [default: 10]
    #[arg(long, value_name = "N")]
    pub concurrency: Option<usize>,

    /// Run on a single OS thread (still fans out concurrently)
    #[arg(long)]
    pub single_thread: bool,

    /// Overall timeout for the run, in seconds [default: 20]
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Temperature unit [default: fahrenheit]
    #[arg(long, value_enum, value_name = "UNIT")]
    pub temperature_unit: Option<TemperatureUnit>,

    /// Wind speed unit [default: mph]
    #[arg(long, value_enum, value_name = "UNIT")]
    pub wind_unit: Option<WindSpeedUnit>,

    /// Path to config file
    #[arg(short, long, help = "Path to config file")]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(
        short = 'l',
        long = "log-level",
        help = "Log level (TRACE, DEBUG, INFO, WARN, ERROR)"
    )]
    pub log_level: Option<String>,
}

impl Cli {
    /// Fold flag overrides into a loaded config
    pub fn apply(&self, config: &mut Config) {
        debug!(?self, "Cli::apply: called");
        if let Some(concurrency) = self.concurrency {
            config.runner.concurrency = concurrency;
        }
        if let Some(secs) = self.timeout {
            config.runner.timeout_ms = secs * 1_000;
        }
        if let Some(unit) = self.temperature_unit {
            config.units.temperature = unit;
        }
        if let Some(unit) = self.wind_unit {
            config.units.wind = unit;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_no_flags() {
        let cli = Cli::parse_from(["wf"]);
        assert!(cli.concurrency.is_none());
        assert!(cli.timeout.is_none());
        assert!(!cli.single_thread);
        assert!(cli.temperature_unit.is_none());
        assert!(cli.wind_unit.is_none());
    }

    #[test]
    fn test_cli_parse_all_flags() {
        let cli = Cli::parse_from([
            "wf",
            "--concurrency",
            "3",
            "--single-thread",
            "--timeout",
            "5",
            "--temperature-unit",
            "celsius",
            "--wind-unit",
            "kmh",
            "-l",
            "DEBUG",
        ]);
        assert_eq!(cli.concurrency, Some(3));
        assert!(cli.single_thread);
        assert_eq!(cli.timeout, Some(5));
        assert_eq!(cli.temperature_unit, Some(TemperatureUnit::Celsius));
        assert_eq!(cli.wind_unit, Some(WindSpeedUnit::Kmh));
        assert_eq!(cli.log_level.as_deref(), Some("DEBUG"));
    }

    #[test]
    fn test_cli_with_config_path() {
        let cli = Cli::parse_from(["wf", "-c", "/path/to/weatherfan.yml"]);
        assert_eq!(cli.config, Some(PathBuf::from("/path/to/weatherfan.yml")));
    }

    #[test]
    fn test_apply_overrides_config() {
        let cli = Cli::parse_from(["wf", "--concurrency", "2", "--timeout", "7"]);
        let mut config = Config::default();

        cli.apply(&mut config);

        assert_eq!(config.runner.concurrency, 2);
        assert_eq!(config.runner.timeout_ms, 7_000);
        // Untouched flags leave config values alone
        assert_eq!(config.units.temperature, TemperatureUnit::Fahrenheit);
    }

    #[test]
    fn test_apply_without_flags_keeps_config() {
        let cli = Cli::parse_from(["wf"]);
        let mut config = Config::default();
        config.runner.concurrency = 42;

        cli.apply(&mut config);

        assert_eq!(config.runner.concurrency, 42);
    }
}
