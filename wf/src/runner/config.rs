//! Runner configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Runner configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Max simultaneously in-flight fetches (admission gate capacity)
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,

    /// Overall batch deadline in milliseconds
    #[serde(rename = "timeout-ms", default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Grace window after the deadline for already-dispatched tasks to
    /// report, in milliseconds
    #[serde(rename = "grace-ms", default = "default_grace_ms")]
    pub grace_ms: u64,
}

fn default_concurrency() -> usize {
    10
}

fn default_timeout_ms() -> u64 {
    20_000
}

fn default_grace_ms() -> u64 {
    1_000
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            concurrency: 10,
            timeout_ms: 20_000,
            grace_ms: 1_000,
        }
    }
}

impl RunnerConfig {
    /// Batch deadline as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Drain grace as a Duration
    pub fn grace(&self) -> Duration {
        Duration::from_millis(self.grace_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RunnerConfig::default();
        assert_eq!(config.concurrency, 10);
        assert_eq!(config.timeout_ms, 20_000);
        assert_eq!(config.grace_ms, 1_000);
    }

    #[test]
    fn test_durations() {
        let config = RunnerConfig {
            timeout_ms: 1_500,
            grace_ms: 250,
            ..Default::default()
        };
        assert_eq!(config.timeout(), Duration::from_millis(1_500));
        assert_eq!(config.grace(), Duration::from_millis(250));
    }

    #[test]
    fn test_yaml_defaults_fill_in() {
        let config: RunnerConfig = serde_yaml::from_str("concurrency: 3").unwrap();
        assert_eq!(config.concurrency, 3);
        assert_eq!(config.timeout_ms, 20_000);
        assert_eq!(config.grace_ms, 1_000);
    }
}
