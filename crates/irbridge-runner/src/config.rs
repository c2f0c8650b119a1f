//! Runner configuration.
//!
//! The binary reads an optional YAML file; CLI flags override whatever the
//! file set. Everything has a default so the bridge runs with no config at
//! all.

use crate::BridgeConfig;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Errors loading a config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// The file was not valid YAML for this schema.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// YAML-configurable runner settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunnerConfig {
    /// Sleep between polls when no message is pending (milliseconds).
    #[serde(default = "default_idle_poll_ms")]
    pub idle_poll_ms: u64,

    /// Sleep between connectivity checks while offline (milliseconds).
    #[serde(default = "default_offline_poll_ms")]
    pub offline_poll_ms: u64,
}

fn default_idle_poll_ms() -> u64 {
    1000
}

fn default_offline_poll_ms() -> u64 {
    100
}

impl Default for RunnerConfig {
    fn default() -> Self {
        RunnerConfig {
            idle_poll_ms: default_idle_poll_ms(),
            offline_poll_ms: default_offline_poll_ms(),
        }
    }
}

impl RunnerConfig {
    /// Load settings from a YAML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&contents)?)
    }

    /// Convert to the bridge pacing configuration.
    pub fn bridge_config(&self) -> BridgeConfig {
        BridgeConfig {
            idle_poll: Duration::from_millis(self.idle_poll_ms),
            offline_poll: Duration::from_millis(self.offline_poll_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RunnerConfig::default();
        assert_eq!(config.idle_poll_ms, 1000);
        assert_eq!(config.offline_poll_ms, 100);
    }

    #[test]
    fn test_parse_yaml() {
        let config: RunnerConfig = serde_yaml::from_str("idle_poll_ms: 250\n").unwrap();
        assert_eq!(config.idle_poll_ms, 250);
        assert_eq!(config.offline_poll_ms, 100);
        assert_eq!(config.bridge_config().idle_poll, Duration::from_millis(250));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result: Result<RunnerConfig, _> = serde_yaml::from_str("pol_interval: 5\n");
        assert!(result.is_err());
    }
}
