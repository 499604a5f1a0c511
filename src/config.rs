//! Match configuration.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::error::ConfigError;

/// Rules that vary between matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MatchConfig {
    /// Round wins needed to take the match.
    #[serde(default = "default_win_threshold")]
    pub win_threshold: u32,

    /// Seconds a player has before the turn passes.
    #[serde(default = "default_turn_limit_secs")]
    pub turn_limit_secs: u64,
}

fn default_win_threshold() -> u32 {
    3
}

fn default_turn_limit_secs() -> u64 {
    15
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            win_threshold: default_win_threshold(),
            turn_limit_secs: default_turn_limit_secs(),
        }
    }
}

impl MatchConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_toml_str(&content)?;
        info!(
            win_threshold = config.win_threshold,
            turn_limit_secs = config.turn_limit_secs,
            "Config loaded"
        );
        Ok(config)
    }

    /// Parses and validates TOML text. Missing keys take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.win_threshold == 0 {
            return Err(ConfigError::Invalid {
                reason: "win_threshold must be at least 1".to_string(),
            });
        }
        if self.turn_limit_secs == 0 {
            return Err(ConfigError::Invalid {
                reason: "turn_limit_secs must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    pub fn turn_limit(&self) -> Duration {
        Duration::from_secs(self.turn_limit_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MatchConfig::default();
        assert_eq!(config.win_threshold, 3);
        assert_eq!(config.turn_limit(), Duration::from_secs(15));
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = MatchConfig::from_toml_str("").unwrap();
        assert_eq!(config, MatchConfig::default());
    }

    #[test]
    fn test_partial_toml() {
        let config = MatchConfig::from_toml_str("win_threshold = 5").unwrap();
        assert_eq!(config.win_threshold, 5);
        assert_eq!(config.turn_limit_secs, 15);
    }

    #[test]
    fn test_zero_threshold_rejected() {
        let err = MatchConfig::from_toml_str("win_threshold = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
        assert!(err.to_string().contains("win_threshold"));
    }

    #[test]
    fn test_unknown_key_is_parse_error() {
        let err = MatchConfig::from_toml_str("board_size = 15").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = MatchConfig::from_file("/nonexistent/gomoku.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
