//! Session configuration.
//!
//! # Responsibility
//! - Resolve logging and debug-panel settings from defaults and environment.
//! - Validate the result before the session starts.
//!
//! # Invariants
//! - Blank environment values are ignored, never treated as overrides.
//! - Explicit overrides (CLI flags) win over the environment.

use crate::logging::{default_log_level, normalize_level};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const ENV_LOG_LEVEL: &str = "ROSTER_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "ROSTER_LOG_DIR";
pub const ENV_SHOW_JSON: &str = "ROSTER_SHOW_JSON";

/// Settings for one roster session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// One of `trace|debug|info|warn|error`.
    pub log_level: String,
    /// Absolute directory for rolling logs. `None` disables file logging.
    pub log_dir: Option<PathBuf>,
    /// Whether the JSON debug panel starts visible.
    pub show_json: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level().to_string(),
            log_dir: None,
            show_json: false,
        }
    }
}

impl SessionConfig {
    /// Defaults overlaid with the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overlaid with values from `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        let non_blank = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        if let Some(level) = non_blank(ENV_LOG_LEVEL) {
            config.log_level = level;
        }
        if let Some(dir) = non_blank(ENV_LOG_DIR) {
            config.log_dir = Some(PathBuf::from(dir));
        }
        if let Some(flag) = non_blank(ENV_SHOW_JSON) {
            config.show_json = parse_flag(ENV_SHOW_JSON, &flag)?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Applies explicit overrides and re-validates.
    pub fn with_overrides(
        mut self,
        log_level: Option<String>,
        log_dir: Option<PathBuf>,
        show_json: bool,
    ) -> Result<Self, ConfigError> {
        if let Some(level) = log_level {
            self.log_level = level;
        }
        if let Some(dir) = log_dir {
            self.log_dir = Some(dir);
        }
        self.show_json |= show_json;
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        normalize_level(&self.log_level)
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))?;
        if let Some(dir) = &self.log_dir {
            if !dir.is_absolute() {
                return Err(ConfigError::RelativeLogDir(dir.clone()));
            }
        }
        Ok(())
    }
}

fn parse_flag(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            key,
            value: value.to_string(),
        }),
    }
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidLogLevel(String),
    RelativeLogDir(PathBuf),
    InvalidFlag { key: &'static str, value: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLogLevel(level) => write!(
                f,
                "unsupported log level `{level}`; expected trace|debug|info|warn|error"
            ),
            Self::RelativeLogDir(dir) => write!(
                f,
                "log directory must be an absolute path, got `{}`",
                dir.display()
            ),
            Self::InvalidFlag { key, value } => {
                write!(f, "{key} must be a boolean flag, got `{value}`")
            }
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::{ConfigError, SessionConfig, ENV_LOG_DIR, ENV_LOG_LEVEL, ENV_SHOW_JSON};
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_yields_defaults() {
        let config = SessionConfig::from_lookup(lookup(&[])).expect("defaults are valid");
        assert_eq!(config, SessionConfig::default());
    }

    #[test]
    fn environment_overrides_defaults_and_blank_values_are_ignored() {
        let config = SessionConfig::from_lookup(lookup(&[
            (ENV_LOG_LEVEL, "warn"),
            (ENV_LOG_DIR, "   "),
            (ENV_SHOW_JSON, "yes"),
        ]))
        .expect("valid environment");

        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_dir, None);
        assert!(config.show_json);
    }

    #[test]
    fn rejects_invalid_values() {
        assert_eq!(
            SessionConfig::from_lookup(lookup(&[(ENV_LOG_LEVEL, "loud")]))
                .expect_err("bad level"),
            ConfigError::InvalidLogLevel("loud".to_string())
        );
        assert_eq!(
            SessionConfig::from_lookup(lookup(&[(ENV_LOG_DIR, "logs")])).expect_err("relative dir"),
            ConfigError::RelativeLogDir(PathBuf::from("logs"))
        );
        assert!(matches!(
            SessionConfig::from_lookup(lookup(&[(ENV_SHOW_JSON, "maybe")])),
            Err(ConfigError::InvalidFlag { .. })
        ));
    }

    #[test]
    fn overrides_win_over_environment() {
        let base = SessionConfig::from_lookup(lookup(&[(ENV_LOG_LEVEL, "warn")]))
            .expect("valid environment");
        let config = base
            .with_overrides(Some("trace".to_string()), None, true)
            .expect("valid overrides");

        assert_eq!(config.log_level, "trace");
        assert!(config.show_json);
    }
}
