//! Logger configuration and profiles
//!
//! `LoggerConfig` is serde-friendly so host applications can embed it in
//! their own configuration files; this crate reads no files itself.

use super::{error::LoggerError, log_id::LogIdStrategy, timestamp::TimestampFormat};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Settings a [`Logger`](crate::Logger) is built from
///
/// # Examples
///
/// ```
/// use request_logger::{LoggerConfig, LogIdStrategy, Profile};
///
/// let config = LoggerConfig::new()
///     .with_log_id(LogIdStrategy::Timestamp)
///     .with_caller_location(false);
/// assert_eq!(config, Profile::Timestamped.config());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Suffix strategy for [`Logger::with_log_id`](crate::Logger::with_log_id)
    pub log_id: LogIdStrategy,
    /// Whether lines carry a `file:line` segment
    pub caller_location: bool,
    /// Prefix format of the default sink
    pub timestamp_format: TimestampFormat,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            log_id: LogIdStrategy::default(),
            caller_location: true,
            timestamp_format: TimestampFormat::default(),
        }
    }
}

impl LoggerConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_log_id(mut self, strategy: LogIdStrategy) -> Self {
        self.log_id = strategy;
        self
    }

    #[must_use]
    pub fn with_caller_location(mut self, include: bool) -> Self {
        self.caller_location = include;
        self
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Check values the types alone do not rule out, such as a custom
    /// strftime pattern chrono cannot render
    pub fn validate(&self) -> Result<(), LoggerError> {
        self.timestamp_format.validate()
    }
}

/// Preset configurations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Profile {
    /// Random 8-character id suffix, `file:line` on every line
    #[default]
    Standard,
    /// Unix-nanosecond id suffix, no caller location
    Timestamped,
}

impl Profile {
    pub fn config(&self) -> LoggerConfig {
        match self {
            Profile::Standard => LoggerConfig::default(),
            Profile::Timestamped => LoggerConfig::default()
                .with_log_id(LogIdStrategy::Timestamp)
                .with_caller_location(false),
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Profile::Standard => write!(f, "standard"),
            Profile::Timestamped => write!(f, "timestamped"),
        }
    }
}

impl FromStr for Profile {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "standard" => Ok(Profile::Standard),
            "timestamped" => Ok(Profile::Timestamped),
            _ => Err(LoggerError::config(
                "Profile",
                format!("Unknown profile: '{}'", s),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LoggerConfig::default();
        assert_eq!(config.log_id, LogIdStrategy::Random { len: 8 });
        assert!(config.caller_location);
        assert_eq!(config.timestamp_format, TimestampFormat::Standard);
        assert_eq!(config, Profile::Standard.config());
    }

    #[test]
    fn test_timestamped_profile() {
        let config = Profile::Timestamped.config();
        assert_eq!(config.log_id, LogIdStrategy::Timestamp);
        assert!(!config.caller_location);
    }

    #[test]
    fn test_profile_parse() {
        assert_eq!("Standard".parse::<Profile>().unwrap(), Profile::Standard);
        assert_eq!(" timestamped ".parse::<Profile>().unwrap(), Profile::Timestamped);
        assert!("verbose".parse::<Profile>().is_err());
        assert_eq!(Profile::Timestamped.to_string(), "timestamped");
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: LoggerConfig =
            serde_json::from_str(r#"{"caller_location": false}"#).expect("deserialize");
        assert!(!config.caller_location);
        assert_eq!(config.log_id, LogIdStrategy::default());
    }

    #[test]
    fn test_validate_rejects_bad_timestamp_pattern() {
        assert!(LoggerConfig::default().validate().is_ok());

        let config: LoggerConfig =
            serde_json::from_str(r#"{"timestamp_format": {"Custom": "%Y-%Q"}}"#)
                .expect("deserialize");
        let err = config.validate().unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_config_json_roundtrip() {
        let config = LoggerConfig::new()
            .with_log_id(LogIdStrategy::Random { len: 12 })
            .with_timestamp_format(TimestampFormat::Iso8601Micros);

        let json = serde_json::to_string(&config).expect("serialize");
        assert!(json.contains(r#""log_id":{"random":{"len":12}}"#));

        let back: LoggerConfig = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, config);
    }
}
