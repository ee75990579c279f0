//! Configuration schema types

use crate::domain::errors::RedactError;
use crate::domain::result::Result;
use crate::redaction::config::RedactionConfig;
use serde::{Deserialize, Serialize};

/// Top-level Redactr configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RedactrConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Redaction engine settings
    #[serde(default)]
    pub redaction: RedactionConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl RedactrConfig {
    /// Validate the full configuration
    pub fn validate(&self) -> Result<()> {
        self.application.validate()?;
        self.redaction
            .validate()
            .map_err(|e| RedactError::Configuration(e.to_string()))?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Application name used in log output
    #[serde(default = "default_application_name")]
    pub name: String,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_application_name() -> String {
    "redactr".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            name: default_application_name(),
            log_level: default_log_level(),
        }
    }
}

impl ApplicationConfig {
    /// Validate application settings
    pub fn validate(&self) -> Result<()> {
        match self.log_level.to_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
            other => Err(RedactError::Configuration(format!(
                "Invalid log level: {other}. Must be one of: trace, debug, info, warn, error"
            ))),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Directory for log files
    #[serde(default = "default_log_path")]
    pub local_path: String,

    /// Log rotation: daily or hourly
    #[serde(default = "default_log_rotation")]
    pub local_rotation: String,
}

fn default_log_path() -> String {
    "./logs".to_string()
}

fn default_log_rotation() -> String {
    "daily".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_log_path(),
            local_rotation: default_log_rotation(),
        }
    }
}

impl LoggingConfig {
    /// Validate logging settings
    pub fn validate(&self) -> Result<()> {
        match self.local_rotation.as_str() {
            "daily" | "hourly" => Ok(()),
            other => Err(RedactError::Configuration(format!(
                "Invalid log rotation: {other}. Must be one of: daily, hourly"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = RedactrConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.application.name, "redactr");
        assert_eq!(config.application.log_level, "info");
        assert!(!config.logging.local_enabled);
    }

    #[test]
    fn test_invalid_log_level_rejected() {
        let config = RedactrConfig {
            application: ApplicationConfig {
                log_level: "verbose".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_rotation_rejected() {
        let config = RedactrConfig {
            logging: LoggingConfig {
                local_rotation: "weekly".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_minimal_toml_parses() {
        let config: RedactrConfig = toml::from_str("").unwrap();
        assert_eq!(config.application.name, "redactr");
        assert!(config.redaction.pattern_library.is_none());
    }
}
