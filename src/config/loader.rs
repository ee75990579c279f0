//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::RedactrConfig;
use crate::domain::errors::RedactError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into RedactrConfig
/// 4. Applies environment variable overrides (REDACTR_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if the file cannot be read, TOML parsing fails, a
/// referenced environment variable is missing, or validation fails.
///
/// # Examples
///
/// ```no_run
/// use redactr::config::load_config;
///
/// let config = load_config("redactr.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<RedactrConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(RedactError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        RedactError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: RedactrConfig = toml::from_str(&contents)
        .map_err(|e| RedactError::Configuration(format!("Failed to parse TOML: {e}")))?;

    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        RedactError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

/// Loads configuration from a file when present, defaults otherwise
///
/// CLI commands use this so they work without a config file on disk;
/// environment overrides still apply either way.
pub fn load_config_or_default(path: impl AsRef<Path>) -> Result<RedactrConfig> {
    let path = path.as_ref();

    if path.exists() {
        return load_config(path);
    }

    tracing::debug!(path = %path.display(), "config file not found, using defaults");
    let mut config = RedactrConfig::default();
    apply_env_overrides(&mut config)?;
    config.validate()?;
    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").unwrap();
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    // Process line by line to skip comments
    for line in input.lines() {
        let trimmed = line.trim_start();

        if trimmed.starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{var_name}}}");
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(RedactError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using the REDACTR_* prefix
///
/// Environment variables follow the pattern: REDACTR_<SECTION>_<KEY>,
/// for example REDACTR_APPLICATION_LOG_LEVEL or
/// REDACTR_REDACTION_PATTERN_LIBRARY.
fn apply_env_overrides(config: &mut RedactrConfig) -> Result<()> {
    // Application overrides
    if let Ok(val) = std::env::var("REDACTR_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // Redaction overrides
    config
        .redaction
        .apply_env_overrides()
        .map_err(|e| RedactError::Configuration(e.to_string()))?;

    // Logging overrides
    if let Ok(val) = std::env::var("REDACTR_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("REDACTR_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Ok(val) = std::env::var("REDACTR_LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }

    Ok(())
}
