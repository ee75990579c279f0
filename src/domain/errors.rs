//! Domain error types
//!
//! All errors are domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main Redactr error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific failure categories and provides context for error
/// handling.
#[derive(Debug, Error)]
pub enum RedactError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Pattern library errors (bad TOML, invalid regex)
    #[error("Pattern error: {0}")]
    Pattern(String),

    /// Name-detection capability failures, propagated unchanged
    #[error("Name capability error: {0}")]
    Capability(String),

    /// Audit logging errors
    #[error("Audit error: {0}")]
    Audit(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for RedactError {
    fn from(err: std::io::Error) -> Self {
        RedactError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for RedactError {
    fn from(err: serde_json::Error) -> Self {
        RedactError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for RedactError {
    fn from(err: toml::de::Error) -> Self {
        RedactError::Configuration(format!("TOML parse error: {err}"))
    }
}
