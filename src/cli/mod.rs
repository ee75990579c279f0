//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Redactr using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Redactr - PII redaction for free-form text
#[derive(Parser, Debug)]
#[command(name = "redactr")]
#[command(version, about, long_about = None)]
#[command(author = "Redactr Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "redactr.toml", env = "REDACTR_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "REDACTR_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Mask PII in text, emitting the masked document as JSON
    Mask(commands::mask::MaskArgs),

    /// Restore original text from a masked document
    Restore(commands::restore::RestoreArgs),

    /// Detect PII without rewriting, emitting entities as JSON
    Detect(commands::detect::DetectArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_mask() {
        let cli = Cli::parse_from(["redactr", "mask"]);
        assert_eq!(cli.config, "redactr.toml");
        assert!(matches!(cli.command, Commands::Mask(_)));
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from(["redactr", "--config", "custom.toml", "mask"]);
        assert_eq!(cli.config, "custom.toml");
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from(["redactr", "--log-level", "debug", "detect"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_cli_parse_restore() {
        let cli = Cli::parse_from(["redactr", "restore"]);
        assert!(matches!(cli.command, Commands::Restore(_)));
    }

    #[test]
    fn test_cli_parse_validate_config() {
        let cli = Cli::parse_from(["redactr", "validate-config"]);
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["redactr", "init"]);
        assert!(matches!(cli.command, Commands::Init(_)));
    }
}
