//! Configuration management for Redactr.
//!
//! Configuration is loaded from a TOML file (`redactr.toml` by default),
//! with `${VAR}` environment substitution and `REDACTR_*` environment
//! variable overrides applied on top.

pub mod loader;
pub mod schema;

// Re-export commonly used items
pub use loader::{load_config, load_config_or_default};
pub use schema::{ApplicationConfig, LoggingConfig, RedactrConfig};
