//! Detect command implementation
//!
//! Reports detected entities without rewriting the input, useful for
//! previewing what a mask run would touch.

use crate::cli::commands::{read_input, write_output};
use crate::config::load_config_or_default;
use crate::redaction::{NoopNameDetector, RedactionEngine};
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the detect command
#[derive(Args, Debug)]
pub struct DetectArgs {
    /// Input file; stdin when omitted
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output file; stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl DetectArgs {
    /// Execute the detect command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let config = load_config_or_default(config_path)?;
        let engine = RedactionEngine::new(&config.redaction, Arc::new(NoopNameDetector))?;

        let text = read_input(self.input.as_deref())?;
        let entities = engine.detect(&text)?;

        tracing::info!(detections = entities.len(), "detection complete");

        let rendered = serde_json::to_string_pretty(&entities)?;
        write_output(self.output.as_deref(), &rendered)?;
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_detect_writes_entity_json() {
        let mut input = NamedTempFile::new().unwrap();
        input.write_all(b"mail a@b.com now").unwrap();
        input.flush().unwrap();

        let output = NamedTempFile::new().unwrap();
        let args = DetectArgs {
            input: Some(input.path().to_path_buf()),
            output: Some(output.path().to_path_buf()),
        };

        let code = args.execute("nonexistent-config.toml").unwrap();
        assert_eq!(code, 0);

        let rendered = std::fs::read_to_string(output.path()).unwrap();
        let entities: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(entities[0]["classification"], "email");
        assert_eq!(entities[0]["entity"], "a@b.com");
    }
}
