//! Mask command implementation

use crate::cli::commands::{read_input, write_output};
use crate::config::load_config_or_default;
use crate::redaction::{NoopNameDetector, RedactionEngine};
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the mask command
#[derive(Args, Debug)]
pub struct MaskArgs {
    /// Input file; stdin when omitted
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output file; stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Emit only the masked text instead of the full JSON document
    #[arg(long)]
    pub text_only: bool,
}

impl MaskArgs {
    /// Execute the mask command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let config = load_config_or_default(config_path)?;
        let engine = RedactionEngine::new(&config.redaction, Arc::new(NoopNameDetector))?;

        let text = read_input(self.input.as_deref())?;
        let document = engine.mask(&text)?;

        tracing::info!(
            detections = document.total_detections(),
            "masked input"
        );

        let rendered = if self.text_only {
            document.masked_text
        } else {
            serde_json::to_string_pretty(&document)?
        };

        write_output(self.output.as_deref(), &rendered)?;
        Ok(0)
    }
}
