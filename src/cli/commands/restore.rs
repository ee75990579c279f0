//! Restore command implementation

use crate::cli::commands::{read_input, write_output};
use crate::domain::MaskedDocument;
use crate::redaction::restore_entities;
use anyhow::Context;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the restore command
#[derive(Args, Debug)]
pub struct RestoreArgs {
    /// Masked document JSON file; stdin when omitted
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output file; stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl RestoreArgs {
    /// Execute the restore command
    pub fn execute(&self, _config_path: &str) -> anyhow::Result<i32> {
        let raw = read_input(self.input.as_deref())?;
        let document: MaskedDocument =
            serde_json::from_str(&raw).context("Failed to parse masked document JSON")?;

        let restored = restore_entities(&document.masked_text, &document.entities);

        tracing::info!(
            entities = document.entities.len(),
            "restored masked document"
        );

        write_output(self.output.as_deref(), &restored)?;
        Ok(0)
    }
}
