//! CLI command implementations

pub mod detect;
pub mod init;
pub mod mask;
pub mod restore;
pub mod validate;

use anyhow::Context;
use std::io::Read;
use std::path::Path;

/// Read command input from a file, or stdin when no path is given
pub(crate) fn read_input(input: Option<&Path>) -> anyhow::Result<String> {
    match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display())),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read from stdin")?;
            Ok(buffer)
        }
    }
}

/// Write command output to a file, or stdout when no path is given
pub(crate) fn write_output(output: Option<&Path>, content: &str) -> anyhow::Result<()> {
    match output {
        Some(path) => std::fs::write(path, content)
            .with_context(|| format!("Failed to write output file: {}", path.display())),
        None => {
            println!("{content}");
            Ok(())
        }
    }
}
