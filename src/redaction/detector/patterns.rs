//! Pattern library for PII detection

use crate::domain::Classification;
use anyhow::{Context, Result};
use regex::Regex;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Pattern definition from TOML
#[derive(Debug, Clone, Deserialize)]
pub struct PatternDefinition {
    /// Regex patterns for this classification
    pub patterns: Vec<String>,
    /// Classification label
    pub classification: Classification,
}

/// Compiled pattern with its classification label
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    /// Compiled regex
    pub regex: Regex,
    /// Classification assigned to every match
    pub classification: Classification,
}

/// Pattern library container
#[derive(Debug, Deserialize)]
struct PatternLibrary {
    patterns: HashMap<String, PatternDefinition>,
}

/// Ordered pattern registry for PII detection
///
/// Patterns are applied in canonical classification order
/// ([`Classification::ALL`]), not TOML table order, so detection output is
/// deterministic for any library file. Entries sharing a classification
/// are ordered by entry name.
pub struct PatternRegistry {
    patterns: Vec<CompiledPattern>,
}

impl PatternRegistry {
    /// Create a new pattern registry from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).with_context(|| {
            format!(
                "Failed to read pattern library: {}",
                path.as_ref().display()
            )
        })?;

        Self::from_toml(&content)
    }

    /// Create a pattern registry from TOML content
    pub fn from_toml(content: &str) -> Result<Self> {
        let library: PatternLibrary =
            toml::from_str(content).context("Failed to parse pattern library TOML")?;

        // HashMap order is arbitrary; sort by entry name before compiling
        let mut entries: Vec<(String, PatternDefinition)> = library.patterns.into_iter().collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));

        let mut by_classification: HashMap<Classification, Vec<CompiledPattern>> = HashMap::new();
        for (name, def) in entries {
            for pattern_str in &def.patterns {
                let regex = Regex::new(pattern_str)
                    .with_context(|| format!("Invalid regex in pattern '{name}': {pattern_str}"))?;

                by_classification
                    .entry(def.classification)
                    .or_default()
                    .push(CompiledPattern {
                        regex,
                        classification: def.classification,
                    });
            }
        }

        let mut patterns = Vec::new();
        for classification in Classification::ALL {
            if let Some(mut compiled) = by_classification.remove(&classification) {
                patterns.append(&mut compiled);
            }
        }

        Ok(Self { patterns })
    }

    /// Create a registry with the built-in default patterns
    pub fn default_patterns() -> Result<Self> {
        // Use embedded default patterns
        let default_toml = include_str!("../../../patterns/pii_patterns.toml");
        Self::from_toml(default_toml)
    }

    /// Get all patterns in application order
    pub fn all_patterns(&self) -> &[CompiledPattern] {
        &self.patterns
    }

    /// Get patterns for a specific classification
    pub fn patterns_for(&self, classification: Classification) -> Vec<&CompiledPattern> {
        self.patterns
            .iter()
            .filter(|p| p.classification == classification)
            .collect()
    }
}
