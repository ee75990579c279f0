//! Audit logger for redaction operations

use crate::domain::{Entity, MaskedDocument};
use anyhow::{Context, Result};
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// Audit log entry
#[derive(Debug, Serialize)]
struct AuditLogEntry {
    timestamp: String,
    detections_count: usize,
    processing_time_ms: u64,
    detections: Vec<AuditDetection>,
}

/// Audit detection entry (with hashed PII)
#[derive(Debug, Serialize)]
struct AuditDetection {
    classification: String,
    position: (usize, usize),
    /// SHA-256 hash of the original value (never log plaintext PII)
    value_hash: String,
}

/// Audit logger for redaction operations
///
/// Appends one entry per mask operation to a JSON-lines (or plain text)
/// log file. Original values are recorded only as SHA-256 hashes.
pub struct AuditLogger {
    log_path: PathBuf,
    json_format: bool,
    enabled: bool,
}

impl AuditLogger {
    /// Create a new audit logger
    pub fn new(log_path: PathBuf, json_format: bool, enabled: bool) -> Result<Self> {
        if enabled {
            // Ensure parent directory exists
            if let Some(parent) = log_path.parent() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create audit log directory: {}", parent.display())
                })?;
            }
        }

        Ok(Self {
            log_path,
            json_format,
            enabled,
        })
    }

    /// Log a completed mask operation
    pub fn log_mask(&self, document: &MaskedDocument, processing_time_ms: u64) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }

        let entry = AuditLogEntry {
            timestamp: chrono::Utc::now().to_rfc3339(),
            detections_count: document.entities.len(),
            processing_time_ms,
            detections: document
                .entities
                .iter()
                .map(|e| self.create_audit_detection(e))
                .collect(),
        };

        self.write_entry(&entry)
    }

    /// Create an audit detection entry with hashed PII value
    fn create_audit_detection(&self, entity: &Entity) -> AuditDetection {
        AuditDetection {
            classification: entity.classification.label().to_string(),
            position: entity.position.into(),
            value_hash: self.hash_pii_value(&entity.entity),
        }
    }

    /// Hash a PII value using SHA-256
    fn hash_pii_value(&self, value: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(value.as_bytes());
        let result = hasher.finalize();
        format!("{result:x}")
    }

    /// Write an audit entry to the log file
    fn write_entry(&self, entry: &AuditLogEntry) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .with_context(|| format!("Failed to open audit log: {}", self.log_path.display()))?;

        if self.json_format {
            let json_line =
                serde_json::to_string(entry).context("Failed to serialize audit entry")?;
            writeln!(file, "{json_line}").context("Failed to write audit entry")?;
        } else {
            writeln!(
                file,
                "[{}] Detections: {} | Time: {}ms",
                entry.timestamp, entry.detections_count, entry.processing_time_ms
            )
            .context("Failed to write audit entry")?;
        }

        Ok(())
    }
}
