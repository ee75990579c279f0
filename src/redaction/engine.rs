//! Main redaction engine
//!
//! This module provides the core [`RedactionEngine`] that orchestrates
//! detection, consolidation, masking and restoration for free-form text.
//!
//! # Architecture
//!
//! The engine coordinates three components:
//! - **Span detector**: pattern registry matches plus spans from the
//!   injected name capability
//! - **Masking engine**: placeholder substitution with cumulative offset
//!   tracking
//! - **Audit logger**: optional per-operation records with hashed values
//!
//! # Examples
//!
//! ```
//! use redactr::redaction::{config::RedactionConfig, NoopNameDetector, RedactionEngine};
//! use std::sync::Arc;
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = RedactionConfig::default();
//! let engine = RedactionEngine::new(&config, Arc::new(NoopNameDetector))?;
//!
//! let document = engine.mask("my card expires 09/27")?;
//! assert_eq!(document.masked_text, "my card expires [expiry_no]");
//!
//! let restored = engine.restore(&document.masked_text, &document.entities);
//! assert_eq!(restored, "my card expires 09/27");
//! # Ok(())
//! # }
//! ```

use crate::domain::{Entity, MaskedDocument};
use crate::redaction::{
    audit::AuditLogger,
    config::RedactionConfig,
    consolidate::consolidate,
    detector::{patterns::PatternRegistry, NameDetector, SpanDetector},
    mask::mask_entities,
    restore::restore_entities,
};
use anyhow::Result;
use std::sync::Arc;
use std::time::Instant;

/// Main redaction engine
///
/// Stateless between calls: each operation is a pure function of its
/// arguments plus the single name-capability call during detection. The
/// engine is `Send + Sync` and can be shared across threads with `Arc`
/// with no coordination.
///
/// The name capability is injected at construction; the engine holds no
/// process-wide singletons.
pub struct RedactionEngine {
    detector: SpanDetector,
    audit_logger: Option<AuditLogger>,
}

impl RedactionEngine {
    /// Create a new redaction engine
    ///
    /// Loads the pattern library named by the configuration (built-in
    /// patterns when unset) and wires in the supplied name capability.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, the pattern
    /// library cannot be loaded, or the audit logger cannot be created.
    pub fn new(config: &RedactionConfig, name_detector: Arc<dyn NameDetector>) -> Result<Self> {
        config.validate()?;

        let registry = if let Some(ref pattern_path) = config.pattern_library {
            PatternRegistry::from_file(pattern_path)?
        } else {
            PatternRegistry::default_patterns()?
        };

        let audit_logger = if config.audit.enabled {
            Some(AuditLogger::new(
                config.audit.log_path.clone(),
                config.audit.json_format,
                true,
            )?)
        } else {
            None
        };

        Ok(Self {
            detector: SpanDetector::new(Arc::new(registry), name_detector),
            audit_logger,
        })
    }

    /// Detect sensitive spans in `text`
    ///
    /// Returns the consolidated entity sequence: ascending by start
    /// offset, stable on ties, overlaps kept. Positions reference `text`
    /// itself.
    ///
    /// # Errors
    ///
    /// Propagates name-capability failures unchanged; pattern scanning
    /// itself cannot fail.
    pub fn detect(&self, text: &str) -> Result<Vec<Entity>> {
        let entities = self.detector.detect(text)?;
        Ok(consolidate(entities))
    }

    /// Detect and mask sensitive spans in `text`
    ///
    /// Equivalent to [`detect`](Self::detect) followed by
    /// [`mask_with_entities`](Self::mask_with_entities).
    pub fn mask(&self, text: &str) -> Result<MaskedDocument> {
        let start = Instant::now();

        let entities = self.detect(text)?;
        let document = MaskedDocument::new(mask_entities(text, &entities), entities);

        tracing::debug!(
            detections = document.total_detections(),
            "masked input text"
        );

        if let Some(ref logger) = self.audit_logger {
            logger.log_mask(&document, start.elapsed().as_millis() as u64)?;
        }

        Ok(document)
    }

    /// Mask `text` using pre-supplied entities
    ///
    /// Consolidates the given entities (a no-op if already consolidated)
    /// and substitutes placeholders. No capability call is made, so this
    /// cannot fail.
    pub fn mask_with_entities(&self, text: &str, entities: Vec<Entity>) -> MaskedDocument {
        let entities = consolidate(entities);
        MaskedDocument::new(mask_entities(text, &entities), entities)
    }

    /// Restore original values into masked text
    ///
    /// `entities` must be the sequence returned by masking, in its
    /// consolidated order. Entities whose placeholder is no longer
    /// present are skipped; restoration is best-effort and never fails.
    pub fn restore(&self, masked_text: &str, entities: &[Entity]) -> String {
        restore_entities(masked_text, entities)
    }
}
