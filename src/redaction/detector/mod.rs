//! PII span detection
//!
//! Provides the trait seam for the external person-name capability and the
//! span detector that merges capability spans with pattern matches.

pub mod patterns;

use crate::domain::{Classification, Entity};
use anyhow::Result;
use patterns::PatternRegistry;
use std::sync::Arc;

/// A person-name span reported by the name capability
///
/// Offsets are byte offsets into the unmodified input text, on character
/// boundaries, in the same unit as [`Entity`](crate::domain::Entity)
/// positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameSpan {
    /// Inclusive start offset
    pub start: usize,
    /// Exclusive end offset
    pub end: usize,
    /// The matched name text
    pub text: String,
}

/// External person-name detection capability
///
/// Name detection is a black box to the engine: a synchronous,
/// side-effect-free function from text to spans, called at most once per
/// detect invocation with the unmodified input. Failures propagate
/// unchanged to the caller; no retry or timeout policy is applied here.
pub trait NameDetector: Send + Sync {
    /// Detect person-name spans in `text`
    fn name_spans(&self, text: &str) -> Result<Vec<NameSpan>>;
}

/// Name detector that never reports a span
///
/// Used when no NER backend is wired in; pattern detection still runs.
pub struct NoopNameDetector;

impl NameDetector for NoopNameDetector {
    fn name_spans(&self, _text: &str) -> Result<Vec<NameSpan>> {
        Ok(Vec::new())
    }
}

/// Span detector combining the name capability with the pattern registry
///
/// Produces a flat entity list: capability spans first (as `full_name`),
/// then every registry pattern scanned over the full text. That append
/// order is the stable tie-break that consolidation preserves.
pub struct SpanDetector {
    registry: Arc<PatternRegistry>,
    name_detector: Arc<dyn NameDetector>,
}

impl SpanDetector {
    /// Create a new span detector
    pub fn new(registry: Arc<PatternRegistry>, name_detector: Arc<dyn NameDetector>) -> Self {
        Self {
            registry,
            name_detector,
        }
    }

    /// Detect all sensitive spans in `text`
    ///
    /// Pure apart from the single name-capability call. Empty or no-match
    /// input yields an empty list. Different patterns may produce
    /// overlapping or duplicate entities; all are kept.
    pub fn detect(&self, text: &str) -> Result<Vec<Entity>> {
        let mut entities = Vec::new();

        for span in self.name_detector.name_spans(text)? {
            entities.push(Entity {
                position: (span.start, span.end).into(),
                classification: Classification::FullName,
                entity: span.text,
            });
        }

        for pattern in self.registry.all_patterns() {
            for m in pattern.regex.find_iter(text) {
                entities.push(Entity::new(
                    pattern.classification,
                    m.start(),
                    m.end(),
                    m.as_str(),
                ));
            }
        }

        Ok(entities)
    }
}
