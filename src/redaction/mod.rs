//! Redaction pipeline for Redactr
//!
//! This module implements the detect → mask → restore pipeline over
//! free-form text. Detection combines a regex pattern registry with an
//! injected person-name capability; masking substitutes typed
//! placeholders while tracking cumulative offset drift; restoration walks
//! the placeholder sequence to reproduce the original text.
//!
//! # Usage
//!
//! ```rust,ignore
//! use redactr::redaction::{config::RedactionConfig, NoopNameDetector, RedactionEngine};
//!
//! let engine = RedactionEngine::new(&RedactionConfig::default(), Arc::new(NoopNameDetector))?;
//! let document = engine.mask(text)?;
//! let original = engine.restore(&document.masked_text, &document.entities);
//! ```

pub mod audit;
pub mod config;
pub mod consolidate;
pub mod detector;
pub mod engine;
pub mod mask;
pub mod restore;

// Re-export main types
pub use config::RedactionConfig;
pub use consolidate::consolidate;
pub use detector::{NameDetector, NameSpan, NoopNameDetector, SpanDetector};
pub use engine::RedactionEngine;
pub use mask::mask_entities;
pub use restore::restore_entities;
