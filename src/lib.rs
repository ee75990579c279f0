// Redactr - PII Redaction Engine
// Copyright (c) 2026 Redactr Contributors
// Licensed under the MIT License

//! # Redactr - PII Redaction Engine
//!
//! Redactr detects sensitive spans in free-form text (names, emails, phone
//! numbers, dates of birth, national IDs, payment card data), replaces each
//! with a typed placeholder, and can losslessly reconstruct the original
//! text from the placeholder sequence plus the recorded entities.
//!
//! ## Overview
//!
//! The pipeline is detect → consolidate → mask, reversed by a placeholder
//! walk for restore:
//!
//! - **Detection** combines a regex pattern registry with an injected
//!   person-name capability ([`redaction::NameDetector`])
//! - **Consolidation** orders entities ascending by start offset with a
//!   stable tie-break; that order is the restoration contract
//! - **Masking** substitutes `[classification]` placeholders while
//!   tracking the cumulative offset drift of earlier replacements
//! - **Restoration** walks the entity sequence, replacing each
//!   placeholder occurrence left to right
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`redaction`] - Detection, masking, restoration, audit
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust
//! use redactr::redaction::{NoopNameDetector, RedactionConfig, RedactionEngine};
//! use std::sync::Arc;
//!
//! # fn main() -> anyhow::Result<()> {
//! let engine = RedactionEngine::new(&RedactionConfig::default(), Arc::new(NoopNameDetector))?;
//!
//! let document = engine.mask("write to john@x.com")?;
//! assert_eq!(document.masked_text, "write to [email]");
//!
//! let original = engine.restore(&document.masked_text, &document.entities);
//! assert_eq!(original, "write to john@x.com");
//! # Ok(())
//! # }
//! ```
//!
//! ## Name detection
//!
//! Person-name recognition is a capability the caller injects: any
//! `NameDetector` implementation (an NER model, a dictionary, a remote
//! service) supplying byte-offset spans. The crate ships
//! [`redaction::NoopNameDetector`] so the engine works without one.
//!
//! ## Error Handling
//!
//! The domain layer uses [`domain::RedactError`]; pipeline internals use
//! `anyhow` with context. Restoration never fails: entities whose
//! placeholder is missing from the masked text are skipped.
//!
//! ## Logging
//!
//! Redactr uses structured logging with the `tracing` crate:
//!
//! ```rust,no_run
//! use tracing::{info, debug};
//!
//! info!("Starting mask run");
//! debug!(detections = 3, "masked input text");
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod logging;
pub mod redaction;
