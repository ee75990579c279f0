//! Domain models and types for Redactr.
//!
//! This module contains the core data model of the redaction pipeline and
//! the crate-wide error types.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **The closed classification set** ([`Classification`])
//! - **Detected spans** ([`Entity`], [`Span`])
//! - **Masking output** ([`MaskedDocument`])
//! - **Error types** ([`RedactError`]) and the [`Result`] alias
//!
//! # Wire shape
//!
//! Entities serialize to the exact shape callers round-trip through mask
//! and restore:
//!
//! ```rust
//! use redactr::domain::{Classification, Entity};
//!
//! let entity = Entity::new(Classification::Email, 22, 32, "john@x.com");
//! let json = serde_json::to_value(&entity).unwrap();
//! assert_eq!(
//!     json,
//!     serde_json::json!({
//!         "position": [22, 32],
//!         "classification": "email",
//!         "entity": "john@x.com"
//!     })
//! );
//! ```

pub mod entity;
pub mod errors;
pub mod result;

// Re-export commonly used types for convenience
pub use entity::{Classification, Entity, MaskedDocument, Span};
pub use errors::RedactError;
pub use result::Result;
