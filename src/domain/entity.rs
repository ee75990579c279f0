//! Entity data models
//!
//! Core types for detected PII spans: the closed classification set, byte
//! spans into the original text, and the masked-document output that pairs
//! rewritten text with the entity sequence needed to restore it.

use serde::{Deserialize, Serialize};

/// PII classification covering the supported detection labels
///
/// The set is closed: adding a label means adding a pattern entry to the
/// registry (or, for [`FullName`](Self::FullName), a name-capability span),
/// nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    /// Person names, supplied by the external name capability
    FullName,
    /// Email addresses
    Email,
    /// Telephone numbers
    PhoneNumber,
    /// Dates of birth
    Dob,
    /// Aadhaar national identification numbers
    AadharNum,
    /// Credit or debit card numbers
    CreditDebitNo,
    /// Card verification values
    CvvNo,
    /// Card expiry dates
    ExpiryNo,
}

impl Classification {
    /// All classifications, in canonical detection order
    ///
    /// `FullName` first (capability spans are appended before pattern
    /// matches), then the pattern labels in registry order.
    pub const ALL: [Classification; 8] = [
        Self::FullName,
        Self::Email,
        Self::PhoneNumber,
        Self::Dob,
        Self::AadharNum,
        Self::CreditDebitNo,
        Self::CvvNo,
        Self::ExpiryNo,
    ];

    /// Wire label for the classification
    pub fn label(&self) -> &'static str {
        match self {
            Self::FullName => "full_name",
            Self::Email => "email",
            Self::PhoneNumber => "phone_number",
            Self::Dob => "dob",
            Self::AadharNum => "aadhar_num",
            Self::CreditDebitNo => "credit_debit_no",
            Self::CvvNo => "cvv_no",
            Self::ExpiryNo => "expiry_no",
        }
    }

    /// Placeholder substituted for a masked span, e.g. `[email]`
    pub fn placeholder(&self) -> String {
        format!("[{}]", self.label())
    }
}

/// Half-open byte span `[start, end)` into the original text
///
/// Serialized as a two-element array to match the entity wire shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(usize, usize)", into = "(usize, usize)")]
pub struct Span {
    /// Inclusive start offset
    pub start: usize,
    /// Exclusive end offset
    pub end: usize,
}

impl Span {
    /// Create a new span
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Length of the span in bytes
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Whether the span is empty
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

impl From<(usize, usize)> for Span {
    fn from((start, end): (usize, usize)) -> Self {
        Self { start, end }
    }
}

impl From<Span> for (usize, usize) {
    fn from(span: Span) -> Self {
        (span.start, span.end)
    }
}

/// A detected sensitive span
///
/// Positions always reference the unmodified original text, never a
/// partially masked string. The consolidated entity sequence, ordered
/// ascending by `position.start` with stable ties, is the contract
/// restoration relies on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// Byte span into the original text
    pub position: Span,
    /// Classification label
    pub classification: Classification,
    /// Exact substring of the original text at `position`
    pub entity: String,
}

impl Entity {
    /// Create a new entity
    pub fn new(
        classification: Classification,
        start: usize,
        end: usize,
        entity: impl Into<String>,
    ) -> Self {
        Self {
            position: Span::new(start, end),
            classification,
            entity: entity.into(),
        }
    }

    /// Placeholder this entity is masked to
    pub fn placeholder(&self) -> String {
        self.classification.placeholder()
    }
}

/// Output of masking: the rewritten text plus the entity sequence that
/// produced it
///
/// The entity list (in consolidated order, positions into the original
/// text) is the sole source of truth for restoration. Created once per
/// mask call and immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaskedDocument {
    /// Text with each detected span replaced by its placeholder
    pub masked_text: String,
    /// Consolidated entities, positions referencing the original text
    pub entities: Vec<Entity>,
}

impl MaskedDocument {
    /// Create a new masked document
    pub fn new(masked_text: String, entities: Vec<Entity>) -> Self {
        Self {
            masked_text,
            entities,
        }
    }

    /// Total number of detections
    pub fn total_detections(&self) -> usize {
        self.entities.len()
    }

    /// Whether any PII was detected
    pub fn has_detections(&self) -> bool {
        !self.entities.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_labels() {
        assert_eq!(Classification::FullName.label(), "full_name");
        assert_eq!(Classification::Email.label(), "email");
        assert_eq!(Classification::CreditDebitNo.label(), "credit_debit_no");
    }

    #[test]
    fn test_classification_placeholder() {
        assert_eq!(Classification::Email.placeholder(), "[email]");
        assert_eq!(Classification::AadharNum.placeholder(), "[aadhar_num]");
    }

    #[test]
    fn test_classification_serde_roundtrip() {
        for classification in Classification::ALL {
            let json = serde_json::to_string(&classification).unwrap();
            let back: Classification = serde_json::from_str(&json).unwrap();
            assert_eq!(back, classification);
        }
    }

    #[test]
    fn test_entity_wire_shape() {
        let entity = Entity::new(Classification::Email, 8, 18, "john@x.com");
        let json = serde_json::to_value(&entity).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "position": [8, 18],
                "classification": "email",
                "entity": "john@x.com"
            })
        );
    }

    #[test]
    fn test_entity_deserialization() {
        let json = r#"{"position": [0, 10], "classification": "full_name", "entity": "John Smith"}"#;
        let entity: Entity = serde_json::from_str(json).unwrap();

        assert_eq!(entity.position, Span::new(0, 10));
        assert_eq!(entity.classification, Classification::FullName);
        assert_eq!(entity.entity, "John Smith");
    }

    #[test]
    fn test_span_len() {
        assert_eq!(Span::new(3, 10).len(), 7);
        assert_eq!(Span::new(5, 5).len(), 0);
        assert!(Span::new(5, 5).is_empty());
    }

    #[test]
    fn test_masked_document_stats() {
        let doc = MaskedDocument::new(
            "[email]".to_string(),
            vec![Entity::new(Classification::Email, 0, 10, "john@x.com")],
        );
        assert_eq!(doc.total_detections(), 1);
        assert!(doc.has_detections());
    }
}
