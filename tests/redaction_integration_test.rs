//! Integration tests for the detect → mask → restore pipeline

use redactr::domain::{Classification, Entity, MaskedDocument};
use redactr::redaction::{
    NameDetector, NameSpan, NoopNameDetector, RedactionConfig, RedactionEngine,
};
use std::sync::Arc;

/// Name capability returning spans computed from the input text
struct SubstringNames(Vec<&'static str>);

impl NameDetector for SubstringNames {
    fn name_spans(&self, text: &str) -> anyhow::Result<Vec<NameSpan>> {
        Ok(self
            .0
            .iter()
            .filter_map(|name| {
                text.find(name).map(|start| NameSpan {
                    start,
                    end: start + name.len(),
                    text: name.to_string(),
                })
            })
            .collect())
    }
}

fn engine_with_names(names: Vec<&'static str>) -> RedactionEngine {
    RedactionEngine::new(
        &RedactionConfig::default(),
        Arc::new(SubstringNames(names)),
    )
    .expect("Failed to create engine")
}

fn engine_without_names() -> RedactionEngine {
    RedactionEngine::new(&RedactionConfig::default(), Arc::new(NoopNameDetector))
        .expect("Failed to create engine")
}

#[test]
fn test_contact_scenario_masks_and_restores() {
    let engine = engine_with_names(vec!["John Smith"]);
    let text = "Contact John Smith at john@x.com";

    let entities = engine.detect(text).unwrap();
    assert_eq!(entities.len(), 2);
    assert_eq!(entities[0].classification, Classification::FullName);
    assert_eq!(entities[0].position, (8, 18).into());
    assert_eq!(entities[1].classification, Classification::Email);
    assert_eq!(entities[1].entity, "john@x.com");

    let document = engine.mask(text).unwrap();
    assert_eq!(document.masked_text, "Contact [full_name] at [email]");

    let restored = engine.restore(&document.masked_text, &document.entities);
    assert_eq!(restored, text);
}

#[test]
fn test_full_pipeline_round_trip() {
    let engine = engine_with_names(vec!["Jane Roe"]);
    let text =
        "Call Jane Roe at 9876543210 or jane.roe@example.org, card cvv 123, expires 09/27.";

    let document = engine.mask(text).unwrap();
    assert_eq!(
        document.masked_text,
        "Call [full_name] at [phone_number] or [email], card cvv [cvv_no], expires [expiry_no]."
    );

    let restored = engine.restore(&document.masked_text, &document.entities);
    assert_eq!(restored, text);
}

#[test]
fn test_entities_are_sorted_by_original_start() {
    let engine = engine_with_names(vec!["Jane Roe"]);
    let text = "cvv 421 reaches Jane Roe at jane@x.org";

    let entities = engine.detect(text).unwrap();
    assert!(entities.len() >= 3);

    let starts: Vec<usize> = entities.iter().map(|e| e.position.start).collect();
    let mut sorted = starts.clone();
    sorted.sort_unstable();
    assert_eq!(starts, sorted);
}

#[test]
fn test_duplicate_classification_restores_in_order() {
    let engine = engine_without_names();
    let text = "first a@x.com then b@y.com";

    let document = engine.mask(text).unwrap();
    assert_eq!(document.masked_text, "first [email] then [email]");

    // The first entity must take the first occurrence, the second the
    // next one; identical placeholders are never consumed twice.
    let restored = engine.restore(&document.masked_text, &document.entities);
    assert_eq!(restored, text);
}

#[test]
fn test_hand_edited_masked_text_restores_best_effort() {
    let engine = engine_without_names();
    let document = engine.mask("first a@x.com then b@y.com").unwrap();

    // Caller removed the first placeholder by hand
    let edited = document.masked_text.replacen("[email]", "(redacted)", 1);
    let restored = engine.restore(&edited, &document.entities);

    // No panic, no error; the surviving placeholder gets the first
    // entity's value (first find wins) and the rest stays untouched.
    assert!(restored.contains("(redacted)"));
    assert!(restored.contains("a@x.com"));
    assert!(!restored.contains("[email]"));
}

#[test]
fn test_document_serialization_round_trip() {
    let engine = engine_with_names(vec!["John Smith"]);
    let text = "Contact John Smith at john@x.com";

    let document = engine.mask(text).unwrap();
    let json = serde_json::to_string(&document).unwrap();

    // The wire shape is what downstream callers hand back to restore
    let parsed: MaskedDocument = serde_json::from_str(&json).unwrap();
    let restored = engine.restore(&parsed.masked_text, &parsed.entities);
    assert_eq!(restored, text);
}

#[test]
fn test_entity_wire_shape_in_document() {
    let engine = engine_without_names();
    let document = engine.mask("mail a@b.com").unwrap();

    let json = serde_json::to_value(&document).unwrap();
    assert_eq!(
        json["entities"][0],
        serde_json::json!({
            "position": [5, 12],
            "classification": "email",
            "entity": "a@b.com"
        })
    );
}

#[test]
fn test_mask_with_presupplied_entities() {
    let engine = engine_without_names();
    let text = "agent 007 reporting";

    // Caller supplies entities out of order; masking consolidates first
    let entities = vec![Entity::new(Classification::CvvNo, 6, 9, "007")];
    let document = engine.mask_with_entities(text, entities);

    assert_eq!(document.masked_text, "agent [cvv_no] reporting");
    assert_eq!(
        engine.restore(&document.masked_text, &document.entities),
        text
    );
}

#[test]
fn test_name_capability_failure_propagates() {
    struct Failing;

    impl NameDetector for Failing {
        fn name_spans(&self, _text: &str) -> anyhow::Result<Vec<NameSpan>> {
            anyhow::bail!("NER backend offline")
        }
    }

    let engine =
        RedactionEngine::new(&RedactionConfig::default(), Arc::new(Failing)).unwrap();

    let err = engine.mask("anything").unwrap_err();
    assert!(err.to_string().contains("NER backend offline"));
}
