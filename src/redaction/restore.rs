//! Restoration engine
//!
//! Walks the consolidated entity sequence over masked text, substituting
//! each placeholder occurrence back to its original value.

use crate::domain::Entity;

/// Restore original values into `masked_text`
///
/// For each entity in consolidated order, finds the first occurrence of
/// its placeholder at or after the search cursor, substitutes the
/// original value, and advances the cursor past it — so two entities of
/// the same classification consume successive occurrences, never the same
/// one twice.
///
/// A placeholder that cannot be found (hand-edited or foreign masked
/// text) is skipped and the text left as-is for that entity; restoration
/// is best-effort and never fails. An entity whose classification the
/// masked text never contained simply finds nothing.
pub fn restore_entities(masked_text: &str, entities: &[Entity]) -> String {
    let mut restored = masked_text.to_string();
    let mut cursor = 0usize;

    for entity in entities {
        let placeholder = entity.placeholder();
        let Some(found) = restored[cursor..].find(&placeholder) else {
            tracing::debug!(
                classification = entity.classification.label(),
                "placeholder not found, skipping entity"
            );
            continue;
        };

        let idx = cursor + found;
        restored.replace_range(idx..idx + placeholder.len(), &entity.entity);
        cursor = idx + entity.entity.len();
    }

    restored
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Classification;

    #[test]
    fn test_restore_single_entity() {
        let entities = vec![Entity::new(Classification::Email, 12, 22, "john@x.com")];
        assert_eq!(
            restore_entities("reach me at [email] please", &entities),
            "reach me at john@x.com please"
        );
    }

    #[test]
    fn test_restore_duplicate_classification_advances() {
        // Two email entities must consume the first and second occurrence
        // in order, never the same one twice.
        let entities = vec![
            Entity::new(Classification::Email, 0, 7, "a@x.com"),
            Entity::new(Classification::Email, 12, 19, "b@y.com"),
        ];

        assert_eq!(
            restore_entities("[email] and [email]", &entities),
            "a@x.com and b@y.com"
        );
    }

    #[test]
    fn test_restore_identical_values_and_placeholders() {
        let entities = vec![
            Entity::new(Classification::CvvNo, 0, 3, "123"),
            Entity::new(Classification::CvvNo, 8, 11, "123"),
        ];

        assert_eq!(
            restore_entities("[cvv_no] or [cvv_no]", &entities),
            "123 or 123"
        );
    }

    #[test]
    fn test_restore_missing_placeholder_skipped() {
        // Caller hand-edited the masked text; the email placeholder is
        // gone. Remaining text must be untouched and no error raised.
        let entities = vec![
            Entity::new(Classification::Email, 0, 7, "a@x.com"),
            Entity::new(Classification::CvvNo, 10, 13, "123"),
        ];

        assert_eq!(
            restore_entities("edited out, cvv [cvv_no]", &entities),
            "edited out, cvv 123"
        );
    }

    #[test]
    fn test_restore_empty() {
        assert_eq!(restore_entities("", &[]), "");
    }

    #[test]
    fn test_restore_no_entities_leaves_text() {
        assert_eq!(restore_entities("[email] stays", &[]), "[email] stays");
    }

    #[test]
    fn test_restore_value_containing_placeholder_text() {
        // A restored value that textually contains a later placeholder
        // must not be rematched: the cursor has already advanced past it.
        let entities = vec![
            Entity::new(Classification::Email, 0, 15, "[email]@x.com"),
            Entity::new(Classification::Email, 20, 27, "b@y.com"),
        ];

        assert_eq!(
            restore_entities("[email] then [email]", &entities),
            "[email]@x.com then b@y.com"
        );
    }

    #[test]
    fn test_restore_unicode_context() {
        let entities = vec![Entity::new(Classification::Email, 10, 19, "jean@x.fr")];
        assert_eq!(
            restore_entities("écrivez à [email], merci", &entities),
            "écrivez à jean@x.fr, merci"
        );
    }
}
