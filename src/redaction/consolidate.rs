//! Entity consolidation

use crate::domain::Entity;

/// Order entities into the canonical sequence shared by masking and
/// restoration
///
/// Stable ascending sort by span start: entities with equal starts keep
/// the relative order in which the detector appended them
/// (first-detected-wins). Overlapping spans are not merged or
/// deduplicated. Idempotent; the result is attached to every
/// [`MaskedDocument`](crate::domain::MaskedDocument) and never re-sorted
/// afterward.
pub fn consolidate(mut entities: Vec<Entity>) -> Vec<Entity> {
    entities.sort_by_key(|e| e.position.start);
    entities
}
