//! Masking engine
//!
//! Rewrites text by substituting each detected span with its
//! classification placeholder, threading the cumulative length delta so
//! later spans stay aligned as earlier replacements grow or shrink the
//! buffer.

use crate::domain::Entity;

/// Replace each entity's span in `text` with its placeholder
///
/// `entities` must be the consolidated sequence; positions reference the
/// original `text` and stay valid for restoration — masked-text positions
/// are never recorded. A running signed offset accumulates the length
/// delta of placeholders already spliced in, so the adjusted span for
/// entity *i* depends only on entities `0..i`, regardless of whether
/// placeholders are shorter or longer than the spans they replace.
///
/// Overlapping spans are not rejected: the later splice lands on an
/// already-rewritten region and produces garbled output. The adjusted
/// range is clamped to the current buffer and snapped to character
/// boundaries, so such input degrades instead of panicking. The
/// round-trip guarantee holds only for non-overlapping entities.
pub fn mask_entities(text: &str, entities: &[Entity]) -> String {
    let (masked, _) = entities
        .iter()
        .fold((text.to_string(), 0isize), |(current, offset), entity| {
            let placeholder = entity.placeholder();
            let start = clamp_to_boundary(&current, entity.position.start as isize + offset);
            let end = clamp_to_boundary(&current, entity.position.end as isize + offset);

            let mut next = String::with_capacity(current.len() + placeholder.len());
            next.push_str(&current[..start]);
            next.push_str(&placeholder);
            next.push_str(&current[end..]);

            // Delta uses the original span length, not the clamped one
            let delta = placeholder.len() as isize - entity.position.len() as isize;
            (next, offset + delta)
        });

    masked
}

/// Clamp a signed index into `s` and snap down to a char boundary
///
/// For non-overlapping entities the adjusted index is always in range and
/// on a boundary; this only bites on overlap-shifted spans.
fn clamp_to_boundary(s: &str, idx: isize) -> usize {
    let mut idx = idx.clamp(0, s.len() as isize) as usize;
    while !s.is_char_boundary(idx) {
        idx -= 1;
    }
    idx
}
