//! Greedy non-maximum suppression over candidate bounding boxes.

use crate::candidate::{sort_matches_desc, Match};

/// Keeps the highest-confidence non-overlapping matches, up to `max_matches`.
///
/// Sorts `candidates` in place by descending confidence, then accepts each
/// one only if its template-sized bounding box does not intersect any
/// already-accepted box; the caller's slice is left in the sorted order.
/// Two axis-aligned boxes overlap unless one lies entirely to the left,
/// right, above, or below the other.
pub fn suppress_overlapping(
    candidates: &mut [Match],
    tpl_width: usize,
    tpl_height: usize,
    max_matches: usize,
) -> Vec<Match> {
    if max_matches == 0 {
        return Vec::new();
    }

    sort_matches_desc(candidates);
    let mut kept: Vec<Match> = Vec::new();

    'outer: for candidate in candidates.iter().copied() {
        if kept.len() == max_matches {
            break;
        }
        for accepted in kept.iter() {
            if boxes_overlap(&candidate, accepted, tpl_width, tpl_height) {
                continue 'outer;
            }
        }
        kept.push(candidate);
    }

    kept
}

#[inline]
fn boxes_overlap(a: &Match, b: &Match, width: usize, height: usize) -> bool {
    !(a.x + width <= b.x || b.x + width <= a.x || a.y + height <= b.y || b.y + height <= a.y)
}
