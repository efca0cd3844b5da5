//! Match candidates and selection.

use std::cmp::Ordering;

pub mod nms;

/// Match position in source coordinates with its confidence.
///
/// `confidence` is the NCC score remapped from [-1, 1] to [0, 1]; the
/// bounding box spans the template dimensions from `(x, y)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Match {
    /// X coordinate (column) of the top-left corner.
    pub x: usize,
    /// Y coordinate (row) of the top-left corner.
    pub y: usize,
    /// Confidence in [0.0, 1.0].
    pub confidence: f32,
}

fn match_cmp_desc(a: &Match, b: &Match) -> Ordering {
    b.confidence
        .total_cmp(&a.confidence)
        .then_with(|| a.y.cmp(&b.y))
        .then_with(|| a.x.cmp(&b.x))
}

/// Sorts matches by descending confidence with deterministic tie-breaking.
///
/// Exact ties fall back to scan order (row-major, `y` then `x`).
pub(crate) fn sort_matches_desc(matches: &mut [Match]) {
    matches.sort_by(match_cmp_desc);
}
