//! Dense sliding-window NCC evaluation.
//!
//! Every valid placement of the template inside the source is scored in one
//! pass over the window. Accumulators are `u64`, which is exact for `u8`
//! samples at any realistic capture size; the mean/variance algebra runs in
//! `f64` and the final confidence narrows to `f32`. Identical inputs
//! therefore always produce bit-identical scores.

use crate::candidate::Match;
use crate::image::gray::GrayImage;
use crate::template::TemplateStats;
use crate::util::{ScreenMatchError, ScreenMatchResult};
use std::time::Instant;

/// Scores the template-sized window anchored at `(x, y)` in the source.
///
/// Returns the confidence in [0.0, 1.0], the NCC score remapped via
/// `(ncc + 1) / 2`, or `None` when the template does not fit at that
/// offset. A window with zero intensity variation, or any window against a
/// flat template, scores exactly 0.0 because the correlation is undefined
/// there.
pub fn score_at(
    source: &GrayImage,
    template: &GrayImage,
    stats: &TemplateStats,
    x: usize,
    y: usize,
) -> Option<f32> {
    let src_width = source.width();
    let src_height = source.height();
    let tpl_width = template.width();
    let tpl_height = template.height();
    if src_width < tpl_width || src_height < tpl_height {
        return None;
    }
    if x > src_width - tpl_width || y > src_height - tpl_height {
        return None;
    }
    Some(window_confidence(source, template, stats, x, y))
}

/// Collects every placement whose confidence clears `threshold`.
///
/// Thresholding happens inline so positions below the cutoff are never
/// materialized. An empty search space (template larger than source) yields
/// an empty list. The optional deadline is checked once per row of
/// placements; expiry aborts the scan with [`ScreenMatchError::DeadlineExceeded`].
pub(crate) fn scan_windows(
    source: &GrayImage,
    template: &GrayImage,
    stats: &TemplateStats,
    threshold: f32,
    deadline: Option<Instant>,
) -> ScreenMatchResult<Vec<Match>> {
    let src_width = source.width();
    let src_height = source.height();
    let tpl_width = template.width();
    let tpl_height = template.height();
    if src_width < tpl_width || src_height < tpl_height {
        return Ok(Vec::new());
    }

    let max_x = src_width - tpl_width;
    let max_y = src_height - tpl_height;
    let mut candidates = Vec::new();
    for y in 0..=max_y {
        if let Some(deadline) = deadline {
            if Instant::now() > deadline {
                return Err(ScreenMatchError::DeadlineExceeded);
            }
        }
        for x in 0..=max_x {
            let confidence = window_confidence(source, template, stats, x, y);
            if confidence >= threshold {
                candidates.push(Match { x, y, confidence });
            }
        }
    }

    Ok(candidates)
}

fn window_confidence(
    source: &GrayImage,
    template: &GrayImage,
    stats: &TemplateStats,
    x: usize,
    y: usize,
) -> f32 {
    let tpl_width = template.width();
    let tpl_height = template.height();

    let mut dot = 0u64;
    let mut sum = 0u64;
    let mut sum_sq = 0u64;
    for ty in 0..tpl_height {
        let tpl_row = template.row(ty).expect("row within bounds for scan");
        let src_row = &source.row(y + ty).expect("row within bounds for scan")[x..x + tpl_width];
        for (&s, &t) in src_row.iter().zip(tpl_row) {
            let sv = s as u64;
            dot += sv * t as u64;
            sum += sv;
            sum_sq += sv * sv;
        }
    }

    let n = stats.n() as f64;
    let src_mean = sum as f64 / n;
    let src_sum_sq_diff = sum_sq as f64 - n * src_mean * src_mean;
    if src_sum_sq_diff <= 0.0 || stats.is_flat() {
        return 0.0;
    }

    let numerator = dot as f64 - n * src_mean * stats.mean();
    let denominator = (src_sum_sq_diff * stats.sum_sq_diff()).sqrt();
    let ncc = (numerator / denominator).clamp(-1.0, 1.0);
    ((ncc + 1.0) / 2.0) as f32
}
