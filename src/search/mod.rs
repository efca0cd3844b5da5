//! Public matching entry points.
//!
//! The pipeline is a single synchronous pass: grayscale both inputs, fold
//! the template into [`TemplateStats`], score every valid window, then keep
//! the strongest non-overlapping placements. No state survives a call, so
//! the free functions here are safe to invoke concurrently from any number
//! of threads.

use crate::candidate::nms::suppress_overlapping;
use crate::candidate::Match;
use crate::image::gray::to_grayscale;
use crate::image::PixelView;
use crate::template::TemplateStats;
use crate::trace::{trace_event, trace_span, trace_warn};
use crate::util::ScreenMatchResult;
use std::time::Instant;

pub mod scan;

/// Knobs for a single match call.
#[derive(Clone, Copy, Debug)]
pub struct MatchOptions {
    /// Confidence cutoff in [0.0, 1.0]. Values above 1.0 match nothing;
    /// values at or below 0.0 admit every window before suppression.
    pub threshold: f32,
    /// Cap on the number of returned matches.
    pub max_matches: usize,
    /// Optional wall-clock bound on the window scan, checked once per row
    /// of placements. `None` lets the scan run to completion.
    pub deadline: Option<Instant>,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            threshold: 0.8,
            max_matches: 10,
            deadline: None,
        }
    }
}

/// Locates the template inside the source capture.
///
/// Returns matches ordered by descending confidence, at most
/// `options.max_matches` of them, with mutually non-overlapping
/// template-sized bounding boxes. This entry never fails: a template larger
/// than the source, or any internal fault (including deadline expiry), is
/// logged at warning level and surfaces as an empty list, indistinguishable
/// from a legitimate "no match". Automation scripts call this between
/// gestures and must not be aborted by a failed lookup.
pub fn find_matches(
    source: PixelView<'_>,
    template: PixelView<'_>,
    options: &MatchOptions,
) -> Vec<Match> {
    match find_matches_checked(source, template, options) {
        Ok(matches) => matches,
        Err(err) => {
            let reason = err.to_string();
            trace_warn!("match_failed", reason = reason.as_str());
            Vec::new()
        }
    }
}

/// Same pipeline as [`find_matches`] with errors surfaced to the caller.
pub fn find_matches_checked(
    source: PixelView<'_>,
    template: PixelView<'_>,
    options: &MatchOptions,
) -> ScreenMatchResult<Vec<Match>> {
    let src_width = source.width();
    let src_height = source.height();
    let tpl_width = template.width();
    let tpl_height = template.height();

    let _span = trace_span!(
        "find_matches",
        src_width = src_width,
        src_height = src_height,
        tpl_width = tpl_width,
        tpl_height = tpl_height
    )
    .entered();

    if tpl_width > src_width || tpl_height > src_height {
        trace_warn!(
            "template_exceeds_source",
            tpl_width = tpl_width,
            tpl_height = tpl_height,
            src_width = src_width,
            src_height = src_height
        );
        return Ok(Vec::new());
    }

    let source_gray = to_grayscale(source);
    let template_gray = to_grayscale(template);
    let stats = TemplateStats::compute(&template_gray);
    if stats.is_flat() {
        trace_warn!("flat_template", mean = stats.mean());
    }

    let mut candidates = scan::scan_windows(
        &source_gray,
        &template_gray,
        &stats,
        options.threshold,
        options.deadline,
    )?;
    trace_event!("scan_candidates", count = candidates.len());

    let matches = suppress_overlapping(
        &mut candidates,
        tpl_width,
        tpl_height,
        options.max_matches,
    );
    trace_event!("matches_kept", count = matches.len());
    Ok(matches)
}
