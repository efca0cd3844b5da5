//! Screenmatch locates a small reference image inside a captured screen.
//!
//! The pipeline reduces packed-RGB captures to grayscale, scores every
//! valid template placement with normalized cross-correlation, and keeps
//! the highest-confidence non-overlapping placements. It is aimed at
//! screen-automation tools that need to turn "where is this button" into
//! gesture coordinates.

pub mod candidate;
pub mod image;
pub mod search;
pub mod template;
mod trace;
pub mod util;

pub use candidate::nms::suppress_overlapping;
pub use candidate::Match;
pub use image::gray::{luma, to_grayscale, GrayImage};
pub use image::{pack, PixelBuffer, PixelView};
pub use search::scan::score_at;
pub use search::{find_matches, find_matches_checked, MatchOptions};
pub use template::TemplateStats;
pub use util::{ScreenMatchError, ScreenMatchResult};
