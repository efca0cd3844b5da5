//! Template statistics precomputation.

use crate::image::gray::GrayImage;

/// Aggregate statistics of a grayscale template.
///
/// Computed in one pass and reused for every window placement; nothing here
/// depends on where the template is aligned in the source. `sum_sq_diff` is
/// `sum(v - mean)^2` obtained through the identity `sum(v^2) - n*mean^2`,
/// which avoids a second pass over the pixels.
#[derive(Clone, Copy, Debug)]
pub struct TemplateStats {
    n: u64,
    mean: f64,
    sum_sq_diff: f64,
}

impl TemplateStats {
    /// Accumulates statistics over all template pixels.
    ///
    /// Iterates row by row; a backing buffer longer than `width*height`
    /// contributes nothing beyond the image extent.
    pub fn compute(template: &GrayImage) -> Self {
        let mut sum = 0u64;
        let mut sum_sq = 0u64;
        for y in 0..template.height() {
            let row = template.row(y).expect("row within bounds for stats");
            for &value in row {
                let v = value as u64;
                sum += v;
                sum_sq += v * v;
            }
        }

        let n = (template.width() * template.height()) as u64;
        let mean = sum as f64 / n as f64;
        let sum_sq_diff = sum_sq as f64 - n as f64 * mean * mean;
        Self {
            n,
            mean,
            sum_sq_diff,
        }
    }

    /// Returns the template pixel count.
    pub fn n(&self) -> u64 {
        self.n
    }

    /// Returns the mean intensity.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Returns the summed squared deviation from the mean.
    pub fn sum_sq_diff(&self) -> f64 {
        self.sum_sq_diff
    }

    /// True when the template has no intensity variation.
    ///
    /// Correlation against a flat template is undefined; the scorer forces
    /// such windows to zero confidence instead of dividing by zero.
    pub fn is_flat(&self) -> bool {
        self.sum_sq_diff <= 0.0
    }
}
