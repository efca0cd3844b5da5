//! Grayscale reduction of packed-color captures.
//!
//! Screen captures arrive as packed RGB; the correlation core only looks at
//! intensity. The reduction uses the fixed-point luma approximation
//! `(77*R + 151*G + 28*B) >> 8`, an integer form of the 0.299/0.587/0.114
//! perceptual weights that stays exact in `u32` arithmetic.

use crate::image::{channels, PixelView};
use crate::util::{ScreenMatchError, ScreenMatchResult};

/// Owned single-channel intensity image in contiguous row-major layout.
pub struct GrayImage {
    data: Vec<u8>,
    width: usize,
    height: usize,
}

impl GrayImage {
    /// Creates a grayscale image from a contiguous row-major buffer.
    pub fn new(data: Vec<u8>, width: usize, height: usize) -> ScreenMatchResult<Self> {
        if width == 0 || height == 0 {
            return Err(ScreenMatchError::InvalidDimensions { width, height });
        }
        let needed = width
            .checked_mul(height)
            .ok_or(ScreenMatchError::InvalidDimensions { width, height })?;
        if data.len() < needed {
            return Err(ScreenMatchError::BufferTooSmall {
                needed,
                got: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Returns the image width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the image height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the intensity samples in row-major order.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns a contiguous slice for row `y` with length `width`.
    pub fn row(&self, y: usize) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.width;
        self.data.get(start..start + self.width)
    }
}

/// Returns the luma of a packed sample.
#[inline]
pub fn luma(pixel: u32) -> u8 {
    let (r, g, b) = channels(pixel);
    ((77 * r + 151 * g + 28 * b) >> 8) as u8
}

/// Reduces a packed-color view to a single-channel intensity image.
///
/// Source and template must go through the same reduction so window scores
/// compare like against like.
pub fn to_grayscale(view: PixelView<'_>) -> GrayImage {
    let width = view.width();
    let height = view.height();
    let mut data = Vec::with_capacity(width * height);
    for y in 0..height {
        let row = view.row(y).expect("row within bounds for conversion");
        for &pixel in row {
            data.push(luma(pixel));
        }
    }
    GrayImage {
        data,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::{luma, to_grayscale, GrayImage};
    use crate::image::{pack, PixelView};

    #[test]
    fn luma_endpoints() {
        assert_eq!(luma(pack(0, 0, 0)), 0);
        assert_eq!(luma(pack(255, 255, 255)), 255);
    }

    #[test]
    fn luma_weights_order_channels() {
        // Green dominates, then red, then blue.
        let g = luma(pack(0, 200, 0));
        let r = luma(pack(200, 0, 0));
        let b = luma(pack(0, 0, 200));
        assert!(g > r);
        assert!(r > b);
        assert_eq!(r as u32, (77u32 * 200) >> 8);
        assert_eq!(g as u32, (151u32 * 200) >> 8);
        assert_eq!(b as u32, (28u32 * 200) >> 8);
    }

    #[test]
    fn conversion_preserves_geometry_and_drops_padding() {
        let gray_val = pack(100, 100, 100);
        // 2x2 with stride 3.
        let data = [gray_val, gray_val, 0, gray_val, gray_val];
        let view = PixelView::new(&data, 2, 2, 3).unwrap();
        let gray = to_grayscale(view);
        assert_eq!(gray.width(), 2);
        assert_eq!(gray.height(), 2);
        assert_eq!(gray.data(), &[100, 100, 100, 100]);
    }

    #[test]
    fn gray_image_validates_buffer() {
        assert!(GrayImage::new(vec![0; 3], 2, 2).is_err());
        let img = GrayImage::new(vec![1, 2, 3, 4], 2, 2).unwrap();
        assert_eq!(img.row(1).unwrap(), &[3, 4]);
        assert!(img.row(2).is_none());
    }
}
