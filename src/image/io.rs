//! Convenience helpers for loading captures via the `image` crate.
//!
//! Available when the `image-io` feature is enabled. Stored template assets
//! and test fixtures live on disk as PNG/JPEG; these helpers repack them
//! into the crate's buffer types.

use crate::image::gray::GrayImage;
use crate::image::{pack, PixelBuffer};
use crate::util::{ScreenMatchError, ScreenMatchResult};
use std::path::Path;

/// Creates an owned packed buffer from an RGB image.
pub fn buffer_from_rgb_image(img: &image::RgbImage) -> ScreenMatchResult<PixelBuffer> {
    let width = img.width() as usize;
    let height = img.height() as usize;
    let mut data = Vec::with_capacity(width * height);
    for pixel in img.pixels() {
        let [r, g, b] = pixel.0;
        data.push(pack(r as u32, g as u32, b as u32));
    }
    PixelBuffer::new(data, width, height)
}

/// Creates an owned packed buffer from any decoded image.
pub fn buffer_from_dynamic_image(img: &image::DynamicImage) -> ScreenMatchResult<PixelBuffer> {
    buffer_from_rgb_image(&img.to_rgb8())
}

/// Loads an image from disk into a packed pixel buffer.
pub fn load_pixel_buffer<P: AsRef<Path>>(path: P) -> ScreenMatchResult<PixelBuffer> {
    let img = image::open(path).map_err(|err| ScreenMatchError::ImageIo {
        reason: err.to_string(),
    })?;
    buffer_from_dynamic_image(&img)
}

/// Creates an owned grayscale image from a luma buffer.
pub fn gray_from_luma_image(img: &image::GrayImage) -> ScreenMatchResult<GrayImage> {
    let width = img.width() as usize;
    let height = img.height() as usize;
    GrayImage::new(img.as_raw().clone(), width, height)
}
