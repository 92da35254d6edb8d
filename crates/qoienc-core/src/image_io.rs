//! Encoding straight from `image` crate buffers.
//!
//! These are thin wrappers over [`encode`](crate::encode::encode) for callers
//! that already hold a decoded PNG/BMP (or any other source) in memory.

use image::{DynamicImage, RgbImage, RgbaImage};

use crate::encode::{encode, EncodeError};

/// Encode an RGB8 image buffer (3 channels).
pub fn encode_rgb_image(img: &RgbImage) -> Result<Vec<u8>, EncodeError> {
    let (width, height) = img.dimensions();
    encode(img.as_raw(), width as usize, height as usize, 3)
}

/// Encode an RGBA8 image buffer (4 channels).
pub fn encode_rgba_image(img: &RgbaImage) -> Result<Vec<u8>, EncodeError> {
    let (width, height) = img.dimensions();
    encode(img.as_raw(), width as usize, height as usize, 4)
}

/// Encode any [`DynamicImage`].
///
/// 8-bit RGB and RGBA buffers are encoded as-is. Other pixel formats are
/// converted first: to RGBA8 when the source carries alpha, otherwise to RGB8.
pub fn encode_dynamic_image(img: &DynamicImage) -> Result<Vec<u8>, EncodeError> {
    match img {
        DynamicImage::ImageRgb8(rgb) => encode_rgb_image(rgb),
        DynamicImage::ImageRgba8(rgba) => encode_rgba_image(rgba),
        other if other.color().has_alpha() => encode_rgba_image(&other.to_rgba8()),
        other => encode_rgb_image(&other.to_rgb8()),
    }
}
