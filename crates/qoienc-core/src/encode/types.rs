//! Core types for QOI encoding.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::header::{Channels, ColorSpace};

/// Reasons a pixel buffer and its description are rejected before encoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// Channel count is neither 3 nor 4
    #[error("Invalid channel count {channels}: must be 3 (RGB) or 4 (RGBA)")]
    InvalidChannels { channels: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: usize, height: usize },

    /// Width or height does not fit the 32-bit header field
    #[error("Dimensions {width}x{height} exceed the 32-bit header limit")]
    DimensionTooLarge { width: usize, height: usize },

    /// width * height * channels overflows usize
    #[error("Image size {width}x{height}x{channels} overflows the address space")]
    SizeOverflow {
        width: usize,
        height: usize,
        channels: usize,
    },

    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * channels), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },
}

/// Errors that can occur during QOI encoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// The input violates a precondition; nothing was allocated.
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InputError),

    /// The output buffer could not be reserved.
    #[error("Failed to allocate {requested} bytes for the encoded stream")]
    AllocationFailure { requested: usize },
}

/// Options controlling the encoded header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodeOptions {
    /// Colorspace flag written to the header (default: sRGB with linear alpha)
    #[serde(default)]
    pub colorspace: ColorSpace,
}

impl EncodeOptions {
    /// Create options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the colorspace flag.
    pub fn with_colorspace(mut self, colorspace: ColorSpace) -> Self {
        self.colorspace = colorspace;
        self
    }
}

/// A pixel buffer that passed validation.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ImageLayout {
    pub width: u32,
    pub height: u32,
    pub channels: Channels,
    pub pixel_count: usize,
}

impl ImageLayout {
    /// Upper bound on the encoded stream size.
    ///
    /// No chunk is longer than `channels + 1` bytes per pixel it covers; a
    /// pending run is always paid for by at least one pixel that emitted
    /// nothing.
    pub fn max_encoded_len(&self) -> Option<usize> {
        self.pixel_count
            .checked_mul(self.channels.bytes_per_pixel() + 1)?
            .checked_add(crate::header::HEADER_SIZE + crate::chunk::END_MARKER.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_default() {
        let options = EncodeOptions::new();
        assert_eq!(options.colorspace, ColorSpace::Srgb);
    }

    #[test]
    fn test_options_with_colorspace() {
        let options = EncodeOptions::new().with_colorspace(ColorSpace::Linear);
        assert_eq!(options.colorspace, ColorSpace::Linear);
    }

    #[test]
    fn test_error_display() {
        let err = EncodeError::from(InputError::InvalidPixelData {
            expected: 12,
            actual: 11,
        });
        assert_eq!(
            err.to_string(),
            "Invalid input: Invalid pixel data: expected 12 bytes (width * height * channels), got 11"
        );
    }

    #[test]
    fn test_max_encoded_len() {
        let layout = ImageLayout {
            width: 2,
            height: 2,
            channels: Channels::Rgba,
            pixel_count: 4,
        };
        assert_eq!(layout.max_encoded_len(), Some(14 + 4 * 5 + 8));
    }

    #[test]
    fn test_max_encoded_len_overflow() {
        let layout = ImageLayout {
            width: u32::MAX,
            height: u32::MAX,
            channels: Channels::Rgb,
            pixel_count: usize::MAX,
        };
        assert_eq!(layout.max_encoded_len(), None);
    }
}
