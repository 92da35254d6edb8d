//! QOI encoding pipeline.
//!
//! This module provides functionality for:
//! - Validating a raw interleaved RGB/RGBA buffer against its dimensions
//! - Encoding it into a complete QOI stream (header, chunks, end marker)
//!
//! # Architecture
//!
//! Encoding is synchronous and single-threaded. Each call builds its own
//! encoder state, so concurrent calls on different images are independent.
//! The output buffer is reserved once, up front, at its worst-case size: a
//! call either returns the full stream or an error, never a partial stream.
//!
//! # Examples
//!
//! ```ignore
//! use qoienc_core::encode::encode;
//!
//! let pixels = vec![128u8; 100 * 100 * 3]; // Gray image
//! let qoi_bytes = encode(&pixels, 100, 100, 3).unwrap();
//! println!("Encoded {} bytes", qoi_bytes.len());
//! ```

mod encoder;
mod types;

pub use types::{EncodeError, EncodeOptions, InputError};

use crate::chunk::END_MARKER;
use crate::header::{Channels, Header};
use crate::pixel::Pixel;
use encoder::EncoderState;
use types::ImageLayout;

/// Encode interleaved pixel data to a QOI byte stream.
///
/// The header's colorspace flag is always 0 (sRGB with linear alpha); use
/// [`encode_with_options`] to stamp a different value.
///
/// # Arguments
///
/// * `pixels` - Interleaved pixel data, row-major, no row padding
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `channels` - 3 for RGB, 4 for RGBA
///
/// # Errors
///
/// * [`EncodeError::InvalidInput`] if `channels` is not 3 or 4, a dimension
///   is zero or exceeds `u32::MAX`, or `pixels.len()` differs from
///   `width * height * channels`
/// * [`EncodeError::AllocationFailure`] if the output buffer cannot be reserved
pub fn encode(
    pixels: &[u8],
    width: usize,
    height: usize,
    channels: usize,
) -> Result<Vec<u8>, EncodeError> {
    encode_with_options(pixels, width, height, channels, &EncodeOptions::default())
}

/// Encode interleaved pixel data with explicit [`EncodeOptions`].
pub fn encode_with_options(
    pixels: &[u8],
    width: usize,
    height: usize,
    channels: usize,
    options: &EncodeOptions,
) -> Result<Vec<u8>, EncodeError> {
    let layout = validate(width, height, channels)?;
    let expected = layout.pixel_count * layout.channels.bytes_per_pixel();
    if pixels.len() != expected {
        return Err(InputError::InvalidPixelData {
            expected,
            actual: pixels.len(),
        }
        .into());
    }

    let capacity = layout.max_encoded_len().ok_or(EncodeError::AllocationFailure {
        requested: usize::MAX,
    })?;
    let mut out = Vec::new();
    out.try_reserve_exact(capacity)
        .map_err(|_| EncodeError::AllocationFailure {
            requested: capacity,
        })?;

    Header::new(layout.width, layout.height, layout.channels, options.colorspace).write_to(&mut out);

    let mut state = EncoderState::new();
    for chunk in pixels.chunks_exact(layout.channels.bytes_per_pixel()) {
        state.push(Pixel::from_channels(chunk), &mut out);
    }
    state.flush_run(&mut out);

    out.extend_from_slice(&END_MARKER);

    log::debug!(
        "Encoded {}x{} image ({} channels): {} -> {} bytes",
        layout.width,
        layout.height,
        layout.channels as u8,
        pixels.len(),
        out.len()
    );

    Ok(out)
}

/// Check dimensions and channel count, returning the number of bytes the
/// pixel buffer must hold.
///
/// Performs no allocation. Callers that receive pixel data as a raw pointer
/// use this to learn how many bytes they may safely read.
pub fn required_input_len(width: usize, height: usize, channels: usize) -> Result<usize, EncodeError> {
    let layout = validate(width, height, channels)?;
    Ok(layout.pixel_count * layout.channels.bytes_per_pixel())
}

fn validate(width: usize, height: usize, channels: usize) -> Result<ImageLayout, InputError> {
    let channels = Channels::try_from(channels).map_err(|channels| InputError::InvalidChannels { channels })?;

    if width == 0 || height == 0 {
        return Err(InputError::InvalidDimensions { width, height });
    }

    let (Ok(w), Ok(h)) = (u32::try_from(width), u32::try_from(height)) else {
        return Err(InputError::DimensionTooLarge { width, height });
    };

    let pixel_count = width
        .checked_mul(height)
        .filter(|count| count.checked_mul(channels.bytes_per_pixel()).is_some())
        .ok_or(InputError::SizeOverflow {
            width,
            height,
            channels: channels.bytes_per_pixel(),
        })?;

    Ok(ImageLayout {
        width: w,
        height: h,
        channels,
        pixel_count,
    })
}


// ============================================================================
// Property-Based Tests
// ============================================================================
