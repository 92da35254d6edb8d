//! QOI stream header.
//!
//! The header is a fixed 14-byte prefix: a 4-byte magic tag, big-endian
//! width and height, a channel count and a colorspace flag.

use serde::{Deserialize, Serialize};

/// Magic tag at the start of every stream.
pub const MAGIC: [u8; 4] = *b"qoif";

/// Size of the serialized header in bytes.
pub const HEADER_SIZE: usize = 14;

/// Number of interleaved channels in the source pixel buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum Channels {
    /// Interleaved RGB, alpha implicitly 255.
    Rgb = 3,
    /// Interleaved RGBA.
    Rgba = 4,
}

impl Channels {
    /// Bytes per pixel in the source buffer.
    #[inline]
    pub fn bytes_per_pixel(self) -> usize {
        self as usize
    }
}

impl TryFrom<usize> for Channels {
    type Error = usize;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            3 => Ok(Channels::Rgb),
            4 => Ok(Channels::Rgba),
            other => Err(other),
        }
    }
}

/// Colorspace flag stamped into the header.
///
/// Purely informative: it never changes how pixels are encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum ColorSpace {
    /// Gamma-corrected color channels with linear alpha.
    #[default]
    Srgb = 0,
    /// All channels linear.
    Linear = 1,
}

/// Parsed form of the 14-byte header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub width: u32,
    pub height: u32,
    pub channels: Channels,
    pub colorspace: ColorSpace,
}

impl Header {
    pub fn new(width: u32, height: u32, channels: Channels, colorspace: ColorSpace) -> Self {
        Self {
            width,
            height,
            channels,
            colorspace,
        }
    }

    /// Serialize the header.
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut bytes = [0u8; HEADER_SIZE];
        bytes[0..4].copy_from_slice(&MAGIC);
        bytes[4..8].copy_from_slice(&self.width.to_be_bytes());
        bytes[8..12].copy_from_slice(&self.height.to_be_bytes());
        bytes[12] = self.channels as u8;
        bytes[13] = self.colorspace as u8;
        bytes
    }

    /// Append the serialized header to `out`.
    pub fn write_to(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.to_bytes());
    }
}
