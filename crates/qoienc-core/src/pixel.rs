//! Pixel value type and the color-cache hash.

/// Number of slots in the color cache.
pub const CACHE_SIZE: usize = 64;

/// A single RGBA pixel.
///
/// Three-channel input is widened to this type with alpha fixed at 255.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Pixel {
    /// Create a pixel from its four channel values.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque pixel (alpha = 255).
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Read one pixel from an interleaved chunk of 3 or 4 bytes.
    ///
    /// A 3-byte chunk yields an opaque pixel.
    #[inline]
    pub fn from_channels(chunk: &[u8]) -> Self {
        match *chunk {
            [r, g, b] => Self::rgb(r, g, b),
            [r, g, b, a, ..] => Self::new(r, g, b, a),
            _ => unreachable!("pixel chunks are always 3 or 4 bytes"),
        }
    }

    /// Color-cache slot for this pixel: `(r*3 + g*5 + b*7 + a*11) % 64`.
    #[inline]
    pub fn cache_index(&self) -> usize {
        let sum = self.r as usize * 3 + self.g as usize * 5 + self.b as usize * 7 + self.a as usize * 11;
        sum % CACHE_SIZE
    }
}
