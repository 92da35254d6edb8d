//! QOI Encoder Core - lossless image encoding
//!
//! This crate turns raw interleaved RGB/RGBA pixel buffers into QOI
//! ("Quite OK Image") byte streams. It performs no I/O; the C ABI lives in
//! the `qoienc-ffi` crate.
//!
//! # Module Structure
//!
//! - `pixel` - Pixel value type and color-cache hash
//! - `header` - 14-byte stream header
//! - `chunk` - Chunk grammar and end marker
//! - `encode` - Validation and the per-pixel encoder
//! - `image_io` - Encoding from `image` crate buffers

pub mod chunk;
pub mod encode;
pub mod header;
pub mod image_io;
pub mod pixel;

#[cfg(test)]
pub(crate) mod testing;

pub use chunk::{Chunk, END_MARKER};
pub use encode::{encode, encode_with_options, required_input_len, EncodeError, EncodeOptions, InputError};
pub use header::{Channels, ColorSpace, Header, HEADER_SIZE, MAGIC};
pub use image_io::{encode_dynamic_image, encode_rgb_image, encode_rgba_image};
pub use pixel::Pixel;
