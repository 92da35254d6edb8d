//! QOI Encoder C bindings
//!
//! This crate builds `libqoi_encoder` (`.so` / `.dylib` / `.dll`) exposing
//! the qoienc-core encoder to any language with a C foreign function
//! interface.
//!
//! # Module Structure
//!
//! - `encode` - The `encode` / `free_encoded` entry points
//! - `types` - `#[repr(C)]` result struct and error codes
//!
//! # Usage
//!
//! ```c
//! typedef struct { uint8_t *ptr; size_t len; uint8_t error; } EncodeResult;
//!
//! EncodeResult r = encode(pixels, width, height, 4);
//! if (r.error == 0) {
//!     fwrite(r.ptr, 1, r.len, out);
//!     free_encoded(r.ptr, r.len);
//! }
//! ```

use std::os::raw::c_char;

mod encode;
mod types;

// Re-export public types
pub use encode::{encode, free_encoded};
pub use types::{EncodeResult, ErrorCode};

/// NUL-terminated crate version. Points to static memory; never free it.
#[no_mangle]
pub extern "C" fn qoi_encoder_version() -> *const c_char {
    concat!(env!("CARGO_PKG_VERSION"), "\0").as_ptr() as *const c_char
}
