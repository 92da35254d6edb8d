//! Image encoding C bindings.
//!
//! This module exposes the qoienc-core encoder through a fixed C ABI. The
//! encoded buffer is leaked into the caller's ownership and must be handed
//! back through [`free_encoded`].
//!
//! # Functions
//!
//! - [`encode`] - Encode an RGB/RGBA pixel buffer to QOI bytes
//! - [`free_encoded`] - Release a buffer returned by [`encode`]
//!
//! # Example
//!
//! ```python
//! lib = ctypes.CDLL("libqoi_encoder.so")
//! lib.encode.restype = EncodeResult
//! result = lib.encode(buf, width, height, 3)
//! if result.error == 0:
//!     data = ctypes.string_at(result.ptr, result.len)
//!     lib.free_encoded(result.ptr, result.len)
//! ```

use std::panic::{self, AssertUnwindSafe};
use std::slice;

use crate::types::{release, EncodeResult, ErrorCode};

/// Encode interleaved pixel data to a QOI byte stream.
///
/// # Arguments
///
/// * `data` - Pointer to `width * height * channels` bytes, row-major
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `channels` - 3 for RGB, 4 for RGBA
///
/// # Returns
///
/// An [`EncodeResult`]. `error == 0` means `ptr`/`len` describe a buffer now
/// owned by the caller. Otherwise `ptr` is null, `len` is zero, and `error`
/// is one of the [`ErrorCode`] values.
///
/// # Safety
///
/// When the dimensions and channel count are valid, `data` must either be
/// null or point to at least `width * height * channels` readable bytes that
/// stay alive and unmodified for the duration of the call.
#[no_mangle]
pub unsafe extern "C" fn encode(
    data: *const u8,
    width: usize,
    height: usize,
    channels: usize,
) -> EncodeResult {
    let len = match qoienc_core::required_input_len(width, height, channels) {
        Ok(len) => len,
        Err(err) => {
            log::warn!("encode rejected {width}x{height}x{channels}: {err}");
            return EncodeResult::failure(ErrorCode::from(&err));
        }
    };

    if data.is_null() {
        log::warn!("encode called with a null pixel pointer for {len} bytes");
        return EncodeResult::failure(ErrorCode::Unknown);
    }

    let pixels = unsafe { slice::from_raw_parts(data, len) };

    match panic::catch_unwind(AssertUnwindSafe(|| {
        qoienc_core::encode(pixels, width, height, channels)
    })) {
        Ok(Ok(bytes)) => EncodeResult::from_vec(bytes),
        Ok(Err(err)) => {
            log::warn!("encode failed: {err}");
            EncodeResult::failure(ErrorCode::from(&err))
        }
        Err(_) => {
            log::error!("encoder panicked on {width}x{height}x{channels} input");
            EncodeResult::failure(ErrorCode::Unknown)
        }
    }
}

/// Release a buffer returned by a successful [`encode`].
///
/// A null `ptr` or zero `len` is ignored.
///
/// # Safety
///
/// `ptr` and `len` must be exactly the values from one successful
/// [`EncodeResult`]. Releasing the same buffer twice, or any pointer not
/// produced by [`encode`], is undefined behavior.
#[no_mangle]
pub unsafe extern "C" fn free_encoded(ptr: *mut u8, len: usize) {
    unsafe { release(ptr, len) }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
