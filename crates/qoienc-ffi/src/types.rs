//! C-compatible result types.
//!
//! This module flattens the core's `Result<Vec<u8>, EncodeError>` into a
//! plain `#[repr(C)]` struct and owns the conversion of a Rust buffer into a
//! raw allocation handed to the caller.

use qoienc_core::EncodeError;
use std::ptr;

/// Numeric error codes carried in [`EncodeResult::error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ErrorCode {
    /// Encoding succeeded.
    Success = 0,
    /// Dimensions, channel count or buffer length were rejected.
    InvalidInput = 1,
    /// The output buffer could not be allocated.
    AllocationFailure = 2,
    /// Anything else: a null input pointer or a panic inside the encoder.
    Unknown = 3,
}

impl From<&EncodeError> for ErrorCode {
    fn from(err: &EncodeError) -> Self {
        match err {
            EncodeError::InvalidInput(_) => ErrorCode::InvalidInput,
            EncodeError::AllocationFailure { .. } => ErrorCode::AllocationFailure,
        }
    }
}

/// Result of a foreign `encode` call.
///
/// # Memory Management
///
/// On success `ptr` points to `len` bytes owned by the caller, who must pass
/// the same `(ptr, len)` pair to `free_encoded` exactly once. On failure
/// `ptr` is null and `len` is zero; there is nothing to release.
#[repr(C)]
#[derive(Debug)]
pub struct EncodeResult {
    pub ptr: *mut u8,
    pub len: usize,
    pub error: u8,
}

impl EncodeResult {
    /// Leak `bytes` into caller ownership.
    pub(crate) fn from_vec(bytes: Vec<u8>) -> Self {
        let boxed = bytes.into_boxed_slice();
        let len = boxed.len();
        let ptr = Box::into_raw(boxed) as *mut u8;
        Self {
            ptr,
            len,
            error: ErrorCode::Success as u8,
        }
    }

    /// A failed result: null pointer, zero length.
    pub(crate) fn failure(code: ErrorCode) -> Self {
        debug_assert_ne!(code, ErrorCode::Success);
        Self {
            ptr: ptr::null_mut(),
            len: 0,
            error: code as u8,
        }
    }

    /// Whether this result carries an encoded buffer.
    pub fn is_success(&self) -> bool {
        self.error == ErrorCode::Success as u8
    }
}

/// Reclaim a buffer produced by [`EncodeResult::from_vec`] and drop it.
///
/// # Safety
///
/// `ptr` and `len` must come from one successful result and must not have
/// been released before.
pub(crate) unsafe fn release(ptr: *mut u8, len: usize) {
    if ptr.is_null() || len == 0 {
        return;
    }
    let slice = ptr::slice_from_raw_parts_mut(ptr, len);
    drop(unsafe { Box::from_raw(slice) });
}
