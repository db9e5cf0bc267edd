use std::os::raw::{c_char, c_int};

/// Return status of every function in this library.
#[allow(non_camel_case_types)]
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum status {
    /// Operation ended successfully.
    Success = 0,

    /// If a function returns this value,
    /// a detailed error message can be retrieved using `ecdsa_asn1_error_message_utf8`.
    Failure = -1,
}

/// cbindgen:ignore
impl ffi_helpers::Nullable for status {
    const NULL: Self = Self::Failure;

    fn is_null(&self) -> bool {
        matches!(self, Self::Failure)
    }
}

/// Clear the last error slot of the calling thread.
#[no_mangle]
pub extern "C" fn ecdsa_asn1_clear_last_error() {
    ffi_helpers::error_handling::clear_last_error()
}

/// Get the length of the last error message in bytes when encoded as UTF-8, including the trailing null.
#[no_mangle]
pub extern "C" fn ecdsa_asn1_last_error_length_utf8() -> c_int {
    ffi_helpers::error_handling::last_error_length()
}

/// Peek at the most recent error and write its error message into the provided buffer as a UTF-8 encoded string.
///
/// Returns the number of bytes written, or `-1` if there was an error.
///
/// # Safety
///
/// `buf` must be valid for writes of `buf_sz` bytes.
#[no_mangle]
pub unsafe extern "C" fn ecdsa_asn1_error_message_utf8(buf: *mut c_char, buf_sz: c_int) -> c_int {
    ffi_helpers::error_handling::error_message_utf8(buf, buf_sz)
}
