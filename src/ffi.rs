//! C-ABI FFI bindings so C, C++, Swift, and other languages can render log
//! messages through loglens without linking against the Rust standard
//! library directly.

#![allow(unsafe_code)]

use std::ffi::{CStr, CString, c_char, c_int};
use std::ptr;

use crate::markup;
use crate::render::Renderer;

/// Reads a C string into `&str`, or `None` on NULL / invalid UTF-8.
///
/// # Safety
/// `s` must be NULL or a valid null-terminated string.
unsafe fn read_str<'a>(s: *const c_char) -> Option<&'a str> {
    if s.is_null() {
        return None;
    }
    // SAFETY: s is non-null and caller guarantees a valid C string
    unsafe { CStr::from_ptr(s) }.to_str().ok()
}

/// Hands a Rust string to the C side. NULL when the text cannot cross the
/// boundary (interior NUL).
fn into_c_string(text: String) -> *mut c_char {
    CString::new(text).map_or(ptr::null_mut(), CString::into_raw)
}

// ============================================================================
// Rendering
// ============================================================================

/// Renders a log message with embedded JSON pretty-printed.
///
/// # Arguments
/// * `message` - Log message text
/// * `colors` - Enable ANSI colors (1=true, 0=false)
///
/// # Returns
/// A heap-allocated string that must be released with `loglens_string_free`,
/// or `NULL` on NULL input or invalid UTF-8.
///
/// # Safety
/// `message` must be a valid null-terminated UTF-8 string or `NULL`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn loglens_markup(message: *const c_char, colors: c_int) -> *mut c_char {
    // SAFETY: caller guarantees message is NULL or a valid C string
    let Some(message) = (unsafe { read_str(message) }) else {
        return ptr::null_mut();
    };

    let renderer = Renderer::new().colors(colors != 0);
    into_c_string(renderer.render_message(message))
}

/// Pretty-prints a single JSON fragment.
///
/// # Returns
/// A heap-allocated string that must be released with `loglens_string_free`,
/// or `NULL` when the input is not valid JSON.
///
/// # Safety
/// `source` must be a valid null-terminated UTF-8 string or `NULL`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn loglens_pretty_json(source: *const c_char) -> *mut c_char {
    // SAFETY: caller guarantees source is NULL or a valid C string
    let Some(source) = (unsafe { read_str(source) }) else {
        return ptr::null_mut();
    };

    match markup::pretty_print(source) {
        Ok(pretty) => into_c_string(pretty),
        Err(_) => ptr::null_mut(),
    }
}

/// Counts the segments a message splits into.
///
/// # Returns
/// The segment count, or `-1` on NULL input or invalid UTF-8.
///
/// # Safety
/// `message` must be a valid null-terminated UTF-8 string or `NULL`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn loglens_segment_count(message: *const c_char) -> c_int {
    // SAFETY: caller guarantees message is NULL or a valid C string
    let Some(message) = (unsafe { read_str(message) }) else {
        return -1;
    };

    c_int::try_from(markup::extract(message).len()).unwrap_or(c_int::MAX)
}

// ============================================================================
// Memory
// ============================================================================

/// Releases a string returned by `loglens_markup` or `loglens_pretty_json`.
///
/// # Safety
/// `s` must be a pointer returned by this library or `NULL`. After this
/// call, `s` is invalid and must not be used.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn loglens_string_free(s: *mut c_char) {
    if !s.is_null() {
        // SAFETY: s is non-null and was created by CString::into_raw
        drop(unsafe { CString::from_raw(s) });
    }
}
