//! C-ABI wrapper around `integresql-core`.
//!
//! # Overview
//! Lets any language with a C FFI build an IntegreSQL `ClientConfig`, read
//! its fields, and derive endpoint URLs.
//!
//! # Design
//! - Every `extern "C"` function wraps its body in `catch_unwind` so panics
//!   never cross the FFI boundary.
//! - A null or non-UTF-8 string argument is reported the same way as a blank
//!   one: `InvalidArgument`, naming the argument.
//! - The C caller owns all returned pointers and must release them with the
//!   matching `integresql_*free*` function.

pub mod types;

use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::panic::catch_unwind;

use integresql_core::{ClientConfig, ConfigArgument, ConfigError};

use types::*;

/// Read a required string argument, mapping null and invalid UTF-8 to
/// `InvalidArgument`.
fn read_arg(ptr: *const c_char, argument: ConfigArgument) -> Result<String, ConfigError> {
    if ptr.is_null() {
        return Err(ConfigError::InvalidArgument(argument));
    }
    unsafe { CStr::from_ptr(ptr) }
        .to_str()
        .map(str::to_string)
        .map_err(|_| ConfigError::InvalidArgument(argument))
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

/// Build a config from `INTEGRESQL_CLIENT_*` environment variables.
///
/// Returns null only if an internal panic occurs.
/// The caller must free the returned pointer with `integresql_config_free`.
#[unsafe(no_mangle)]
pub extern "C" fn integresql_config_from_env() -> *mut FfiClientConfig {
    catch_unwind(|| FfiClientConfig::into_raw(ClientConfig::from_env()))
        .unwrap_or(std::ptr::null_mut())
}

/// Build a config from explicit values.
///
/// Never returns null. The caller must free the result with
/// `integresql_free_result`, after optionally taking the config out of it
/// with `integresql_config_result_take`.
#[unsafe(no_mangle)]
pub extern "C" fn integresql_config_custom(
    base_url: *const c_char,
    api_version: *const c_char,
) -> *mut FfiConfigResult {
    catch_unwind(|| {
        let config = read_arg(base_url, ConfigArgument::BaseUrl).and_then(|base_url| {
            let api_version = read_arg(api_version, ConfigArgument::ApiVersion)?;
            ClientConfig::custom(base_url, api_version)
        });
        match config {
            Ok(config) => FfiConfigResult::ok(config),
            Err(e) => FfiConfigResult::from_error(e),
        }
    })
    .unwrap_or_else(|_| FfiConfigResult::panic("panic in integresql_config_custom"))
}

/// Move the config handle out of a successful result.
///
/// Returns null if `result` is null or holds no config. After this call the
/// result no longer owns the handle; free both separately.
#[unsafe(no_mangle)]
pub extern "C" fn integresql_config_result_take(
    result: *mut FfiConfigResult,
) -> *mut FfiClientConfig {
    catch_unwind(|| {
        if result.is_null() {
            return std::ptr::null_mut();
        }
        let result = unsafe { &mut *result };
        std::mem::replace(&mut result.config, std::ptr::null_mut())
    })
    .unwrap_or(std::ptr::null_mut())
}

// ---------------------------------------------------------------------------
// Accessors
// ---------------------------------------------------------------------------

/// Copy of the base URL. Returns null if `config` is null.
/// The caller must free the returned string with `integresql_free_string`.
#[unsafe(no_mangle)]
pub extern "C" fn integresql_config_base_url(config: *const FfiClientConfig) -> *mut c_char {
    catch_unwind(|| {
        if config.is_null() {
            return std::ptr::null_mut();
        }
        let config = unsafe { &*config };
        to_c_string(config.inner.base_url())
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Copy of the API version. Returns null if `config` is null.
/// The caller must free the returned string with `integresql_free_string`.
#[unsafe(no_mangle)]
pub extern "C" fn integresql_config_api_version(config: *const FfiClientConfig) -> *mut c_char {
    catch_unwind(|| {
        if config.is_null() {
            return std::ptr::null_mut();
        }
        let config = unsafe { &*config };
        to_c_string(config.inner.api_version())
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Full URL for `path` under the configured API version.
///
/// Returns null if `config` or `path` is null, or if `path` is not UTF-8.
#[unsafe(no_mangle)]
pub extern "C" fn integresql_config_endpoint(
    config: *const FfiClientConfig,
    path: *const c_char,
) -> *mut c_char {
    catch_unwind(|| {
        if config.is_null() || path.is_null() {
            return std::ptr::null_mut();
        }
        let config = unsafe { &*config };
        match unsafe { CStr::from_ptr(path) }.to_str() {
            Ok(path) => to_c_string(&config.inner.endpoint(path)),
            Err(_) => std::ptr::null_mut(),
        }
    })
    .unwrap_or(std::ptr::null_mut())
}

// ---------------------------------------------------------------------------
// Free functions
// ---------------------------------------------------------------------------

/// Free a config handle. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn integresql_config_free(config: *mut FfiClientConfig) {
    if !config.is_null() {
        let _ = catch_unwind(|| {
            drop(unsafe { Box::from_raw(config) });
        });
    }
}

/// Free a result returned by `integresql_config_custom`, including any
/// config it still owns. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn integresql_free_result(result: *mut FfiConfigResult) {
    if result.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let result = unsafe { Box::from_raw(result) };
        if !result.error_message.is_null() {
            drop(unsafe { CString::from_raw(result.error_message) });
        }
        if !result.config.is_null() {
            drop(unsafe { Box::from_raw(result.config) });
        }
    });
}

/// Free a C string allocated by this library. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn integresql_free_string(s: *mut c_char) {
    if !s.is_null() {
        let _ = catch_unwind(|| {
            drop(unsafe { CString::from_raw(s) });
        });
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
