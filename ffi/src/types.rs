//! `#[repr(C)]` types for the FFI boundary.
//!
//! # Design
//! `FfiClientConfig` is an opaque handle; C code only ever sees a pointer to
//! it. Fallible construction returns an `FfiConfigResult` envelope carrying
//! either the handle or an error code, the failing argument, and a message.

use std::ffi::CString;
use std::os::raw::c_char;

use integresql_core::{ClientConfig, ConfigArgument, ConfigError};

/// Opaque handle to a `ClientConfig`.
pub struct FfiClientConfig {
    pub(crate) inner: ClientConfig,
}

impl FfiClientConfig {
    pub(crate) fn into_raw(config: ClientConfig) -> *mut Self {
        Box::into_raw(Box::new(FfiClientConfig { inner: config }))
    }
}

/// Error codes returned in `FfiConfigResult`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FfiErrorCode {
    Ok = 0,
    InvalidArgument = 1,
    Panic = 2,
}

/// Which argument an `InvalidArgument` error refers to.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FfiConfigArgument {
    None = 0,
    BaseUrl = 1,
    ApiVersion = 2,
}

impl From<ConfigArgument> for FfiConfigArgument {
    fn from(argument: ConfigArgument) -> Self {
        match argument {
            ConfigArgument::BaseUrl => FfiConfigArgument::BaseUrl,
            ConfigArgument::ApiVersion => FfiConfigArgument::ApiVersion,
        }
    }
}

/// Result envelope for `integresql_config_custom`.
///
/// On success `error_code` is `Ok`, `error_message` is null, and `config`
/// points to the new handle. On failure `config` is null and
/// `error_message` is a human-readable C string.
#[repr(C)]
pub struct FfiConfigResult {
    pub error_code: FfiErrorCode,
    pub error_message: *mut c_char,
    pub argument: FfiConfigArgument,
    pub config: *mut FfiClientConfig,
}

impl FfiConfigResult {
    pub(crate) fn ok(config: ClientConfig) -> *mut Self {
        Box::into_raw(Box::new(FfiConfigResult {
            error_code: FfiErrorCode::Ok,
            error_message: std::ptr::null_mut(),
            argument: FfiConfigArgument::None,
            config: FfiClientConfig::into_raw(config),
        }))
    }

    pub(crate) fn from_error(err: ConfigError) -> *mut Self {
        Box::into_raw(Box::new(FfiConfigResult {
            error_code: FfiErrorCode::InvalidArgument,
            error_message: to_c_string(&err.to_string()),
            argument: err.argument().into(),
            config: std::ptr::null_mut(),
        }))
    }

    pub(crate) fn panic(msg: &str) -> *mut Self {
        Box::into_raw(Box::new(FfiConfigResult {
            error_code: FfiErrorCode::Panic,
            error_message: to_c_string(msg),
            argument: FfiConfigArgument::None,
            config: std::ptr::null_mut(),
        }))
    }
}

/// Copy `s` into a caller-owned C string, or null if it holds a NUL byte.
pub(crate) fn to_c_string(s: &str) -> *mut c_char {
    CString::new(s)
        .map(CString::into_raw)
        .unwrap_or(std::ptr::null_mut())
}
