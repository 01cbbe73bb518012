//! Error types for IntegreSQL client configuration.
//!
//! # Design
//! Only the validated construction path can fail, and only one way: an
//! argument was blank. The variant carries which argument so callers and the
//! FFI layer can report it without parsing the message.

use std::fmt;

use thiserror::Error;

/// A configuration argument subject to validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigArgument {
    BaseUrl,
    ApiVersion,
}

impl fmt::Display for ConfigArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigArgument::BaseUrl => write!(f, "base URL"),
            ConfigArgument::ApiVersion => write!(f, "API version"),
        }
    }
}

/// Errors returned when building a `ClientConfig` from caller-supplied values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The argument was missing, empty, or only whitespace.
    #[error("{0} cannot be null or empty")]
    InvalidArgument(ConfigArgument),
}

impl ConfigError {
    pub fn argument(&self) -> ConfigArgument {
        match self {
            ConfigError::InvalidArgument(argument) => *argument,
        }
    }
}
