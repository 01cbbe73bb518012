//! Client-side configuration for the IntegreSQL API.
//!
//! # Overview
//! `ClientConfig` holds the base URL and API version an IntegreSQL client
//! sends its requests to. It is built once, usually at startup, either from
//! `INTEGRESQL_CLIENT_*` environment variables with fallback defaults or from
//! explicit values that are validated up front.
//!
//! # Design
//! - `ClientConfig` is immutable; accessors are the only way to read it.
//! - Environment reads go through the `Environment` trait so the fallback
//!   logic can be exercised without mutating process state.
//! - This crate performs no I/O beyond reading variables. Executing requests
//!   is left to the caller, which uses `ClientConfig::endpoint` to build URLs.

pub mod config;
pub mod environment;
pub mod error;

pub use config::{
    ClientConfig, API_VERSION_VARIABLE, BASE_URL_VARIABLE, DEFAULT_API_VERSION, DEFAULT_BASE_URL,
};
pub use environment::{
    lookup_with_default, Environment, FixedEnvironment, ProcessEnvironment, Variable, VariableError,
};
pub use error::{ConfigArgument, ConfigError};
