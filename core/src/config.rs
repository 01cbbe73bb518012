//! Connection settings for an IntegreSQL API client.
//!
//! # Design
//! `ClientConfig` is a plain immutable value: fields are private and only
//! readable through accessors. It can be built two ways:
//!
//! - `from_env` / `from_environment` take each field from a variable, falling
//!   back to a literal default when the variable is not set. Values that are
//!   set are used verbatim, including the empty string.
//! - `custom` takes caller-supplied values and rejects blank ones.
//!
//! Stored values are never trimmed or parsed; `endpoint` only normalizes the
//! slashes of the URL it returns.

use serde::{Deserialize, Serialize};

use crate::environment::{lookup_with_default, Environment, ProcessEnvironment, Variable};
use crate::error::{ConfigArgument, ConfigError};

pub const BASE_URL_VARIABLE: &str = "INTEGRESQL_CLIENT_BASE_URL";
pub const API_VERSION_VARIABLE: &str = "INTEGRESQL_CLIENT_API_VERSION";

pub const DEFAULT_BASE_URL: &str = "http://integresql:5000/api";
pub const DEFAULT_API_VERSION: &str = "v1";

/// Base URL and API version of the IntegreSQL service a client talks to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawClientConfig")]
pub struct ClientConfig {
    base_url: String,
    api_version: String,
}

impl ClientConfig {
    /// Build a configuration from the process environment.
    ///
    /// Reads `INTEGRESQL_CLIENT_BASE_URL` (default `http://integresql:5000/api`)
    /// and `INTEGRESQL_CLIENT_API_VERSION` (default `v1`). Never fails.
    pub fn from_env() -> Self {
        Self::from_environment(&ProcessEnvironment)
    }

    /// Same as `from_env`, reading variables from `env`.
    pub fn from_environment(env: &impl Environment) -> Self {
        Self {
            base_url: lookup_with_default(env, &Variable::from(BASE_URL_VARIABLE), DEFAULT_BASE_URL),
            api_version: lookup_with_default(
                env,
                &Variable::from(API_VERSION_VARIABLE),
                DEFAULT_API_VERSION,
            ),
        }
    }

    /// Build a configuration from explicit values.
    ///
    /// Fails with `ConfigError::InvalidArgument` if either value is empty or
    /// whitespace only. The base URL is checked first.
    pub fn custom(
        base_url: impl Into<String>,
        api_version: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            base_url: base_url.into(),
            api_version: api_version.into(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that neither field is blank.
    ///
    /// Always passes for values built by `custom`. Values built from the
    /// environment are not validated on construction and may fail here.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_blank(&self.base_url, ConfigArgument::BaseUrl)?;
        require_non_blank(&self.api_version, ConfigArgument::ApiVersion)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    /// Full URL for `path` under this API version.
    ///
    /// `ClientConfig::default().endpoint("templates")` yields
    /// `http://integresql:5000/api/v1/templates`. Segments that are empty
    /// after trimming slashes are skipped.
    pub fn endpoint(&self, path: &str) -> String {
        [
            self.base_url.trim_end_matches('/'),
            self.api_version.trim_matches('/'),
            path.trim_start_matches('/'),
        ]
        .into_iter()
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("/")
    }
}

impl Default for ClientConfig {
    /// The literal defaults, ignoring the environment.
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
        }
    }
}

fn require_non_blank(value: &str, argument: ConfigArgument) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::InvalidArgument(argument));
    }
    Ok(())
}

/// Unvalidated wire shape; deserialization goes through `custom`.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawClientConfig {
    base_url: String,
    api_version: String,
}

impl TryFrom<RawClientConfig> for ClientConfig {
    type Error = ConfigError;

    fn try_from(raw: RawClientConfig) -> Result<Self, Self::Error> {
        ClientConfig::custom(raw.base_url, raw.api_version)
    }
}
