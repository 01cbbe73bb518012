//! Named-variable lookup, decoupled from the process environment.
//!
//! # Design
//! `ClientConfig::from_environment` reads through the `Environment` trait
//! rather than `std::env` directly. `ProcessEnvironment` is what production
//! code uses; `FixedEnvironment` lets tests and embedding hosts supply
//! variables without touching process-global state.

use std::collections::BTreeMap;
use std::env;
use std::fmt;

use thiserror::Error;

/// The name of an environment variable.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Variable(String);

impl Variable {
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Variable {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Variable {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Why a variable could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VariableError {
    #[error("environment variable {0} is not set")]
    NotPresent(Variable),

    #[error("environment variable {0} is not valid unicode")]
    NotUnicode(Variable),
}

/// A source of named string variables.
pub trait Environment {
    fn read(&self, variable: &Variable) -> Result<String, VariableError>;
}

impl<E: Environment + ?Sized> Environment for &E {
    fn read(&self, variable: &Variable) -> Result<String, VariableError> {
        (**self).read(variable)
    }
}

/// Reads from the environment of the current process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl Environment for ProcessEnvironment {
    fn read(&self, variable: &Variable) -> Result<String, VariableError> {
        env::var(variable.name()).map_err(|error| match error {
            env::VarError::NotPresent => VariableError::NotPresent(variable.clone()),
            env::VarError::NotUnicode(_) => VariableError::NotUnicode(variable.clone()),
        })
    }
}

/// An in-memory set of variables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixedEnvironment(BTreeMap<String, String>);

impl FixedEnvironment {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FixedEnvironment {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }
}

impl Environment for FixedEnvironment {
    fn read(&self, variable: &Variable) -> Result<String, VariableError> {
        self.0
            .get(variable.name())
            .cloned()
            .ok_or_else(|| VariableError::NotPresent(variable.clone()))
    }
}

/// Read `variable`, or return `default` when it cannot be read.
///
/// A present but empty value is returned as-is.
pub fn lookup_with_default(env: &impl Environment, variable: &Variable, default: &str) -> String {
    match env.read(variable) {
        Ok(value) => value,
        Err(VariableError::NotPresent(_)) => {
            tracing::debug!(%variable, default, "variable not set, using default");
            default.to_string()
        }
        Err(error @ VariableError::NotUnicode(_)) => {
            tracing::warn!(%error, default, "ignoring unreadable variable, using default");
            default.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_environment_reads_present_variable() {
        let env = FixedEnvironment::empty().with("A", "1");
        assert_eq!(env.read(&Variable::from("A")), Ok("1".to_string()));
    }

    #[test]
    fn fixed_environment_reports_missing_variable() {
        let env = FixedEnvironment::empty();
        let err = env.read(&Variable::from("A")).unwrap_err();
        assert_eq!(err, VariableError::NotPresent(Variable::from("A")));
        assert_eq!(err.to_string(), "environment variable A is not set");
    }

    #[test]
    fn lookup_falls_back_when_missing() {
        let env = FixedEnvironment::empty();
        assert_eq!(lookup_with_default(&env, &Variable::from("A"), "fallback"), "fallback");
    }

    #[test]
    fn lookup_keeps_empty_value() {
        let env: FixedEnvironment = [("A", "")].into_iter().collect();
        assert_eq!(lookup_with_default(&env, &Variable::from("A"), "fallback"), "");
    }

    #[test]
    fn lookup_falls_back_on_unreadable_value() {
        struct Garbled;
        impl Environment for Garbled {
            fn read(&self, variable: &Variable) -> Result<String, VariableError> {
                Err(VariableError::NotUnicode(variable.clone()))
            }
        }
        assert_eq!(lookup_with_default(&Garbled, &Variable::from("A"), "fallback"), "fallback");
    }

    #[test]
    fn process_environment_reports_missing_variable() {
        let var = Variable::from("INTEGRESQL_TEST_SURELY_UNSET_VARIABLE");
        assert!(matches!(
            ProcessEnvironment.read(&var),
            Err(VariableError::NotPresent(_))
        ));
    }
}
