//! Errors surfaced outside a test case.
//!
//! Failures inside a test never show up here: they are folded into the
//! test's own record. These are the registry- and run-level conditions.

use thiserror::Error;

/// Malformed run arguments. Aborts the run before any test executes.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unrecognized argument `{0}` (expected -F=<pattern> or --Filter=<pattern>)")]
    UnknownArgument(String),
}

/// A registration that was dropped.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RegistrationError {
    /// A test with the same section and name is already registered; the
    /// first registration is kept.
    #[error("test {full_name} already exists")]
    Duplicate { full_name: String },
}

/// Reasons a run stops before executing any test.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("a test run is already in progress on this thread")]
    Reentrant,
}
