//! Run configuration parsed from command-line arguments.
//!
//! The only recognized option is the name filter, `-F=<pattern>` or
//! `--Filter=<pattern>`. Anything else is a configuration error. The program
//! name must not be part of the arguments.

use crate::error::ConfigError;

const SHORT_FILTER: &str = "-F=";
const LONG_FILTER: &str = "--Filter=";

/// Options for one test run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunConfig {
    /// Substring a test's full name must contain to run. `None` runs all.
    pub filter: Option<String>,
}

impl RunConfig {
    /// Parse run arguments.
    ///
    /// An empty pattern clears the filter; a repeated flag replaces the
    /// earlier value.
    pub fn from_args<I, S>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = RunConfig::default();
        for arg in args {
            let arg = arg.as_ref();
            let Some(pattern) = arg
                .strip_prefix(SHORT_FILTER)
                .or_else(|| arg.strip_prefix(LONG_FILTER))
            else {
                tracing::warn!(arg, "rejecting unknown argument");
                return Err(ConfigError::UnknownArgument(arg.to_string()));
            };
            config.filter = (!pattern.is_empty()).then(|| pattern.to_string());
        }
        Ok(config)
    }

    pub fn with_filter(pattern: impl Into<String>) -> Self {
        let pattern = pattern.into();
        RunConfig {
            filter: (!pattern.is_empty()).then_some(pattern),
        }
    }

    /// Whether a test named `full_name` passes the filter.
    pub fn matches(&self, full_name: &str) -> bool {
        self.filter
            .as_deref()
            .map_or(true, |pattern| full_name.contains(pattern))
    }
}
