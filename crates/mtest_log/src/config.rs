//! Environment-driven sink configuration.
//!
//! - `MTEST_COLOR`: `auto` (default), `always` or `never`
//! - `MTEST_LOG_FILE`: optional path; when set, a plain [`FileSink`] is
//!   attached next to the console sink

use std::io;
use std::path::PathBuf;

use crate::{ColorMode, ConsoleSink, FileSink, Log};

/// Environment variable selecting the console color mode.
pub const COLOR_ENV: &str = "MTEST_COLOR";

/// Environment variable naming an additional log file.
pub const LOG_FILE_ENV: &str = "MTEST_LOG_FILE";

/// Sink configuration for a test run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LogConfig {
    /// Color mode of the console sink.
    pub color: ColorMode,
    /// File receiving a plain copy of the output.
    pub file: Option<PathBuf>,
}

impl LogConfig {
    /// Read the configuration from the process environment.
    ///
    /// An unparseable `MTEST_COLOR` falls back to `auto`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let color = lookup(COLOR_ENV)
            .and_then(|value| value.parse().ok())
            .unwrap_or_default();
        let file = lookup(LOG_FILE_ENV)
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);
        LogConfig { color, file }
    }

    /// Build a [`Log`] with a stdout console sink and, if configured, a file sink.
    pub fn build(&self, is_tty: bool) -> io::Result<Log> {
        let log = Log::with_sink(ConsoleSink::stdout(self.color, is_tty));
        if let Some(path) = &self.file {
            log.add_sink(FileSink::create(path)?);
        }
        Ok(log)
    }
}

#[cfg(test)]
mod tests;
