//! Failure records attached to a test case.

use std::fmt;
use std::panic::Location;

/// How a failed comparison affects the running test.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Record the failure and let the body continue.
    Check,
    /// Record the failure and abandon the rest of the body.
    Assert,
}

impl Severity {
    /// Log tag for this severity.
    pub fn tag(self) -> &'static str {
        match self {
            Severity::Check => "[Check]",
            Severity::Assert => "[Assert]",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Check => f.write_str("check"),
            Severity::Assert => f.write_str("assert"),
        }
    }
}

/// Source position of a declaration or a failed primitive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SourceLocation {
    pub file: &'static str,
    pub line: u32,
}

impl SourceLocation {
    pub const fn new(file: &'static str, line: u32) -> Self {
        SourceLocation { file, line }
    }

    /// Location of the outermost `#[track_caller]` call site.
    #[track_caller]
    pub fn caller() -> Self {
        Location::caller().into()
    }

    /// File name without its directories.
    pub fn file_name(&self) -> &'static str {
        file_name(self.file)
    }
}

impl From<&'static Location<'static>> for SourceLocation {
    fn from(location: &'static Location<'static>) -> Self {
        SourceLocation::new(location.file(), location.line())
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file_name(), self.line)
    }
}

/// Strip directories from `path`, accepting both separators.
pub fn file_name(path: &str) -> &str {
    path.rsplit(|c| c == '/' || c == '\\').next().unwrap_or(path)
}

/// One failed check or assert. Immutable once built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckInfo {
    severity: Severity,
    message: String,
    location: SourceLocation,
}

impl CheckInfo {
    pub fn new(severity: Severity, message: impl Into<String>, location: SourceLocation) -> Self {
        CheckInfo {
            severity,
            message: message.into(),
            location,
        }
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn location(&self) -> SourceLocation {
        self.location
    }

    pub fn file(&self) -> &'static str {
        self.location.file
    }

    pub fn line(&self) -> u32 {
        self.location.line
    }
}

impl fmt::Display for CheckInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({})",
            self.severity.tag(),
            self.message,
            self.location
        )
    }
}
