//! Test status and the control signals that end a test body early.

use std::any::Any;
use std::fmt;

/// Boxed error accepted wherever a body or fixture can fail.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result of one step of a test body or fixture hook.
///
/// `Err` unwinds only to the enclosing test case, never further.
pub type Flow = Result<(), Interrupt>;

/// Final classification of a test case.
///
/// Starts as `Success` and moves at most once, to `Fail` or `Skip`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TestStatus {
    #[default]
    Success,
    Fail,
    Skip,
}

impl TestStatus {
    pub fn is_success(self) -> bool {
        matches!(self, TestStatus::Success)
    }

    pub fn is_failed(self) -> bool {
        matches!(self, TestStatus::Fail)
    }

    pub fn is_skipped(self) -> bool {
        matches!(self, TestStatus::Skip)
    }

    /// Log tag for the per-test result line.
    pub fn tag(self) -> &'static str {
        match self {
            TestStatus::Success => "[Success]",
            TestStatus::Fail => "[Failure]",
            TestStatus::Skip => "[Skipped]",
        }
    }
}

impl fmt::Display for TestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestStatus::Success => f.write_str("success"),
            TestStatus::Fail => f.write_str("fail"),
            TestStatus::Skip => f.write_str("skip"),
        }
    }
}

/// Early exit from a test body.
///
/// Assert and skip signals can only be produced by the engine's own
/// primitives, which record the failure or skip before returning them. Any
/// other error converted with `?` is an unhandled error: the test case turns
/// it into a fatal failure.
#[derive(Debug)]
pub struct Interrupt {
    kind: InterruptKind,
}

#[derive(Debug)]
enum InterruptKind {
    Assertion,
    Skip,
    Error(BoxError),
}

impl Interrupt {
    pub(crate) fn assertion() -> Self {
        Interrupt {
            kind: InterruptKind::Assertion,
        }
    }

    pub(crate) fn skip() -> Self {
        Interrupt {
            kind: InterruptKind::Skip,
        }
    }

    /// Abort the current test with an arbitrary error.
    pub fn raise(error: impl Into<BoxError>) -> Self {
        Interrupt {
            kind: InterruptKind::Error(error.into()),
        }
    }

    pub fn is_assertion(&self) -> bool {
        matches!(self.kind, InterruptKind::Assertion)
    }

    pub fn is_skip(&self) -> bool {
        matches!(self.kind, InterruptKind::Skip)
    }

    pub fn is_error(&self) -> bool {
        matches!(self.kind, InterruptKind::Error(_))
    }

    /// Message of an unhandled error, `None` for the engine's own signals.
    pub(crate) fn into_unhandled(self) -> Option<String> {
        match self.kind {
            InterruptKind::Assertion | InterruptKind::Skip => None,
            InterruptKind::Error(error) => Some(error_message(&*error)),
        }
    }
}

impl<E> From<E> for Interrupt
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn from(error: E) -> Self {
        Interrupt::raise(error)
    }
}

/// Message used when an error or panic carries no text.
pub const UNKNOWN_EXCEPTION: &str = "Unknown exception";

pub(crate) fn error_message(error: &(dyn std::error::Error + 'static)) -> String {
    let message = error.to_string();
    if message.is_empty() {
        UNKNOWN_EXCEPTION.to_string()
    } else {
        message
    }
}

/// Text of a panic payload, if it has any.
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> Option<&str> {
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        Some(message)
    } else {
        payload.downcast_ref::<String>().map(String::as_str)
    }
}

#[cfg(test)]
mod tests;
