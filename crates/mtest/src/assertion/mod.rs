//! Assertion engine.
//!
//! Every primitive is built in two steps. A pure comparison in [`compare`]
//! produces a [`Verdict`]; the verdict is then concluded at a [`Severity`]:
//!
//! - **Check** ([`check`]): the failure is recorded on the active test and
//!   the primitive returns `false`. The body keeps running.
//! - **Assert** ([`assert`]): the failure is recorded and the primitive
//!   returns an [`Interrupt`] that the body propagates with `?`, ending the
//!   body. The run itself continues with the next test.
//!
//! Both paths funnel into [`handle_failure`], which marks the active test
//! failed and writes a red `[Check]`/`[Assert]` line.

pub mod assert;
pub mod check;
pub mod compare;

use std::fmt;

use mtest_log::Color;

use crate::active;
use crate::check_info::{CheckInfo, Severity, SourceLocation};
use crate::outcome::{Flow, Interrupt};

/// Machine epsilon for `f64` comparisons.
pub const MACHINE_EPSILON: f64 = f64::EPSILON;

/// Default tolerance for near-equality checks.
pub const DEFAULT_EPSILON: f64 = 1e-4;

/// Outcome of a comparison: pass, or a formatted failure message.
///
/// Also the input of the custom predicate primitive (`check::that`,
/// `assert::that`).
#[must_use]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Verdict(Option<String>);

impl Verdict {
    pub fn pass() -> Self {
        Verdict(None)
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Verdict(Some(message.into()))
    }

    /// Pass when `ok`, otherwise fail with the lazily built message.
    pub fn from_bool(ok: bool, message: impl FnOnce() -> String) -> Self {
        if ok {
            Verdict::pass()
        } else {
            Verdict::fail(message())
        }
    }

    pub fn is_pass(&self) -> bool {
        self.0.is_none()
    }

    /// Failure message, `None` on pass.
    pub fn message(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl<E: fmt::Display> From<Result<(), E>> for Verdict {
    fn from(result: Result<(), E>) -> Self {
        match result {
            Ok(()) => Verdict::pass(),
            Err(error) => Verdict::fail(error.to_string()),
        }
    }
}

/// Conclude `verdict` at `severity`, located at the caller.
///
/// Returns `Ok(true)` on pass, `Ok(false)` on a recorded check failure and
/// `Err` on an assert failure.
#[track_caller]
pub fn expect(severity: Severity, verdict: Verdict) -> Result<bool, Interrupt> {
    expect_at(severity, verdict, SourceLocation::caller())
}

/// [`expect`] with an explicit location.
pub fn expect_at(
    severity: Severity,
    verdict: Verdict,
    location: SourceLocation,
) -> Result<bool, Interrupt> {
    match verdict.0 {
        None => Ok(true),
        Some(message) => handle_failure(message, severity, location).map(|()| false),
    }
}

/// Record a failure on the active test and signal per severity.
pub fn handle_failure(message: String, severity: Severity, location: SourceLocation) -> Flow {
    let info = CheckInfo::new(severity, message, location);
    let routed = active::with_active(|case| {
        case.log.line(Color::Red, &info.to_string());
        case.record.record(info.clone());
    });
    if routed.is_none() {
        tracing::warn!(%info, "failure reported outside of a running test");
    }
    match severity {
        Severity::Check => Ok(()),
        Severity::Assert => Err(Interrupt::assertion()),
    }
}

/// Record an unhandled error or panic as a fatal failure of the active test.
pub(crate) fn handle_unhandled(message: &str, location: SourceLocation) {
    let info = CheckInfo::new(Severity::Assert, message, location);
    let routed = active::with_active(|case| {
        case.log.line(Color::Red, &format!("[Error] {message}"));
        case.record.record_fatal(info);
    });
    if routed.is_none() {
        tracing::warn!(error = message, "unhandled error outside of a running test");
    }
}

/// Skip the rest of the active test.
///
/// Not a failure: the test is reported in the skipped bucket. Return the
/// result from the body (or propagate it with `?`).
#[track_caller]
pub fn skip(reason: impl fmt::Display) -> Flow {
    skip_at(&reason.to_string(), SourceLocation::caller())
}

pub(crate) fn skip_at(reason: &str, location: SourceLocation) -> Flow {
    let routed = active::with_active(|case| {
        case.log.line(
            Color::Magenta,
            &format!("[Skipped] {} skipped: {reason} ({location})", case.full_name),
        );
        case.record.skip();
    });
    if routed.is_none() {
        tracing::warn!(reason, "skip requested outside of a running test");
    }
    Err(Interrupt::skip())
}

/// Write an informational `[Info]` line from inside a test.
pub fn info(message: impl fmt::Display) {
    let message = message.to_string();
    let routed = active::with_active(|case| {
        case.log.line(Color::Default, &format!("[Info] {message}"));
    });
    if routed.is_none() {
        tracing::info!(text = %message, "test info outside of a running test");
    }
}
