//! One registered test and its execution state machine.
//!
//! A test case runs exactly once per run:
//!
//! ```text
//! Pending -> Running -> Success | Fail | Skip
//! ```
//!
//! The running phase is two protected regions. The first covers the filter,
//! the fixture's skip decision, setup and the body; the second covers
//! cleanup, entered only when setup was. Nothing raised or panicked inside
//! either region gets past the test case.

use std::panic::{self, AssertUnwindSafe};
use std::time::{Duration, Instant};

use mtest_log::{Color, Log};

use crate::active::{ActiveGuard, CaseRecord};
use crate::assertion::{handle_unhandled, skip_at};
use crate::check_info::{CheckInfo, SourceLocation};
use crate::config::RunConfig;
use crate::fixture::Fixture;
use crate::outcome::{panic_message, Flow, TestStatus, UNKNOWN_EXCEPTION};
use crate::timing::{as_millis_f64, format_elapsed};

/// Skip reason for tests that do not match the run filter.
pub const SKIPPED_BY_FILTER: &str = "skipped by filter";

/// Skip reason for tests whose fixture declined to run.
pub const SKIPPED_BY_FIXTURE: &str = "skipped by fixture";

/// Type-erased fixture plus body.
pub(crate) trait Lifecycle: Send {
    fn skip(&mut self) -> bool;
    fn setup(&mut self) -> Flow;
    fn body(&mut self) -> Flow;
    fn cleanup(&mut self) -> Flow;
}

/// A fixture paired with the body that runs against it.
pub(crate) struct Case<F, B> {
    fixture: F,
    body: B,
}

impl<F, B> Case<F, B>
where
    F: Fixture + Send + 'static,
    B: FnMut(&mut F) -> Flow + Send + 'static,
{
    pub(crate) fn boxed(fixture: F, body: B) -> Box<dyn Lifecycle> {
        Box::new(Case { fixture, body })
    }
}

impl<F, B> Lifecycle for Case<F, B>
where
    F: Fixture + Send,
    B: FnMut(&mut F) -> Flow + Send,
{
    fn skip(&mut self) -> bool {
        self.fixture.skip()
    }

    fn setup(&mut self) -> Flow {
        self.fixture.setup()
    }

    fn body(&mut self) -> Flow {
        (self.body)(&mut self.fixture)
    }

    fn cleanup(&mut self) -> Flow {
        self.fixture.cleanup()
    }
}

/// A registered test: identity, lifecycle and, after running, its outcome.
pub struct TestCase {
    section: String,
    name: String,
    full_name: String,
    location: SourceLocation,
    lifecycle: Box<dyn Lifecycle>,
    record: CaseRecord,
    duration: Duration,
}

impl TestCase {
    pub(crate) fn new(
        section: &str,
        name: &str,
        location: SourceLocation,
        lifecycle: Box<dyn Lifecycle>,
    ) -> Self {
        TestCase {
            section: section.to_string(),
            name: name.to_string(),
            full_name: full_name(section, name),
            location,
            lifecycle,
            record: CaseRecord::default(),
            duration: Duration::ZERO,
        }
    }

    pub fn section(&self) -> &str {
        &self.section
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// `Section.Name`.
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Where the test was declared.
    pub fn location(&self) -> SourceLocation {
        self.location
    }

    pub fn status(&self) -> TestStatus {
        self.record.status
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Run the test once under `config` and log its progress to `log`.
    pub(crate) fn run(&mut self, config: &RunConfig, log: &Log) {
        let _span = tracing::debug_span!("test_case", name = %self.full_name).entered();
        let start = Instant::now();
        log.line(Color::Blue, &format!("[Start] {}", self.full_name));

        let guard = ActiveGuard::install(&self.full_name, CaseRecord::default(), log.clone());
        let location = self.location;
        let selected = config.matches(&self.full_name);
        let lifecycle = &mut self.lifecycle;
        let mut needs_cleanup = false;

        protect(location, || {
            if !selected {
                return skip_at(SKIPPED_BY_FILTER, location);
            }
            if lifecycle.skip() {
                return skip_at(SKIPPED_BY_FIXTURE, location);
            }
            needs_cleanup = true;
            lifecycle.setup()?;
            lifecycle.body()
        });

        if needs_cleanup {
            protect(location, || lifecycle.cleanup());
        }

        self.record = guard.finish();
        self.duration = start.elapsed();

        let status = self.record.status;
        let mut line = format!(
            "{} {} {}",
            status.tag(),
            self.full_name,
            format_elapsed(self.duration)
        );
        let failed_checks = self.record.failed_checks.len();
        if failed_checks > 0 {
            line.push_str(&format!(" [failed checks: {failed_checks}]"));
        }
        log.line(status_color(status), &line);

        tracing::debug!(
            status = %status,
            failed_checks,
            elapsed_ms = as_millis_f64(self.duration),
            "test case finished"
        );
    }

    /// Snapshot of the outcome.
    pub fn report(&self) -> CaseReport {
        CaseReport {
            section: self.section.clone(),
            name: self.name.clone(),
            full_name: self.full_name.clone(),
            location: self.location,
            status: self.record.status,
            failed_checks: self.record.failed_checks.clone(),
            failed_assertion: self.record.failed_assertion.clone(),
            duration: self.duration,
        }
    }
}

impl std::fmt::Debug for TestCase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestCase")
            .field("full_name", &self.full_name)
            .field("location", &self.location)
            .field("status", &self.record.status)
            .finish_non_exhaustive()
    }
}

/// Outcome of one test case after a run.
#[derive(Clone, Debug, PartialEq)]
pub struct CaseReport {
    pub section: String,
    pub name: String,
    pub full_name: String,
    pub location: SourceLocation,
    pub status: TestStatus,
    pub failed_checks: Vec<CheckInfo>,
    pub failed_assertion: Option<CheckInfo>,
    pub duration: Duration,
}

impl CaseReport {
    pub fn duration_ms(&self) -> f64 {
        as_millis_f64(self.duration)
    }

    /// Every recorded failure: checks in order, then the fatal one.
    pub fn failures(&self) -> impl Iterator<Item = &CheckInfo> {
        self.failed_checks
            .iter()
            .chain(self.failed_assertion.as_ref())
    }
}

pub(crate) fn full_name(section: &str, name: &str) -> String {
    format!("{section}.{name}")
}

pub(crate) fn status_color(status: TestStatus) -> Color {
    match status {
        TestStatus::Success => Color::Green,
        TestStatus::Fail => Color::Red,
        TestStatus::Skip => Color::Magenta,
    }
}

/// Run `step`, folding anything other than the engine's own signals into a
/// fatal failure located at the test's declaration.
fn protect(location: SourceLocation, step: impl FnOnce() -> Flow) {
    match panic::catch_unwind(AssertUnwindSafe(step)) {
        Ok(Ok(())) => {}
        Ok(Err(interrupt)) => {
            if let Some(message) = interrupt.into_unhandled() {
                handle_unhandled(&message, location);
            }
        }
        Err(payload) => {
            let message = panic_message(&*payload)
                .filter(|message| !message.is_empty())
                .unwrap_or(UNKNOWN_EXCEPTION);
            handle_unhandled(message, location);
        }
    }
}
