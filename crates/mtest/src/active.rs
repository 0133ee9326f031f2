//! The currently executing test case.
//!
//! Assertion primitives are free functions, so they find the test they
//! belong to through a single per-thread slot instead of an explicit
//! parameter. A [`ActiveGuard`] fills the slot for exactly one test case run
//! and empties it when dropped, including during unwinding.

use std::cell::RefCell;

use mtest_log::Log;

use crate::check_info::{CheckInfo, Severity};
use crate::outcome::TestStatus;

thread_local! {
    static ACTIVE: RefCell<Option<ActiveCase>> = const { RefCell::new(None) };
}

/// Mutable outcome state of one test case.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct CaseRecord {
    pub(crate) status: TestStatus,
    pub(crate) failed_checks: Vec<CheckInfo>,
    pub(crate) failed_assertion: Option<CheckInfo>,
}

impl CaseRecord {
    /// Move `Success` to `Fail`. A settled status is never overwritten.
    fn fail(&mut self) -> bool {
        if self.status.is_success() {
            self.status = TestStatus::Fail;
        }
        self.status.is_failed()
    }

    /// Move `Success` to `Skip`.
    pub(crate) fn skip(&mut self) {
        if self.status.is_success() {
            self.status = TestStatus::Skip;
        }
    }

    /// Attach a failure: checks accumulate, the first fatal failure wins.
    ///
    /// Nothing is attached to a case that was already skipped.
    pub(crate) fn record(&mut self, info: CheckInfo) {
        if !self.fail() {
            return;
        }
        match info.severity() {
            Severity::Check => self.failed_checks.push(info),
            Severity::Assert => {
                if self.failed_assertion.is_none() {
                    self.failed_assertion = Some(info);
                }
            }
        }
    }

    /// Attach the failure of an unhandled error or panic.
    ///
    /// Unlike check and assert failures this also fails a skipped case, so
    /// a cleanup that breaks after a skip still fails the run.
    pub(crate) fn record_fatal(&mut self, info: CheckInfo) {
        if self.status.is_skipped() {
            self.status = TestStatus::Fail;
        }
        self.record(info);
    }
}

/// Slot contents while a test case runs.
pub(crate) struct ActiveCase {
    pub(crate) full_name: String,
    pub(crate) record: CaseRecord,
    pub(crate) log: Log,
}

/// Run `f` against the active case, if any.
pub(crate) fn with_active<R>(f: impl FnOnce(&mut ActiveCase) -> R) -> Option<R> {
    ACTIVE.with(|slot| slot.borrow_mut().as_mut().map(f))
}

/// Whether a test case is executing on this thread.
pub fn is_running() -> bool {
    ACTIVE.with(|slot| slot.borrow().is_some())
}

/// Full name (`Section.Name`) of the test executing on this thread.
pub fn active_test() -> Option<String> {
    with_active(|case| case.full_name.clone())
}

/// RAII guard owning the active slot for one test case.
pub(crate) struct ActiveGuard {
    _private: (),
}

impl ActiveGuard {
    /// Install a fresh record for `full_name`.
    pub(crate) fn install(full_name: &str, record: CaseRecord, log: Log) -> Self {
        ACTIVE.with(|slot| {
            let previous = slot.borrow_mut().replace(ActiveCase {
                full_name: full_name.to_string(),
                record,
                log,
            });
            debug_assert!(previous.is_none(), "test cases cannot nest");
        });
        ActiveGuard { _private: () }
    }

    /// Empty the slot and hand back the record.
    pub(crate) fn finish(self) -> CaseRecord {
        ACTIVE
            .with(|slot| slot.borrow_mut().take())
            .map(|case| case.record)
            .unwrap_or_default()
    }
}

impl Drop for ActiveGuard {
    fn drop(&mut self) {
        // `finish` already took the case; this only matters during unwinding.
        ACTIVE.with(|slot| {
            if let Ok(mut slot) = slot.try_borrow_mut() {
                slot.take();
            }
        });
    }
}
