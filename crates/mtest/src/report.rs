//! Aggregated run results and the run summary.

use std::time::Duration;

use mtest_log::{Color, Log};

use crate::outcome::TestStatus;
use crate::test_case::CaseReport;
use crate::timing::format_elapsed;

/// Timing of one section.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionReport {
    pub name: String,
    pub count: usize,
    pub duration: Duration,
}

/// Everything a run produced, bucketed by final status.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RunReport {
    pub successful: Vec<CaseReport>,
    pub failed: Vec<CaseReport>,
    pub skipped: Vec<CaseReport>,
    pub sections: Vec<SectionReport>,
    /// Registered tests.
    pub total: usize,
    /// Tests selected by the filter.
    pub matching: usize,
    pub filter: Option<String>,
    pub duration: Duration,
}

impl RunReport {
    pub(crate) fn new(total: usize, matching: usize, filter: Option<String>) -> Self {
        RunReport {
            total,
            matching,
            filter,
            ..RunReport::default()
        }
    }

    pub(crate) fn push(&mut self, case: CaseReport) {
        match case.status {
            TestStatus::Success => self.successful.push(case),
            TestStatus::Fail => self.failed.push(case),
            TestStatus::Skip => self.skipped.push(case),
        }
    }

    /// `true` unless some test failed. Skips do not count as failures.
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    /// Process exit code: 0 on success, 1 otherwise.
    pub fn exit_code(&self) -> u8 {
        u8::from(!self.is_success())
    }

    /// Number of tests that ran to a final status.
    pub fn executed(&self) -> usize {
        self.successful.len() + self.failed.len() + self.skipped.len()
    }

    /// Look up a test by full name in every bucket.
    pub fn case(&self, full_name: &str) -> Option<&CaseReport> {
        self.successful
            .iter()
            .chain(&self.failed)
            .chain(&self.skipped)
            .find(|case| case.full_name == full_name)
    }

    pub(crate) fn print_header(&self, log: &Log) {
        let header = match &self.filter {
            Some(filter) => format!(
                "[Manager] Running {} of {} tests (filter: \"{filter}\")",
                self.matching, self.total
            ),
            None => format!("[Manager] Running {} tests", self.total),
        };
        log.line(Color::Blue, &header);
        log.blank();
    }

    pub(crate) fn print_summary(&self, log: &Log) {
        if self.total == 0 {
            log.line(Color::Yellow, "[Manager] No tests registered");
            return;
        }

        if !self.failed.is_empty() {
            log.line(Color::Red, "[Manager] Failed tests:");
            for case in &self.failed {
                log.line(Color::Red, &format!("  {} ({})", case.full_name, case.location));
                for failure in case.failures() {
                    log.line(Color::Red, &format!("    {failure}"));
                }
            }
            log.blank();
        }

        let buckets = [
            ("Successful", Color::Green, self.successful.len()),
            ("Failed", Color::Red, self.failed.len()),
            ("Skipped", Color::Magenta, self.skipped.len()),
        ];
        for (label, color, count) in buckets {
            if count > 0 {
                log.line(color, &format!("[Manager] {label}: {count}"));
            }
        }
        log.line(
            Color::Blue,
            &format!(
                "[Manager] Finished {} tests {}",
                self.executed(),
                format_elapsed(self.duration)
            ),
        );
    }
}
