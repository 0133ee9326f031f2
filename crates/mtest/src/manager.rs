//! Test registry and runner.
//!
//! The manager owns every registered [`TestCase`], grouped into sections.
//! Sections run in the order they were first registered and tests run in
//! registration order within their section. A run drains the registry up
//! front and drops every case when it finishes, so the registry has to be
//! repopulated before the next run.

use std::sync::Arc;
use std::time::Instant;

use mtest_log::{Color, Log};
use rustc_hash::FxHashMap;

use crate::active;
use crate::check_info::SourceLocation;
use crate::config::RunConfig;
use crate::error::{RegistrationError, RunError};
use crate::fixture::{Bound, Fixture, NoFixture, TableFixture};
use crate::outcome::Flow;
use crate::report::{RunReport, SectionReport};
use crate::test_case::{full_name, Case, TestCase};
use crate::timing::format_elapsed;

/// Named group of test cases, in registration order.
#[derive(Debug)]
pub struct Section {
    name: String,
    cases: Vec<TestCase>,
}

impl Section {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cases(&self) -> &[TestCase] {
        &self.cases
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }
}

/// Registry of sections plus the log every run writes to.
#[derive(Debug, Default)]
pub struct Manager {
    sections: Vec<Section>,
    index: FxHashMap<String, usize>,
    log: Log,
}

impl Manager {
    pub fn new(log: Log) -> Self {
        Manager {
            sections: Vec::new(),
            index: FxHashMap::default(),
            log,
        }
    }

    pub fn log(&self) -> &Log {
        &self.log
    }

    /// Replace the log used by later registrations and runs.
    pub fn set_log(&mut self, log: Log) {
        self.log = log;
    }

    /// Register one test.
    ///
    /// `fixture` is only called when the registration is accepted. A test
    /// whose section and name are already taken is rejected: the error is
    /// logged and the first registration stays.
    pub fn add<F, B>(
        &mut self,
        section: &str,
        name: &str,
        location: SourceLocation,
        fixture: impl FnOnce() -> F,
        body: B,
    ) -> Result<(), RegistrationError>
    where
        F: Fixture + Send + 'static,
        B: FnMut(&mut F) -> Flow + Send + 'static,
    {
        if self.contains(section, name) {
            let error = RegistrationError::Duplicate {
                full_name: full_name(section, name),
            };
            self.log.line(Color::Red, &format!("[Error] {error}"));
            tracing::warn!(%error, %location, "duplicate registration rejected");
            return Err(error);
        }

        let case = TestCase::new(section, name, location, Case::boxed(fixture(), body));
        tracing::debug!(test = case.full_name(), %location, "registered test");
        let slot = match self.index.get(section) {
            Some(&slot) => slot,
            None => {
                self.sections.push(Section {
                    name: section.to_string(),
                    cases: Vec::new(),
                });
                let slot = self.sections.len() - 1;
                self.index.insert(section.to_string(), slot);
                slot
            }
        };
        self.sections[slot].cases.push(case);
        Ok(())
    }

    /// Builder registering tests into `section`.
    pub fn section(&mut self, name: &str) -> SectionRegistrar<'_> {
        SectionRegistrar {
            manager: self,
            section: name.to_string(),
        }
    }

    pub fn contains(&self, section: &str, name: &str) -> bool {
        self.index
            .get(section)
            .is_some_and(|&slot| self.sections[slot].cases.iter().any(|c| c.name() == name))
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Number of registered tests across all sections.
    pub fn len(&self) -> usize {
        self.sections.iter().map(Section::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Drop every registered test.
    pub fn clear(&mut self) {
        self.sections.clear();
        self.index.clear();
    }

    /// Move the registered tests into a new manager sharing this log.
    #[must_use]
    pub fn take(&mut self) -> Manager {
        Manager {
            sections: std::mem::take(&mut self.sections),
            index: std::mem::take(&mut self.index),
            log: self.log.clone(),
        }
    }

    /// Run with command-line style arguments; `true` when no test failed.
    ///
    /// Configuration errors and reentrant calls count as failure.
    pub fn run<I, S>(&mut self, args: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.run_report(args).is_ok_and(|report| report.is_success())
    }

    /// Parse `args` and run every registered test.
    ///
    /// The registry is drained even when the arguments are rejected.
    pub fn run_report<I, S>(&mut self, args: I) -> Result<RunReport, RunError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let parsed = RunConfig::from_args(args).map_err(RunError::from);
        match parsed {
            Ok(config) => self.run_with_config(&config),
            Err(error) => {
                self.clear();
                self.log.line(Color::Red, &format!("[Error] {error}"));
                self.log.flush();
                Err(error)
            }
        }
    }

    /// Run every registered test under `config`, draining the registry.
    pub fn run_with_config(&mut self, config: &RunConfig) -> Result<RunReport, RunError> {
        let mut sections = std::mem::take(&mut self.sections);
        self.index.clear();

        if active::is_running() {
            let error = RunError::Reentrant;
            self.log.line(Color::Red, &format!("[Error] {error}"));
            return Err(error);
        }

        let log = &self.log;
        let filter = config.filter.as_deref();
        let total: usize = sections.iter().map(Section::len).sum();
        let matching = sections
            .iter()
            .flat_map(|section| &section.cases)
            .filter(|case| config.matches(case.full_name()))
            .count();

        let _span = tracing::info_span!("run", total, matching, filter).entered();
        tracing::info!("test run started");
        let mut report = RunReport::new(total, matching, config.filter.clone());
        report.print_header(log);

        let start = Instant::now();
        for section in &mut sections {
            let _section_span = tracing::debug_span!("section", name = %section.name).entered();
            let count = section.len();
            log.line(
                Color::Blue,
                &format!("[-------] {count} {} from {}", tests_word(count), section.name),
            );

            let section_start = Instant::now();
            for case in &mut section.cases {
                case.run(config, log);
                report.push(case.report());
            }
            let duration = section_start.elapsed();

            log.line(
                Color::Blue,
                &format!(
                    "[-------] {count} {} from {} {}",
                    tests_word(count),
                    section.name,
                    format_elapsed(duration)
                ),
            );
            log.blank();
            report.sections.push(SectionReport {
                name: section.name.clone(),
                count,
                duration,
            });
        }
        report.duration = start.elapsed();

        report.print_summary(log);
        log.flush();
        // Cases and their fixtures live until the run is fully reported.
        drop(sections);
        tracing::info!(
            failed = report.failed.len(),
            skipped = report.skipped.len(),
            "test run finished"
        );
        Ok(report)
    }
}

/// Registers tests into one section. Returned by [`Manager::section`].
///
/// Every method records its caller as the declaration site. Rejected
/// duplicates are logged by the manager and otherwise ignored.
pub struct SectionRegistrar<'a> {
    manager: &'a mut Manager,
    section: String,
}

impl SectionRegistrar<'_> {
    pub fn name(&self) -> &str {
        &self.section
    }

    /// Register a test without a fixture.
    #[track_caller]
    pub fn test<B>(&mut self, name: &str, mut body: B) -> &mut Self
    where
        B: FnMut() -> Flow + Send + 'static,
    {
        let location = SourceLocation::caller();
        let _ = self.manager.add(
            &self.section,
            name,
            location,
            || NoFixture,
            move |_: &mut NoFixture| body(),
        );
        self
    }

    /// Register a test whose fixture is built with `Default`.
    #[track_caller]
    pub fn test_with<F, B>(&mut self, name: &str, body: B) -> &mut Self
    where
        F: Fixture + Default + Send + 'static,
        B: FnMut(&mut F) -> Flow + Send + 'static,
    {
        self.test_with_factory(name, F::default, body)
    }

    /// Register a test whose fixture comes from `factory`.
    #[track_caller]
    pub fn test_with_factory<F, B>(
        &mut self,
        name: &str,
        factory: impl FnOnce() -> F,
        body: B,
    ) -> &mut Self
    where
        F: Fixture + Send + 'static,
        B: FnMut(&mut F) -> Flow + Send + 'static,
    {
        let location = SourceLocation::caller();
        let _ = self
            .manager
            .add(&self.section, name, location, factory, body);
        self
    }

    /// Register one test per row, each with a `Default` fixture.
    #[track_caller]
    pub fn table<F, B>(
        &mut self,
        name: &str,
        rows: impl IntoIterator<Item = F::Row>,
        body: B,
    ) -> &mut Self
    where
        F: TableFixture + Default + Send + 'static,
        F::Row: Send + 'static,
        B: Fn(&mut F, &F::Row) -> Flow + Send + Sync + 'static,
    {
        self.table_with_factory(name, rows, F::default, body)
    }

    /// Register one test per row, named `name[<generated>]`, each with a
    /// fresh fixture from `factory`.
    #[track_caller]
    pub fn table_with_factory<F, B>(
        &mut self,
        name: &str,
        rows: impl IntoIterator<Item = F::Row>,
        factory: impl Fn() -> F,
        body: B,
    ) -> &mut Self
    where
        F: TableFixture + Send + 'static,
        F::Row: Send + 'static,
        B: Fn(&mut F, &F::Row) -> Flow + Send + Sync + 'static,
    {
        let location = SourceLocation::caller();
        let body = Arc::new(body);
        for (index, row) in rows.into_iter().enumerate() {
            let bound = Bound::new(factory(), row, index);
            let row_name = format!("{name}[{}]", bound.name());
            let body = Arc::clone(&body);
            let _ = self.manager.add(
                &self.section,
                &row_name,
                location,
                || bound,
                move |bound: &mut Bound<F>| {
                    let (fixture, row) = bound.parts_mut();
                    (*body)(fixture, row)
                },
            );
        }
        self
    }
}

fn tests_word(count: usize) -> &'static str {
    if count == 1 {
        "test"
    } else {
        "tests"
    }
}

#[cfg(test)]
mod tests;
