//! Setup/cleanup hooks around a test body.
//!
//! A [`Fixture`] is constructed once per registered test and owned by that
//! test case. The engine drives it through a fixed lifecycle:
//!
//! 1. [`Fixture::skip`] is consulted first. `true` skips the test; neither
//!    `setup` nor `cleanup` runs.
//! 2. [`Fixture::setup`] runs. An error or panic fails the test and the body
//!    is not run.
//! 3. The test body runs with `&mut` access to the fixture.
//! 4. [`Fixture::cleanup`] runs if and only if `setup` was entered.
//!
//! Table tests use a [`TableFixture`], whose row-aware hooks default to the
//! plain ones. A fixture bound to its row ([`Bound`]) is itself a `Fixture`,
//! so table tests and plain tests share one lifecycle runner.

use crate::outcome::Flow;

/// Lifecycle hooks around a test body. Every hook has a no-op default.
pub trait Fixture {
    /// Return `true` to skip the test without running `setup`.
    fn skip(&mut self) -> bool {
        false
    }

    fn setup(&mut self) -> Flow {
        Ok(())
    }

    fn cleanup(&mut self) -> Flow {
        Ok(())
    }
}

/// Fixture for tests that need no shared state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoFixture;

impl Fixture for NoFixture {}

/// Fixture whose tests are generated from a table of rows.
///
/// Registering a table test with `N` rows produces `N` test cases named
/// `<test>[<generate_name(row, index)>]`, each with a fresh fixture.
pub trait TableFixture: Fixture {
    /// One row of test data.
    type Row;

    fn skip_row(&mut self, _row: &Self::Row) -> bool {
        self.skip()
    }

    fn setup_row(&mut self, _row: &Self::Row) -> Flow {
        self.setup()
    }

    fn cleanup_row(&mut self, _row: &Self::Row) -> Flow {
        self.cleanup()
    }

    /// Name of the generated test for `row`, without the brackets.
    fn generate_name(_row: &Self::Row, index: usize) -> String {
        index.to_string()
    }
}

/// A table fixture bound to one row.
pub struct Bound<F: TableFixture> {
    fixture: F,
    row: F::Row,
    index: usize,
}

impl<F: TableFixture> Bound<F> {
    pub fn new(fixture: F, row: F::Row, index: usize) -> Self {
        Bound {
            fixture,
            row,
            index,
        }
    }

    pub fn fixture(&self) -> &F {
        &self.fixture
    }

    pub fn row(&self) -> &F::Row {
        &self.row
    }

    /// Position of the row in the registered table.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Generated name of this row.
    pub fn name(&self) -> String {
        F::generate_name(&self.row, self.index)
    }

    /// Split into the fixture and its row for the test body.
    pub fn parts_mut(&mut self) -> (&mut F, &F::Row) {
        (&mut self.fixture, &self.row)
    }
}

impl<F: TableFixture> Fixture for Bound<F> {
    fn skip(&mut self) -> bool {
        self.fixture.skip_row(&self.row)
    }

    fn setup(&mut self) -> Flow {
        self.fixture.setup_row(&self.row)
    }

    fn cleanup(&mut self) -> Flow {
        self.fixture.cleanup_row(&self.row)
    }
}
