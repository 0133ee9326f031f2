//! Assert-severity primitives.
//!
//! A failed assert is recorded on the active test and returns an
//! [`Interrupt`](crate::Interrupt). Propagate it with `?` so nothing after
//! the assert runs:
//!
//! ```text
//! assert::not_null(&connection)?;
//! assert::eq(rows.len(), 3)?;
//! ```

use std::error::Error;
use std::fmt::Debug;

use super::compare::{self, Attempt, Nullable};
use super::{expect, Verdict};
use crate::check_info::Severity;
use crate::outcome::Flow;

#[track_caller]
fn conclude(verdict: Verdict) -> Flow {
    expect(Severity::Assert, verdict).map(|_| ())
}

/// Custom predicate: pass or fail with the verdict's message.
#[track_caller]
pub fn that(verdict: impl Into<Verdict>) -> Flow {
    conclude(verdict.into())
}

/// `condition` holds; `expression` names it in the failure message.
///
/// The condition macros fill `expression` with the source text.
#[track_caller]
pub fn is_true(condition: bool, expression: &str) -> Flow {
    conclude(compare::truth(condition, expression))
}

/// `condition` does not hold; `expression` names it in the failure message.
///
/// The condition macros fill `expression` with the source text.
#[track_caller]
pub fn is_false(condition: bool, expression: &str) -> Flow {
    conclude(compare::falsehood(condition, expression))
}

#[track_caller]
pub fn eq<A, W>(actual: A, wanted: W) -> Flow
where
    A: PartialEq<W> + Debug,
    W: Debug,
{
    conclude(compare::equal(&actual, &wanted))
}

#[track_caller]
pub fn ne<A, W>(actual: A, wanted: W) -> Flow
where
    A: PartialEq<W> + Debug,
    W: Debug,
{
    conclude(compare::not_equal(&actual, &wanted))
}

#[track_caller]
pub fn same<T: ?Sized>(actual: &T, wanted: &T) -> Flow {
    conclude(compare::same(actual, wanted))
}

#[track_caller]
pub fn not_same<T: ?Sized>(actual: &T, wanted: &T) -> Flow {
    conclude(compare::not_same(actual, wanted))
}

#[track_caller]
pub fn null<P: Nullable + ?Sized>(value: &P) -> Flow {
    conclude(compare::null(value))
}

#[track_caller]
pub fn not_null<P: Nullable + ?Sized>(value: &P) -> Flow {
    conclude(compare::not_null(value))
}

#[track_caller]
pub fn near(value: impl Into<f64>, wanted: impl Into<f64>, epsilon: f64) -> Flow {
    conclude(compare::near(value.into(), wanted.into(), epsilon))
}

#[track_caller]
pub fn throws<E: Error + 'static>(work: impl FnOnce() -> Attempt) -> Flow {
    conclude(compare::throws::<E>(work))
}

#[track_caller]
pub fn throws_any(work: impl FnOnce() -> Attempt) -> Flow {
    conclude(compare::throws_any(work))
}

#[track_caller]
pub fn throws_nothing(work: impl FnOnce() -> Attempt) -> Flow {
    conclude(compare::throws_nothing(work))
}
