//! Pure comparison primitives.
//!
//! Each function inspects its inputs and returns a [`Verdict`]; none of them
//! touches the active test. The [`check`](super::check) and
//! [`assert`](super::assert) front ends conclude these verdicts.

use std::any::{type_name, Any};
use std::error::Error;
use std::fmt::Debug;
use std::panic::{self, AssertUnwindSafe};

use super::Verdict;
use crate::outcome::{error_message, panic_message, BoxError};

/// Unit of work for the raise/no-raise primitives.
///
/// Returning `Err` counts as raising; so does panicking.
pub type Attempt = Result<(), BoxError>;

/// Values that can be null: `Option`s and raw pointers.
pub trait Nullable {
    fn is_null(&self) -> bool;
}

impl<T> Nullable for Option<T> {
    fn is_null(&self) -> bool {
        self.is_none()
    }
}

impl<T: ?Sized> Nullable for *const T {
    fn is_null(&self) -> bool {
        (*self).is_null()
    }
}

impl<T: ?Sized> Nullable for *mut T {
    fn is_null(&self) -> bool {
        (*self).is_null()
    }
}

pub fn truth(condition: bool, expression: &str) -> Verdict {
    Verdict::from_bool(condition, || format!("`{expression}` is false"))
}

pub fn falsehood(condition: bool, expression: &str) -> Verdict {
    Verdict::from_bool(!condition, || format!("`{expression}` is true"))
}

pub fn equal<A, W>(actual: &A, wanted: &W) -> Verdict
where
    A: PartialEq<W> + Debug + ?Sized,
    W: Debug + ?Sized,
{
    Verdict::from_bool(actual == wanted, || {
        format!("expected {actual:?} to equal {wanted:?}")
    })
}

pub fn not_equal<A, W>(actual: &A, wanted: &W) -> Verdict
where
    A: PartialEq<W> + Debug + ?Sized,
    W: Debug + ?Sized,
{
    Verdict::from_bool(actual != wanted, || {
        format!("expected {actual:?} to differ from {wanted:?}")
    })
}

/// Address identity. Values are never compared.
pub fn same<T: ?Sized>(actual: &T, wanted: &T) -> Verdict {
    Verdict::from_bool(std::ptr::eq(actual, wanted), || {
        format!("expected {actual:p} to be the same object as {wanted:p}")
    })
}

/// Address non-identity. Values are never compared.
pub fn not_same<T: ?Sized>(actual: &T, wanted: &T) -> Verdict {
    Verdict::from_bool(!std::ptr::eq(actual, wanted), || {
        format!("expected {actual:p} to be a different object")
    })
}

pub fn null<P: Nullable + ?Sized>(value: &P) -> Verdict {
    Verdict::from_bool(value.is_null(), || {
        "expected null, got a value".to_string()
    })
}

pub fn not_null<P: Nullable + ?Sized>(value: &P) -> Verdict {
    Verdict::from_bool(!value.is_null(), || {
        "expected a value, got null".to_string()
    })
}

/// `|value - wanted| < epsilon`. `NaN` on either side never passes.
pub fn near(value: f64, wanted: f64, epsilon: f64) -> Verdict {
    let difference = (value - wanted).abs();
    Verdict::from_bool(difference < epsilon, || {
        format!(
            "expected {value} to be within {epsilon} of {wanted} (difference {difference})"
        )
    })
}

enum Raised {
    Nothing,
    Error(BoxError),
    Panic(Box<dyn Any + Send>),
}

fn attempt(work: impl FnOnce() -> Attempt) -> Raised {
    match panic::catch_unwind(AssertUnwindSafe(work)) {
        Ok(Ok(())) => Raised::Nothing,
        Ok(Err(error)) => Raised::Error(error),
        Err(payload) => Raised::Panic(payload),
    }
}

fn describe_panic(payload: &(dyn Any + Send)) -> String {
    format!("panic: {}", panic_message(payload).unwrap_or("<non-text payload>"))
}

/// Pass if `work` raises an `E`, either as its error or as a panic payload.
pub fn throws<E: Error + 'static>(work: impl FnOnce() -> Attempt) -> Verdict {
    let expected = type_name::<E>();
    match attempt(work) {
        Raised::Nothing => Verdict::fail(format!("expected {expected}, nothing was raised")),
        Raised::Error(error) if error.is::<E>() => Verdict::pass(),
        Raised::Error(error) => Verdict::fail(format!(
            "expected {expected}, got error: {}",
            error_message(&*error)
        )),
        Raised::Panic(payload) if (*payload).is::<E>() => Verdict::pass(),
        Raised::Panic(payload) => Verdict::fail(format!(
            "expected {expected}, got {}",
            describe_panic(&*payload)
        )),
    }
}

/// Pass if `work` raises anything.
pub fn throws_any(work: impl FnOnce() -> Attempt) -> Verdict {
    match attempt(work) {
        Raised::Nothing => Verdict::fail("expected an error, nothing was raised"),
        Raised::Error(_) | Raised::Panic(_) => Verdict::pass(),
    }
}

/// Pass if `work` completes without raising.
pub fn throws_nothing(work: impl FnOnce() -> Attempt) -> Verdict {
    match attempt(work) {
        Raised::Nothing => Verdict::pass(),
        Raised::Error(error) => Verdict::fail(format!(
            "expected no error, got error: {}",
            error_message(&*error)
        )),
        Raised::Panic(payload) => Verdict::fail(format!(
            "expected no error, got {}",
            describe_panic(&*payload)
        )),
    }
}

#[cfg(test)]
mod tests;
