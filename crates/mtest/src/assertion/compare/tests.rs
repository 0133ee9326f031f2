#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use crate::assertion::{DEFAULT_EPSILON, MACHINE_EPSILON};
use std::num::ParseIntError;

#[derive(Debug, PartialEq, Eq)]
enum Mode {
    Fast,
    Slow,
}

#[test]
fn test_truth_and_falsehood() {
    assert!(truth(true, "x").is_pass());
    assert_eq!(truth(false, "a == 7").message(), Some("`a == 7` is false"));
    assert!(falsehood(false, "x").is_pass());
    assert_eq!(falsehood(true, "b == 3").message(), Some("`b == 3` is true"));
}

#[test]
fn test_equality_reports_both_values() {
    assert!(equal(&3, &3).is_pass());
    assert!(equal(&Mode::Fast, &Mode::Fast).is_pass());
    assert!(not_equal(&Mode::Fast, &Mode::Slow).is_pass());

    let verdict = equal(&"left", &"right");
    let message = verdict.message().unwrap();
    assert!(message.contains("\"left\""));
    assert!(message.contains("\"right\""));
    assert!(!not_equal(&1, &1).is_pass());
}

#[test]
fn test_identity_ignores_values() {
    let a = String::from("same text");
    let b = String::from("same text");

    assert!(same(&a, &a).is_pass());
    assert!(!same(&a, &b).is_pass());
    assert!(not_same(&a, &b).is_pass());
    assert!(!not_same(&b, &b).is_pass());
}

#[test]
fn test_nullables() {
    let value = 5;
    let none: Option<&i32> = None;
    let pointer: *const i32 = &value;
    let null_pointer: *mut i32 = std::ptr::null_mut();

    assert!(null(&none).is_pass());
    assert!(not_null(&Some(&value)).is_pass());
    assert!(not_null(&pointer).is_pass());
    assert!(null(&null_pointer).is_pass());
    assert!(!null(&pointer).is_pass());
}

#[test]
fn test_near_within_epsilon() {
    assert!(near(3.00005, 3.0, DEFAULT_EPSILON).is_pass());
    assert!(near(1.0, 1.0 + MACHINE_EPSILON / 2.0, MACHINE_EPSILON).is_pass());
    assert!(!near(f64::NAN, 1.0, 1.0).is_pass());
}

#[test]
fn test_near_failure_message() {
    let verdict = near(3.01, 3.0, 0.0001);
    let message = verdict.message().unwrap();
    assert!(message.contains("3.01"));
    assert!(message.contains("0.0001"));
    assert!(message.contains("of 3"));
}

#[test]
fn test_throws_expected_error_type() {
    let verdict = throws::<ParseIntError>(|| {
        "seven".parse::<i32>()?;
        Ok(())
    });
    assert!(verdict.is_pass());
}

#[test]
fn test_throws_rejects_other_error_and_success() {
    let other = throws::<ParseIntError>(|| Err("not a parse error".into()));
    assert!(other.message().unwrap().contains("not a parse error"));

    let nothing = throws::<ParseIntError>(|| Ok(()));
    assert!(nothing.message().unwrap().contains("nothing was raised"));
}

#[test]
fn test_throws_accepts_typed_panic_payload() {
    let verdict = throws::<ParseIntError>(|| {
        let error = "x".parse::<u8>().unwrap_err();
        std::panic::panic_any(error)
    });
    assert!(verdict.is_pass());
}

#[test]
fn test_throws_any_and_nothing() {
    assert!(throws_any(|| Err("boom".into())).is_pass());
    assert!(throws_any(|| panic!("boom")).is_pass());
    assert!(!throws_any(|| Ok(())).is_pass());

    assert!(throws_nothing(|| Ok(())).is_pass());
    let panicked = throws_nothing(|| panic!("kaput"));
    assert!(panicked.message().unwrap().contains("panic: kaput"));
}
