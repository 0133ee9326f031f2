#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use std::num::ParseIntError;

#[test]
fn test_status_predicates() {
    assert!(TestStatus::default().is_success());
    assert!(TestStatus::Fail.is_failed());
    assert!(TestStatus::Skip.is_skipped());
    assert!(!TestStatus::Skip.is_failed());
    assert_eq!(TestStatus::Fail.tag(), "[Failure]");
    assert_eq!(TestStatus::Skip.tag(), "[Skipped]");
}

#[test]
fn test_question_mark_converts_errors() {
    fn body() -> Flow {
        let _: i32 = "seven".parse()?;
        Ok(())
    }

    let interrupt = body().unwrap_err();
    assert!(interrupt.is_error());
    let message = interrupt.into_unhandled().unwrap();
    assert!(message.contains("invalid digit"));
}

#[test]
fn test_engine_signals_are_not_unhandled() {
    assert!(Interrupt::assertion().is_assertion());
    assert!(Interrupt::skip().is_skip());
    assert_eq!(Interrupt::assertion().into_unhandled(), None);
    assert_eq!(Interrupt::skip().into_unhandled(), None);
}

#[test]
fn test_raise_from_message() {
    let interrupt = Interrupt::raise("database is gone");
    assert_eq!(
        interrupt.into_unhandled(),
        Some("database is gone".to_string())
    );
    assert_eq!(
        Interrupt::raise(String::new()).into_unhandled(),
        Some(UNKNOWN_EXCEPTION.to_string())
    );
}

#[test]
fn test_panic_message_payloads() {
    let literal: Box<dyn Any + Send> = Box::new("static message");
    let owned: Box<dyn Any + Send> = Box::new(String::from("owned message"));
    let other: Box<dyn Any + Send> = Box::new(42_u8);

    assert_eq!(panic_message(&*literal), Some("static message"));
    assert_eq!(panic_message(&*owned), Some("owned message"));
    assert_eq!(panic_message(&*other), None);
}

#[test]
fn test_error_message_of_typed_error() {
    let error: ParseIntError = "x".parse::<i32>().unwrap_err();
    assert_eq!(error_message(&error), error.to_string());
}
