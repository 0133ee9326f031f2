#![allow(clippy::unwrap_used)]

use super::*;
use crate::assertion::check;
use crate::outcome::TestStatus;
use mtest_log::MemorySink;
use pretty_assertions::assert_eq;

fn manager() -> (Manager, MemorySink) {
    let sink = MemorySink::new();
    (Manager::new(Log::with_sink(sink.clone())), sink)
}

fn names(manager: &Manager) -> Vec<String> {
    manager
        .sections()
        .iter()
        .flat_map(Section::cases)
        .map(|case| case.full_name().to_string())
        .collect()
}

#[derive(Default)]
struct Squares;

impl Fixture for Squares {}

impl TableFixture for Squares {
    type Row = (i32, i32);

    fn generate_name(row: &(i32, i32), _index: usize) -> String {
        format!("{}^2", row.0)
    }
}

#[test]
fn test_registration_order_is_preserved() {
    let (mut manager, _) = manager();
    manager.section("Zeta").test("First", || Ok(()));
    manager.section("Alpha").test("Second", || Ok(()));
    manager.section("Zeta").test("Third", || Ok(()));

    assert_eq!(
        names(&manager),
        vec!["Zeta.First", "Zeta.Third", "Alpha.Second"]
    );
    assert_eq!(manager.len(), 3);
    assert_eq!(manager.sections()[0].name(), "Zeta");
    assert_eq!(manager.sections()[0].len(), 2);
}

#[test]
fn test_duplicate_is_rejected_and_logged() {
    let (mut manager, sink) = manager();
    manager.section("Basic").test("Hello", || Ok(()));
    let error = manager
        .add(
            "Basic",
            "Hello",
            SourceLocation::caller(),
            || NoFixture,
            |_: &mut NoFixture| Ok(()),
        )
        .unwrap_err();

    assert_eq!(
        error,
        RegistrationError::Duplicate {
            full_name: "Basic.Hello".to_string()
        }
    );
    assert_eq!(manager.len(), 1);
    assert_eq!(sink.lines(), vec!["[Error] test Basic.Hello already exists"]);
}

#[test]
fn test_duplicate_never_builds_its_fixture() {
    let (mut manager, _) = manager();
    manager.section("Basic").test("Hello", || Ok(()));
    let mut built = false;
    let _ = manager.add(
        "Basic",
        "Hello",
        SourceLocation::caller(),
        || {
            built = true;
            NoFixture
        },
        |_: &mut NoFixture| Ok(()),
    );
    assert!(!built);
}

#[test]
fn test_same_name_in_other_section_is_fine() {
    let (mut manager, _) = manager();
    manager.section("One").test("Hello", || Ok(()));
    manager.section("Two").test("Hello", || Ok(()));
    assert!(manager.contains("One", "Hello"));
    assert!(manager.contains("Two", "Hello"));
    assert!(!manager.contains("Three", "Hello"));
}

#[test]
fn test_table_expands_rows() {
    let (mut manager, _) = manager();
    manager
        .section("Math")
        .table::<Squares, _>("Square", [(2, 4), (3, 9), (4, 15)], |_, row| {
            crate::assertion::assert::eq(row.0 * row.0, row.1)
        });

    assert_eq!(
        names(&manager),
        vec!["Math.Square[2^2]", "Math.Square[3^2]", "Math.Square[4^2]"]
    );

    let report = manager.run_report(Vec::<String>::new()).unwrap();
    assert_eq!(report.successful.len(), 2);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].full_name, "Math.Square[4^2]");
}

#[test]
fn test_declaration_location_is_the_caller() {
    let (mut manager, _) = manager();
    let line = line!() + 1;
    manager.section("Where").test("Here", || Ok(()));

    let location = manager.sections()[0].cases()[0].location();
    assert_eq!(location.file_name(), "tests.rs");
    assert_eq!(location.line, line);
}

#[test]
fn test_run_drains_registry() {
    let (mut manager, _) = manager();
    manager.section("Basic").test("Hello", || Ok(()));
    assert!(manager.run(Vec::<String>::new()));
    assert!(manager.is_empty());

    let report = manager.run_report(Vec::<String>::new()).unwrap();
    assert_eq!(report.total, 0);
}

#[test]
fn test_config_error_drains_and_fails() {
    let (mut manager, sink) = manager();
    manager.section("Basic").test("Hello", || Ok(()));

    let error = manager.run_report(["--bogus"]).unwrap_err();
    assert!(matches!(error, RunError::Config(_)));
    assert!(manager.is_empty());
    assert!(sink.contents().starts_with("[Error] unrecognized argument `--bogus`"));
    assert!(!sink.contents().contains("[Start]"));
}

#[test]
fn test_take_moves_tests_and_shares_log() {
    let (mut manager, sink) = manager();
    manager.section("Basic").test("Hello", || Ok(()));

    let mut taken = manager.take();
    assert!(manager.is_empty());
    assert_eq!(taken.len(), 1);
    assert!(taken.run(Vec::<String>::new()));
    assert!(sink.contents().contains("[Success] Basic.Hello"));
}

#[test]
fn test_nested_run_is_rejected() {
    let (mut manager, sink) = manager();
    manager.section("Outer").test("Nests", || {
        let (mut inner, _) = self::manager();
        inner.section("Inner").test("Never", || Ok(()));
        let nested = inner.run_report(Vec::<String>::new());
        check::that(crate::Verdict::from_bool(
            matches!(nested, Err(RunError::Reentrant)),
            || "nested run was not rejected".to_string(),
        ));
        Ok(())
    });

    let report = manager.run_report(Vec::<String>::new()).unwrap();
    assert_eq!(report.successful.len(), 1);
    assert_eq!(
        report.case("Outer.Nests").map(|case| case.status),
        Some(TestStatus::Success)
    );
    assert!(!sink.contents().contains("Inner.Never"));
}

#[test]
fn test_section_banners() {
    let (mut manager, sink) = manager();
    manager
        .section("Pair")
        .test("One", || Ok(()))
        .test("Two", || Ok(()));
    manager.section("Single").test("Only", || Ok(()));
    let report = manager.run_report(Vec::<String>::new()).unwrap();

    let lines = sink.lines();
    assert!(lines.contains(&"[-------] 2 tests from Pair".to_string()));
    assert!(lines.contains(&"[-------] 1 test from Single".to_string()));
    assert!(lines
        .iter()
        .any(|line| line.starts_with("[-------] 2 tests from Pair (")));
    assert_eq!(
        report
            .sections
            .iter()
            .map(|section| (section.name.as_str(), section.count))
            .collect::<Vec<_>>(),
        vec![("Pair", 2), ("Single", 1)]
    );
}

/// Fixture noting, when dropped, whether the run summary was already written.
struct DropWitness {
    sink: MemorySink,
    seen: Arc<parking_lot::Mutex<Vec<bool>>>,
}

impl Fixture for DropWitness {}

impl Drop for DropWitness {
    fn drop(&mut self) {
        let reported = self.sink.contents().contains("[Manager] Finished");
        self.seen.lock().push(reported);
    }
}

#[test]
fn test_fixtures_released_after_summary() {
    let (mut manager, sink) = manager();
    let seen = Arc::new(parking_lot::Mutex::new(Vec::new()));
    for section in ["First", "Second"] {
        let witness = DropWitness {
            sink: sink.clone(),
            seen: Arc::clone(&seen),
        };
        manager
            .section(section)
            .test_with_factory("Holds", move || witness, |_| Ok(()));
    }

    assert!(manager.run(Vec::<String>::new()));
    assert_eq!(*seen.lock(), vec![true, true]);
}
