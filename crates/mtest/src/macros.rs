//! Condition macros that capture the condition's source text.

/// Check that a condition holds; records a failure and continues if not.
///
/// Evaluates to `true` when the condition holds.
#[macro_export]
macro_rules! check {
    ($cond:expr $(,)?) => {
        $crate::check::is_true($cond, stringify!($cond))
    };
}

/// Check that a condition does not hold.
#[macro_export]
macro_rules! check_false {
    ($cond:expr $(,)?) => {
        $crate::check::is_false($cond, stringify!($cond))
    };
}

/// Assert that a condition holds, returning from the enclosing body if not.
///
/// The enclosing function must return a [`Flow`](crate::Flow).
#[macro_export]
macro_rules! assert_true {
    ($cond:expr $(,)?) => {
        $crate::assert::is_true($cond, stringify!($cond))?
    };
}

/// Assert that a condition does not hold.
#[macro_export]
macro_rules! assert_false {
    ($cond:expr $(,)?) => {
        $crate::assert::is_false($cond, stringify!($cond))?
    };
}

#[cfg(test)]
mod tests {
    use crate::active::{ActiveGuard, CaseRecord};
    use crate::outcome::{Flow, TestStatus};
    use mtest_log::{Log, MemorySink};

    fn body(ready: bool) -> Flow {
        check!(1 + 1 == 2);
        check_false!(ready);
        assert_false!(ready);
        assert_true!(ready);
        Ok(())
    }

    #[test]
    fn test_macros_capture_condition_text() {
        let sink = MemorySink::new();
        let guard = ActiveGuard::install(
            "Macros.Text",
            CaseRecord::default(),
            Log::with_sink(sink.clone()),
        );
        let flow = body(true);
        let record = guard.finish();

        assert!(flow.is_err());
        assert_eq!(record.status, TestStatus::Fail);
        assert_eq!(record.failed_checks.len(), 1);
        let contents = sink.contents();
        assert!(contents.contains("[Check] `ready` is true (macros.rs:"));
        assert!(contents.contains("[Assert] `ready` is true (macros.rs:"));
    }

    #[test]
    fn test_macros_pass_through() {
        let guard = ActiveGuard::install("Macros.Pass", CaseRecord::default(), Log::new());
        let flow = body_passing();
        let record = guard.finish();
        assert!(flow.is_ok());
        assert_eq!(record, CaseRecord::default());
    }

    fn body_passing() -> Flow {
        assert!(check!(true));
        assert!(check_false!(false));
        let ready = true;
        assert_true!(ready);
        Ok(())
    }
}
