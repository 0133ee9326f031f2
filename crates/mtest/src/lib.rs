//! mtest: a small single-process unit-test engine.
//!
//! Tests are registered into named sections of a [`Manager`], each bound to
//! a [`Fixture`] with skip/setup/cleanup hooks. A run executes them one at a
//! time and buckets every test as successful, failed or skipped.
//!
//! Inside a test body there are two failure severities:
//!
//! - [`check`] primitives record the failure and keep going.
//! - [`assert`] primitives record the failure and end the body. They return
//!   a [`Flow`] the body propagates with `?`.
//!
//! ```text
//! mtest::register(|manager| {
//!     manager.section("Basic").test("Hello", || {
//!         check!(1 + 1 == 2);
//!         mtest::assert::eq(2 * 2, 4)?;
//!         Ok(())
//!     });
//! });
//! let ok = mtest::run_main();
//! ```
//!
//! # Tracing
//!
//! Engine internals emit `tracing` events. Call [`init_tracing`] and set
//! `RUST_LOG` (for example `RUST_LOG=mtest=debug`) to see them on stderr.
//! With `MTEST_TRACE_TREE` also set, spans are rendered as a tree.

mod active;
mod assertion;
mod check_info;
mod config;
mod error;
mod fixture;
mod macros;
mod manager;
mod outcome;
mod report;
mod test_case;
mod timing;

use std::io::IsTerminal;
use std::sync::{LazyLock, Once};

use mtest_log::{ConsoleSink, Log, LogConfig};
use parking_lot::{Mutex, MutexGuard};

pub use active::{active_test, is_running};
pub use assertion::compare::{Attempt, Nullable};
pub use assertion::{
    assert, check, compare, expect, expect_at, handle_failure, info, skip, Verdict,
    DEFAULT_EPSILON, MACHINE_EPSILON,
};
pub use check_info::{file_name, CheckInfo, Severity, SourceLocation};
pub use config::RunConfig;
pub use error::{ConfigError, RegistrationError, RunError};
pub use fixture::{Bound, Fixture, NoFixture, TableFixture};
pub use manager::{Manager, Section, SectionRegistrar};
pub use outcome::{BoxError, Flow, Interrupt, TestStatus, UNKNOWN_EXCEPTION};
pub use report::{RunReport, SectionReport};
pub use test_case::{CaseReport, TestCase, SKIPPED_BY_FILTER, SKIPPED_BY_FIXTURE};
pub use timing::format_elapsed;

/// Environment variable switching tracing output to a span tree.
pub const TRACE_TREE_ENV: &str = "MTEST_TRACE_TREE";

static TRACING_INIT: Once = Once::new();

/// Install a tracing subscriber for engine diagnostics.
///
/// Does nothing unless `RUST_LOG` is set. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let filter = EnvFilter::from_default_env();
        // Another subscriber may already be installed by the host binary.
        let _ = if std::env::var_os(TRACE_TREE_ENV).is_some() {
            tracing_subscriber::registry()
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .try_init()
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .try_init()
        };
    });
}

static GLOBAL: LazyLock<Mutex<Manager>> =
    LazyLock::new(|| Mutex::new(Manager::new(default_log())));

/// Console log configured from `MTEST_COLOR` and `MTEST_LOG_FILE`.
///
/// Falls back to a plain console when the log file cannot be opened.
pub fn default_log() -> Log {
    let is_tty = std::io::stdout().is_terminal();
    let config = LogConfig::from_env();
    match config.build(is_tty) {
        Ok(log) => log,
        Err(error) => {
            tracing::warn!(%error, file = ?config.file, "cannot open log file, using console only");
            Log::with_sink(ConsoleSink::stdout(config.color, is_tty))
        }
    }
}

/// The process-wide registry.
///
/// Do not hold the guard across a run: the runner never needs the global.
pub fn global() -> MutexGuard<'static, Manager> {
    GLOBAL.lock()
}

/// Register tests into the process-wide registry.
pub fn register(f: impl FnOnce(&mut Manager)) {
    f(&mut global());
}

/// Run the process-wide registry with the process arguments.
///
/// Returns `true` when no test failed.
pub fn run_main() -> bool {
    run_global(std::env::args().skip(1))
}

/// Run the process-wide registry with explicit arguments.
pub fn run_global<I, S>(args: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut manager = global().take();
    manager.run(args)
}

