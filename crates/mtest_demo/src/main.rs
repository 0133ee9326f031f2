//! Example suite for the mtest engine.
//!
//! Run with `mtest-demo [-F=<pattern>]`. Several tests fail on purpose to
//! show the failure output, so the process exits with 1.

mod basic;
mod math;
mod table;

use std::process::ExitCode;

fn main() -> ExitCode {
    mtest::init_tracing();
    mtest::register(|manager| {
        basic::register(manager);
        math::register(manager);
        table::register(manager);
    });

    if mtest::run_main() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
