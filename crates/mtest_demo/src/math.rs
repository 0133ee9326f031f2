//! Tests sharing a fixture.

use mtest::{assert, Fixture, Flow, Manager};

#[derive(Default)]
pub struct MathOperations {
    my_field: i32,
}

impl Fixture for MathOperations {
    fn setup(&mut self) -> Flow {
        mtest::info("Setup user data");
        self.my_field = 6;
        Ok(())
    }

    fn cleanup(&mut self) -> Flow {
        mtest::info("Cleanup user data");
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("division by zero")]
struct DivisionByZero;

fn divide(numerator: i32, denominator: i32) -> Result<i32, DivisionByZero> {
    if denominator == 0 {
        return Err(DivisionByZero);
    }
    Ok(numerator / denominator)
}

pub fn register(manager: &mut Manager) {
    manager
        .section("MathOperations")
        .test_with("CheckSomething", |fixture: &mut MathOperations| {
            assert::eq(fixture.my_field, 6)?;
            let missing: Option<&i32> = None;
            mtest::info("Checking for null");
            assert::null(&missing)
        })
        .test_with("CheckSomething2", |fixture: &mut MathOperations| {
            let b = 3;
            assert::eq(fixture.my_field, 6)?;
            let tmp = Some(&b);
            assert::not_null(&tmp)?;
            assert::ne(fixture.my_field, b)
        })
        .test_with("Divide", |fixture: &mut MathOperations| {
            assert::throws::<DivisionByZero>(|| {
                divide(fixture.my_field, 0)?;
                Ok(())
            })?;
            let half = divide(fixture.my_field, 2)?;
            tracing::debug!(half, "divided fixture value");
            assert::near(half, 3.0, mtest::DEFAULT_EPSILON)
        });
}
