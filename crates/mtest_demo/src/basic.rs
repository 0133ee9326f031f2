//! Plain tests without a fixture.

use mtest::{assert_false, assert_true, check, check_false, Manager};

pub fn register(manager: &mut Manager) {
    manager
        .section("Basic")
        .test("Hello", || {
            mtest::info("Hello World");
            let a = 7;
            check!(a == 7);
            let b = 3;
            assert_true!(a + b == 10);
            Ok(())
        })
        .test("HelloFail", || {
            let a = 7;
            let b = 3;
            assert_false!(a + b == 10);
            Ok(())
        });

    manager.section("Other").test("MathFail", || {
        let a = 7;
        check!(a == 7);
        let b = 3;
        check_false!(b == 3);
        assert_true!(a + b == 10);
        Ok(())
    });
}
