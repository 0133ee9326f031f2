//! Table-driven tests.

use mtest::{assert, skip, Fixture, Flow, Manager, TableFixture};

pub struct Conversion {
    celsius: f64,
    fahrenheit: f64,
}

#[derive(Default)]
pub struct Temperatures;

impl Fixture for Temperatures {}

impl TableFixture for Temperatures {
    type Row = Conversion;

    fn skip_row(&mut self, row: &Conversion) -> bool {
        row.celsius < -273.15
    }

    fn generate_name(row: &Conversion, _index: usize) -> String {
        format!("{}C", row.celsius)
    }
}

fn to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

pub fn register(manager: &mut Manager) {
    let rows = vec![
        Conversion { celsius: 0.0, fahrenheit: 32.0 },
        Conversion { celsius: 100.0, fahrenheit: 212.0 },
        Conversion { celsius: -40.0, fahrenheit: -40.0 },
        Conversion { celsius: -300.0, fahrenheit: -508.0 },
    ];
    manager
        .section("Temperature")
        .table::<Temperatures, _>("ToFahrenheit", rows, |_, row| {
            assert::near(to_fahrenheit(row.celsius), row.fahrenheit, mtest::DEFAULT_EPSILON)
        })
        .test("Kelvin", || -> Flow {
            skip("kelvin conversion is not implemented")
        });
}
