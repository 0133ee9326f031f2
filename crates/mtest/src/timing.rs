//! Elapsed-time rendering for the log protocol.

use std::time::Duration;

/// Threshold below which durations are shown in milliseconds.
const MILLIS_LIMIT: f64 = 100.0;

/// Duration in fractional milliseconds.
pub fn as_millis_f64(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}

/// `(X.XXXX ms)` below 100 ms, `(X.XXXX s)` otherwise.
pub fn format_elapsed(duration: Duration) -> String {
    let millis = as_millis_f64(duration);
    if millis < MILLIS_LIMIT {
        format!("({millis:.4} ms)")
    } else {
        format!("({:.4} s)", duration.as_secs_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_elapsed_millis() {
        assert_eq!(format_elapsed(Duration::ZERO), "(0.0000 ms)");
        assert_eq!(format_elapsed(Duration::from_micros(1500)), "(1.5000 ms)");
        assert_eq!(format_elapsed(Duration::from_micros(99_990)), "(99.9900 ms)");
    }

    #[test]
    fn test_format_elapsed_seconds() {
        assert_eq!(format_elapsed(Duration::from_millis(100)), "(0.1000 s)");
        assert_eq!(format_elapsed(Duration::from_millis(2345)), "(2.3450 s)");
    }

    #[test]
    fn test_as_millis() {
        assert!((as_millis_f64(Duration::from_micros(250)) - 0.25).abs() < 1e-9);
    }
}
