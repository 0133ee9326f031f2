#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;

#[test]
fn test_console_sink_no_color() {
    let mut sink = ConsoleSink::with_color_mode(Vec::new(), ColorMode::Never, true);
    assert!(!sink.uses_colors());

    sink.set_color(Color::Red);
    sink.write("[Failure] Basic.Hello\n");
    sink.set_color(Color::Default);

    let text = String::from_utf8(sink.into_inner()).unwrap();
    assert_eq!(text, "[Failure] Basic.Hello\n");
}

#[test]
fn test_console_sink_with_color() {
    let mut sink = ConsoleSink::with_color_mode(Vec::new(), ColorMode::Always, false);

    sink.set_color(Color::Green);
    sink.write("ok");
    sink.set_color(Color::Default);

    let text = String::from_utf8(sink.into_inner()).unwrap();
    assert_eq!(text, "\x1b[32mok\x1b[0m");
}

#[test]
fn test_console_sink_skips_redundant_color_changes() {
    let mut sink = ConsoleSink::with_color_mode(Vec::new(), ColorMode::Always, true);

    // Default is the starting color, so nothing is emitted for it.
    sink.set_color(Color::Default);
    sink.set_color(Color::Blue);
    sink.set_color(Color::Blue);
    sink.write("x");

    let text = String::from_utf8(sink.into_inner()).unwrap();
    assert_eq!(text, "\x1b[34mx");
}
