use super::*;
use crate::MemorySink;
use pretty_assertions::assert_eq;

#[test]
fn test_log_without_sinks_discards() {
    let log = Log::new();
    assert_eq!(log.sink_count(), 0);
    log.line(Color::Red, "nobody listens");
    log.flush();
}

#[test]
fn test_log_fans_out_to_every_sink() {
    let first = MemorySink::new();
    let second = MemorySink::new();
    let log = Log::with_sink(first.clone());
    log.add_sink(second.clone());

    log.line(Color::Green, "[Success] Basic.Hello (0.0100 ms)");

    assert_eq!(log.sink_count(), 2);
    assert_eq!(first.contents(), "[Success] Basic.Hello (0.0100 ms)\n");
    assert_eq!(second.contents(), first.contents());
}

#[test]
fn test_log_line_restores_default_color() {
    let sink = MemorySink::new();
    let log = Log::with_sink(sink.clone());

    log.line(Color::Magenta, "[Skipped] Basic.Other");

    assert_eq!(sink.colors(), vec![Color::Magenta, Color::Default]);
}

#[test]
fn test_log_clones_share_sinks() {
    let sink = MemorySink::new();
    let log = Log::new();
    let handle = log.clone();
    handle.add_sink(sink.clone());

    log.write("a");
    handle.write("b");
    log.blank();

    assert_eq!(sink.contents(), "ab\n");
    log.clear_sinks();
    assert_eq!(handle.sink_count(), 0);
}
