//! Line-oriented log output for the mtest engine.
//!
//! The engine never writes to a stream directly. It talks to a [`Log`], a
//! cheap cloneable handle that fans every emission out to the attached
//! [`LogSink`]s in attachment order:
//!
//! - [`ConsoleSink`]: standard output (or any writer) with optional ANSI color
//! - [`FileSink`]: plain text appended to a file
//! - [`MemorySink`]: in-memory capture, mostly for asserting on output in tests
//!
//! Color is advisory. A sink is free to ignore [`LogSink::set_color`].
//!
//! ```text
//! let log = Log::new();
//! log.add_sink(ConsoleSink::stdout(ColorMode::Auto, is_tty));
//! log.line(Color::Green, "[Success] Basic.Hello (0.0120 ms)");
//! ```

mod color;
mod config;
mod console;
mod file;
mod log;
mod memory;

pub use color::{Color, ColorMode, UnknownColorMode};
pub use config::LogConfig;
pub use console::ConsoleSink;
pub use file::FileSink;
pub use log::Log;
pub use memory::MemorySink;

/// Destination for engine output.
///
/// The two-method contract is all the engine relies on: it selects a color,
/// then writes text. Sinks must be `Send` so a [`Log`] can live in the
/// process-wide registry.
pub trait LogSink: Send {
    /// Select the color for subsequent writes.
    fn set_color(&mut self, color: Color);

    /// Write raw text. Line breaks are part of `text`.
    fn write(&mut self, text: &str);

    /// Flush any buffered output.
    fn flush(&mut self) {}
}
