//! Console sink with optional ANSI color support.

use std::io::{self, Write};

use crate::{Color, ColorMode, LogSink};

/// Sink writing to a terminal-like stream.
///
/// Colors are rendered as ANSI escape sequences when enabled; otherwise
/// [`LogSink::set_color`] is a no-op. Write errors are ignored, the same way
/// a lost console line never aborts a test run.
pub struct ConsoleSink<W: Write> {
    writer: W,
    colors: bool,
    current: Color,
}

impl<W: Write> ConsoleSink<W> {
    /// Wrap `writer`. Colors are enabled when `mode` allows them for a
    /// stream whose terminal status is `is_tty`.
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        ConsoleSink {
            writer,
            colors: mode.should_use_colors(is_tty),
            current: Color::Default,
        }
    }

    /// Whether this sink emits escape sequences.
    pub fn uses_colors(&self) -> bool {
        self.colors
    }

    /// Consume the sink and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl ConsoleSink<io::Stdout> {
    /// Create a console sink for stdout.
    pub fn stdout(mode: ColorMode, is_tty: bool) -> Self {
        ConsoleSink::with_color_mode(io::stdout(), mode, is_tty)
    }
}

impl<W: Write + Send> LogSink for ConsoleSink<W> {
    fn set_color(&mut self, color: Color) {
        if !self.colors || color == self.current {
            return;
        }
        self.current = color;
        let _ = self.writer.write_all(color.ansi().as_bytes());
    }

    fn write(&mut self, text: &str) {
        let _ = self.writer.write_all(text.as_bytes());
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}

#[cfg(test)]
mod tests;
