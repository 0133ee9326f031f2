//! Fan-out log handle.

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::{Color, LogSink};

/// Shared handle over the attached sinks.
///
/// Cloning is cheap and every clone writes to the same sinks, which lets the
/// engine hand a copy to the test case that is currently executing. A `Log`
/// with no sinks silently discards output.
#[derive(Clone, Default)]
pub struct Log {
    sinks: Arc<Mutex<Vec<Box<dyn LogSink>>>>,
}

impl Log {
    /// Create a log with no sinks attached.
    pub fn new() -> Self {
        Log::default()
    }

    /// Create a log with a single sink attached.
    pub fn with_sink(sink: impl LogSink + 'static) -> Self {
        let log = Log::new();
        log.add_sink(sink);
        log
    }

    /// Attach another sink. It receives every later emission.
    pub fn add_sink(&self, sink: impl LogSink + 'static) {
        self.sinks.lock().push(Box::new(sink));
    }

    /// Detach every sink.
    pub fn clear_sinks(&self) {
        self.sinks.lock().clear();
    }

    pub fn sink_count(&self) -> usize {
        self.sinks.lock().len()
    }

    /// Select `color` on every sink.
    pub fn set_color(&self, color: Color) {
        for sink in self.sinks.lock().iter_mut() {
            sink.set_color(color);
        }
    }

    /// Write `text` to every sink.
    pub fn write(&self, text: &str) {
        for sink in self.sinks.lock().iter_mut() {
            sink.write(text);
        }
    }

    /// Write one colored line, then restore the default color.
    ///
    /// The whole line is written to one sink before moving to the next so
    /// lines never interleave across sinks.
    pub fn line(&self, color: Color, text: &str) {
        for sink in self.sinks.lock().iter_mut() {
            sink.set_color(color);
            sink.write(text);
            sink.set_color(Color::Default);
            sink.write("\n");
        }
    }

    /// Write an empty line.
    pub fn blank(&self) {
        self.write("\n");
    }

    pub fn flush(&self) {
        for sink in self.sinks.lock().iter_mut() {
            sink.flush();
        }
    }
}

impl fmt::Debug for Log {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Log")
            .field("sinks", &self.sink_count())
            .finish()
    }
}

#[cfg(test)]
mod tests;
