//! In-memory capture sink.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::{Color, LogSink};

/// Sink that records everything written to it.
///
/// Clones share the same buffer, so a test can keep one clone and hand the
/// other to a [`Log`](crate::Log).
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    buffer: Arc<Mutex<String>>,
    colors: Arc<Mutex<Vec<Color>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        MemorySink::default()
    }

    /// Everything written so far.
    pub fn contents(&self) -> String {
        self.buffer.lock().clone()
    }

    /// Written text split into lines.
    pub fn lines(&self) -> Vec<String> {
        self.buffer.lock().lines().map(str::to_string).collect()
    }

    /// Every color selected so far, in order.
    pub fn colors(&self) -> Vec<Color> {
        self.colors.lock().clone()
    }

    /// Drop everything captured so far.
    pub fn clear(&self) {
        self.buffer.lock().clear();
        self.colors.lock().clear();
    }
}

impl LogSink for MemorySink {
    fn set_color(&mut self, color: Color) {
        self.colors.lock().push(color);
    }

    fn write(&mut self, text: &str) {
        self.buffer.lock().push_str(text);
    }
}
