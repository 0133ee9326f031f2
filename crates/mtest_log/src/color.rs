//! Output colors and color mode selection.

use std::str::FromStr;

use thiserror::Error;

/// Color requested for a run of text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Color {
    /// Terminal default; also used to reset after a colored line.
    #[default]
    Default,
    Red,
    Yellow,
    Green,
    Blue,
    Magenta,
}

impl Color {
    /// ANSI escape sequence selecting this color.
    pub fn ansi(self) -> &'static str {
        match self {
            Color::Default => "\x1b[0m",
            Color::Red => "\x1b[31m",
            Color::Yellow => "\x1b[33m",
            Color::Green => "\x1b[32m",
            Color::Blue => "\x1b[34m",
            Color::Magenta => "\x1b[35m",
        }
    }
}

/// When a console sink emits ANSI escapes. Selected with `MTEST_COLOR`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Color the run output only when stdout is a terminal.
    #[default]
    Auto,
    /// Color even when piped, e.g. for CI logs that render ANSI.
    Always,
    /// Plain text.
    Never,
}

impl ColorMode {
    /// Whether a sink writing to a stream with the given terminal status
    /// should color its lines. Only `Auto` looks at `is_tty`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Error returned when parsing an unknown color mode name.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown color mode `{0}` (expected auto, always or never)")]
pub struct UnknownColorMode(pub String);

impl FromStr for ColorMode {
    type Err = UnknownColorMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(ColorMode::Auto),
            "always" => Ok(ColorMode::Always),
            "never" => Ok(ColorMode::Never),
            _ => Err(UnknownColorMode(s.to_string())),
        }
    }
}
