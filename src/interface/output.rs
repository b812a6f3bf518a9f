use std::fmt;
use std::io::Write;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Info,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Error => write!(f, "ERROR"),
            LogLevel::Info => write!(f, "INFO"),
        }
    }
}

/// Severity-tagged console sink.
///
/// Progress lines go to stdout unadorned; errors go to stderr and are
/// highlighted red when the stream supports color. Color is purely a
/// presentation concern of this sink, callers only pick a severity.
#[derive(Debug, Clone)]
pub struct Logger {
    color: ColorChoice,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            color: ColorChoice::Auto,
        }
    }

    /// Used by tests and non-tty callers to pin the color behavior.
    pub fn with_color_choice(color: ColorChoice) -> Self {
        Self { color }
    }

    pub fn log(&self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Info => self.info(message),
            LogLevel::Error => self.error(message),
        }
    }

    pub fn info(&self, message: &str) {
        println!("{}", message);
    }

    pub fn error(&self, message: &str) {
        let mut stderr = StandardStream::stderr(self.color);
        let _ = stderr.set_color(ColorSpec::new().set_fg(Some(Color::Red)));
        let _ = writeln!(stderr, "{}", message);
        let _ = stderr.reset();
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}
