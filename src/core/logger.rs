//! Thin logging frontend over a [`LogHandler`]

use super::{handler::LogHandler, log_level::LogLevel, record::Record, value::Attr};
use std::io::{self, Write};
use std::sync::Arc;

/// Cheap-to-clone logger handle
///
/// # Example
///
/// ```
/// use rust_line_logger::{Attr, ConsoleHandler, HandlerOptions, Logger, SharedBuffer, Sink};
///
/// let out = SharedBuffer::new();
/// let handler = ConsoleHandler::with_options(
///     HandlerOptions::new().with_output(Sink::new(out.clone())),
/// );
/// let logger = Logger::new(handler).with(vec![Attr::new("service", "billing")]);
///
/// logger.info("started");
/// assert!(out.to_string_lossy().ends_with("service=billing\n"));
/// ```
#[derive(Clone)]
pub struct Logger {
    handler: Arc<dyn LogHandler>,
}

impl Logger {
    pub fn new<H: LogHandler + 'static>(handler: H) -> Self {
        Self {
            handler: Arc::new(handler),
        }
    }

    pub fn from_handler(handler: Arc<dyn LogHandler>) -> Self {
        Self { handler }
    }

    pub fn handler(&self) -> &Arc<dyn LogHandler> {
        &self.handler
    }

    #[inline]
    pub fn enabled(&self, level: LogLevel) -> bool {
        self.handler.enabled(level)
    }

    /// Logger whose lines also carry `attrs`
    #[must_use]
    pub fn with(&self, attrs: Vec<Attr>) -> Self {
        Self {
            handler: self.handler.with_attrs(attrs),
        }
    }

    /// Logger whose lines are scoped under `name`
    #[must_use]
    pub fn with_group(&self, name: &str) -> Self {
        Self {
            handler: self.handler.with_group(name),
        }
    }

    pub fn log(&self, level: LogLevel, message: impl Into<String>) {
        self.log_with(level, message, Vec::new());
    }

    /// Log with record-level attributes. The record is only built when the
    /// level is enabled.
    pub fn log_with(&self, level: LogLevel, message: impl Into<String>, attrs: Vec<Attr>) {
        if !self.enabled(level) {
            return;
        }
        let record = Record::new(level, message).with_attrs(attrs);
        if let Err(e) = self.handler.handle(&record) {
            let _ = writeln!(io::stderr().lock(), "[LOGGER ERROR] Handler failed: {}", e);
        }
    }

    pub fn trace(&self, message: impl Into<String>) {
        self.log(LogLevel::Trace, message);
    }

    pub fn debug(&self, message: impl Into<String>) {
        self.log(LogLevel::Debug, message);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    pub fn warn(&self, message: impl Into<String>) {
        self.log(LogLevel::Warn, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.log(LogLevel::Error, message);
    }

    pub fn fatal(&self, message: impl Into<String>) {
        self.log(LogLevel::Fatal, message);
    }
}

impl Default for Logger {
    /// Logger writing to stdout through a default [`ConsoleHandler`](crate::ConsoleHandler)
    fn default() -> Self {
        Self::new(crate::handlers::ConsoleHandler::new())
    }
}
