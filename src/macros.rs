//! Logging macros for ergonomic log message formatting.
//!
//! Messages accept `format!`-style arguments, or a single message followed
//! by `;` and `key => value` attribute pairs. Nothing after the logger is
//! evaluated when the level is disabled.
//!
//! # Examples
//!
//! ```
//! use rust_line_logger::prelude::*;
//! use rust_line_logger::{info, warn};
//! use std::time::Duration;
//!
//! let logger = Logger::default();
//!
//! // Basic logging
//! info!(logger, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//!
//! // With attributes
//! warn!(logger, "slow request"; "path" => "/api/v1", "elapsed" => Duration::from_millis(750));
//! ```

/// Log a message at an explicit level.
///
/// # Examples
///
/// ```
/// # use rust_line_logger::prelude::*;
/// # let logger = Logger::default();
/// use rust_line_logger::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// log!(logger, LogLevel::Warn, "retrying"; "attempt" => 2, "max" => 5);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $msg:expr; $($key:expr => $value:expr),+ $(,)?) => {{
        let logger = &$logger;
        let level = $level;
        if logger.enabled(level) {
            logger.log_with(
                level,
                $msg,
                ::std::vec![$($crate::Attr::new($key, $value)),+],
            );
        }
    }};
    ($logger:expr, $level:expr, $($arg:tt)+) => {{
        let logger = &$logger;
        let level = $level;
        if logger.enabled(level) {
            logger.log(level, ::std::format!($($arg)+));
        }
    }};
}

/// Log a trace-level message.
///
/// ```
/// # use rust_line_logger::prelude::*;
/// # let logger = Logger::default();
/// use rust_line_logger::trace;
/// trace!(logger, "Entering function: calculate()");
/// ```
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Trace, $($arg)+)
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
///
/// ```
/// # use rust_line_logger::prelude::*;
/// # let logger = Logger::default();
/// use rust_line_logger::info;
/// info!(logger, "gRPC call succeeded"; "method" => "/a/b", "status" => 0);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
///
/// ```
/// # use rust_line_logger::prelude::*;
/// # let logger = Logger::default();
/// use rust_line_logger::error;
/// let err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
/// error!(logger, "open failed"; "err" => Value::error(err));
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a fatal-level message.
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Fatal, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use std::cell::Cell;

    fn capture(min_level: LogLevel) -> (Logger, SharedBuffer) {
        let out = SharedBuffer::new();
        let handler = ConsoleHandler::with_options(
            HandlerOptions::new()
                .with_output(Sink::new(out.clone()))
                .with_min_level(min_level),
        );
        (Logger::new(handler), out)
    }

    #[test]
    fn test_format_args() {
        let (logger, out) = capture(LogLevel::Info);
        crate::info!(logger, "listening on {}", 8080);
        assert!(out.to_string_lossy().contains("listening on 8080"));
    }

    #[test]
    fn test_attribute_pairs() {
        let (logger, out) = capture(LogLevel::Info);
        crate::warn!(logger, "slow"; "path" => "/x", "ok" => true);
        assert!(out.to_string_lossy().ends_with("path=/x ok=1\n"));
    }

    #[test]
    fn test_disabled_level_skips_evaluation() {
        let (logger, out) = capture(LogLevel::Warn);
        let evaluated = Cell::new(false);
        let expensive = || {
            evaluated.set(true);
            42
        };

        crate::debug!(logger, "hidden"; "v" => expensive());
        crate::info!(logger, "hidden {}", expensive());

        assert!(!evaluated.get());
        assert!(out.contents().is_empty());
    }
}
