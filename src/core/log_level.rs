//! Log level definitions and their console presentation
//!
//! Labels are fixed four-character tokens so the timestamp column lines up
//! regardless of level. Only `Debug`, `Info`, `Warn` and `Error` carry their
//! own label and highlight color; any other level is presented like `Debug`
//! and gets no key highlighting.

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const RESET: &str = "\x1b[0m";
pub const RED: &str = "\x1b[91m";
pub const GREEN: &str = "\x1b[92m";
pub const YELLOW: &str = "\x1b[93m";
pub const BLUE: &str = "\x1b[96m";

/// Plain labels indexed by presentation slot (debug, info, warn, error)
const LABEL_PLAIN: [&str; 4] = ["DEBU", "INFO", "WARN", "ERRO"];

/// Color-wrapped labels, same slots as [`LABEL_PLAIN`]
const LABEL_COLOR: [&str; 4] = [
    "\x1b[92mDEBU\x1b[0m",
    "\x1b[96mINFO\x1b[0m",
    "\x1b[93mWARN\x1b[0m",
    "\x1b[91mERRO\x1b[0m",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    #[default]
    Info = 2,
    Warn = 3,
    Error = 4,
    Fatal = 5,
}

impl LogLevel {
    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Fatal => "FATAL",
        }
    }

    /// Slot in the label tables; levels without their own label fall back to debug.
    #[inline]
    const fn slot(self) -> usize {
        match self {
            LogLevel::Info => 1,
            LogLevel::Warn => 2,
            LogLevel::Error => 3,
            _ => 0,
        }
    }

    /// Fixed-width label, optionally wrapped in the level's ANSI color.
    #[inline]
    pub const fn label(self, color: bool) -> &'static str {
        if color {
            LABEL_COLOR[self.slot()]
        } else {
            LABEL_PLAIN[self.slot()]
        }
    }

    /// Escape sequence used to highlight attribute keys; empty when the
    /// level has no dedicated color.
    #[inline]
    pub const fn highlight(self) -> &'static str {
        match self {
            LogLevel::Debug => GREEN,
            LogLevel::Info => BLUE,
            LogLevel::Warn => YELLOW,
            LogLevel::Error => RED,
            _ => "",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "TRACE" => Ok(LogLevel::Trace),
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARN" | "WARNING" => Ok(LogLevel::Warn),
            "ERROR" => Ok(LogLevel::Error),
            "FATAL" => Ok(LogLevel::Fatal),
            _ => Err(LoggerError::level(s)),
        }
    }
}
