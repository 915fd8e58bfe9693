//! Handler configuration
//!
//! [`HandlerOptions`] is the builder used in code. [`HandlerConfig`] is its
//! serializable subset for settings that come from a file or environment;
//! the output sink is always chosen in code.

use super::error::Result;
use super::log_level::LogLevel;
use super::pool::BufferPool;
use super::timestamp::TimestampFormat;
use crate::handlers::Sink;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Options for building a [`ConsoleHandler`](crate::ConsoleHandler)
///
/// # Examples
///
/// ```
/// use rust_line_logger::{HandlerOptions, LogLevel, TimestampFormat};
///
/// let options = HandlerOptions::new()
///     .with_min_level(LogLevel::Debug)
///     .with_time_format(TimestampFormat::Iso8601)
///     .with_colors(true);
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct HandlerOptions {
    pub time_format: TimestampFormat,
    pub output: Sink,
    pub min_level: LogLevel,
    pub color: bool,
    /// Write `\n` / `\r` in text as two-character escapes
    pub escape_newlines: bool,
    pub pool: Option<Arc<BufferPool>>,
}

impl Default for HandlerOptions {
    fn default() -> Self {
        Self {
            time_format: TimestampFormat::Rfc3339,
            output: Sink::stdout(),
            min_level: LogLevel::Info,
            color: false,
            escape_newlines: false,
            pool: None,
        }
    }
}

impl HandlerOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_time_format(mut self, format: TimestampFormat) -> Self {
        self.time_format = format;
        self
    }

    /// Use a strftime-compatible layout for the timestamp column
    #[must_use]
    pub fn with_custom_time_format(mut self, format_str: &str) -> Self {
        self.time_format = TimestampFormat::Custom(format_str.to_string());
        self
    }

    #[must_use]
    pub fn with_output(mut self, output: Sink) -> Self {
        self.output = output;
        self
    }

    #[must_use]
    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    #[must_use]
    pub fn with_colors(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Enable colors when the environment supports them (honours
    /// `NO_COLOR`, `CLICOLOR` and `CLICOLOR_FORCE`).
    #[cfg(feature = "console")]
    #[must_use]
    pub fn with_auto_colors(mut self) -> Self {
        self.color = colored::control::SHOULD_COLORIZE.should_colorize();
        self
    }

    /// Keep every record on one line by escaping line breaks in messages,
    /// keys, group names and string values.
    #[must_use]
    pub fn with_escaped_newlines(mut self, escape: bool) -> Self {
        self.escape_newlines = escape;
        self
    }

    /// Share a buffer pool with other handlers instead of owning one
    #[must_use]
    pub fn with_pool(mut self, pool: Arc<BufferPool>) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn validate(&self) -> Result<()> {
        self.time_format.validate()
    }
}

/// Serializable handler settings
///
/// Missing fields take the handler defaults.
///
/// ```
/// use rust_line_logger::{HandlerConfig, LogLevel};
///
/// let config = HandlerConfig::from_json(r#"{"min_level":"Debug","color":true}"#).unwrap();
/// assert_eq!(config.min_level, LogLevel::Debug);
/// assert!(config.color);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HandlerConfig {
    pub time_format: TimestampFormat,
    pub min_level: LogLevel,
    pub color: bool,
    pub escape_newlines: bool,
}

impl HandlerConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: HandlerConfig = serde_json::from_str(json)?;
        config.time_format.validate()?;
        Ok(config)
    }

    /// Options writing to `output`
    #[must_use]
    pub fn into_options(self, output: Sink) -> HandlerOptions {
        HandlerOptions {
            time_format: self.time_format,
            output,
            min_level: self.min_level,
            color: self.color,
            escape_newlines: self.escape_newlines,
            pool: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LoggerError;

    #[test]
    fn test_defaults() {
        let options = HandlerOptions::default();
        assert_eq!(options.time_format, TimestampFormat::Rfc3339);
        assert_eq!(options.min_level, LogLevel::Info);
        assert!(!options.color);
        assert!(!options.escape_newlines);
        assert!(options.pool.is_none());
    }

    #[test]
    fn test_builder_pattern() {
        let pool = Arc::new(BufferPool::new());
        let options = HandlerOptions::new()
            .with_custom_time_format("%H:%M:%S")
            .with_min_level(LogLevel::Warn)
            .with_colors(true)
            .with_escaped_newlines(true)
            .with_pool(Arc::clone(&pool));

        assert_eq!(
            options.time_format,
            TimestampFormat::Custom("%H:%M:%S".to_string())
        );
        assert_eq!(options.min_level, LogLevel::Warn);
        assert!(options.color);
        assert!(options.escape_newlines);
        assert!(Arc::ptr_eq(options.pool.as_ref().unwrap(), &pool));
    }

    #[test]
    fn test_validate_rejects_bad_layout() {
        let options = HandlerOptions::new().with_custom_time_format("%Y-%Q");
        assert!(matches!(
            options.validate(),
            Err(LoggerError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_config_defaults_for_missing_fields() {
        let config = HandlerConfig::from_json("{}").unwrap();
        assert_eq!(config, HandlerConfig::default());
        assert_eq!(config.min_level, LogLevel::Info);
        assert_eq!(config.time_format, TimestampFormat::Rfc3339);
    }

    #[test]
    fn test_config_escape_newlines() {
        let config = HandlerConfig::from_json(r#"{"escape_newlines":true}"#).unwrap();
        assert!(config.escape_newlines);
        assert!(!HandlerConfig::default().escape_newlines);
    }

    #[test]
    fn test_config_parse_errors() {
        assert!(matches!(
            HandlerConfig::from_json("{not json"),
            Err(LoggerError::JsonError(_))
        ));
        assert!(matches!(
            HandlerConfig::from_json(r#"{"time_format":{"Custom":"%Q"}}"#),
            Err(LoggerError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_config_into_options() {
        let config = HandlerConfig {
            time_format: TimestampFormat::Unix,
            min_level: LogLevel::Error,
            color: true,
            escape_newlines: true,
        };
        let sink = Sink::new(crate::handlers::SharedBuffer::new());
        let options = config.into_options(sink.clone());
        assert_eq!(options.time_format, TimestampFormat::Unix);
        assert_eq!(options.min_level, LogLevel::Error);
        assert!(options.color);
        assert!(options.escape_newlines);
        assert!(options.output.same_as(&sink));
    }
}
