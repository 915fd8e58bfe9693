//! Timestamp layouts
//!
//! Provides the time layouts a handler can render into the bracketed
//! timestamp column. Rendering appends straight into a byte buffer so the
//! hot path never builds an intermediate `String`.

use super::encoder::append_fmt;
use super::error::{LoggerError, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Standardized timestamp format options
///
/// # Examples
///
/// ```
/// use rust_line_logger::core::TimestampFormat;
/// use chrono::{TimeZone, Utc};
///
/// let time = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
/// assert_eq!(TimestampFormat::Rfc3339.format(&time), "2024-01-01T00:00:00Z");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// RFC 3339 at second precision: `2025-01-08T10:30:45Z`
    ///
    /// This is the default layout.
    #[default]
    Rfc3339,

    /// RFC 3339 with as many fractional digits as needed: `2025-01-08T10:30:45.123456Z`
    Rfc3339Nano,

    /// ISO 8601 with milliseconds: `2025-01-08T10:30:45.123Z`
    Iso8601,

    /// ISO 8601 with microseconds: `2025-01-08T10:30:45.123456Z`
    Iso8601Micros,

    /// Unix timestamp in seconds: `1736332245`
    Unix,

    /// Unix timestamp in milliseconds: `1736332245123`
    UnixMillis,

    /// Unix timestamp in microseconds: `1736332245123456`
    UnixMicros,

    /// Custom strftime format
    ///
    /// ```
    /// use rust_line_logger::core::TimestampFormat;
    ///
    /// let format = TimestampFormat::Custom("%Y-%m-%d %H:%M:%S%.3f %:z".to_string());
    /// assert!(format.validate().is_ok());
    /// ```
    Custom(String),
}

impl TimestampFormat {
    /// Append the rendering of `datetime` to `buf`.
    ///
    /// A custom layout with malformed specifiers appends nothing.
    pub fn append(&self, buf: &mut Vec<u8>, datetime: &DateTime<Utc>) {
        let _ = match self {
            TimestampFormat::Rfc3339 => {
                append_fmt(buf, format_args!("{}", datetime.format("%Y-%m-%dT%H:%M:%SZ")))
            }
            TimestampFormat::Rfc3339Nano => {
                append_fmt(buf, format_args!("{}", datetime.format("%Y-%m-%dT%H:%M:%S%.fZ")))
            }
            TimestampFormat::Iso8601 => {
                append_fmt(buf, format_args!("{}", datetime.format("%Y-%m-%dT%H:%M:%S%.3fZ")))
            }
            TimestampFormat::Iso8601Micros => {
                append_fmt(buf, format_args!("{}", datetime.format("%Y-%m-%dT%H:%M:%S%.6fZ")))
            }
            TimestampFormat::Unix => append_fmt(buf, format_args!("{}", datetime.timestamp())),
            TimestampFormat::UnixMillis => {
                append_fmt(buf, format_args!("{}", datetime.timestamp_millis()))
            }
            TimestampFormat::UnixMicros => {
                append_fmt(buf, format_args!("{}", datetime.timestamp_micros()))
            }
            TimestampFormat::Custom(format_str) => {
                append_fmt(buf, format_args!("{}", datetime.format(format_str)))
            }
        };
    }

    /// Format a `DateTime<Utc>` according to this format
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Utc>) -> String {
        let mut buf = Vec::with_capacity(32);
        self.append(&mut buf, datetime);
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// Reject custom layouts containing unknown or malformed specifiers.
    pub fn validate(&self) -> Result<()> {
        if let TimestampFormat::Custom(format_str) = self {
            if StrftimeItems::new(format_str).any(|item| matches!(item, Item::Error)) {
                return Err(LoggerError::config(
                    "TimestampFormat",
                    format!("invalid strftime layout '{}'", format_str),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_datetime() -> DateTime<Utc> {
        // 2025-01-08 10:30:45.123456 UTC
        Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
            .single()
            .expect("valid datetime")
            + chrono::Duration::microseconds(123456)
    }

    #[test]
    fn test_rfc3339_format() {
        let result = TimestampFormat::Rfc3339.format(&fixed_datetime());
        assert_eq!(result, "2025-01-08T10:30:45Z");
    }

    #[test]
    fn test_rfc3339_nano_format() {
        let result = TimestampFormat::Rfc3339Nano.format(&fixed_datetime());
        assert_eq!(result, "2025-01-08T10:30:45.123456Z");
    }

    #[test]
    fn test_iso8601_format() {
        let result = TimestampFormat::Iso8601.format(&fixed_datetime());
        assert_eq!(result, "2025-01-08T10:30:45.123Z");
    }

    #[test]
    fn test_iso8601_micros_format() {
        let result = TimestampFormat::Iso8601Micros.format(&fixed_datetime());
        assert_eq!(result, "2025-01-08T10:30:45.123456Z");
    }

    #[test]
    fn test_unix_formats() {
        let seconds: i64 = TimestampFormat::Unix
            .format(&fixed_datetime())
            .parse()
            .expect("valid unix timestamp");
        let millis: i64 = TimestampFormat::UnixMillis
            .format(&fixed_datetime())
            .parse()
            .expect("valid unix millis timestamp");
        let micros: i64 = TimestampFormat::UnixMicros
            .format(&fixed_datetime())
            .parse()
            .expect("valid unix micros timestamp");
        assert_eq!(seconds, 1736332245);
        assert_eq!(millis, 1736332245123);
        assert_eq!(micros, 1736332245123456);
    }

    #[test]
    fn test_custom_format() {
        let format = TimestampFormat::Custom("%Y/%m/%d %H:%M".to_string());
        assert_eq!(format.format(&fixed_datetime()), "2025/01/08 10:30");
    }

    #[test]
    fn test_append_keeps_existing_bytes() {
        let mut buf = b"[".to_vec();
        TimestampFormat::Unix.append(&mut buf, &fixed_datetime());
        assert_eq!(buf, b"[1736332245");
    }

    #[test]
    fn test_invalid_custom_layout_appends_nothing() {
        let mut buf = b"[".to_vec();
        TimestampFormat::Custom("%Y-%Q".to_string()).append(&mut buf, &fixed_datetime());
        assert_eq!(buf, b"[");
    }

    #[test]
    fn test_validate() {
        assert!(TimestampFormat::Rfc3339.validate().is_ok());
        assert!(TimestampFormat::Custom("%Y-%m-%d".to_string()).validate().is_ok());
        assert!(TimestampFormat::Custom("%Y-%Q".to_string()).validate().is_err());
    }

    #[test]
    fn test_default_is_rfc3339() {
        assert_eq!(TimestampFormat::default(), TimestampFormat::Rfc3339);
    }

    #[test]
    fn test_deserialization() {
        let format: TimestampFormat =
            serde_json::from_str("\"Iso8601\"").expect("deserialize Iso8601");
        assert_eq!(format, TimestampFormat::Iso8601);

        let format: TimestampFormat =
            serde_json::from_str(r#"{"Custom":"%Y-%m-%d"}"#).expect("deserialize Custom");
        assert_eq!(format, TimestampFormat::Custom("%Y-%m-%d".to_string()));
    }
}
