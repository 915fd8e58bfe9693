//! Property-based tests for rust_line_logger using proptest

use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use rust_line_logger::prelude::*;
use rust_line_logger::MESSAGE_WIDTH;

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Trace),
        Just(LogLevel::Debug),
        Just(LogLevel::Info),
        Just(LogLevel::Warn),
        Just(LogLevel::Error),
        Just(LogLevel::Fatal),
    ]
}

fn capture(min_level: LogLevel) -> (ConsoleHandler, SharedBuffer) {
    let out = SharedBuffer::new();
    let handler = ConsoleHandler::with_options(
        HandlerOptions::new()
            .with_output(Sink::new(out.clone()))
            .with_min_level(min_level),
    );
    (handler, out)
}

fn render_one(value: Value) -> String {
    let (handler, out) = capture(LogLevel::Trace);
    handler
        .handle(&Record::new(LogLevel::Info, "m").with_attr("v", value))
        .unwrap();
    let line = out.to_string_lossy();
    let start = line.rfind(" v=").expect("value field") + 3;
    line[start..].trim_end_matches('\n').to_string()
}

// ============================================================================
// Level threshold
// ============================================================================

proptest! {
    /// Records below the minimum never produce output; others produce one line
    #[test]
    fn test_threshold(min in any_level(), level in any_level()) {
        let (handler, out) = capture(min);
        handler.handle(&Record::new(level, "threshold")).unwrap();

        let content = out.to_string_lossy();
        if level < min {
            prop_assert!(content.is_empty());
        } else {
            prop_assert_eq!(content.lines().count(), 1);
        }
    }

    /// Plain labels are always four characters and followed by the timestamp
    #[test]
    fn test_label_width(level in any_level()) {
        let (handler, out) = capture(LogLevel::Trace);
        handler.handle(&Record::new(level, "x")).unwrap();
        let content = out.to_string_lossy();
        prop_assert_eq!(content.find('['), Some(4));
    }
}

// ============================================================================
// Message padding
// ============================================================================

proptest! {
    /// Fields start at column 50 (in code points) or one space after a longer message
    #[test]
    fn test_padding_column(message in "[a-zA-Zа-яё日本 ]{0,80}") {
        let (handler, out) = capture(LogLevel::Trace);
        handler
            .handle(
                &Record::new(LogLevel::Info, message.as_str())
                    .with_time(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
                    .with_attr("k", 1),
            )
            .unwrap();

        let content = out.to_string_lossy();
        let prefix = "INFO[2024-01-01T00:00:00Z] ";
        prop_assert!(content.starts_with(prefix));

        let body = &content[prefix.len()..];
        let field_start = body.rfind("k=1").expect("field present");
        let before_field = body[..field_start].chars().count();

        let width = message.chars().count();
        if width < MESSAGE_WIDTH {
            prop_assert_eq!(before_field, MESSAGE_WIDTH);
        } else {
            prop_assert_eq!(before_field, width + 1);
        }
    }

    /// With escaping on, every record is exactly one line, whatever the message holds
    #[test]
    fn test_single_line(message in ".*", value in ".*") {
        let out = SharedBuffer::new();
        let handler = ConsoleHandler::with_options(
            HandlerOptions::new()
                .with_output(Sink::new(out.clone()))
                .with_min_level(LogLevel::Trace)
                .with_escaped_newlines(true),
        );
        handler
            .handle(&Record::new(LogLevel::Warn, message).with_attr("v", value))
            .unwrap();

        let content = out.to_string_lossy();
        prop_assert!(content.ends_with('\n'));
        prop_assert_eq!(content.matches('\n').count(), 1);
    }
}

// ============================================================================
// Value rendering
// ============================================================================

proptest! {
    /// Strings are quoted exactly when they contain a space or tab
    #[test]
    fn test_string_quoting(s in "[a-z \t/._-]{1,20}") {
        let rendered = render_one(Value::from(s.clone()));
        if s.contains(' ') || s.contains('\t') {
            prop_assert_eq!(rendered, format!("\"{}\"", s));
        } else {
            prop_assert_eq!(rendered, s);
        }
    }

    /// Integers render as plain decimal text
    #[test]
    fn test_integers(i in any::<i64>(), u in any::<u64>()) {
        prop_assert_eq!(render_one(Value::from(i)), i.to_string());
        prop_assert_eq!(render_one(Value::from(u)), u.to_string());
    }

    /// Finite floats round-trip and never use exponent notation
    #[test]
    fn test_floats_round_trip(f in any::<f64>().prop_filter("finite", |f| f.is_finite())) {
        let rendered = render_one(Value::from(f));
        prop_assert!(!rendered.contains('e') && !rendered.contains('E'));
        let parsed: f64 = rendered.parse().unwrap();
        prop_assert_eq!(parsed, f);
    }

    /// Booleans are single digits
    #[test]
    fn test_bools(b in any::<bool>()) {
        prop_assert_eq!(render_one(Value::from(b)), if b { "1" } else { "0" });
    }
}
