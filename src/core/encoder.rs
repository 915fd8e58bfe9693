//! Direct byte encoding of attribute values and message padding
//!
//! Common value kinds are written straight into the line buffer. Only
//! `Value::Any` goes through a [`Marshal`](super::value::Marshal)
//! implementation, and its failures degrade to [`UNSUPPORTED`].

use super::value::Value;
use std::fmt;
use std::time::Duration;

/// Written in place of a value whose fallback serializer failed
pub const UNSUPPORTED: &str = "<unsupported>";

/// Column the first field after the message is aligned to
pub const MESSAGE_WIDTH: usize = 50;

const SPACES: [u8; 64] = [b' '; 64];

/// Append one value to `buf`; `escape` rewrites line breaks in strings.
pub fn append_value(buf: &mut Vec<u8>, value: &Value, escape: bool) {
    match value {
        Value::Nil => buf.extend_from_slice(b"nil"),
        Value::Str(s) => append_str(buf, s, escape),
        Value::Int(i) => append_display(buf, i),
        Value::Uint(u) => append_display(buf, u),
        Value::Duration(d) => append_duration(buf, *d),
        Value::F64(f) => append_display(buf, f),
        Value::F32(f) => append_display(buf, &f64::from(*f)),
        Value::Error(e) => append_display(buf, e),
        Value::Bool(b) => buf.push(if *b { b'1' } else { b'0' }),
        Value::Any(m) => {
            let mark = buf.len();
            if m.marshal(buf).is_err() {
                buf.truncate(mark);
                buf.extend_from_slice(UNSUPPORTED.as_bytes());
            }
        }
    }
}

struct ByteWriter<'a>(&'a mut Vec<u8>);

impl fmt::Write for ByteWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0.extend_from_slice(s.as_bytes());
        Ok(())
    }
}

/// Append formatted text; whatever a failing `Display` impl wrote is rolled back.
pub(crate) fn append_fmt(buf: &mut Vec<u8>, args: fmt::Arguments<'_>) -> fmt::Result {
    let mark = buf.len();
    let result = fmt::write(&mut ByteWriter(buf), args);
    if result.is_err() {
        buf.truncate(mark);
    }
    result
}

/// Integers, floats and errors use their `Display` output. `Display` for
/// floats is the shortest round-trip form and never uses an exponent.
#[inline]
fn append_display<T: fmt::Display + ?Sized>(buf: &mut Vec<u8>, v: &T) {
    if append_fmt(buf, format_args!("{}", v)).is_err() {
        buf.extend_from_slice(UNSUPPORTED.as_bytes());
    }
}

/// Strings containing a space or tab are wrapped in double quotes.
fn append_str(buf: &mut Vec<u8>, s: &str, escape: bool) {
    if s.bytes().any(|b| b == b' ' || b == b'\t') {
        buf.push(b'"');
        append_text(buf, s, escape);
        buf.push(b'"');
    } else {
        append_text(buf, s, escape);
    }
}

/// Copy `s` as is, or through [`append_escaped`] when `escape` is set.
#[inline]
pub fn append_text(buf: &mut Vec<u8>, s: &str, escape: bool) {
    if escape {
        append_escaped(buf, s);
    } else {
        buf.extend_from_slice(s.as_bytes());
    }
}

/// Copy `s`, rewriting line breaks as `\n` / `\r` so a record stays on one line.
pub fn append_escaped(buf: &mut Vec<u8>, s: &str) {
    let bytes = s.as_bytes();
    let mut start = 0;
    for (i, &b) in bytes.iter().enumerate() {
        let escape: &[u8] = match b {
            b'\n' => b"\\n",
            b'\r' => b"\\r",
            _ => continue,
        };
        buf.extend_from_slice(&bytes[start..i]);
        buf.extend_from_slice(escape);
        start = i + 1;
    }
    buf.extend_from_slice(&bytes[start..]);
}

/// Number of code points `s` occupies once written, escaped or not.
pub fn display_width(s: &str, escape: bool) -> usize {
    if !escape {
        return s.chars().count();
    }
    s.chars()
        .map(|c| if c == '\n' || c == '\r' { 2 } else { 1 })
        .sum()
}

/// Pad after a message of `width` code points up to [`MESSAGE_WIDTH`];
/// a message at or past the column gets exactly one space.
pub fn pad_message(buf: &mut Vec<u8>, width: usize) {
    if width >= MESSAGE_WIDTH {
        buf.push(b' ');
        return;
    }
    let mut n = MESSAGE_WIDTH - width;
    while n > 0 {
        let chunk = n.min(SPACES.len());
        buf.extend_from_slice(&SPACES[..chunk]);
        n -= chunk;
    }
}

/// Canonical short duration text: `0s`, `750ns`, `320µs`, `1.5ms`, `2.25s`,
/// `1m30s`, `1h0m0s`.
pub fn append_duration(buf: &mut Vec<u8>, d: Duration) {
    let nanos = d.as_nanos();
    if nanos == 0 {
        buf.extend_from_slice(b"0s");
        return;
    }

    if nanos < 1_000_000_000 {
        let (scale, unit, digits): (u128, &str, usize) = if nanos < 1_000 {
            (1, "ns", 0)
        } else if nanos < 1_000_000 {
            (1_000, "µs", 3)
        } else {
            (1_000_000, "ms", 6)
        };
        append_display(buf, &(nanos / scale));
        append_fraction(buf, (nanos % scale) as u64, digits);
        buf.extend_from_slice(unit.as_bytes());
        return;
    }

    let secs = d.as_secs();
    let (hours, minutes, seconds) = (secs / 3600, (secs / 60) % 60, secs % 60);
    if hours > 0 {
        append_display(buf, &hours);
        buf.push(b'h');
    }
    if hours > 0 || minutes > 0 {
        append_display(buf, &minutes);
        buf.push(b'm');
    }
    append_display(buf, &seconds);
    append_fraction(buf, u64::from(d.subsec_nanos()), 9);
    buf.push(b's');
}

/// Write `.frac` zero-padded to `digits` with trailing zeros removed;
/// nothing when `frac` is zero.
fn append_fraction(buf: &mut Vec<u8>, frac: u64, digits: usize) {
    if frac == 0 || digits == 0 {
        return;
    }
    let mut text = [b'0'; 9];
    let mut rest = frac;
    for slot in text[..digits].iter_mut().rev() {
        *slot = b'0' + (rest % 10) as u8;
        rest /= 10;
    }
    let mut end = digits;
    while end > 0 && text[end - 1] == b'0' {
        end -= 1;
    }
    buf.push(b'.');
    buf.extend_from_slice(&text[..end]);
}
