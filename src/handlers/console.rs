//! Console handler implementation
//!
//! Renders each record as one line:
//!
//! ```text
//! <LEVEL>[<timestamp>] <message><padding to column 50>[<group.path>] <k1>=<v1> <k2>=<v2>
//! ```
//!
//! A handler is an immutable snapshot. [`ConsoleHandler::with_attrs`] and
//! [`ConsoleHandler::with_group`] build new snapshots that share the sink,
//! configuration, pool and metrics of their parent.

use super::sink::Sink;
use crate::core::encoder::{append_text, append_value, display_width, pad_message};
use crate::core::log_level::RESET;
use crate::core::{
    Attr, BufferPool, HandlerMetrics, HandlerOptions, LogHandler, LogLevel, Record, Result,
    TimestampFormat,
};
use std::io::{self, Write};
use std::sync::Arc;

/// State shared unchanged by every handler in a derivation chain
struct Shared {
    sink: Sink,
    time_format: TimestampFormat,
    min_level: LogLevel,
    color: bool,
    escape_newlines: bool,
    pool: Arc<BufferPool>,
    metrics: Arc<HandlerMetrics>,
}

#[derive(Clone)]
pub struct ConsoleHandler {
    shared: Arc<Shared>,
    attrs: Arc<[Attr]>,
    groups: Arc<[Arc<str>]>,
}

impl ConsoleHandler {
    /// Handler writing to stdout at `Info` and above, RFC 3339 timestamps, no color.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(HandlerOptions::default())
    }

    /// Build from options without validating them; an invalid custom time
    /// layout renders an empty timestamp.
    #[must_use]
    pub fn with_options(options: HandlerOptions) -> Self {
        let pool = options
            .pool
            .unwrap_or_else(|| Arc::new(BufferPool::new()));
        Self {
            shared: Arc::new(Shared {
                sink: options.output,
                time_format: options.time_format,
                min_level: options.min_level,
                color: options.color,
                escape_newlines: options.escape_newlines,
                pool,
                metrics: Arc::new(HandlerMetrics::new()),
            }),
            attrs: Arc::from(Vec::new()),
            groups: Arc::from(Vec::new()),
        }
    }

    pub fn try_with_options(options: HandlerOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self::with_options(options))
    }

    #[inline]
    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.shared.min_level
    }

    /// Write `record` as one line.
    ///
    /// Always succeeds: records below the threshold are skipped before any
    /// buffer is touched, and sink failures are only counted.
    pub fn handle(&self, record: &Record) -> Result<()> {
        let shared = &*self.shared;
        if !self.enabled(record.level) {
            shared.metrics.record_filtered();
            return Ok(());
        }

        let mut line = shared.pool.line();
        let mut stamp = shared.pool.timestamp();
        self.compose(&mut line, &mut stamp, record);
        self.emit(&line);
        Ok(())
    }

    fn compose(&self, line: &mut Vec<u8>, stamp: &mut Vec<u8>, record: &Record) {
        let shared = &*self.shared;

        line.extend_from_slice(record.level.label(shared.color).as_bytes());

        line.push(b'[');
        shared.time_format.append(stamp, &record.time);
        line.extend_from_slice(&stamp[..]);
        line.extend_from_slice(b"] ");

        let escape = shared.escape_newlines;
        append_text(line, &record.message, escape);
        pad_message(line, display_width(&record.message, escape));

        if !self.groups.is_empty() {
            line.push(b'[');
            for (i, group) in self.groups.iter().enumerate() {
                if i > 0 {
                    line.push(b'.');
                }
                append_text(line, group, escape);
            }
            line.extend_from_slice(b"] ");
        }

        let key_color = if shared.color {
            record.level.highlight()
        } else {
            ""
        };
        let mut first = true;
        for attr in self.attrs.iter() {
            append_attr(line, attr, key_color, escape, &mut first);
        }
        record.attrs(|attr| {
            append_attr(line, attr, key_color, escape, &mut first);
            true
        });

        line.push(b'\n');
    }

    fn emit(&self, line: &[u8]) {
        let shared = &*self.shared;
        match shared.sink.write_line(line) {
            Ok(()) => shared.metrics.record_written(line.len()),
            Err(e) => {
                let failures = shared.metrics.record_write_failure() + 1;
                report_write_failure(&mut io::stderr().lock(), failures, &e);
            }
        }
    }

    /// Handler that also emits `attrs` on every line, after the inherited ones.
    #[must_use]
    pub fn with_attrs(&self, attrs: impl IntoIterator<Item = Attr>) -> Self {
        let mut merged: Vec<Attr> = self.attrs.to_vec();
        merged.extend(attrs);
        if merged.len() == self.attrs.len() {
            return self.clone();
        }
        Self {
            shared: Arc::clone(&self.shared),
            attrs: Arc::from(merged),
            groups: Arc::clone(&self.groups),
        }
    }

    /// Handler scoped under one more group; an empty name returns an
    /// equivalent handler.
    #[must_use]
    pub fn with_group(&self, name: &str) -> Self {
        if name.is_empty() {
            return self.clone();
        }
        let mut groups: Vec<Arc<str>> = self.groups.to_vec();
        groups.push(Arc::from(name));
        Self {
            shared: Arc::clone(&self.shared),
            attrs: Arc::clone(&self.attrs),
            groups: Arc::from(groups),
        }
    }

    pub fn min_level(&self) -> LogLevel {
        self.shared.min_level
    }

    pub fn color(&self) -> bool {
        self.shared.color
    }

    pub fn time_format(&self) -> &TimestampFormat {
        &self.shared.time_format
    }

    /// Inherited attributes in emission order
    pub fn attrs(&self) -> &[Attr] {
        &self.attrs
    }

    pub fn groups(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|g| &**g)
    }

    pub fn metrics(&self) -> &Arc<HandlerMetrics> {
        &self.shared.metrics
    }

    pub fn pool(&self) -> &Arc<BufferPool> {
        &self.shared.pool
    }

    pub fn sink(&self) -> &Sink {
        &self.shared.sink
    }

    pub fn flush(&self) -> Result<()> {
        self.shared.sink.flush()?;
        Ok(())
    }
}

/// Alert on the first failure and every 1000th thereafter. The alert is
/// best effort: a broken `out` is ignored, never a panic.
fn report_write_failure<W: Write>(out: &mut W, failures: u64, err: &io::Error) -> bool {
    if failures != 1 && failures % 1000 != 0 {
        return false;
    }
    let _ = writeln!(
        out,
        "[LOGGER ERROR] Console handler write failed ({} so far): {}",
        failures, err
    );
    true
}

fn append_attr(line: &mut Vec<u8>, attr: &Attr, key_color: &str, escape: bool, first: &mut bool) {
    if !*first {
        line.push(b' ');
    }
    *first = false;

    if key_color.is_empty() {
        append_text(line, &attr.key, escape);
    } else {
        line.extend_from_slice(key_color.as_bytes());
        append_text(line, &attr.key, escape);
        line.extend_from_slice(RESET.as_bytes());
    }
    line.push(b'=');
    append_value(line, &attr.value, escape);
}

impl Default for ConsoleHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ConsoleHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsoleHandler")
            .field("min_level", &self.shared.min_level)
            .field("color", &self.shared.color)
            .field("time_format", &self.shared.time_format)
            .field("attrs", &self.attrs)
            .field("groups", &self.groups)
            .finish()
    }
}

impl LogHandler for ConsoleHandler {
    fn enabled(&self, level: LogLevel) -> bool {
        ConsoleHandler::enabled(self, level)
    }

    fn handle(&self, record: &Record) -> Result<()> {
        ConsoleHandler::handle(self, record)
    }

    fn with_attrs(&self, attrs: Vec<Attr>) -> Arc<dyn LogHandler> {
        Arc::new(ConsoleHandler::with_attrs(self, attrs))
    }

    fn with_group(&self, name: &str) -> Arc<dyn LogHandler> {
        Arc::new(ConsoleHandler::with_group(self, name))
    }
}
