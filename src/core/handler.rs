//! Handler trait: the seam between a logging frontend and a backend

use super::{error::Result, log_level::LogLevel, record::Record, value::Attr};
use std::sync::Arc;

/// Backend that turns records into output.
///
/// Derivations return new handlers and leave `self` untouched, so a single
/// parent can be derived from concurrently.
pub trait LogHandler: Send + Sync {
    fn enabled(&self, level: LogLevel) -> bool;

    fn handle(&self, record: &Record) -> Result<()>;

    /// Handler whose lines also carry `attrs`, after any already inherited.
    fn with_attrs(&self, attrs: Vec<Attr>) -> Arc<dyn LogHandler>;

    /// Handler whose lines are scoped under one more group; an empty name
    /// yields an equivalent handler.
    fn with_group(&self, name: &str) -> Arc<dyn LogHandler>;
}
