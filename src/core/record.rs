//! Log record structure

use super::log_level::LogLevel;
use super::value::{Attr, Value};
use chrono::{DateTime, Utc};
use std::borrow::Cow;

/// One log event as handed to a handler
#[derive(Debug, Clone)]
pub struct Record {
    pub time: DateTime<Utc>,
    pub level: LogLevel,
    pub message: String,
    attrs: Vec<Attr>,
}

impl Record {
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            time: Utc::now(),
            level,
            message: message.into(),
            attrs: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_time(mut self, time: DateTime<Utc>) -> Self {
        self.time = time;
        self
    }

    #[must_use]
    pub fn with_attr<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<Cow<'static, str>>,
        V: Into<Value>,
    {
        self.attrs.push(Attr::new(key, value));
        self
    }

    #[must_use]
    pub fn with_attrs(mut self, attrs: impl IntoIterator<Item = Attr>) -> Self {
        self.attrs.extend(attrs);
        self
    }

    pub fn add_attr(&mut self, attr: Attr) {
        self.attrs.push(attr);
    }

    /// Visit attributes in insertion order until `f` returns `false`.
    pub fn attrs<F>(&self, mut f: F)
    where
        F: FnMut(&Attr) -> bool,
    {
        for attr in &self.attrs {
            if !f(attr) {
                break;
            }
        }
    }

    pub fn num_attrs(&self) -> usize {
        self.attrs.len()
    }
}
