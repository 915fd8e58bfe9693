//! Attribute values for structured log lines
//!
//! This module provides:
//! - `Value`: closed set of value kinds the encoder renders directly
//! - `Marshal`: the fallback capability for anything outside that set
//! - `Attr`: a key/value pair attached to a record or inherited by a handler

use super::error::Result;
use serde::Serialize;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Fallback serializer for values outside the built-in set.
///
/// Implementations append their rendering to `out` and may fail; the encoder
/// discards any partial output and writes `<unsupported>` instead.
pub trait Marshal: Send + Sync {
    fn marshal(&self, out: &mut Vec<u8>) -> Result<()>;
}

/// Renders any `Serialize` value as compact JSON.
struct Json<T>(T);

impl<T: Serialize + Send + Sync> Marshal for Json<T> {
    fn marshal(&self, out: &mut Vec<u8>) -> Result<()> {
        serde_json::to_writer(out, &self.0)?;
        Ok(())
    }
}

#[derive(Clone)]
pub enum Value {
    Nil,
    Str(Cow<'static, str>),
    Int(i64),
    Uint(u64),
    Duration(Duration),
    F64(f64),
    F32(f32),
    Error(Arc<dyn std::error::Error + Send + Sync>),
    Bool(bool),
    Any(Arc<dyn Marshal>),
}

impl Value {
    /// Wrap an arbitrary serializable value; it is rendered as JSON.
    pub fn any<T>(value: T) -> Self
    where
        T: Serialize + Send + Sync + 'static,
    {
        Value::Any(Arc::new(Json(value)))
    }

    /// Wrap a custom fallback serializer.
    pub fn marshal<M: Marshal + 'static>(value: M) -> Self {
        Value::Any(Arc::new(value))
    }

    pub fn error<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Value::Error(Arc::new(err))
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => write!(f, "Nil"),
            Value::Str(s) => f.debug_tuple("Str").field(s).finish(),
            Value::Int(i) => f.debug_tuple("Int").field(i).finish(),
            Value::Uint(u) => f.debug_tuple("Uint").field(u).finish(),
            Value::Duration(d) => f.debug_tuple("Duration").field(d).finish(),
            Value::F64(v) => f.debug_tuple("F64").field(v).finish(),
            Value::F32(v) => f.debug_tuple("F32").field(v).finish(),
            Value::Error(e) => f.debug_tuple("Error").field(&e.to_string()).finish(),
            Value::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Value::Any(_) => write!(f, "Any(..)"),
        }
    }
}

impl From<&'static str> for Value {
    fn from(s: &'static str) -> Self {
        Value::Str(Cow::Borrowed(s))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(Cow::Owned(s))
    }
}

impl From<Cow<'static, str>> for Value {
    fn from(s: Cow<'static, str>) -> Self {
        Value::Str(s)
    }
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(impl From<$t> for Value {
            fn from(i: $t) -> Self {
                Value::Int(i as i64)
            }
        })*
    };
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(impl From<$t> for Value {
            fn from(u: $t) -> Self {
                Value::Uint(u as u64)
            }
        })*
    };
}

impl_from_signed!(i8, i16, i32, i64, isize);
impl_from_unsigned!(u8, u16, u32, u64, usize);

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::F64(f)
    }
}

impl From<f32> for Value {
    fn from(f: f32) -> Self {
        Value::F32(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<Duration> for Value {
    fn from(d: Duration) -> Self {
        Value::Duration(d)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Nil, Into::into)
    }
}

/// A key/value pair
#[derive(Debug, Clone)]
pub struct Attr {
    pub key: Cow<'static, str>,
    pub value: Value,
}

impl Attr {
    pub fn new<K, V>(key: K, value: V) -> Self
    where
        K: Into<Cow<'static, str>>,
        V: Into<Value>,
    {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}
