//! # Rust Line Logger
//!
//! A low-allocation, line-oriented log handler that renders leveled,
//! timestamped records as aligned, optionally color-highlighted console text.
//!
//! ## Features
//!
//! - **Low Allocation**: Pooled line and timestamp buffers, common value kinds encoded directly
//! - **Aligned Output**: Fixed-width level labels and code-point-aware message padding
//! - **Scoped Loggers**: Immutable handler derivation with inherited attributes and groups
//! - **Thread Safe**: One atomic write per line, no interleaving between callers
//!
//! ```text
//! INFO[2024-01-01T00:00:00Z] gRPC call succeeded                              method=/a/b duration=320µs
//! ```

pub mod core;
pub mod handlers;
pub mod macros;

pub mod prelude {
    pub use crate::core::{
        Attr, BufferPool, HandlerConfig, HandlerMetrics, HandlerOptions, LogHandler, LogLevel,
        Logger, LoggerError, Marshal, Record, Result, TimestampFormat, Value,
    };
    pub use crate::handlers::{ConsoleHandler, SharedBuffer, Sink};
}

pub use crate::core::{
    Attr, BufferPool, HandlerConfig, HandlerMetrics, HandlerOptions, LogHandler, LogLevel, Logger,
    LoggerError, Marshal, PooledBuffer, Record, Result, TimestampFormat, Value, MESSAGE_WIDTH,
    UNSUPPORTED,
};
pub use crate::handlers::{ConsoleHandler, SharedBuffer, Sink};
