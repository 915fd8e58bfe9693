//! Core logger types and traits

pub mod encoder;
pub mod error;
pub mod handler;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod options;
pub mod pool;
pub mod record;
pub mod timestamp;
pub mod value;

pub use encoder::{MESSAGE_WIDTH, UNSUPPORTED};
pub use error::{LoggerError, Result};
pub use handler::LogHandler;
pub use log_level::LogLevel;
pub use logger::Logger;
pub use metrics::HandlerMetrics;
pub use options::{HandlerConfig, HandlerOptions};
pub use pool::{BufferPool, PooledBuffer};
pub use record::Record;
pub use timestamp::TimestampFormat;
pub use value::{Attr, Marshal, Value};
