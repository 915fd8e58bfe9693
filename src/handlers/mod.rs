//! Handler implementations

pub mod console;
pub mod sink;

pub use console::ConsoleHandler;
pub use sink::{SharedBuffer, Sink};

// Re-export the trait for convenience
pub use crate::core::LogHandler;
