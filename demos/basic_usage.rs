//! Basic handler usage example
//!
//! Demonstrates leveled console lines, colors, inherited attributes and groups.
//!
//! Run with: cargo run --example basic_usage

use rust_line_logger::prelude::*;
use rust_line_logger::{debug, error, info, warn};
use std::time::Duration;

fn main() -> Result<()> {
    println!("=== Rust Line Logger - Basic Usage Example ===\n");

    let handler = ConsoleHandler::try_with_options(
        HandlerOptions::new()
            .with_min_level(LogLevel::Debug)
            .with_custom_time_format("%Y-%m-%d %H:%M:%S%.3f %:z")
            .with_auto_colors(),
    )?;
    let logger = Logger::new(handler);

    println!("1. Logging at different levels:");
    debug!(logger, "cache warmed"; "entries" => 1024);
    info!(logger, "gRPC call succeeded";
        "method" => "/conveyor.NotificationService/GetAmountUnreadNotifications",
        "duration" => Duration::from_micros(320));
    warn!(logger, "slow query"; "elapsed" => Duration::from_millis(1500), "rows" => 12);
    let err = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "connection reset");
    error!(logger, "upstream failed"; "err" => Value::error(err), "retry" => true);

    println!("\n2. Scoped loggers:");
    let request = logger
        .with(vec![Attr::new("request_id", "a1b2c3")])
        .with_group("http");
    info!(request, "request accepted"; "path" => "/api/v1/items");
    info!(request.with_group("db"), "query done"; "ratio" => 0.25);

    println!("\n3. Fallback values:");
    info!(logger, "batch"; "ids" => Value::any(vec![1, 2, 3]));

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
