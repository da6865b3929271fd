//! Logger module
//!
//! Structured logging for the filesystem server:
//! - one operation log line per request outcome
//! - server lifecycle, warning and error logging
//! - optional file targets for both streams

mod format;
pub mod writer;

pub use format::OperationLogEntry;

use crate::config::Config;
use std::net::SocketAddr;
use std::path::Path;

/// Initialize the logger with configuration.
///
/// Should be called once at application startup. Before (or without) init,
/// lines fall back to stdout/stderr so tests and early startup still log.
pub fn init(config: &Config) -> std::io::Result<()> {
    writer::init(
        config.logging.operation_log_file.as_deref(),
        config.logging.error_log_file.as_deref(),
    )
}

/// Write to the operation log
fn write_operation(message: &str) {
    match writer::get() {
        Some(sink) => sink.write_operation(message),
        None => println!("{message}"),
    }
}

/// Write to the error log
fn write_error(message: &str) {
    match writer::get() {
        Some(sink) => sink.write_error(message),
        None => eprintln!("{message}"),
    }
}

/// Log one request outcome in the configured format
pub fn log_operation(entry: &OperationLogEntry, format: &str) {
    write_operation(&entry.format(format));
}

pub fn log_server_start(addr: &SocketAddr, config: &Config, root: &Path) {
    write_operation("======================================");
    write_operation("httpfs started successfully");
    write_operation(&format!("Listening on: http://{addr}"));
    write_operation(&format!("Serving filesystem root: {}", root.display()));
    write_operation(&format!("Operation log format: {}", config.logging.format));
    if let Some(workers) = config.server.workers {
        write_operation(&format!("Worker threads: {workers}"));
    }
    if let Some(ref path) = config.logging.operation_log_file {
        write_operation(&format!("Operation log: {path}"));
    }
    if let Some(ref path) = config.logging.error_log_file {
        write_operation(&format!("Error log: {path}"));
    }
    write_operation("======================================\n");
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    write_operation(&format!("[Connection] Accepted from: {peer_addr}"));
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write_error(&format!("[ERROR] Failed to serve connection: {err:?}"));
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    write_error(&format!("[WARN] {message}"));
}
