//! Custom logging module.
//!
//! This module provides a custom logger implementation that captures log entries
//! into a bounded buffer the UI shows in its log panel. Nothing is written to
//! the terminal while the interface owns it.

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Maximum number of entries kept in the buffer.
///
pub const LOG_CAPACITY: usize = 500;

/// Shared handle to the captured log lines, oldest first.
///
pub type LogBuffer = Arc<Mutex<VecDeque<String>>>;

/// Format a log record into a string for display
///
pub fn format_log(record: &Record) -> String {
    let timestamp = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S%.3f");
    let level_str = match record.level() {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    };
    format!("{} {} {}", timestamp, level_str, record.args())
}

/// Custom logger that captures logs to a shared buffer
///
pub struct CustomLogger {
    buffer: LogBuffer,
    level: LevelFilter,
}

impl CustomLogger {
    pub fn new(buffer: LogBuffer, level: LevelFilter) -> Self {
        CustomLogger { buffer, level }
    }

    /// Install a logger writing into `buffer` as the global logger.
    ///
    pub fn init(buffer: LogBuffer, level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(CustomLogger::new(buffer, level)))?;
        log::set_max_level(level.max(LevelFilter::Warn));
        Ok(())
    }
}

impl Log for CustomLogger {
    /// Records from this crate pass at the configured level; dependencies
    /// only at warn and above.
    fn enabled(&self, metadata: &Metadata) -> bool {
        if metadata.target().starts_with(env!("CARGO_CRATE_NAME")) {
            metadata.level() <= self.level
        } else {
            metadata.level() <= Level::Warn
        }
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            if let Ok(mut buffer) = self.buffer.lock() {
                if buffer.len() >= LOG_CAPACITY {
                    buffer.pop_front();
                }
                buffer.push_back(format_log(record));
            }
        }
    }

    fn flush(&self) {}
}
