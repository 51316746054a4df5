//! Structured logging with per-module filtering and daily file output
//!
//! Every message carries a [`LogTag`] identifying the subsystem it came from
//! and a [`LogLevel`]. Console output is colored per tag; everything that
//! passes the filters is also appended to a daily log file under the
//! application's logs directory.
//!
//! Filtering is driven by command-line flags: `--verbose` shows everything,
//! `--quiet` drops Info, `--debug-<module>` and `--verbose-<module>` enable
//! extra output for a single subsystem (for example `--debug-http`).

mod config;
mod core;
mod file;
mod format;
mod levels;
mod tags;

pub use config::{get_logger_config, set_logger_config, LoggerConfig};
pub use levels::LogLevel;
pub use tags::LogTag;

/// Initialize the logger from command-line arguments and open the log file
///
/// Call once at startup, after the data directories exist. Safe to call
/// before configuration is loaded; the logger only depends on arguments.
pub fn init() {
    config::init_from_args();
    file::init_file_logging();
}

/// Log a message at an explicit level
pub fn log(level: LogLevel, tag: LogTag, message: &str) {
    core::log_internal(level, tag, message);
}

/// Log an error (never filtered)
pub fn error(tag: LogTag, message: &str) {
    core::log_internal(LogLevel::Error, tag, message);
}

/// Log a warning
pub fn warning(tag: LogTag, message: &str) {
    core::log_internal(LogLevel::Warning, tag, message);
}

/// Log an informational message
pub fn info(tag: LogTag, message: &str) {
    core::log_internal(LogLevel::Info, tag, message);
}

/// Log a debug message (shown with `--debug-<module>` or `--verbose`)
pub fn debug(tag: LogTag, message: &str) {
    core::log_internal(LogLevel::Debug, tag, message);
}

/// Log a verbose message (shown with `--verbose` or `--verbose-<module>`)
pub fn verbose(tag: LogTag, message: &str) {
    core::log_internal(LogLevel::Verbose, tag, message);
}

/// Flush buffered file output, used during shutdown
pub fn flush() {
    file::flush_file_logging();
}
