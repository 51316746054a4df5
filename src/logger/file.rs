//! File output for the logger
//!
//! Appends plain-text log lines to a daily file under the logs directory
//! (`pumpscreener_YYYY-MM-DD.log`). File output failing must never take the
//! console output down with it, so every error here is swallowed after a
//! single stderr notice.

use crate::paths;
use chrono::Local;
use once_cell::sync::Lazy;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

static LOG_FILE: Lazy<Mutex<Option<File>>> = Lazy::new(|| Mutex::new(None));

/// Set once the open failure has been reported, so it is not repeated per line
static OPEN_FAILURE_REPORTED: AtomicBool = AtomicBool::new(false);

/// Open the daily log file for appending
///
/// Called from `logger::init()` after the logs directory has been created.
pub fn init_file_logging() {
    let filename = format!("pumpscreener_{}.log", Local::now().format("%Y-%m-%d"));
    let path = paths::get_logs_directory().join(filename);

    match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(file) => {
            if let Ok(mut guard) = LOG_FILE.lock() {
                *guard = Some(file);
            }
        }
        Err(e) => {
            if !OPEN_FAILURE_REPORTED.swap(true, Ordering::SeqCst) {
                eprintln!(
                    "Logger: failed to open log file {}: {} (console only)",
                    path.display(),
                    e
                );
            }
        }
    }
}

/// Append a single line to the log file (no-op when the file is unavailable)
pub fn write_to_file(line: &str) {
    if let Ok(mut guard) = LOG_FILE.lock() {
        if let Some(file) = guard.as_mut() {
            let _ = writeln!(file, "{}", line);
        }
    }
}

/// Flush pending writes to disk
///
/// Call during shutdown so the tail of the log survives the exit.
pub fn flush_file_logging() {
    if let Ok(mut guard) = LOG_FILE.lock() {
        if let Some(file) = guard.as_mut() {
            let _ = file.flush();
        }
    }
}
