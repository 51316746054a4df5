//! Logger configuration derived from command-line arguments
//!
//! Holds the minimum level threshold and the per-module debug/verbose flag
//! sets. Populated once by [`init_from_args`] during `logger::init()`, but
//! can be replaced at runtime (used by tests).

use super::levels::LogLevel;
use super::tags::LogTag;
use crate::arguments;
use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::sync::RwLock;

/// Runtime logger configuration
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    /// Minimum level to display (Error always passes)
    pub min_level: LogLevel,
    /// `--verbose` was passed: everything for every module
    pub verbose_all: bool,
    /// Module keys with `--debug-<module>` enabled
    pub debug_modules: HashSet<String>,
    /// Module keys with `--verbose-<module>` enabled
    pub verbose_modules: HashSet<String>,
    /// When non-empty, only these module keys are shown (Error always passes)
    pub enabled_tags: HashSet<String>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            min_level: LogLevel::Info,
            verbose_all: false,
            debug_modules: HashSet::new(),
            verbose_modules: HashSet::new(),
            enabled_tags: HashSet::new(),
        }
    }
}

impl LoggerConfig {
    /// Whether debug output is enabled for this tag's module
    ///
    /// `--verbose` enables debug for everything; `--verbose-<module>`
    /// implies debug for that module.
    pub fn debug_enabled_for(&self, tag: &LogTag) -> bool {
        let key = tag.to_debug_key();
        self.verbose_all || self.debug_modules.contains(&key) || self.verbose_modules.contains(&key)
    }

    /// Whether `--verbose-<module>` was passed for this tag's module
    pub fn verbose_enabled_for(&self, tag: &LogTag) -> bool {
        self.verbose_modules.contains(&tag.to_debug_key())
    }
}

static LOGGER_CONFIG: Lazy<RwLock<LoggerConfig>> =
    Lazy::new(|| RwLock::new(LoggerConfig::default()));

/// Build the logger configuration from the captured command-line arguments
///
/// The minimum level is raised automatically so that per-module flags are
/// reachable: any `--verbose-<module>` raises it to Verbose, any
/// `--debug-<module>` to Debug.
pub fn init_from_args() {
    let verbose_all = arguments::is_verbose_enabled();
    let debug_modules: HashSet<String> = arguments::collect_debug_modules().into_iter().collect();
    let verbose_modules: HashSet<String> =
        arguments::collect_verbose_modules().into_iter().collect();

    let min_level = if verbose_all || !verbose_modules.is_empty() {
        LogLevel::Verbose
    } else if !debug_modules.is_empty() {
        LogLevel::Debug
    } else if arguments::is_quiet_enabled() {
        LogLevel::Warning
    } else {
        LogLevel::Info
    };

    set_logger_config(LoggerConfig {
        min_level,
        verbose_all,
        debug_modules,
        verbose_modules,
        enabled_tags: HashSet::new(),
    });
}

/// Get a snapshot of the current logger configuration
pub fn get_logger_config() -> LoggerConfig {
    match LOGGER_CONFIG.read() {
        Ok(config) => config.clone(),
        Err(_) => LoggerConfig::default(),
    }
}

/// Replace the logger configuration
pub fn set_logger_config(config: LoggerConfig) {
    if let Ok(mut current) = LOGGER_CONFIG.write() {
        *current = config;
    }
}
