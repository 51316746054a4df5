//! Core logging logic with level and module filtering

use super::config::{get_logger_config, LoggerConfig};
use super::format;
use super::levels::LogLevel;
use super::tags::LogTag;

/// Decide whether a message should be logged under the current config
pub fn should_log(level: LogLevel, tag: &LogTag) -> bool {
    should_log_with(&get_logger_config(), level, tag)
}

/// Filtering rules, applied in order:
/// 1. Errors always pass
/// 2. Messages above the minimum level are dropped
/// 3. Debug requires debug mode for the tag's module
/// 4. Verbose requires `--verbose` or verbose mode for the tag's module
/// 5. When a tag filter is active, only listed modules pass
fn should_log_with(config: &LoggerConfig, level: LogLevel, tag: &LogTag) -> bool {
    // Rule 1: errors are never filtered
    if level == LogLevel::Error {
        return true;
    }

    // Rule 2: minimum level threshold
    if level > config.min_level {
        return false;
    }

    // Rule 3: debug output is opt-in per module
    if level == LogLevel::Debug && !config.debug_enabled_for(tag) {
        return false;
    }

    // Rule 4: verbose output needs the global flag or a per-module flag
    if level == LogLevel::Verbose && !config.verbose_all && !config.verbose_enabled_for(tag) {
        return false;
    }

    // Rule 5: optional tag whitelist
    if !config.enabled_tags.is_empty() && !config.enabled_tags.contains(&tag.to_debug_key()) {
        return false;
    }

    true
}

/// Format and emit a message after filtering
pub fn log_internal(level: LogLevel, tag: LogTag, message: &str) {
    if !should_log(level, &tag) {
        return;
    }
    format::format_and_log(tag, level.as_str(), message);
}
