//! Configuration utilities - loading, saving, and access helpers
//!
//! This module provides utility functions for working with the configuration system:
//! - Loading configuration from disk (generating a default file on first run)
//! - Thread-safe access helpers
//! - In-memory updates for command-line overrides

use super::schemas::Config;
use crate::logger::{self, LogTag};
use crate::paths;
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

/// Global configuration instance
///
/// This is the single source of truth for all configuration values.
/// Access it using the helper functions below.
pub static CONFIG: OnceCell<RwLock<Config>> = OnceCell::new();

/// Resolve the active config file path
///
/// `--config <path>` wins; otherwise the file lives in the application data
/// directory.
pub fn resolve_config_path() -> PathBuf {
    match crate::arguments::get_config_path_override() {
        Some(path) => PathBuf::from(path),
        None => paths::get_config_path(),
    }
}

/// Load configuration from disk and initialize the global CONFIG
///
/// This should be called once at startup. If the config file doesn't exist,
/// defaults are used and a commented template is written so the next run can
/// be tuned by editing it.
pub fn load_config() -> Result<(), String> {
    load_config_from_path(&resolve_config_path())
}

/// Load configuration from a specific file path
pub fn load_config_from_path(path: &Path) -> Result<(), String> {
    let config = if path.exists() {
        let config = parse_config_file(path)?;
        logger::info(
            LogTag::Config,
            &format!("✅ Loaded configuration from {}", path.display()),
        );
        config
    } else {
        logger::warning(
            LogTag::Config,
            &format!(
                "Config file {} not found, using defaults",
                path.display()
            ),
        );
        let config = Config::default();
        if let Err(e) = write_default_config(path, &config) {
            logger::warning(
                LogTag::Config,
                &format!("Could not write default config: {}", e),
            );
        } else {
            logger::info(
                LogTag::Config,
                &format!("Wrote default configuration to {}", path.display()),
            );
        }
        config
    };

    CONFIG
        .set(RwLock::new(config))
        .map_err(|_| "Config already initialized".to_string())?;

    Ok(())
}

/// Read and parse a TOML config file
fn parse_config_file(path: &Path) -> Result<Config, String> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config file '{}': {}", path.display(), e))?;

    toml::from_str::<Config>(&contents)
        .map_err(|e| format!("Failed to parse config file '{}': {}", path.display(), e))
}

/// Write a default config file for the user to edit later
fn write_default_config(path: &Path, config: &Config) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create '{}': {}", parent.display(), e))?;
    }

    let config_str = toml::to_string_pretty(config)
        .map_err(|e| format!("Failed to serialize config: {}", e))?;

    std::fs::write(path, config_str)
        .map_err(|e| format!("Failed to write config file '{}': {}", path.display(), e))
}

/// Execute a function with read access to the configuration
///
/// This is the recommended way to read configuration values.
/// The closure receives an immutable reference to the Config.
///
/// # Example
/// ```ignore
/// let interval = with_config(|cfg| cfg.monitor.poll_interval_secs);
/// ```
pub fn with_config<F, R>(f: F) -> R
where
    F: FnOnce(&Config) -> R,
{
    let config_lock = CONFIG
        .get()
        .expect("Config not initialized. Call load_config() first.");

    let config = config_lock
        .read()
        .expect("Failed to acquire config read lock");

    f(&config)
}

/// Get a clone of the entire configuration
///
/// Useful when config values must be held across await points.
/// Note: This clones the entire config, so use with_config() for simple reads.
pub fn get_config_clone() -> Config {
    with_config(|cfg| cfg.clone())
}

/// Update the in-memory configuration
///
/// Used to fold command-line overrides like `--interval` into the loaded
/// config. Changes are never written back to the config file.
pub fn update_config<F>(update_fn: F) -> Result<(), String>
where
    F: FnOnce(&mut Config),
{
    let config_lock = CONFIG
        .get()
        .ok_or("Config not initialized. Call load_config() first.")?;

    let mut config = config_lock
        .write()
        .map_err(|e| format!("Failed to acquire config write lock: {}", e))?;

    update_fn(&mut config);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.discovery.chunk_size, 30);
        assert_eq!(config.discovery.min_liquidity_usd, 500.0);
        assert_eq!(config.discovery.max_tokens, 250);
        assert_eq!(config.discovery.keywords.len(), 14);
        assert_eq!(config.discovery.excluded_symbols.len(), 7);
        assert_eq!(config.scoring.score_cap, 999);
        assert_eq!(config.scoring.graduation_liquidity_usd, 85_000.0);
        assert_eq!(config.monitor.poll_interval_secs, 30);
        assert!(config.ai.api_key.is_empty());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("[discovery]"));
        assert!(toml_str.contains("[scoring]"));
        assert!(toml_str.contains("[monitor]"));
        assert!(toml_str.contains("[ai]"));
    }

    #[test]
    fn test_parse_partial_file_keeps_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[discovery]\nchunk_size = 10\n").unwrap();

        let config = parse_config_file(&path).unwrap();
        assert_eq!(config.discovery.chunk_size, 10);
        assert_eq!(config.discovery.min_liquidity_usd, 500.0);
        assert_eq!(config.monitor.poll_interval_secs, 30);
    }

    #[test]
    fn test_parse_invalid_file_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "discovery = [not valid").unwrap();

        assert!(parse_config_file(&path).is_err());
    }

    #[test]
    fn test_parse_missing_file_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("does_not_exist.toml");

        assert!(parse_config_file(&path).is_err());
    }

    #[test]
    fn test_write_default_round_trips() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        write_default_config(&path, &Config::default()).unwrap();
        let parsed = parse_config_file(&path).unwrap();
        assert_eq!(parsed.discovery.chunk_size, 30);
        assert_eq!(parsed.ai.model, "gemini-3-flash-preview");
    }
}
