//! Centralized path resolution for PumpScreener
//!
//! All file and directory paths are resolved through this module to ensure
//! consistent behavior across platforms.
//!
//! ## Path Strategy
//!
//! Platform-standard application data locations:
//! - **macOS**: `~/Library/Application Support/PumpScreener/`
//! - **Windows**: `%LOCALAPPDATA%\PumpScreener\`
//! - **Linux**: `$XDG_DATA_HOME/PumpScreener/` (fallback `~/.local/share/PumpScreener/`)
//!
//! ## Directory Structure
//!
//! ```text
//! PumpScreener/
//! ├── data/
//! │   ├── config.toml
//! │   └── preferences.json
//! └── logs/
//!     └── pumpscreener_*.log
//! ```

use once_cell::sync::Lazy;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

// =============================================================================
// BASE DIRECTORY RESOLUTION
// =============================================================================

/// Tracks whether initialization logging has been done
static INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Lazy-initialized base directory (thread-safe)
static BASE_DIRECTORY: Lazy<PathBuf> = Lazy::new(|| {
    let base_dir = resolve_base_directory();
    INITIALIZED.store(true, Ordering::SeqCst);
    base_dir
});

/// Resolves the base directory for all PumpScreener data
fn resolve_base_directory() -> PathBuf {
    const APP_DIR: &str = "PumpScreener";

    if let Some(dir) = dirs::data_local_dir() {
        return dir.join(APP_DIR);
    }

    if let Some(dir) = dirs::data_dir() {
        return dir.join(APP_DIR);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(APP_DIR);
    }

    PathBuf::from(APP_DIR)
}

// =============================================================================
// PRIMARY DIRECTORY ACCESSORS
// =============================================================================

/// Returns the base directory for all PumpScreener data
pub fn get_base_directory() -> PathBuf {
    BASE_DIRECTORY.clone()
}

/// Returns the data directory path
///
/// Contains the config file and the preference store.
pub fn get_data_directory() -> PathBuf {
    BASE_DIRECTORY.join("data")
}

/// Returns the logs directory path
///
/// Contains daily log files.
pub fn get_logs_directory() -> PathBuf {
    BASE_DIRECTORY.join("logs")
}

// =============================================================================
// FILE PATHS
// =============================================================================

/// Returns the main configuration file path
pub fn get_config_path() -> PathBuf {
    get_data_directory().join("config.toml")
}

/// Returns the preference store file path (watchlist, language, theme)
pub fn get_preferences_path() -> PathBuf {
    get_data_directory().join("preferences.json")
}

// =============================================================================
// DIRECTORY CREATION
// =============================================================================

/// Ensures all required directories exist
///
/// Creates the base directory and all subdirectories needed for operation.
/// This should be called early in the application startup, before the logger
/// opens its log file.
pub fn ensure_all_directories() -> Result<(), String> {
    if !is_initialized() {
        eprintln!("Base directory: {}", get_base_directory().display());
    }

    let dirs_to_create = vec![
        ("base", get_base_directory()),
        ("data", get_data_directory()),
        ("logs", get_logs_directory()),
    ];

    for (name, dir) in dirs_to_create {
        if !dir.exists() {
            std::fs::create_dir_all(&dir).map_err(|e| {
                format!(
                    "Failed to create {} directory at {}: {}",
                    name,
                    dir.display(),
                    e
                )
            })?;

            eprintln!("Created directory: {}", dir.display());
        }
    }

    Ok(())
}

// =============================================================================
// UTILITY FUNCTIONS
// =============================================================================

/// Checks if the base directory has been initialized
pub fn is_initialized() -> bool {
    INITIALIZED.load(Ordering::SeqCst)
}

// =============================================================================
// TESTS
// =============================================================================
