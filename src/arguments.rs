/// Centralized argument handling for PumpScreener
///
/// This module consolidates all command-line argument parsing and debug flag
/// checking so binaries and modules never scan `std::env::args()` themselves.
///
/// Features:
/// - Centralized CMD_ARGS storage with thread-safe access
/// - Debug flag checking functions for all modules
/// - Value flags (--config, --interval, --sort)
/// - Overridable argument set for tests
use once_cell::sync::Lazy;
use std::env;
use std::sync::Mutex;

/// Global command-line arguments storage
/// Thread-safe singleton that stores arguments for access throughout the application
pub static CMD_ARGS: Lazy<Mutex<Vec<String>>> = Lazy::new(|| Mutex::new(env::args().collect()));

/// Sets the global command-line arguments
/// Used by tests to override the default env::args() collection
pub fn set_cmd_args(args: Vec<String>) {
    if let Ok(mut cmd_args) = CMD_ARGS.lock() {
        *cmd_args = args;
    }
}

/// Gets a copy of the current command-line arguments
/// Returns a vector clone to avoid holding the mutex lock
pub fn get_cmd_args() -> Vec<String> {
    match CMD_ARGS.lock() {
        Ok(args) => args.clone(),
        Err(_) => {
            // Fallback to env::args if mutex is poisoned
            env::args().collect()
        }
    }
}

/// Checks if a specific argument is present in the command line
pub fn has_arg(arg: &str) -> bool {
    get_cmd_args().iter().any(|a| a == arg)
}

/// Gets the value of a command-line argument that follows a flag
/// Returns None if the flag is not found or has no value
pub fn get_arg_value(flag: &str) -> Option<String> {
    let args = get_cmd_args();
    for (i, arg) in args.iter().enumerate() {
        if arg == flag && i + 1 < args.len() {
            return Some(args[i + 1].clone());
        }
    }
    None
}

// =============================================================================
// MODE FLAGS
// =============================================================================

/// Help requested via --help or -h
pub fn is_help_requested() -> bool {
    has_arg("--help") || has_arg("-h")
}

/// Single-cycle mode: run one discovery pass, print the summary, exit
pub fn is_once_enabled() -> bool {
    has_arg("--once")
}

/// Global verbose mode (enables verbose logs for every module)
pub fn is_verbose_enabled() -> bool {
    has_arg("--verbose")
}

/// Quiet mode (warnings and errors only)
pub fn is_quiet_enabled() -> bool {
    has_arg("--quiet")
}

// =============================================================================
// DEBUG FLAG COLLECTION
// `--debug-<module>` and `--verbose-<module>` flags are gathered as module
// keys and handed to the logger, which does the per-tag gating
// =============================================================================

/// Collects the module keys of every `--debug-<module>` flag present
pub fn collect_debug_modules() -> Vec<String> {
    get_cmd_args()
        .iter()
        .filter_map(|a| a.strip_prefix("--debug-").map(|m| m.to_string()))
        .filter(|m| !m.is_empty())
        .collect()
}

/// Collects the module keys of every `--verbose-<module>` flag present
pub fn collect_verbose_modules() -> Vec<String> {
    get_cmd_args()
        .iter()
        .filter_map(|a| a.strip_prefix("--verbose-").map(|m| m.to_string()))
        .filter(|m| !m.is_empty())
        .collect()
}

// =============================================================================
// VALUE FLAGS
// =============================================================================

/// Config file path override (--config <path>)
pub fn get_config_path_override() -> Option<String> {
    get_arg_value("--config")
}

/// Poll interval override in seconds (--interval <secs>)
/// Returns None when absent or unparsable; zero is rejected
pub fn get_interval_override() -> Option<u64> {
    get_arg_value("--interval")
        .and_then(|v| v.parse::<u64>().ok())
        .filter(|secs| *secs > 0)
}

/// Summary sort mode override (--sort <trending|volume|gainers|age>)
pub fn get_sort_override() -> Option<String> {
    get_arg_value("--sort")
}

// =============================================================================
// HELP AND DIAGNOSTICS
// =============================================================================

/// Print usage information
pub fn print_help() {
    println!("PumpScreener - Solana token discovery terminal");
    println!();
    println!("USAGE:");
    println!("  pumpscreener [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("  --once                Run a single discovery cycle and exit");
    println!("  --config <path>       Use a specific config file");
    println!("  --interval <secs>     Override the poll interval");
    println!("  --sort <mode>         Summary sort: trending, volume, gainers, age");
    println!("  --quiet               Warnings and errors only");
    println!("  --verbose             Very detailed logging for all modules");
    println!("  --debug-discovery     Debug logs for the discovery pipeline");
    println!("  --debug-http          Debug logs for HTTP requests");
    println!("  --debug-ai            Debug logs for AI analysis");
    println!("  --debug-monitor       Debug logs for the monitor loop");
    println!("  --debug-prefs         Debug logs for the preference store");
    println!("  --debug-config        Debug logs for configuration loading");
    println!("  --help, -h            Show this help");
}

/// Print active debug modes at startup (one line per enabled flag)
pub fn print_debug_info() {
    let modules = collect_debug_modules();
    if !modules.is_empty() {
        println!("Debug modes enabled: {}", modules.join(", "));
    }
    if is_verbose_enabled() {
        println!("Verbose logging enabled for all modules");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_lookup_over_injected_args() {
        set_cmd_args(vec![
            "pumpscreener".to_string(),
            "--debug-discovery".to_string(),
            "--once".to_string(),
            "--sort".to_string(),
            "volume".to_string(),
            "--debug-http".to_string(),
        ]);

        assert!(has_arg("--once"));
        assert!(!has_arg("--quiet"));
        assert_eq!(get_arg_value("--sort"), Some("volume".to_string()));
        assert_eq!(get_arg_value("--config"), None);

        let mut modules = collect_debug_modules();
        modules.sort();
        assert_eq!(modules, vec!["discovery", "http"]);

        set_cmd_args(std::env::args().collect());
    }

    #[test]
    fn test_interval_parse_rejects_zero_and_garbage() {
        assert_eq!("0".parse::<u64>().ok().filter(|s| *s > 0), None);
        assert_eq!("abc".parse::<u64>().ok().filter(|s| *s > 0), None);
        assert_eq!("45".parse::<u64>().ok().filter(|s| *s > 0), Some(45));
    }
}
