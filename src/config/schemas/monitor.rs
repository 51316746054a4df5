use crate::config_struct;

// ============================================================================
// MONITOR CONFIGURATION
// ============================================================================

config_struct! {
    /// Refresh loop and console summary configuration
    pub struct MonitorConfig {
        /// Seconds between discovery cycles
        poll_interval_secs: u64 = 30,

        /// How many tokens the cycle summary prints
        summary_rows: usize = 10,

        /// Summary ordering: trending, volume, gainers or age
        sort_mode: String = "trending".to_string(),
    }
}
