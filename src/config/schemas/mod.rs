// Config schema submodule - one file per configuration section

use crate::config_struct;

mod ai;
mod discovery;
mod monitor;
mod scoring;

pub use ai::*;
pub use discovery::*;
pub use monitor::*;
pub use scoring::*;

// ============================================================================
// ROOT CONFIGURATION
// ============================================================================

config_struct! {
    /// Root configuration structure containing all sub-configurations
    pub struct Config {
        /// Token discovery configuration
        discovery: DiscoveryConfig = DiscoveryConfig::default(),

        /// Hype score and bonding-curve configuration
        scoring: ScoringConfig = ScoringConfig::default(),

        /// Refresh loop configuration
        monitor: MonitorConfig = MonitorConfig::default(),

        /// Gemini analysis configuration
        ai: AiConfig = AiConfig::default(),
    }
}
