use crate::config_struct;

// ============================================================================
// SCORING CONFIGURATION
// ============================================================================

config_struct! {
    /// Knobs for the hype score and bonding-curve estimate
    pub struct ScoringConfig {
        /// Divisor applied to 24h volume in the hype score
        volume_divisor: f64 = 20_000.0,

        /// Divisor applied to 24h buy count in the hype score
        buys_divisor: f64 = 20.0,

        /// Weight applied to the absolute 5m price change in the hype score
        momentum_multiplier: f64 = 10.0,

        /// Hype score ceiling
        score_cap: u32 = 999,

        /// Liquidity at which the bonding-curve estimate reads 100%
        graduation_liquidity_usd: f64 = 85_000.0,
    }
}
