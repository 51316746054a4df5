use crate::config_struct;

// ============================================================================
// DISCOVERY CONFIGURATION
// ============================================================================

/// Search keywords used to trawl DexScreener for live Solana pairs
pub fn default_keywords() -> Vec<String> {
    [
        "pump", "solana", "raydium", "ai", "dog", "pepe", "wif", "cat", "moon", "trump", "elon",
        "goat", "bonk", "popcat",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Base-token symbols that are never surfaced (majors, stables, wrapped SOL)
pub fn default_excluded_symbols() -> Vec<String> {
    ["SOL", "USDC", "USDT", "DAI", "mSOL", "jitoSOL", "WSOL"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

config_struct! {
    /// Token discovery configuration
    pub struct DiscoveryConfig {
        /// Endpoint returning the currently boosted tokens across all chains
        boosts_endpoint: String = "https://api.dexscreener.com/token-boosts/top/v1".to_string(),

        /// Base endpoint for pair lookups and keyword search
        pairs_endpoint: String = "https://api.dexscreener.com/latest/dex".to_string(),

        /// How many token addresses go into a single pair-lookup request
        chunk_size: usize = 30,

        /// Per-request timeout in seconds
        request_timeout_secs: u64 = 10,

        /// Keywords fanned out as concurrent search queries
        keywords: Vec<String> = default_keywords(),

        /// Base-token symbols dropped during filtering (case-insensitive)
        excluded_symbols: Vec<String> = default_excluded_symbols(),

        /// Pairs at or below this much USD liquidity are dropped
        min_liquidity_usd: f64 = 500.0,

        /// Maximum number of tokens kept after ranking
        max_tokens: usize = 250,
    }
}
