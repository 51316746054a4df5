/// Typed response schema for the DexScreener endpoints used by discovery
///
/// Every field is optional. The API omits keys freely between pairs, and a
/// missing field must never fail the whole response; defaults are applied by
/// the accessors and at projection time.
use serde::Deserialize;

/// Envelope returned by `/tokens/{addresses}` and `/search`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairsResponse {
    pub schema_version: Option<String>,
    pub pairs: Option<Vec<RawPair>>,
}

/// One trading pair as DexScreener reports it
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPair {
    pub chain_id: Option<String>,
    pub dex_id: Option<String>,
    pub url: Option<String>,
    pub pair_address: Option<String>,
    pub base_token: Option<PairToken>,
    pub quote_token: Option<PairToken>,
    pub price_usd: Option<String>,
    pub txns: Option<PairTxns>,
    pub volume: Option<PairWindows>,
    pub price_change: Option<PairWindows>,
    pub liquidity: Option<PairLiquidity>,
    pub fdv: Option<f64>,
    pub market_cap: Option<f64>,
    pub pair_created_at: Option<i64>,
    pub info: Option<PairInfo>,
}

impl RawPair {
    pub fn is_solana(&self) -> bool {
        self.chain_id.as_deref() == Some("solana")
    }

    /// Base token mint, skipping absent or empty addresses
    pub fn base_address(&self) -> Option<&str> {
        self.base_token
            .as_ref()
            .and_then(|t| t.address.as_deref())
            .filter(|a| !a.is_empty())
    }

    pub fn base_symbol(&self) -> Option<&str> {
        self.base_token.as_ref().and_then(|t| t.symbol.as_deref())
    }

    pub fn liquidity_usd(&self) -> f64 {
        self.liquidity.as_ref().and_then(|l| l.usd).unwrap_or(0.0)
    }

    pub fn volume_h24(&self) -> f64 {
        self.volume.as_ref().and_then(|v| v.h24).unwrap_or(0.0)
    }

    pub fn price_change_m5(&self) -> f64 {
        self.price_change.as_ref().and_then(|p| p.m5).unwrap_or(0.0)
    }

    pub fn price_change_h1(&self) -> f64 {
        self.price_change.as_ref().and_then(|p| p.h1).unwrap_or(0.0)
    }

    pub fn price_change_h6(&self) -> f64 {
        self.price_change.as_ref().and_then(|p| p.h6).unwrap_or(0.0)
    }

    pub fn price_change_h24(&self) -> f64 {
        self.price_change
            .as_ref()
            .and_then(|p| p.h24)
            .unwrap_or(0.0)
    }

    pub fn buys_h24(&self) -> u64 {
        self.txns
            .as_ref()
            .and_then(|t| t.h24.as_ref())
            .and_then(|w| w.buys)
            .unwrap_or(0)
    }

    pub fn sells_h24(&self) -> u64 {
        self.txns
            .as_ref()
            .and_then(|t| t.h24.as_ref())
            .and_then(|w| w.sells)
            .unwrap_or(0)
    }
}

/// Token leg of a pair
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairToken {
    pub address: Option<String>,
    pub name: Option<String>,
    pub symbol: Option<String>,
}

/// Buy/sell counts bucketed by time window
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairTxns {
    pub m5: Option<TxnWindow>,
    pub h1: Option<TxnWindow>,
    pub h6: Option<TxnWindow>,
    pub h24: Option<TxnWindow>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TxnWindow {
    pub buys: Option<u64>,
    pub sells: Option<u64>,
}

/// Per-window numeric buckets, used for both volume and price change
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairWindows {
    pub m5: Option<f64>,
    pub h1: Option<f64>,
    pub h6: Option<f64>,
    pub h24: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairLiquidity {
    pub usd: Option<f64>,
    pub base: Option<f64>,
    pub quote: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairInfo {
    pub image_url: Option<String>,
    pub description: Option<String>,
}

/// Entry from the top-boosts endpoint
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoostedToken {
    pub url: Option<String>,
    pub chain_id: Option<String>,
    pub token_address: Option<String>,
    pub amount: Option<f64>,
    pub total_amount: Option<f64>,
}

impl BoostedToken {
    pub fn is_solana(&self) -> bool {
        self.chain_id.as_deref() == Some("solana")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_PAIR: &str = r#"{
        "chainId": "solana",
        "dexId": "raydium",
        "url": "https://dexscreener.com/solana/abc",
        "pairAddress": "PairAddr111",
        "baseToken": {"address": "Mint111", "name": "Foo Coin", "symbol": "FOO"},
        "quoteToken": {"address": "So11111111111111111111111111111111111111112", "name": "Wrapped SOL", "symbol": "SOL"},
        "priceUsd": "0.00123",
        "txns": {"h24": {"buys": 120, "sells": 80}},
        "volume": {"h24": 50000.0},
        "priceChange": {"m5": -2.5, "h1": 12.0, "h24": 40.0},
        "liquidity": {"usd": 15000.0, "base": 1.0, "quote": 2.0},
        "fdv": 950000.0,
        "pairCreatedAt": 1700000000000,
        "labels": ["v3"],
        "boosts": {"active": 2}
    }"#;

    #[test]
    fn test_parse_full_pair() {
        let pair: RawPair = serde_json::from_str(SAMPLE_PAIR).unwrap();
        assert!(pair.is_solana());
        assert_eq!(pair.base_address(), Some("Mint111"));
        assert_eq!(pair.base_symbol(), Some("FOO"));
        assert_eq!(pair.liquidity_usd(), 15000.0);
        assert_eq!(pair.volume_h24(), 50000.0);
        assert_eq!(pair.buys_h24(), 120);
        assert_eq!(pair.sells_h24(), 80);
        assert_eq!(pair.price_change_h1(), 12.0);
        assert_eq!(pair.pair_created_at, Some(1_700_000_000_000));
    }

    #[test]
    fn test_parse_sparse_pair_defaults() {
        let pair: RawPair = serde_json::from_str("{}").unwrap();
        assert!(!pair.is_solana());
        assert_eq!(pair.base_address(), None);
        assert_eq!(pair.liquidity_usd(), 0.0);
        assert_eq!(pair.volume_h24(), 0.0);
        assert_eq!(pair.buys_h24(), 0);
        assert_eq!(pair.price_change_m5(), 0.0);
    }

    #[test]
    fn test_empty_base_address_is_none() {
        let pair: RawPair =
            serde_json::from_str(r#"{"baseToken": {"address": "", "symbol": "X"}}"#).unwrap();
        assert_eq!(pair.base_address(), None);
        assert_eq!(pair.base_symbol(), Some("X"));
    }

    #[test]
    fn test_pairs_response_null_pairs() {
        let resp: PairsResponse =
            serde_json::from_str(r#"{"schemaVersion": "1.0.0", "pairs": null}"#).unwrap();
        assert!(resp.pairs.is_none());
    }

    #[test]
    fn test_parse_boosted_tokens() {
        let json = r#"[
            {"url": "https://dexscreener.com/solana/x", "chainId": "solana", "tokenAddress": "Mint111", "amount": 500, "totalAmount": 1000},
            {"chainId": "ethereum", "tokenAddress": "0xdead"}
        ]"#;
        let boosts: Vec<BoostedToken> = serde_json::from_str(json).unwrap();
        assert_eq!(boosts.len(), 2);
        assert!(boosts[0].is_solana());
        assert!(!boosts[1].is_solana());
        assert_eq!(boosts[0].token_address.as_deref(), Some("Mint111"));
    }
}
