/// Display entity and projection from raw DexScreener pairs
///
/// `project_pair` is total: any missing upstream field maps to a documented
/// default (0 for numbers, "Unknown"/"???" for identity strings), so a sparse
/// pair can never fail projection.
use crate::apis::dexscreener::RawPair;
use crate::config::ScoringConfig;
use crate::utils::abbreviate_address;
use serde::Serialize;

/// One screened token, the pipeline's sole output shape
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    /// Pair address; unique per pipeline run
    pub id: String,
    /// Base-token mint address
    pub address: String,
    pub pair_address: String,
    pub name: String,
    pub symbol: String,
    pub price: f64,
    /// Human age label: "{n}m", "{n}h", "{n}d" or "NEW"
    pub age: String,
    pub txns_24h: u64,
    pub volume_24h: f64,
    pub makers_24h: u64,
    pub price_change_5m: f64,
    pub price_change_1h: f64,
    pub price_change_6h: f64,
    pub price_change_24h: f64,
    pub liquidity: f64,
    pub market_cap: f64,
    pub image: String,
    pub url: String,
    /// Hype score in [0, score_cap]
    pub score: u32,
    /// Abbreviated deployer display, derived from the mint address
    pub creator: String,
    pub description: String,
    /// Progress toward the graduation liquidity, in [0, 100]
    pub bonding_curve: u8,
    /// Estimate derived from buy counts, not on-chain truth
    pub holders: u64,
}

/// Map one raw pair into a [`Token`]
///
/// `now_ms` is the wall clock in Unix milliseconds; passing it in keeps the
/// age label deterministic for a whole ranking pass.
pub fn project_pair(pair: &RawPair, scoring: &ScoringConfig, now_ms: i64) -> Token {
    let buys = pair.buys_h24();
    let sells = pair.sells_h24();
    let volume = pair.volume_h24();
    let liquidity = pair.liquidity_usd();

    let address = pair.base_address().unwrap_or_default().to_string();
    let pair_address = pair.pair_address.clone().unwrap_or_default();

    let name = pair
        .base_token
        .as_ref()
        .and_then(|t| t.name.clone())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "Unknown".to_string());

    let symbol = pair
        .base_symbol()
        .filter(|s| !s.is_empty())
        .unwrap_or("???")
        .to_string();

    let price = pair
        .price_usd
        .as_deref()
        .and_then(|s| s.parse::<f64>().ok())
        .unwrap_or(0.0)
        .max(0.0);

    let image = pair
        .info
        .as_ref()
        .and_then(|i| i.image_url.clone())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| {
            format!(
                "https://dd.dexscreener.com/ds-data/tokens/solana/{}.png",
                address
            )
        });

    let description = pair
        .info
        .as_ref()
        .and_then(|i| i.description.clone())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| {
            let dex = pair.dex_id.as_deref().unwrap_or("unknown");
            format!("Live pair on {}", dex.to_uppercase())
        });

    Token {
        id: pair_address.clone(),
        creator: abbreviate_address(&address),
        address,
        pair_address,
        name,
        symbol,
        price,
        age: format_age(pair.pair_created_at, now_ms),
        txns_24h: buys + sells,
        volume_24h: volume,
        makers_24h: ((buys as f64) * 0.65).floor() as u64 + 1,
        price_change_5m: pair.price_change_m5(),
        price_change_1h: pair.price_change_h1(),
        price_change_6h: pair.price_change_h6(),
        price_change_24h: pair.price_change_h24(),
        liquidity,
        market_cap: pair.fdv.unwrap_or(0.0),
        image,
        url: pair.url.clone().unwrap_or_default(),
        score: compute_score(volume, buys, pair.price_change_m5(), scoring),
        description,
        bonding_curve: compute_bonding_curve(liquidity, scoring.graduation_liquidity_usd),
        holders: ((buys as f64) * 0.9).floor() as u64 + 10,
    }
}

/// Format elapsed time since creation as a compact label
///
/// Minutes under one hour, hours under one day, then days. A timestamp in
/// the future clamps to "0m"; an absent or nonpositive timestamp reads "NEW".
pub fn format_age(created_at_ms: Option<i64>, now_ms: i64) -> String {
    let ts = match created_at_ms {
        Some(ts) if ts > 0 => ts,
        _ => return "NEW".to_string(),
    };

    let minutes = (now_ms - ts).max(0) / 60_000;
    if minutes < 60 {
        return format!("{}m", minutes);
    }

    let hours = minutes / 60;
    if hours < 24 {
        format!("{}h", hours)
    } else {
        format!("{}d", hours / 24)
    }
}

/// Hype score: volume plus buy pressure plus short-term momentum, floored
/// and clamped to [0, score_cap]
fn compute_score(volume: f64, buys: u64, momentum_m5: f64, scoring: &ScoringConfig) -> u32 {
    let raw = volume / scoring.volume_divisor
        + (buys as f64) / scoring.buys_divisor
        + momentum_m5.abs() * scoring.momentum_multiplier;

    let floored = raw.floor();
    if floored <= 0.0 {
        return 0;
    }
    (floored as u64).min(scoring.score_cap as u64) as u32
}

/// Liquidity as a percentage of the graduation threshold, clamped to [0, 100]
fn compute_bonding_curve(liquidity: f64, graduation_liquidity: f64) -> u8 {
    if graduation_liquidity <= 0.0 {
        return 100;
    }

    let pct = (liquidity / graduation_liquidity * 100.0).floor();
    if pct <= 0.0 {
        0
    } else if pct >= 100.0 {
        100
    } else {
        pct as u8
    }
}
