/// Token discovery pipeline
///
/// Four stages per cycle: pull boosted token addresses and resolve their
/// pairs, fan out keyword searches, merge with dedup and filtering, then
/// rank and project into display tokens. Every network failure degrades to
/// an empty contribution; a cycle never aborts because one source is down.
use crate::apis::dexscreener::{DexScreenerClient, RawPair, MAX_TOKENS_PER_REQUEST};
use crate::config::{DiscoveryConfig, ScoringConfig};
use crate::logger::{self, LogTag};
use crate::screener::token::{project_pair, Token};
use futures::future::join_all;
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

/// Run one full discovery cycle and return ranked tokens
///
/// Returns an empty list only when every source came back empty, which the
/// caller treats as a degraded cycle.
pub async fn fetch_trending_tokens(
    client: &DexScreenerClient,
    discovery: &DiscoveryConfig,
    scoring: &ScoringConfig,
) -> Vec<Token> {
    let mut all_pairs = fetch_boosted_pairs(client, discovery).await;
    all_pairs.extend(search_fanout(client, &discovery.keywords).await);

    if all_pairs.is_empty() {
        logger::warning(LogTag::Discovery, "No pairs from any source this cycle");
        return Vec::new();
    }

    let candidates = all_pairs.len();
    let unique = dedup_by_base_address(all_pairs);
    let filtered = filter_pairs(unique, discovery);
    logger::debug(
        LogTag::Discovery,
        &format!(
            "Merged {} candidate pairs down to {} after dedup and filters",
            candidates,
            filtered.len()
        ),
    );

    let now_ms = chrono::Utc::now().timestamp_millis();
    rank_and_project(filtered, discovery.max_tokens, scoring, now_ms)
}

/// Stage 1: boosted tokens resolved to their trading pairs
///
/// Addresses are looked up in fixed-size chunks, sequentially. A failed
/// chunk is skipped; a failed boosts fetch yields nothing at all.
async fn fetch_boosted_pairs(
    client: &DexScreenerClient,
    discovery: &DiscoveryConfig,
) -> Vec<RawPair> {
    let boosts = match client.get_top_boosts().await {
        Ok(boosts) => boosts,
        Err(e) => {
            logger::warning(LogTag::Discovery, &format!("Boosts fetch failed: {}", e));
            return Vec::new();
        }
    };

    let addresses: Vec<String> = boosts
        .iter()
        .filter(|b| b.is_solana())
        .filter_map(|b| b.token_address.clone())
        .collect();

    if addresses.is_empty() {
        logger::debug(LogTag::Discovery, "No Solana tokens in the boosted set");
        return Vec::new();
    }

    let chunk_size = discovery.chunk_size.clamp(1, MAX_TOKENS_PER_REQUEST);
    let mut pairs = Vec::new();
    for chunk in addresses.chunks(chunk_size) {
        match client.get_pairs_for_tokens(chunk).await {
            Ok(chunk_pairs) => pairs.extend(chunk_pairs),
            Err(e) => {
                logger::debug(
                    LogTag::Discovery,
                    &format!("Pair lookup failed for a chunk of {}: {}", chunk.len(), e),
                );
            }
        }
    }

    logger::debug(
        LogTag::Discovery,
        &format!(
            "Boosted set: {} addresses resolved to {} pairs",
            addresses.len(),
            pairs.len()
        ),
    );
    pairs
}

/// Stage 2: concurrent keyword searches, joined without aborting
///
/// Each failed or empty search contributes nothing; the join always
/// completes with whatever the other keywords found.
async fn search_fanout(client: &DexScreenerClient, keywords: &[String]) -> Vec<RawPair> {
    let searches = keywords.iter().map(|keyword| async move {
        match client.search_pairs(keyword).await {
            Ok(pairs) => {
                let solana: Vec<RawPair> = pairs.into_iter().filter(|p| p.is_solana()).collect();
                logger::verbose(
                    LogTag::Discovery,
                    &format!("Search '{}' matched {} Solana pairs", keyword, solana.len()),
                );
                solana
            }
            Err(e) => {
                logger::debug(
                    LogTag::Discovery,
                    &format!("Search '{}' failed: {}", keyword, e),
                );
                Vec::new()
            }
        }
    });

    join_all(searches).await.into_iter().flatten().collect()
}

/// Stage 3a: collapse duplicate base addresses, keeping the deepest pool
///
/// First occurrence fixes the position; a later duplicate replaces it in
/// place only when its liquidity is strictly higher, so ties keep the
/// earlier pair. Pairs without a base address are dropped.
fn dedup_by_base_address(pairs: Vec<RawPair>) -> Vec<RawPair> {
    let mut index_by_address: HashMap<String, usize> = HashMap::new();
    let mut winners: Vec<RawPair> = Vec::new();

    for pair in pairs {
        let address = match pair.base_address() {
            Some(address) => address.to_string(),
            None => continue,
        };

        match index_by_address.get(&address) {
            None => {
                index_by_address.insert(address, winners.len());
                winners.push(pair);
            }
            Some(&slot) => {
                if pair.liquidity_usd() > winners[slot].liquidity_usd() {
                    winners[slot] = pair;
                }
            }
        }
    }

    winners
}

/// Stage 3b: drop majors and thin pools
///
/// Symbol exclusion is case-insensitive; a pair with no symbol at all is
/// kept. The liquidity floor is strict, so a pair sitting exactly on it
/// is rejected.
fn filter_pairs(pairs: Vec<RawPair>, discovery: &DiscoveryConfig) -> Vec<RawPair> {
    let excluded: HashSet<String> = discovery
        .excluded_symbols
        .iter()
        .map(|s| s.to_uppercase())
        .collect();

    pairs
        .into_iter()
        .filter(|pair| {
            let is_excluded = pair
                .base_symbol()
                .map(|s| excluded.contains(&s.to_uppercase()))
                .unwrap_or(false);
            !is_excluded && pair.liquidity_usd() > discovery.min_liquidity_usd
        })
        .collect()
}

/// Stage 4: rank by momentum-weighted volume, truncate, project
///
/// The sort is stable and descending, so pairs with equal weight keep
/// their merge order and repeated runs over the same input agree.
fn rank_and_project(
    mut pairs: Vec<RawPair>,
    max_tokens: usize,
    scoring: &ScoringConfig,
    now_ms: i64,
) -> Vec<Token> {
    pairs.sort_by(|a, b| {
        ranking_weight(b)
            .partial_cmp(&ranking_weight(a))
            .unwrap_or(Ordering::Equal)
    });
    pairs.truncate(max_tokens);

    pairs
        .iter()
        .map(|pair| project_pair(pair, scoring, now_ms))
        .collect()
}

/// 24h volume amplified by absolute 1h momentum
fn ranking_weight(pair: &RawPair) -> f64 {
    pair.volume_h24() * (1.0 + pair.price_change_h1().abs() / 100.0)
}
