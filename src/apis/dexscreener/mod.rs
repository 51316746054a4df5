/// DexScreener API client for the discovery pipeline
///
/// API Documentation: https://docs.dexscreener.com/api/reference
///
/// Endpoints used:
/// 1. {boosts}                      - Top boosted tokens across all chains
/// 2. {pairs}/tokens/{addresses}    - Pairs for up to 30 token addresses (batch)
/// 3. {pairs}/search?q={query}      - Keyword pair search
///
/// Endpoints come from `[discovery]` config so tests can point the client at
/// a local server.
pub mod types;

pub use self::types::{
    BoostedToken, PairInfo, PairLiquidity, PairToken, PairTxns, PairWindows, PairsResponse,
    RawPair, TxnWindow,
};

use crate::apis::client::RateLimiter;
use crate::logger::{self, LogTag};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::{Duration, Instant};
use url::Url;

/// Maximum token addresses per batch pair lookup
pub const MAX_TOKENS_PER_REQUEST: usize = 30;

/// Rate limits per endpoint (requests per minute)
pub const RATE_LIMIT_PAIRS_PER_MINUTE: usize = 300;
pub const RATE_LIMIT_SEARCH_PER_MINUTE: usize = 300;
pub const RATE_LIMIT_BOOSTS_PER_MINUTE: usize = 60;

/// DexScreener API client
#[derive(Debug)]
pub struct DexScreenerClient {
    client: Client,
    pairs_base: String,
    boosts_url: String,
    timeout: Duration,
    limiter_pairs: RateLimiter,
    limiter_search: RateLimiter,
    limiter_boosts: RateLimiter,
}

impl DexScreenerClient {
    pub fn new(
        pairs_endpoint: &str,
        boosts_endpoint: &str,
        timeout_secs: u64,
    ) -> Result<Self, String> {
        if timeout_secs == 0 {
            return Err("Timeout must be greater than zero".to_string());
        }

        Url::parse(pairs_endpoint)
            .map_err(|e| format!("Invalid pairs endpoint '{}': {}", pairs_endpoint, e))?;
        Url::parse(boosts_endpoint)
            .map_err(|e| format!("Invalid boosts endpoint '{}': {}", boosts_endpoint, e))?;

        Ok(Self {
            client: Client::new(),
            pairs_base: pairs_endpoint.trim_end_matches('/').to_string(),
            boosts_url: boosts_endpoint.to_string(),
            timeout: Duration::from_secs(timeout_secs),
            limiter_pairs: RateLimiter::new(RATE_LIMIT_PAIRS_PER_MINUTE),
            limiter_search: RateLimiter::new(RATE_LIMIT_SEARCH_PER_MINUTE),
            limiter_boosts: RateLimiter::new(RATE_LIMIT_BOOSTS_PER_MINUTE),
        })
    }

    async fn get_json<T>(
        &self,
        endpoint: &str,
        builder: reqwest::RequestBuilder,
        limiter: &RateLimiter,
    ) -> Result<T, String>
    where
        T: DeserializeOwned,
    {
        let guard = limiter
            .acquire()
            .await
            .map_err(|e| format!("Rate limiter error: {}", e))?;

        let start = Instant::now();
        let response_result = builder.timeout(self.timeout).send().await;
        drop(guard);
        let elapsed = start.elapsed().as_millis();

        let response = response_result.map_err(|e| format!("Request failed: {}", e))?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(format!("DexScreener API error {}: {}", status, body));
        }

        logger::verbose(
            LogTag::Http,
            &format!("GET {} -> {} in {}ms", endpoint, status, elapsed),
        );

        response
            .json::<T>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))
    }

    /// Fetch the top boosted tokens (all chains; callers filter)
    pub async fn get_top_boosts(&self) -> Result<Vec<BoostedToken>, String> {
        logger::debug(LogTag::Http, "Fetching top boosted tokens");

        self.get_json(
            "token-boosts/top",
            self.client.get(&self.boosts_url),
            &self.limiter_boosts,
        )
        .await
    }

    /// Fetch pairs for up to 30 token addresses in one call
    pub async fn get_pairs_for_tokens(&self, addresses: &[String]) -> Result<Vec<RawPair>, String> {
        if addresses.is_empty() {
            return Ok(Vec::new());
        }

        if addresses.len() > MAX_TOKENS_PER_REQUEST {
            return Err(format!(
                "Too many addresses: {} (max {})",
                addresses.len(),
                MAX_TOKENS_PER_REQUEST
            ));
        }

        let url = format!("{}/tokens/{}", self.pairs_base, addresses.join(","));

        logger::debug(
            LogTag::Http,
            &format!("Fetching pairs for {} token addresses", addresses.len()),
        );

        let data: PairsResponse = self
            .get_json("tokens", self.client.get(&url), &self.limiter_pairs)
            .await?;

        Ok(data.pairs.unwrap_or_default())
    }

    /// Search pairs by keyword
    pub async fn search_pairs(&self, query: &str) -> Result<Vec<RawPair>, String> {
        if query.trim().is_empty() {
            return Err("Query cannot be empty".to_string());
        }

        let url = format!("{}/search", self.pairs_base);

        logger::debug(LogTag::Http, &format!("Searching pairs: query={}", query));

        let builder = self.client.get(&url).query(&[("q", query)]);
        let data: PairsResponse = self
            .get_json("search", builder, &self.limiter_search)
            .await?;

        Ok(data.pairs.unwrap_or_default())
    }
}
