/// Google Gemini client for token verdicts
///
/// API Documentation: https://ai.google.dev/api/rest
///
/// Endpoint:
/// - POST {endpoint}/models/{model}:generateContent
///
/// Analysis never propagates errors: with no API key configured the client
/// answers OFFLINE without touching the network, and any transport or parse
/// failure degrades to an ERROR verdict. A dead AI node must never take the
/// screener down with it.
pub mod types;

pub use self::types::{
    analysis_response_schema, GeminiContent, GeminiGenerationConfig, GeminiPart, GeminiRequest,
    GeminiResponse, TokenAnalysis,
};

use crate::apis::client::RateLimiter;
use crate::config::AiConfig;
use crate::logger::{self, LogTag};
use crate::screener::token::Token;
use reqwest::Client;
use std::time::Duration;

const TIMEOUT_SECS: u64 = 30;
const RATE_LIMIT_PER_MINUTE: usize = 10;

/// Gemini API client
pub struct GeminiClient {
    api_key: String,
    model: String,
    temperature: f64,
    endpoint: String,
    client: Client,
    timeout: Duration,
    rate_limiter: RateLimiter,
}

impl GeminiClient {
    pub fn new(config: &AiConfig) -> Self {
        Self {
            api_key: config.api_key.trim().to_string(),
            model: config.model.clone(),
            temperature: config.temperature,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            client: Client::new(),
            timeout: Duration::from_secs(TIMEOUT_SECS),
            rate_limiter: RateLimiter::new(RATE_LIMIT_PER_MINUTE),
        }
    }

    /// No API key configured; verdicts are synthesized locally
    pub fn is_offline(&self) -> bool {
        self.api_key.is_empty()
    }

    fn offline_analysis() -> TokenAnalysis {
        TokenAnalysis {
            verdict: "OFFLINE".to_string(),
            analysis: "Terminal restricted. Set API_KEY to enable AI.".to_string(),
            score: 0.0,
        }
    }

    fn error_analysis() -> TokenAnalysis {
        TokenAnalysis {
            verdict: "ERROR".to_string(),
            analysis: "AI Node congested.".to_string(),
            score: 50.0,
        }
    }

    fn build_prompt(token: &Token) -> String {
        format!(
            "Perform deep degen analysis on this Solana token. Use slang like 'moon', 'jeet', 'rug', 'pumping'.\n\
             Token: {} ({})\n\
             Market Cap: ${}\n\
             24h Vol: ${}\n\
             Liquidity: ${}\n\
             Bonding: {}%",
            token.name,
            token.symbol,
            token.market_cap,
            token.volume_24h,
            token.liquidity,
            token.bonding_curve
        )
    }

    fn build_request(&self, token: &Token) -> GeminiRequest {
        GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart {
                    text: Self::build_prompt(token),
                }],
                role: Some("user".to_string()),
            }],
            generation_config: Some(GeminiGenerationConfig {
                response_mime_type: Some("application/json".to_string()),
                temperature: Some(self.temperature),
                response_schema: Some(analysis_response_schema()),
            }),
        }
    }

    /// Ask the model for a verdict on one token
    ///
    /// Always returns an analysis; failures are folded into ERROR verdicts.
    pub async fn analyze_token(&self, token: &Token) -> TokenAnalysis {
        if self.is_offline() {
            logger::debug(
                LogTag::Ai,
                &format!("No API key, OFFLINE verdict for {}", token.symbol),
            );
            return Self::offline_analysis();
        }

        logger::debug(
            LogTag::Ai,
            &format!(
                "Requesting verdict for {} (model={})",
                token.symbol, self.model
            ),
        );

        match self.execute_analysis(token).await {
            Ok(analysis) => analysis,
            Err(e) => {
                logger::warning(
                    LogTag::Ai,
                    &format!("Analysis failed for {}: {}", token.symbol, e),
                );
                Self::error_analysis()
            }
        }
    }

    async fn execute_analysis(&self, token: &Token) -> Result<TokenAnalysis, String> {
        let guard = self
            .rate_limiter
            .acquire()
            .await
            .map_err(|e| format!("Rate limiter error: {}", e))?;

        // Key travels as a query parameter; never log the full URL
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.endpoint, self.model, self.api_key
        );

        let response_result = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&self.build_request(token))
            .timeout(self.timeout)
            .send()
            .await;

        drop(guard);

        let response = response_result.map_err(|e| format!("Request failed: {}", e))?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(format!("Gemini API error {}: {}", status, body));
        }

        let gemini_response = response
            .json::<GeminiResponse>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))?;

        let text = gemini_response
            .first_text()
            .ok_or_else(|| "No candidates in response".to_string())?;

        serde_json::from_str::<TokenAnalysis>(text)
            .map_err(|e| format!("Model returned malformed analysis: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_token() -> Token {
        Token {
            name: "Foo Coin".to_string(),
            symbol: "FOO".to_string(),
            market_cap: 950_000.0,
            volume_24h: 50_000.0,
            liquidity: 15_000.0,
            bonding_curve: 17,
            ..Default::default()
        }
    }

    fn config_with_key(api_key: &str, endpoint: &str) -> AiConfig {
        AiConfig {
            api_key: api_key.to_string(),
            endpoint: endpoint.to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_offline_without_key() {
        let client = GeminiClient::new(&AiConfig::default());
        assert!(client.is_offline());

        let analysis = client.analyze_token(&sample_token()).await;
        assert_eq!(analysis.verdict, "OFFLINE");
        assert_eq!(
            analysis.analysis,
            "Terminal restricted. Set API_KEY to enable AI."
        );
        assert_eq!(analysis.score, 0.0);
    }

    #[tokio::test]
    async fn test_whitespace_key_counts_as_offline() {
        let client = GeminiClient::new(&config_with_key("   ", "https://example.com"));
        assert!(client.is_offline());
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_degrades_to_error() {
        // Port 9 (discard) refuses connections immediately
        let client = GeminiClient::new(&config_with_key("test-key", "http://127.0.0.1:9"));
        assert!(!client.is_offline());

        let analysis = client.analyze_token(&sample_token()).await;
        assert_eq!(analysis.verdict, "ERROR");
        assert_eq!(analysis.analysis, "AI Node congested.");
        assert_eq!(analysis.score, 50.0);
    }

    #[test]
    fn test_prompt_includes_token_metrics() {
        let prompt = GeminiClient::build_prompt(&sample_token());
        assert!(prompt.starts_with("Perform deep degen analysis on this Solana token."));
        assert!(prompt.contains("Token: Foo Coin (FOO)"));
        assert!(prompt.contains("Market Cap: $950000"));
        assert!(prompt.contains("24h Vol: $50000"));
        assert!(prompt.contains("Liquidity: $15000"));
        assert!(prompt.contains("Bonding: 17%"));
    }

    #[test]
    fn test_request_carries_configured_temperature() {
        let mut config = config_with_key("test-key", "https://example.com");
        config.temperature = 0.9;
        let client = GeminiClient::new(&config);

        let request = client.build_request(&sample_token());
        let generation = request.generation_config.unwrap();
        assert_eq!(generation.temperature, Some(0.9));
        assert_eq!(
            generation.response_mime_type.as_deref(),
            Some("application/json")
        );
        assert!(generation.response_schema.is_some());
    }
}
