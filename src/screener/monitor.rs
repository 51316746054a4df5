/// Polling loop: run discovery cycles, fold results into shared state,
/// log a ranked summary and an AI verdict for the front-runner.
use crate::apis::dexscreener::DexScreenerClient;
use crate::apis::gemini::GeminiClient;
use crate::config::{self, Config};
use crate::logger::{self, LogTag};
use crate::screener::pipeline::fetch_trending_tokens;
use crate::screener::queries::{sort_tokens, SortMode};
use crate::screener::state::SharedAppState;
use crate::utils::{check_shutdown_or_delay, format_price, format_usd};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Notify;

/// Run cycles until shutdown fires
///
/// The first cycle starts immediately; config is re-read every iteration
/// so interval and knob changes apply without a restart.
pub async fn run_screener_loop(
    state: SharedAppState,
    dex: Arc<DexScreenerClient>,
    ai: Arc<GeminiClient>,
    shutdown: Arc<Notify>,
) {
    logger::info(LogTag::Monitor, "📡 Screener loop started");

    loop {
        let cfg = config::get_config_clone();
        run_cycle(&state, &dex, &ai, &cfg).await;

        let interval = Duration::from_secs(cfg.monitor.poll_interval_secs.max(1));
        if check_shutdown_or_delay(&shutdown, interval).await {
            break;
        }
    }

    logger::info(LogTag::Monitor, "Screener loop stopped");
}

/// One discovery cycle against the given config snapshot
pub async fn run_cycle(
    state: &SharedAppState,
    dex: &DexScreenerClient,
    ai: &GeminiClient,
    cfg: &Config,
) {
    let started = Instant::now();
    let tokens = fetch_trending_tokens(dex, &cfg.discovery, &cfg.scoring).await;
    let fetched = tokens.len();
    let elapsed = started.elapsed().as_secs_f64();

    let refreshed = {
        let mut locked = state.write().await;
        locked.apply_refresh(tokens)
    };

    if !refreshed {
        logger::warning(
            LogTag::Monitor,
            &format!(
                "❌ Cycle produced no tokens after {:.1}s, keeping previous list",
                elapsed
            ),
        );
        return;
    }

    logger::info(
        LogTag::Monitor,
        &format!("✅ Cycle complete: {} tokens in {:.1}s", fetched, elapsed),
    );

    log_summary(state, cfg).await;
    analyze_front_runner(state, ai).await;
}

/// Log the top rows of the current snapshot under the configured sort;
/// watched tokens get a star
async fn log_summary(state: &SharedAppState, cfg: &Config) {
    let mode = SortMode::parse(&cfg.monitor.sort_mode).unwrap_or(SortMode::Trending);
    let (mut rows, prefs) = {
        let locked = state.read().await;
        (locked.tokens.clone(), locked.preferences.clone())
    };

    sort_tokens(&mut rows, mode);
    rows.truncate(cfg.monitor.summary_rows);

    logger::info(
        LogTag::Monitor,
        &format!("Top {} by {}:", rows.len(), mode.as_str()),
    );
    for (rank, token) in rows.iter().enumerate() {
        let star = if prefs.is_watched(&token.address) {
            " ⭐"
        } else {
            ""
        };
        logger::info(
            LogTag::Monitor,
            &format!(
                "{:>3}. {:<10} {:>10} age {:<4} vol {:>8} liq {:>8} 24h {:>+7.1}% score {:>3}{}",
                rank + 1,
                clip(&token.symbol, 10),
                format_price(token.price),
                token.age,
                format_usd(token.volume_24h),
                format_usd(token.liquidity),
                token.price_change_24h,
                token.score,
                star
            ),
        );
    }
}

/// Ask the AI for a verdict on the highest-ranked token
///
/// Skipped entirely when no API key is configured; the OFFLINE notice
/// would otherwise repeat every cycle.
async fn analyze_front_runner(state: &SharedAppState, ai: &GeminiClient) {
    if ai.is_offline() {
        return;
    }

    let front_runner = {
        let locked = state.read().await;
        locked.tokens.first().cloned()
    };
    let Some(token) = front_runner else { return };

    let analysis = ai.analyze_token(&token).await;
    logger::info(
        LogTag::Ai,
        &format!(
            "🤖 {} verdict: {} (score {:.0}) {}",
            token.symbol, analysis.verdict, analysis.score, analysis.analysis
        ),
    );
}

fn clip(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        text.chars().take(max_chars).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apis::gemini::GeminiClient;
    use crate::config::AiConfig;
    use crate::screener::prefs::Preferences;
    use crate::screener::state::{shared, AppState};
    use crate::screener::token::Token;

    fn unroutable_clients() -> (DexScreenerClient, GeminiClient) {
        // Port 9 (discard) refuses connections immediately
        let dex = DexScreenerClient::new(
            "http://127.0.0.1:9/latest/dex",
            "http://127.0.0.1:9/token-boosts/top/v1",
            1,
        )
        .unwrap();
        let ai = GeminiClient::new(&AiConfig::default());
        (dex, ai)
    }

    fn small_config() -> Config {
        let mut cfg = Config::default();
        cfg.discovery.keywords = vec!["pump".to_string()];
        cfg
    }

    #[tokio::test]
    async fn test_degraded_cycle_keeps_previous_snapshot() {
        let (dex, ai) = unroutable_clients();
        let cfg = small_config();

        let mut initial = AppState::new(Preferences::default());
        initial.apply_refresh(vec![Token {
            symbol: "KEEP".to_string(),
            ..Default::default()
        }]);
        let state = shared(initial);

        run_cycle(&state, &dex, &ai, &cfg).await;

        let locked = state.read().await;
        assert_eq!(locked.tokens.len(), 1);
        assert_eq!(locked.tokens[0].symbol, "KEEP");
        assert_eq!(locked.stats.total_cycles, 2);
        assert_eq!(locked.stats.degraded_cycles, 1);
    }

    #[tokio::test]
    async fn test_degraded_cycle_on_empty_state() {
        let (dex, ai) = unroutable_clients();
        let cfg = small_config();
        let state = shared(AppState::new(Preferences::default()));

        run_cycle(&state, &dex, &ai, &cfg).await;

        let locked = state.read().await;
        assert!(locked.tokens.is_empty());
        assert_eq!(locked.stats.degraded_cycles, 1);
    }

    #[test]
    fn test_clip() {
        assert_eq!(clip("FOO", 10), "FOO");
        assert_eq!(clip("ABCDEFGHIJKLMNO", 10), "ABCDEFGHIJ");
    }
}
