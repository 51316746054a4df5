use anyhow::{anyhow, Context, Result};
use std::sync::Arc;
use tokio::sync::Notify;

use pumpscreener::apis::dexscreener::DexScreenerClient;
use pumpscreener::apis::gemini::GeminiClient;
use pumpscreener::arguments;
use pumpscreener::config;
use pumpscreener::logger::{self, LogTag};
use pumpscreener::paths;
use pumpscreener::screener::monitor;
use pumpscreener::screener::prefs;
use pumpscreener::screener::state::{shared, AppState, SharedAppState};

#[tokio::main]
async fn main() {
    if arguments::is_help_requested() {
        arguments::print_help();
        return;
    }

    if let Err(e) = paths::ensure_all_directories() {
        eprintln!("Failed to prepare application directories: {}", e);
        std::process::exit(1);
    }

    logger::init();
    logger::info(LogTag::System, "🚀 PumpScreener starting up...");
    arguments::print_debug_info();

    match run().await {
        Ok(()) => {
            logger::info(LogTag::System, "✅ Shutdown complete");
            logger::flush();
        }
        Err(e) => {
            logger::error(LogTag::System, &format!("Fatal error: {:#}", e));
            logger::flush();
            std::process::exit(1);
        }
    }
}

async fn run() -> Result<()> {
    config::load_config()
        .map_err(|e| anyhow!(e))
        .context("loading configuration")?;
    apply_cli_overrides()?;

    let cfg = config::get_config_clone();

    let dex = Arc::new(
        DexScreenerClient::new(
            &cfg.discovery.pairs_endpoint,
            &cfg.discovery.boosts_endpoint,
            cfg.discovery.request_timeout_secs,
        )
        .map_err(|e| anyhow!(e))
        .context("building DexScreener client")?,
    );

    let ai = Arc::new(GeminiClient::new(&cfg.ai));
    if ai.is_offline() {
        logger::info(
            LogTag::Ai,
            "No AI key configured, verdicts run in offline mode",
        );
    }

    let preferences = prefs::load_preferences(&paths::get_preferences_path());
    logger::info(
        LogTag::Prefs,
        &format!("Watchlist: {} entries", preferences.watchlist.len()),
    );

    let state: SharedAppState = shared(AppState::new(preferences));

    // notify_one stores a permit, so a Ctrl-C that lands mid-cycle is not
    // lost before the loop reaches its next wait
    let shutdown = Arc::new(Notify::new());
    {
        let shutdown = Arc::clone(&shutdown);
        ctrlc::set_handler(move || {
            shutdown.notify_one();
        })
        .context("installing Ctrl-C handler")?;
    }

    if arguments::is_once_enabled() {
        let cfg = config::get_config_clone();
        monitor::run_cycle(&state, &dex, &ai, &cfg).await;
    } else {
        monitor::run_screener_loop(
            Arc::clone(&state),
            Arc::clone(&dex),
            Arc::clone(&ai),
            Arc::clone(&shutdown),
        )
        .await;
    }

    let stats = {
        let locked = state.read().await;
        locked.stats.clone()
    };
    logger::info(
        LogTag::System,
        &format!(
            "Cycles run: {} total, {} degraded",
            stats.total_cycles, stats.degraded_cycles
        ),
    );

    Ok(())
}

/// Fold --interval and --sort into the loaded config
fn apply_cli_overrides() -> Result<()> {
    let interval = arguments::get_interval_override();
    let sort = arguments::get_sort_override();
    if interval.is_none() && sort.is_none() {
        return Ok(());
    }

    config::update_config(|cfg| {
        if let Some(secs) = interval {
            cfg.monitor.poll_interval_secs = secs;
        }
        if let Some(mode) = sort {
            cfg.monitor.sort_mode = mode;
        }
    })
    .map_err(|e| anyhow!(e))
}
