/// Shared application state
///
/// Owned by the composition root and passed down as a handle; no module
/// reaches for it through a global.
use crate::screener::prefs::Preferences;
use crate::screener::token::Token;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::RwLock;

pub type SharedAppState = Arc<RwLock<AppState>>;

#[derive(Debug, Default)]
pub struct AppState {
    /// Last non-empty ranked snapshot
    pub tokens: Vec<Token>,
    pub preferences: Preferences,
    pub stats: CycleStats,
}

#[derive(Debug, Default, Clone)]
pub struct CycleStats {
    pub total_cycles: u64,
    /// Cycles where discovery came back empty and the old list was kept
    pub degraded_cycles: u64,
    pub last_refresh: Option<DateTime<Utc>>,
    pub last_token_count: usize,
}

impl AppState {
    pub fn new(preferences: Preferences) -> Self {
        Self {
            tokens: Vec::new(),
            preferences,
            stats: CycleStats::default(),
        }
    }

    /// Fold one discovery result into the state
    ///
    /// An empty snapshot never overwrites a previous list; it only bumps
    /// the degraded counter. Returns whether the list was replaced.
    pub fn apply_refresh(&mut self, tokens: Vec<Token>) -> bool {
        self.stats.total_cycles += 1;

        if tokens.is_empty() {
            self.stats.degraded_cycles += 1;
            return false;
        }

        self.stats.last_token_count = tokens.len();
        self.stats.last_refresh = Some(Utc::now());
        self.tokens = tokens;
        true
    }
}

pub fn shared(state: AppState) -> SharedAppState {
    Arc::new(RwLock::new(state))
}
