/// Log tags identifying the module a message originates from
///
/// Tags map one-to-one onto `--debug-<key>` command-line flags via
/// [`LogTag::to_debug_key`].

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogTag {
    /// Application lifecycle (startup, shutdown, wiring)
    System,
    /// Configuration loading and overrides
    Config,
    /// Token discovery pipeline (boosts, search, merge, rank)
    Discovery,
    /// HTTP requests to upstream APIs
    Http,
    /// AI analysis collaborator
    Ai,
    /// Preference store (watchlist, language, theme)
    Prefs,
    /// Periodic refresh loop and summary output
    Monitor,
}

impl LogTag {
    /// Key used in `--debug-<key>` / `--verbose-<key>` flags
    pub fn to_debug_key(&self) -> String {
        match self {
            LogTag::System => "system",
            LogTag::Config => "config",
            LogTag::Discovery => "discovery",
            LogTag::Http => "http",
            LogTag::Ai => "ai",
            LogTag::Prefs => "prefs",
            LogTag::Monitor => "monitor",
        }
        .to_string()
    }

    /// Uncolored tag text for file output
    pub fn to_plain_string(&self) -> String {
        match self {
            LogTag::System => "SYSTEM",
            LogTag::Config => "CONFIG",
            LogTag::Discovery => "DISCOVER",
            LogTag::Http => "HTTP",
            LogTag::Ai => "AI",
            LogTag::Prefs => "PREFS",
            LogTag::Monitor => "MONITOR",
        }
        .to_string()
    }
}

impl std::fmt::Display for LogTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_plain_string())
    }
}
