/// User preferences persisted as JSON next to the config file
///
/// A missing file is a first run and yields defaults silently; a corrupt
/// file is logged and also yields defaults rather than failing startup.
use crate::logger::{self, LogTag};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    /// Watched base-token addresses, in the order they were added
    pub watchlist: Vec<String>,
    pub language: String,
    pub theme: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            watchlist: Vec::new(),
            language: "en".to_string(),
            theme: "dark".to_string(),
        }
    }
}

impl Preferences {
    pub fn is_watched(&self, address: &str) -> bool {
        self.watchlist.iter().any(|a| a == address)
    }

    /// Add the address to the watchlist, or remove it if already present.
    /// Returns true when the address is watched afterwards.
    pub fn toggle_watchlist(&mut self, address: &str) -> bool {
        if let Some(pos) = self.watchlist.iter().position(|a| a == address) {
            self.watchlist.remove(pos);
            false
        } else {
            self.watchlist.push(address.to_string());
            true
        }
    }
}

pub fn load_preferences(path: &Path) -> Preferences {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(_) => return Preferences::default(),
    };

    match serde_json::from_str(&content) {
        Ok(prefs) => prefs,
        Err(e) => {
            logger::warning(
                LogTag::Prefs,
                &format!(
                    "Could not parse {}, falling back to defaults: {}",
                    path.display(),
                    e
                ),
            );
            Preferences::default()
        }
    }
}

pub fn save_preferences(path: &Path, prefs: &Preferences) -> Result<(), String> {
    let json = serde_json::to_string_pretty(prefs)
        .map_err(|e| format!("Failed to serialize preferences: {}", e))?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create {}: {}", parent.display(), e))?;
    }

    std::fs::write(path, json).map_err(|e| format!("Failed to write {}: {}", path.display(), e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let prefs = Preferences::default();
        assert!(prefs.watchlist.is_empty());
        assert_eq!(prefs.language, "en");
        assert_eq!(prefs.theme, "dark");
    }

    #[test]
    fn test_toggle_watchlist() {
        let mut prefs = Preferences::default();

        assert!(prefs.toggle_watchlist("mintA"));
        assert!(prefs.is_watched("mintA"));

        assert!(!prefs.toggle_watchlist("mintA"));
        assert!(!prefs.is_watched("mintA"));
        assert!(prefs.watchlist.is_empty());
    }

    #[test]
    fn test_watchlist_keeps_insertion_order() {
        let mut prefs = Preferences::default();
        prefs.toggle_watchlist("mintB");
        prefs.toggle_watchlist("mintA");

        assert_eq!(prefs.watchlist, vec!["mintB", "mintA"]);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs").join("preferences.json");

        let mut prefs = Preferences::default();
        prefs.toggle_watchlist("mintA");
        prefs.theme = "light".to_string();

        save_preferences(&path, &prefs).unwrap();
        assert_eq!(load_preferences(&path), prefs);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load_preferences(&dir.path().join("nope.json"));
        assert_eq!(loaded, Preferences::default());
    }

    #[test]
    fn test_corrupt_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        std::fs::write(&path, "{not json").unwrap();

        assert_eq!(load_preferences(&path), Preferences::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        std::fs::write(&path, r#"{"watchlist": ["mintZ"]}"#).unwrap();

        let loaded = load_preferences(&path);
        assert_eq!(loaded.watchlist, vec!["mintZ"]);
        assert_eq!(loaded.language, "en");
        assert_eq!(loaded.theme, "dark");
    }
}
