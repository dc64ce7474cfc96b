//! Persistent recently-used emoji list
//!
//! Tracks symbols picked from the palette and persists them to disk.
//! Entries are stored in MRU (most recently used) order with a capacity limit.

use std::path::Path;
use std::time::SystemTime;

use serde::{Deserialize, Serialize};

/// Maximum number of entries to keep
pub const MAX_ENTRIES: usize = 20;

/// A single entry in the recent emoji list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentEntry {
    /// The symbol as inserted (one grapheme)
    pub symbol: String,
    /// Timestamp when last picked (Unix epoch seconds)
    pub used_at: u64,
    /// Number of times picked (for ranking)
    #[serde(default)]
    pub use_count: u32,
}

impl RecentEntry {
    /// Create a new entry for the current time
    pub fn new(symbol: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            used_at: now_epoch_secs(),
            use_count: 1,
        }
    }

    /// Update entry for another pick
    pub fn touch(&mut self) {
        self.used_at = now_epoch_secs();
        self.use_count += 1;
    }
}

pub(crate) fn now_epoch_secs() -> u64 {
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Persistent recent emoji list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentEmojis {
    /// Schema version for forward compatibility
    #[serde(default)]
    pub version: u32,
    /// Entries, most recent first
    pub entries: Vec<RecentEntry>,
}

impl RecentEmojis {
    pub const CURRENT_VERSION: u32 = 1;

    /// Load the list from the config dir
    pub fn load() -> Self {
        match crate::config_paths::recent_emojis_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load the list from a specific file; missing or corrupt files yield an
    /// empty list
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
                tracing::warn!("Ignoring corrupt recent emoji list at {}: {}", path.display(), e);
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Save the list to the config dir
    pub fn save(&self) -> std::io::Result<()> {
        let Some(path) = crate::config_paths::recent_emojis_path() else {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "No config directory available",
            ));
        };
        crate::config_paths::ensure_config_dir()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        self.save_to(&path)
    }

    /// Save the list to a specific file
    pub fn save_to(&self, path: &Path) -> std::io::Result<()> {
        let snapshot = Self {
            version: Self::CURRENT_VERSION,
            entries: self.entries.clone(),
        };
        let contents = serde_json::to_string_pretty(&snapshot)?;
        std::fs::write(path, contents)
    }

    /// Record a pick (or move an existing entry to the front)
    pub fn add(&mut self, symbol: &str) {
        if symbol.is_empty() {
            return;
        }

        if let Some(idx) = self.find_index(symbol) {
            self.entries[idx].touch();
            let entry = self.entries.remove(idx);
            self.entries.insert(0, entry);
        } else {
            self.entries.insert(0, RecentEntry::new(symbol));
        }

        // Enforce capacity limit
        self.entries.truncate(MAX_ENTRIES);
    }

    /// Remove a symbol from the list
    pub fn remove(&mut self, symbol: &str) {
        self.entries.retain(|e| e.symbol != symbol);
    }

    /// Clear all entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Symbols, most recent first
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.symbol.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find index of entry by symbol
    fn find_index(&self, symbol: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.symbol == symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_retrieve() {
        let mut recent = RecentEmojis::default();
        recent.add("👍");

        assert_eq!(recent.entries.len(), 1);
        assert_eq!(recent.entries[0].symbol, "👍");
    }

    #[test]
    fn test_repick_moves_to_front() {
        let mut recent = RecentEmojis::default();
        recent.add("🐶");
        recent.add("🐱");
        recent.add("🐶");

        assert_eq!(recent.symbols().collect::<Vec<_>>(), vec!["🐶", "🐱"]);
        assert_eq!(recent.entries[0].use_count, 2);
    }

    #[test]
    fn test_capacity_preserves_most_recent() {
        let mut recent = RecentEmojis::default();
        for i in 0..50 {
            recent.add(&format!("s{}", i));
        }
        assert_eq!(recent.entries.len(), MAX_ENTRIES);
        assert_eq!(recent.entries[0].symbol, "s49");
        assert_eq!(recent.entries[MAX_ENTRIES - 1].symbol, "s30");
    }

    #[test]
    fn test_empty_symbol_ignored() {
        let mut recent = RecentEmojis::default();
        recent.add("");
        assert!(recent.is_empty());
    }

    #[test]
    fn test_remove_and_clear() {
        let mut recent = RecentEmojis::default();
        recent.add("🍎");
        recent.add("🍐");
        recent.remove("🍎");
        assert_eq!(recent.symbols().collect::<Vec<_>>(), vec!["🍐"]);
        recent.clear();
        assert!(recent.is_empty());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let mut recent = RecentEmojis::default();
        recent.add("🇳🇴");
        recent.add("👍🏽");

        let json = serde_json::to_string(&recent).unwrap();
        let loaded: RecentEmojis = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, recent);
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recent.json");

        let mut recent = RecentEmojis::default();
        recent.add("🔑");
        recent.save_to(&path).unwrap();

        let loaded = RecentEmojis::load_from(&path);
        assert_eq!(loaded.version, RecentEmojis::CURRENT_VERSION);
        assert_eq!(loaded.symbols().collect::<Vec<_>>(), vec!["🔑"]);
    }

    #[test]
    fn test_corrupt_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recent.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(RecentEmojis::load_from(&path).is_empty());
    }
}
