//! Study configuration persistence
//!
//! Stores user preferences in `~/.config/emojipass/config.yaml`

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::editable::{EditorOptions, RefocusPolicy, RenderMode, DEFAULT_MASK_SYMBOL};

/// Configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyConfig {
    /// Symbol drawn per grapheme in masked mode
    #[serde(default = "default_mask_symbol")]
    pub mask_symbol: char,

    /// Rendering mode when a field mounts
    #[serde(default)]
    pub initial_mode: RenderMode,

    /// Focus handling after a palette insertion
    #[serde(default)]
    pub refocus_after_insert: RefocusPolicy,

    /// Record palette selections in the recency list
    #[serde(default = "default_true")]
    pub track_recent_emojis: bool,

    /// Minimum number of emojis an emoji password must contain
    #[serde(default = "default_min_emojis")]
    pub min_emojis: usize,

    /// Placeholder override for every field
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,

    /// Maximum password length in graphemes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_graphemes: Option<usize>,
}

fn default_mask_symbol() -> char {
    DEFAULT_MASK_SYMBOL
}

fn default_true() -> bool {
    true
}

fn default_min_emojis() -> usize {
    crate::metrics::MIN_EMOJIS
}

impl Default for StudyConfig {
    fn default() -> Self {
        Self {
            mask_symbol: default_mask_symbol(),
            initial_mode: RenderMode::default(),
            refocus_after_insert: RefocusPolicy::default(),
            track_recent_emojis: default_true(),
            min_emojis: default_min_emojis(),
            placeholder: None,
            max_graphemes: None,
        }
    }
}

impl StudyConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from a specific file, or return defaults on any failure
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    /// Save config to a specific file
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Editor options for a field, applying configured policies over a preset
    pub fn editor_options(&self, preset: EditorOptions) -> EditorOptions {
        EditorOptions {
            mask_symbol: self.mask_symbol,
            initial_mode: self.initial_mode,
            refocus: self.refocus_after_insert,
            suppress_recent: preset.suppress_recent || !self.track_recent_emojis,
            placeholder: self.placeholder.clone().unwrap_or(preset.placeholder),
            max_graphemes: self.max_graphemes.or(preset.max_graphemes),
        }
    }
}
