//! Options for a masked input field.
//!
//! Options carry the parent-supplied props (placeholder, recency flag) and the
//! UX policies that differ between study screens.

use serde::{Deserialize, Serialize};

use super::mode::{RenderMode, DEFAULT_MASK_SYMBOL};

/// Whether the host widget regains focus after a palette insertion.
///
/// On touch devices a refocus raises the on-screen keyboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RefocusPolicy {
    /// Leave focus where it is
    #[default]
    Keep,
    /// Focus the widget after every insertion
    Refocus,
}

/// Per-field options for a masked input.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorOptions {
    /// Symbol drawn per grapheme in masked mode (single UTF-16 unit)
    pub mask_symbol: char,

    /// Placeholder text shown while the value is empty
    pub placeholder: String,

    /// Rendering mode at mount
    pub initial_mode: RenderMode,

    /// Focus handling after out-of-band insertion
    pub refocus: RefocusPolicy,

    /// Suppress recording palette selections in the recency list
    pub suppress_recent: bool,

    /// Maximum length in graphemes (None = unlimited)
    pub max_graphemes: Option<usize>,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            mask_symbol: DEFAULT_MASK_SYMBOL,
            placeholder: "Password".to_string(),
            initial_mode: RenderMode::Masked,
            refocus: RefocusPolicy::Keep,
            suppress_recent: false,
            max_graphemes: None,
        }
    }
}

impl EditorOptions {
    /// Field used while choosing a new password
    pub fn registration() -> Self {
        Self {
            placeholder: "Create a password".to_string(),
            ..Self::default()
        }
    }

    /// Field used for recall attempts; palette selections are not recorded
    pub fn login() -> Self {
        Self {
            placeholder: "Enter your password".to_string(),
            suppress_recent: true,
            ..Self::default()
        }
    }

    /// Check if inserting `insert_len` graphemes would exceed the limit
    pub fn would_exceed_max_length(&self, current_len: usize, insert_len: usize) -> bool {
        match self.max_graphemes {
            Some(max) => current_len + insert_len > max,
            None => false,
        }
    }

    /// Mask symbol, falling back to the default when the configured one does
    /// not fit in a single UTF-16 unit
    pub fn effective_mask(&self) -> char {
        if self.mask_symbol.len_utf16() == 1 {
            self.mask_symbol
        } else {
            DEFAULT_MASK_SYMBOL
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_suppresses_recent() {
        assert!(EditorOptions::login().suppress_recent);
        assert!(!EditorOptions::registration().suppress_recent);
    }

    #[test]
    fn test_max_length() {
        let opts = EditorOptions {
            max_graphemes: Some(8),
            ..EditorOptions::default()
        };
        assert!(!opts.would_exceed_max_length(5, 3));
        assert!(opts.would_exceed_max_length(6, 3));
        assert!(!EditorOptions::default().would_exceed_max_length(1000, 1000));
    }

    #[test]
    fn test_effective_mask_rejects_surrogate_pairs() {
        let opts = EditorOptions {
            mask_symbol: '🔒',
            ..EditorOptions::default()
        };
        assert_eq!(opts.effective_mask(), DEFAULT_MASK_SYMBOL);

        let opts = EditorOptions {
            mask_symbol: '*',
            ..EditorOptions::default()
        };
        assert_eq!(opts.effective_mask(), '*');
    }
}
