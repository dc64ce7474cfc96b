//! Rendering mode and displayed-text derivation.

use serde::{Deserialize, Serialize};

use crate::grapheme::count_graphemes;

/// Default symbol drawn for each grapheme in masked mode
pub const DEFAULT_MASK_SYMBOL: char = '•';

/// How the Logical Value is shown in the host widget
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Value shown as typed; host offsets are UTF-16 code units
    Plaintext,
    /// One mask symbol per grapheme; host offsets are grapheme indices
    #[default]
    Masked,
}

impl RenderMode {
    /// The other mode
    pub fn toggled(self) -> Self {
        match self {
            RenderMode::Plaintext => RenderMode::Masked,
            RenderMode::Masked => RenderMode::Plaintext,
        }
    }

    pub fn is_masked(self) -> bool {
        self == RenderMode::Masked
    }
}

/// Text the host widget should display for `value` in `mode`.
///
/// The mask symbol must be a single UTF-16 code unit so that masked display
/// offsets equal grapheme indices.
pub fn render(value: &str, mode: RenderMode, mask: char) -> String {
    match mode {
        RenderMode::Plaintext => value.to_string(),
        RenderMode::Masked => masked_value(value, mask),
    }
}

/// One `mask` per grapheme of `value`
pub fn masked_value(value: &str, mask: char) -> String {
    std::iter::repeat(mask).take(count_graphemes(value)).collect()
}
