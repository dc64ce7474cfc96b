//! emojipass - grapheme-aware masked password input
//!
//! This crate provides a password field editor that treats each grapheme
//! cluster (emoji with modifiers, flags, ZWJ sequences) as one symbol, plus
//! the emoji palette, password metrics, and recall scoring used in
//! emoji-password studies.

pub mod cli;
pub mod config;
pub mod config_paths;
pub mod editable;
pub mod grapheme;
pub mod levenshtein;
pub mod metrics;
pub mod palette;
pub mod recent_emojis;
pub mod session;
pub mod tracing;

// Re-export commonly used types
pub use config::StudyConfig;
pub use editable::{EditIntent, EditorOptions, HostWidget, MaskedInput, MemoryHost, RenderMode};
pub use metrics::PasswordMetrics;
pub use palette::EmojiPalette;
pub use session::Session;
