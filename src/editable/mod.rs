//! Grapheme-aware masked password input.
//!
//! The editor wraps a host text widget whose native offsets are UTF-16 code
//! units, while users think in graphemes (an emoji with a skin-tone modifier
//! or a flag is one symbol). It shows the value either as typed or as one mask
//! symbol per grapheme, and applies every edit in whole-grapheme units.
//!
//! # Architecture
//!
//! - [`offsets`]: translation between grapheme indices and code-unit offsets
//! - [`apply_edit`] / [`insert_symbol`] / [`toggle_mode`]: pure edit operations
//! - [`MaskedInput`]: editor state bound to a [`HostWidget`], with deferred
//!   cursor correction after the host re-renders
//! - [`EditIntent`]: native edit intents reported by the host
//! - [`EditorOptions`]: per-field props and UX policies
//!
//! # Example
//!
//! ```
//! use emojipass::editable::{EditIntent, EditorOptions, HostWidget, MaskedInput, MemoryHost};
//!
//! let mut value = String::from("ab👍cd");
//! let mut host = MemoryHost::focused();
//! let mut input = MaskedInput::new(EditorOptions::default());
//! input.mount(&mut host, &value);
//! assert_eq!(host.displayed_text(), "•••••");
//!
//! host.place_caret(3);
//! let current = value.clone();
//! input.handle_native_edit(&mut host, &current, &EditIntent::DeleteBackward, &mut |v| value = v);
//! input.run_deferred(&mut host, &value);
//! assert_eq!(value, "abcd");
//! ```

mod cursor;
mod deferred;
mod edit;
mod host;
mod messages;
mod mode;
pub mod offsets;
mod options;
mod selection;
mod state;

// Re-export main types
pub use cursor::Cursor;
pub use deferred::CorrectionQueue;
pub use edit::{apply_edit, insert_symbol, toggle_mode, EditResult};
pub use host::{HostWidget, InterceptEdits, MemoryHost};
pub use messages::EditIntent;
pub use mode::{masked_value, render, RenderMode, DEFAULT_MASK_SYMBOL};
pub use offsets::{code_unit_offset_for_grapheme_index, grapheme_index_for_code_unit_offset};
pub use options::{EditorOptions, RefocusPolicy};
pub use selection::Selection;
pub use state::MaskedInput;
