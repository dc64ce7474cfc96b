//! Host text-box widget boundary.
//!
//! A host adapter wraps whatever native editable control the platform offers.
//! The editor only needs to read and write the displayed text and selection,
//! and to move focus; all offsets are in units of the displayed text.

use crate::grapheme::{decode_utf16_lossy, utf16_len};

use super::messages::EditIntent;
use super::selection::Selection;

/// Capabilities the editor needs from a native text control.
pub trait HostWidget {
    /// Current selection in displayed-text units, `None` when unfocused
    fn selection(&self) -> Option<Selection>;

    /// Set the selection programmatically
    fn set_selection(&mut self, selection: Selection);

    /// Text currently displayed
    fn displayed_text(&self) -> String;

    /// Replace the displayed text without going through the edit pipeline
    fn set_displayed_text(&mut self, text: &str);

    fn is_focused(&self) -> bool;

    fn focus(&mut self);

    fn blur(&mut self);
}

/// Implemented by whatever owns the editor for a field; a host adapter calls
/// it before applying a native mutation.
///
/// Returning `true` means the intent was handled and the adapter must drop
/// the native mutation. `false` means the editor made no change.
pub trait InterceptEdits {
    fn on_edit_intent(&mut self, intent: &EditIntent) -> bool;
}

/// In-memory host widget.
///
/// Behaves like a browser text input: replacing the displayed text moves the
/// caret to the end, which is why the editor reasserts its cursor afterwards.
/// Offsets are UTF-16 code units of the displayed text.
#[derive(Debug, Clone, Default)]
pub struct MemoryHost {
    text: String,
    selection: Selection,
    focused: bool,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// A focused widget with a caret at the end of nothing
    pub fn focused() -> Self {
        Self {
            focused: true,
            ..Self::default()
        }
    }

    /// Length of the displayed text in UTF-16 units
    pub fn len_units(&self) -> usize {
        utf16_len(&self.text)
    }

    /// Displayed text as UTF-16 code units
    pub fn text_utf16(&self) -> Vec<u16> {
        self.text.encode_utf16().collect()
    }

    /// Overwrite the displayed text from raw UTF-16 units (lossy)
    pub fn set_text_utf16(&mut self, units: &[u16]) {
        let text = decode_utf16_lossy(units);
        self.set_displayed_text(&text);
    }

    /// Place a collapsed caret, as a user click would
    pub fn place_caret(&mut self, offset: usize) {
        self.focused = true;
        self.set_selection(Selection::collapsed(offset));
    }

    /// Select a range, as a user drag would
    pub fn select(&mut self, anchor: usize, head: usize) {
        self.focused = true;
        self.set_selection(Selection::new(anchor, head));
    }
}

impl HostWidget for MemoryHost {
    fn selection(&self) -> Option<Selection> {
        self.focused.then_some(self.selection)
    }

    fn set_selection(&mut self, selection: Selection) {
        let len = self.len_units();
        self.selection = Selection::new(selection.anchor.min(len), selection.head.min(len));
    }

    fn displayed_text(&self) -> String {
        self.text.clone()
    }

    fn set_displayed_text(&mut self, text: &str) {
        if self.text == text {
            return;
        }
        self.text = text.to_string();
        self.selection = Selection::collapsed(self.len_units());
    }

    fn is_focused(&self) -> bool {
        self.focused
    }

    fn focus(&mut self) {
        self.focused = true;
    }

    fn blur(&mut self) {
        self.focused = false;
    }
}
