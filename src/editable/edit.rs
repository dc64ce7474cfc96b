//! Grapheme-safe edit operations.
//!
//! These functions are pure: they take the current Logical Value and a
//! selection in displayed-text units and return the new value plus the new
//! cursor as a grapheme index. Every splice happens on grapheme boundaries,
//! so a multi-unit cluster is either kept whole or removed whole.

use std::ops::Range;

use crate::grapheme::{grapheme_spans, utf16_len, GraphemeSpan};

use super::cursor::Cursor;
use super::messages::EditIntent;
use super::mode::RenderMode;
use super::offsets::{byte_range_in_spans, display_offset_in_spans, grapheme_index_for_code_unit_offset};
use super::selection::Selection;

/// Result of applying an edit to the Logical Value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditResult {
    /// New Logical Value
    pub value: String,
    /// Caret after the edit
    pub cursor: Cursor,
}

impl EditResult {
    /// Caret offset in the host's coordinate space for `mode`
    pub fn display_cursor(&self, mode: RenderMode) -> usize {
        display_offset_in_spans(&grapheme_spans(&self.value), self.cursor.grapheme, mode)
    }

    /// Check if the edit changed the value
    pub fn changed(&self, previous: &str) -> bool {
        self.value != previous
    }
}

/// Apply a native edit intent.
///
/// `selection` is in displayed-text units for `mode`. Returns `None` for
/// intents the editor does not understand; the caller leaves value and cursor
/// as they are.
pub fn apply_edit(
    intent: &EditIntent,
    value: &str,
    selection: Selection,
    mode: RenderMode,
) -> Option<EditResult> {
    let spans = grapheme_spans(value);
    let range = selection.grapheme_range(&spans, mode);

    let result = match intent {
        EditIntent::InsertText(text) | EditIntent::InsertFromPaste(text) => {
            replace_graphemes(value, &spans, range, text)
        }
        EditIntent::DeleteBackward => {
            if range.is_empty() {
                if range.start == 0 {
                    unchanged(value, 0)
                } else {
                    let at = range.start;
                    replace_graphemes(value, &spans, at - 1..at, "")
                }
            } else {
                replace_graphemes(value, &spans, range, "")
            }
        }
        EditIntent::DeleteForward => {
            if range.is_empty() {
                let at = range.start;
                if at >= spans.len() {
                    unchanged(value, at)
                } else {
                    replace_graphemes(value, &spans, at..at + 1, "")
                }
            } else {
                replace_graphemes(value, &spans, range, "")
            }
        }
        EditIntent::Unknown(kind) => {
            tracing::debug!(intent = %kind, "ignoring unknown edit intent");
            return None;
        }
    };

    Some(result)
}

/// Insert `symbol` at a caret that did not come through the native pipeline.
///
/// `cursor` is in displayed-text units for `mode`; `None` (widget unfocused,
/// no selection) inserts at the end of the value. The new caret sits at the
/// end of the inserted text, on the boundary of whatever cluster it joined.
pub fn insert_symbol(symbol: &str, value: &str, cursor: Option<usize>, mode: RenderMode) -> EditResult {
    let spans = grapheme_spans(value);
    let at = match cursor {
        Some(offset) => Cursor::from_display(&spans, offset, mode),
        None => Cursor::end(&spans),
    };

    let bytes = byte_range_in_spans(&spans, value.len(), at.grapheme..at.grapheme);
    splice(value, bytes, symbol)
}

/// Flip the rendering mode and carry the caret across coordinate spaces.
///
/// Entering plaintext turns a grapheme index into a code-unit offset; entering
/// masked mode turns a code-unit offset into a grapheme index. A missing
/// caret stays missing.
pub fn toggle_mode(mode: RenderMode, value: &str, cursor: Option<usize>) -> (RenderMode, Option<usize>) {
    let next = mode.toggled();
    let Some(offset) = cursor else {
        return (next, None);
    };
    let spans = grapheme_spans(value);
    let logical = Cursor::from_display(&spans, offset, mode);
    (next, Some(logical.to_display(&spans, next)))
}

fn unchanged(value: &str, grapheme: usize) -> EditResult {
    EditResult {
        value: value.to_string(),
        cursor: Cursor::new(grapheme),
    }
}

/// Replace graphemes `range` with `text`; caret lands after the inserted
/// text.
fn replace_graphemes(value: &str, spans: &[GraphemeSpan], range: Range<usize>, text: &str) -> EditResult {
    splice(value, byte_range_in_spans(spans, value.len(), range), text)
}

/// Splice `text` over `bytes` and place the caret at the end of `text`.
///
/// Inserted text may join the cluster before it (a combining mark, a skin
/// tone, the second regional indicator of a flag), so the caret comes from
/// re-segmenting the new value rather than from counting graphemes.
fn splice(value: &str, bytes: Range<usize>, text: &str) -> EditResult {
    let mut new_value = String::with_capacity(value.len() - bytes.len() + text.len());
    new_value.push_str(&value[..bytes.start]);
    new_value.push_str(text);
    new_value.push_str(&value[bytes.end..]);

    let end = utf16_len(&value[..bytes.start]) + utf16_len(text);
    let cursor = Cursor::new(grapheme_index_for_code_unit_offset(&new_value, end));
    EditResult {
        value: new_value,
        cursor,
    }
}
