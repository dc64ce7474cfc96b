//! Logical cursor for the masked input.

use crate::grapheme::GraphemeSpan;

use super::mode::RenderMode;
use super::offsets::{display_offset_in_spans, grapheme_index_for_display_in_spans};

/// Caret position as a grapheme index into the Logical Value.
///
/// Grapheme indices survive mode toggles unchanged; the host-facing offset is
/// derived from it whenever the widget needs a selection range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cursor {
    pub grapheme: usize,
}

impl Cursor {
    pub const fn new(grapheme: usize) -> Self {
        Self { grapheme }
    }

    pub const fn zero() -> Self {
        Self { grapheme: 0 }
    }

    /// Cursor from an offset reported by the host in `mode`
    pub(crate) fn from_display(spans: &[GraphemeSpan], offset: usize, mode: RenderMode) -> Self {
        Self::new(grapheme_index_for_display_in_spans(spans, offset, mode))
    }

    /// Cursor at the end of the value
    pub(crate) fn end(spans: &[GraphemeSpan]) -> Self {
        Self::new(spans.len())
    }

    /// Offset to hand to the host in `mode`
    pub(crate) fn to_display(self, spans: &[GraphemeSpan], mode: RenderMode) -> usize {
        display_offset_in_spans(spans, self.grapheme, mode)
    }

    /// Clamp to `[0, grapheme_count]`
    pub fn clamped(self, grapheme_count: usize) -> Self {
        Self::new(self.grapheme.min(grapheme_count))
    }
}
