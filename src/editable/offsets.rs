//! Cursor offset translation between the two coordinate spaces.
//!
//! The host widget reports positions in units of whatever it currently
//! displays. In plaintext mode that is the Logical Value itself, measured in
//! UTF-16 code units. In masked mode the widget shows one mask symbol per
//! grapheme, so its offsets are grapheme indices.
//!
//! Grapheme index `g` always corresponds to the code-unit offset equal to the
//! summed UTF-16 lengths of the first `g` graphemes. An offset landing inside a
//! multi-unit cluster resolves to the boundary after that cluster.

use std::ops::Range;

use crate::grapheme::{grapheme_spans, GraphemeSpan};

use super::mode::RenderMode;

/// UTF-16 offset of the boundary before grapheme `grapheme_index`.
///
/// The index is clamped to `[0, count_graphemes(text)]`.
pub fn code_unit_offset_for_grapheme_index(text: &str, grapheme_index: usize) -> usize {
    unit_offset_in_spans(&grapheme_spans(text), grapheme_index)
}

/// Grapheme index for a UTF-16 offset.
///
/// Counts graphemes that start before `offset`, so an offset strictly inside a
/// cluster lands after it. Offsets past the end resolve to the grapheme count.
pub fn grapheme_index_for_code_unit_offset(text: &str, offset: usize) -> usize {
    grapheme_index_in_spans(&grapheme_spans(text), offset)
}

/// Byte range covering graphemes `range` (clamped), for splicing the `String`
pub fn byte_range_for_graphemes(text: &str, range: Range<usize>) -> Range<usize> {
    byte_range_in_spans(&grapheme_spans(text), text.len(), range)
}

/// Display offset for a grapheme index in the given mode
pub fn display_offset_for_grapheme_index(text: &str, grapheme_index: usize, mode: RenderMode) -> usize {
    display_offset_in_spans(&grapheme_spans(text), grapheme_index, mode)
}

/// Grapheme index for an offset reported by the host in the given mode
pub fn grapheme_index_for_display_offset(text: &str, offset: usize, mode: RenderMode) -> usize {
    grapheme_index_for_display_in_spans(&grapheme_spans(text), offset, mode)
}

// =============================================================================
// Span-based variants (callers holding a segmentation reuse it)
// =============================================================================

pub(crate) fn unit_offset_in_spans(spans: &[GraphemeSpan], grapheme_index: usize) -> usize {
    match grapheme_index.min(spans.len()).checked_sub(1) {
        Some(last) => spans[last].unit_end(),
        None => 0,
    }
}

pub(crate) fn grapheme_index_in_spans(spans: &[GraphemeSpan], offset: usize) -> usize {
    spans
        .iter()
        .position(|span| span.unit_start >= offset)
        .unwrap_or(spans.len())
}

pub(crate) fn byte_offset_in_spans(spans: &[GraphemeSpan], text_len: usize, grapheme_index: usize) -> usize {
    spans
        .get(grapheme_index)
        .map(|span| span.byte_start)
        .unwrap_or(text_len)
}

pub(crate) fn byte_range_in_spans(
    spans: &[GraphemeSpan],
    text_len: usize,
    range: Range<usize>,
) -> Range<usize> {
    let start = range.start.min(spans.len());
    let end = range.end.clamp(start, spans.len());
    byte_offset_in_spans(spans, text_len, start)..byte_offset_in_spans(spans, text_len, end)
}

pub(crate) fn display_offset_in_spans(
    spans: &[GraphemeSpan],
    grapheme_index: usize,
    mode: RenderMode,
) -> usize {
    match mode {
        RenderMode::Plaintext => unit_offset_in_spans(spans, grapheme_index),
        RenderMode::Masked => grapheme_index.min(spans.len()),
    }
}

pub(crate) fn grapheme_index_for_display_in_spans(
    spans: &[GraphemeSpan],
    offset: usize,
    mode: RenderMode,
) -> usize {
    match mode {
        RenderMode::Plaintext => grapheme_index_in_spans(spans, offset),
        RenderMode::Masked => offset.min(spans.len()),
    }
}
