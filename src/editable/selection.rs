//! Selection in displayed-text coordinates.

use std::ops::Range;

use crate::grapheme::GraphemeSpan;

use super::mode::RenderMode;
use super::offsets::grapheme_index_for_display_in_spans;

/// A selection as the host widget reports it, with anchor (where the
/// selection started) and head (where the caret is).
///
/// Offsets are in the units of the currently displayed text: UTF-16 code
/// units in plaintext mode, grapheme indices in masked mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    pub anchor: usize,
    pub head: usize,
}

impl Selection {
    pub fn new(anchor: usize, head: usize) -> Self {
        Self { anchor, head }
    }

    /// Create a collapsed selection (caret with no range)
    pub fn collapsed(offset: usize) -> Self {
        Self {
            anchor: offset,
            head: offset,
        }
    }

    /// Check if selection is empty (anchor == head)
    pub fn is_empty(&self) -> bool {
        self.anchor == self.head
    }

    /// Smaller of anchor and head
    pub fn start(&self) -> usize {
        self.anchor.min(self.head)
    }

    /// Larger of anchor and head
    pub fn end(&self) -> usize {
        self.anchor.max(self.head)
    }

    /// Check if selection is reversed (head before anchor)
    pub fn is_reversed(&self) -> bool {
        self.head < self.anchor
    }

    /// Grapheme range covered by this selection.
    ///
    /// Both ends resolve forward to cluster boundaries, so a range that starts
    /// inside a cluster never includes half of it.
    pub(crate) fn grapheme_range(&self, spans: &[GraphemeSpan], mode: RenderMode) -> Range<usize> {
        let start = grapheme_index_for_display_in_spans(spans, self.start(), mode);
        let end = grapheme_index_for_display_in_spans(spans, self.end(), mode);
        start..end.max(start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grapheme::grapheme_spans;

    #[test]
    fn test_collapsed() {
        let sel = Selection::collapsed(3);
        assert!(sel.is_empty());
        assert_eq!(sel.start(), 3);
        assert_eq!(sel.end(), 3);
    }

    #[test]
    fn test_reversed_normalizes() {
        let sel = Selection::new(5, 2);
        assert!(sel.is_reversed());
        assert_eq!(sel.start(), 2);
        assert_eq!(sel.end(), 5);
    }

    #[test]
    fn test_grapheme_range_plaintext() {
        let spans = grapheme_spans("ab👍cd");
        // Code units 1..4 cover "b👍"
        assert_eq!(Selection::new(1, 4).grapheme_range(&spans, RenderMode::Plaintext), 1..3);
        // Ending inside the pair still covers the whole emoji
        assert_eq!(Selection::new(1, 3).grapheme_range(&spans, RenderMode::Plaintext), 1..3);
    }

    #[test]
    fn test_grapheme_range_masked() {
        let spans = grapheme_spans("ab👍cd");
        assert_eq!(Selection::new(4, 1).grapheme_range(&spans, RenderMode::Masked), 1..4);
        assert_eq!(Selection::new(2, 40).grapheme_range(&spans, RenderMode::Masked), 2..5);
    }
}
