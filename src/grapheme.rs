//! Grapheme cluster segmentation
//!
//! Splits text into user-perceived characters (extended grapheme clusters).
//! A grapheme may span several code points and several UTF-16 code units:
//!
//! - Surrogate-pair emoji: 👍 (1 char, 2 UTF-16 units)
//! - ZWJ sequences: 👨‍👩‍👧 (5 chars, 8 UTF-16 units)
//! - Regional indicator pairs: 🇳🇴 (2 chars, 4 UTF-16 units)
//! - Combining sequences: e + U+0301 (2 chars, 2 UTF-16 units)
//!
//! Segmentation is lossless: joining the segments reproduces the input.

use unicode_segmentation::UnicodeSegmentation;

/// Split text into grapheme clusters, in order
pub fn split_graphemes(text: &str) -> Vec<&str> {
    text.graphemes(true).collect()
}

/// Count grapheme clusters in text
pub fn count_graphemes(text: &str) -> usize {
    // ASCII is always one grapheme per byte except for CR LF
    if text.is_ascii() && !text.contains('\r') {
        return text.len();
    }
    text.graphemes(true).count()
}

/// Length of a string in UTF-16 code units (the host widget's offset unit)
pub fn utf16_len(text: &str) -> usize {
    text.chars().map(char::len_utf16).sum()
}

/// Decode UTF-16 code units coming from a host widget.
///
/// Lone surrogate halves become U+FFFD, which segments as its own one-unit
/// grapheme, so malformed input is carried through as an atomic symbol.
pub fn decode_utf16_lossy(units: &[u16]) -> String {
    char::decode_utf16(units.iter().copied())
        .map(|r| r.unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect()
}

/// A single grapheme with its position in both coordinate spaces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphemeSpan {
    /// Byte offset of the first byte in the source string
    pub byte_start: usize,
    /// Byte length
    pub byte_len: usize,
    /// UTF-16 offset of the first code unit in the source string
    pub unit_start: usize,
    /// UTF-16 length
    pub unit_len: usize,
}

impl GraphemeSpan {
    pub fn byte_end(&self) -> usize {
        self.byte_start + self.byte_len
    }

    pub fn unit_end(&self) -> usize {
        self.unit_start + self.unit_len
    }
}

/// Compute spans for every grapheme in text
pub fn grapheme_spans(text: &str) -> Vec<GraphemeSpan> {
    let mut spans = Vec::new();
    let mut unit_start = 0;
    for (byte_start, g) in text.grapheme_indices(true) {
        let unit_len = utf16_len(g);
        spans.push(GraphemeSpan {
            byte_start,
            byte_len: g.len(),
            unit_start,
            unit_len,
        });
        unit_start += unit_len;
    }
    spans
}

/// Memoized segmentation keyed on the last value seen.
///
/// Editing calls re-segment the same value several times per event
/// (read selection, translate, render); the cache keeps that to one pass.
#[derive(Debug, Clone, Default)]
pub struct GraphemeCache {
    key: String,
    spans: Vec<GraphemeSpan>,
}

impl GraphemeCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spans for `text`, recomputed only when `text` differs from the cached key
    pub fn spans(&mut self, text: &str) -> &[GraphemeSpan] {
        if self.key != text {
            self.key.clear();
            self.key.push_str(text);
            self.spans = grapheme_spans(text);
        }
        &self.spans
    }

    /// Grapheme count for `text`
    pub fn count(&mut self, text: &str) -> usize {
        self.spans(text).len()
    }

    /// Drop the cached segmentation
    pub fn clear(&mut self) {
        self.key.clear();
        self.spans.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_ascii() {
        assert_eq!(split_graphemes("abc"), vec!["a", "b", "c"]);
        assert_eq!(count_graphemes("abc"), 3);
    }

    #[test]
    fn test_split_emoji() {
        let parts = split_graphemes("ab👍cd");
        assert_eq!(parts, vec!["a", "b", "👍", "c", "d"]);
        assert_eq!(count_graphemes("ab👍cd"), 5);
    }

    #[test]
    fn test_split_zwj_and_flags() {
        let family = "👨\u{200d}👩\u{200d}👧";
        assert_eq!(count_graphemes(family), 1);
        assert_eq!(count_graphemes("🇳🇴🇸🇪"), 2);
        assert_eq!(count_graphemes("e\u{301}"), 1);
    }

    #[test]
    fn test_crlf_is_one_grapheme() {
        assert_eq!(count_graphemes("a\r\nb"), 3);
    }

    #[test]
    fn test_split_is_lossless() {
        for s in ["", "plain", "ab👍cd", "🇳🇴x👍🏽", "❤️‍🔥a\u{301}", "\u{FFFD}z"] {
            assert_eq!(split_graphemes(s).concat(), s);
        }
    }

    #[test]
    fn test_utf16_len() {
        assert_eq!(utf16_len("ab"), 2);
        assert_eq!(utf16_len("👍"), 2);
        assert_eq!(utf16_len("🇳🇴"), 4);
    }

    #[test]
    fn test_decode_lone_surrogate() {
        let units = [0x61, 0xD83D, 0x62];
        let decoded = decode_utf16_lossy(&units);
        assert_eq!(decoded, "a\u{FFFD}b");
        assert_eq!(count_graphemes(&decoded), 3);
    }

    #[test]
    fn test_spans() {
        let spans = grapheme_spans("a👍b");
        assert_eq!(spans.len(), 3);
        assert_eq!(spans[1].byte_start, 1);
        assert_eq!(spans[1].byte_len, 4);
        assert_eq!(spans[1].unit_start, 1);
        assert_eq!(spans[1].unit_len, 2);
        assert_eq!(spans[2].unit_start, 3);
        assert_eq!(spans[2].byte_end(), 6);
    }

    #[test]
    fn test_cache_recomputes_on_change() {
        let mut cache = GraphemeCache::new();
        assert_eq!(cache.count("ab"), 2);
        assert_eq!(cache.count("ab👍"), 3);
        assert_eq!(cache.count(""), 0);
        assert_eq!(cache.count("x"), 1);
    }
}
