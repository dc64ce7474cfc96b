//! Grapheme-level edit distance for recall and shoulder-surfing attempts.

use crate::grapheme::split_graphemes;

/// Edit distance counting each grapheme as one symbol
pub fn distance(a: &str, b: &str) -> usize {
    let a = split_graphemes(a);
    let b = split_graphemes(b);

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // Two rows of the DP matrix are enough
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut row = vec![0; b.len() + 1];

    for (i, ga) in a.iter().enumerate() {
        row[0] = i + 1;
        for (j, gb) in b.iter().enumerate() {
            row[j + 1] = if ga == gb {
                prev[j]
            } else {
                1 + prev[j].min(row[j]).min(prev[j + 1])
            };
        }
        std::mem::swap(&mut prev, &mut row);
    }

    prev[b.len()]
}

/// Similarity as a rounded percentage; two empty strings are identical
pub fn similarity(a: &str, b: &str) -> u32 {
    let max_len = split_graphemes(a).len().max(split_graphemes(b).len());
    if max_len == 0 {
        return 100;
    }
    let dist = distance(a, b);
    ((max_len - dist) as f64 / max_len as f64 * 100.0).round() as u32
}

/// Closest attempt's distance to the target, `None` without attempts
pub fn min_distance<S: AsRef<str>>(target: &str, attempts: &[S]) -> Option<usize> {
    attempts.iter().map(|a| distance(target, a.as_ref())).min()
}
