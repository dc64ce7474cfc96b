//! Emoji palette provider
//!
//! Supplies the symbols a participant can insert, grouped by category, plus a
//! recency list. The palette never reads editor state: a selection hands one
//! symbol to the editor's insertion callback.

use crate::recent_emojis::RecentEmojis;

/// A named group of symbols
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub name: &'static str,
    pub symbols: &'static [&'static str],
}

/// Symbols offered in the study
pub const CATEGORIES: &[Category] = &[
    Category {
        name: "Smileys",
        symbols: &[
            "😀", "😁", "😂", "🤣", "😃", "😄", "😅", "😆", "😉", "😊", "😋", "😎", "😍", "🥰", "😘",
            "😗", "😙", "😚", "🙂", "🤔",
        ],
    },
    Category {
        name: "People",
        symbols: &["👋", "👌", "✌️", "🤞", "👍", "👎", "✊", "👊", "🤲", "👐"],
    },
    Category {
        name: "Animals",
        symbols: &["🐶", "🐱", "🐭", "🐹", "🐰", "🦊", "🐻", "🐼", "🐨", "🦁"],
    },
    Category {
        name: "Food",
        symbols: &["🍎", "🍐", "🍊", "🍋", "🍌", "🍉", "🍇", "🍓", "🍒", "🍑"],
    },
    Category {
        name: "Travel & Places",
        symbols: &["🚗", "🚕", "🚙", "🚌", "🚎", "🏠", "🏢", "🏨", "🏫", "⛪"],
    },
    Category {
        name: "Activities",
        symbols: &["⚽", "🏀", "🏈", "⚾", "🎾", "🏐", "🏉", "🎱", "🏓", "🏸"],
    },
    Category {
        name: "Objects",
        symbols: &["💻", "📱", "💰", "💎", "🔑", "🔒", "🔨", "📚", "🎁", "📦"],
    },
    Category {
        name: "Symbols",
        symbols: &["❤️", "💔", "💯", "✅", "❌", "⭐", "🔴", "🟢", "🔵", "⚫"],
    },
];

/// Every palette symbol in display order
pub fn all_symbols() -> impl Iterator<Item = &'static str> {
    CATEGORIES.iter().flat_map(|c| c.symbols.iter().copied())
}

/// Palette state: the static grid plus the recency list
#[derive(Debug, Clone, Default)]
pub struct EmojiPalette {
    recent: RecentEmojis,
}

impl EmojiPalette {
    pub fn new(recent: RecentEmojis) -> Self {
        Self { recent }
    }

    pub fn categories(&self) -> &'static [Category] {
        CATEGORIES
    }

    pub fn recent(&self) -> &RecentEmojis {
        &self.recent
    }

    /// Find a category by case-insensitive name
    pub fn category(&self, name: &str) -> Option<&'static Category> {
        CATEGORIES.iter().find(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// Handle a participant's pick and return the symbol to insert.
    ///
    /// With `suppress_recent` the pick is not recorded.
    pub fn select<'a>(&mut self, symbol: &'a str, suppress_recent: bool) -> &'a str {
        if !suppress_recent {
            self.recent.add(symbol);
        }
        tracing::debug!(symbol, suppress_recent, "palette selection");
        symbol
    }

    pub fn into_recent(self) -> RecentEmojis {
        self.recent
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grapheme::count_graphemes;

    #[test]
    fn test_every_symbol_is_one_grapheme() {
        for symbol in all_symbols() {
            assert_eq!(count_graphemes(symbol), 1, "{symbol:?}");
        }
    }

    #[test]
    fn test_category_lookup() {
        let palette = EmojiPalette::default();
        assert_eq!(palette.category("animals").unwrap().symbols[0], "🐶");
        assert!(palette.category("weather").is_none());
        assert_eq!(palette.categories().len(), 8);
    }

    #[test]
    fn test_select_records_recent() {
        let mut palette = EmojiPalette::default();
        assert_eq!(palette.select("🐼", false), "🐼");
        assert_eq!(palette.recent().symbols().collect::<Vec<_>>(), vec!["🐼"]);
    }

    #[test]
    fn test_select_suppressed() {
        let mut palette = EmojiPalette::default();
        palette.select("🐼", true);
        assert!(palette.recent().is_empty());
    }
}
