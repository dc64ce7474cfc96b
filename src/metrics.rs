//! Password metrics for study records
//!
//! Strength scoring, crack-time labels, and emoji statistics. Emoji counts are
//! per grapheme: a flag or a skin-toned thumbs-up counts once.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::grapheme::{count_graphemes, split_graphemes, utf16_len};

/// Emojis an emoji password must contain
pub const MIN_EMOJIS: usize = 4;

static EMOJI_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\p{Emoji_Presentation}\p{Extended_Pictographic}]").expect("emoji regex is valid")
});

/// Whether a grapheme cluster renders as an emoji
pub fn is_emoji_grapheme(grapheme: &str) -> bool {
    EMOJI_RE.is_match(grapheme)
}

fn is_emoji_char(c: char) -> bool {
    EMOJI_RE.is_match(c.encode_utf8(&mut [0; 4]))
}

/// Emoji graphemes in order of appearance
pub fn emojis(password: &str) -> impl Iterator<Item = &str> {
    split_graphemes(password).into_iter().filter(|g| is_emoji_grapheme(g))
}

pub fn count_emojis(password: &str) -> usize {
    emojis(password).count()
}

/// Distinct emoji graphemes in order of first appearance
pub fn unique_emojis(password: &str) -> Vec<&str> {
    let mut seen = HashSet::new();
    emojis(password).filter(|g| seen.insert(*g)).collect()
}

pub fn is_valid_emoji_password(password: &str) -> bool {
    has_min_emojis(password, MIN_EMOJIS)
}

pub fn has_min_emojis(password: &str, min: usize) -> bool {
    count_emojis(password) >= min
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Variety {
    lower: bool,
    upper: bool,
    digit: bool,
    other: bool,
}

impl Variety {
    /// Character classes by code point. Joiners and variation selectors
    /// inside emoji clusters count as other.
    fn of(password: &str) -> Self {
        let mut variety = Variety::default();
        for c in password.chars() {
            match c {
                'a'..='z' => variety.lower = true,
                'A'..='Z' => variety.upper = true,
                '0'..='9' => variety.digit = true,
                _ if is_emoji_char(c) => {}
                _ => variety.other = true,
            }
        }
        variety
    }

    fn score(self) -> u32 {
        let mut score = 0;
        if self.lower {
            score += 7;
        }
        if self.upper {
            score += 7;
        }
        if self.digit {
            score += 7;
        }
        if self.other {
            score += 9;
        }
        score
    }
}

/// Strength score from 0 to 100
pub fn calculate_strength(password: &str) -> u8 {
    if password.is_empty() {
        return 0;
    }

    let length = (utf16_len(password) as u32).saturating_mul(3).min(30);
    let variety = Variety::of(password).score();
    let emoji_count = (count_emojis(password) as u32).saturating_mul(5).min(25);
    let unique = (unique_emojis(password).len() as u32).saturating_mul(3).min(15);

    (length + variety + emoji_count + unique).min(100) as u8
}

/// Human-readable crack-time estimate for a strength score
pub fn estimate_time_to_crack(strength: u8) -> &'static str {
    match strength {
        0..=19 => "instantly",
        20..=29 => "a few seconds",
        30..=39 => "a few minutes",
        40..=49 => "a few hours",
        50..=59 => "a few days",
        60..=69 => "a few weeks",
        70..=79 => "a few months",
        80..=89 => "a few years",
        _ => "centuries",
    }
}

/// Strength bucket shown next to the field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrengthLabel {
    None,
    Weak,
    Medium,
    Strong,
}

impl StrengthLabel {
    pub fn for_strength(strength: u8) -> Self {
        match strength {
            0 => StrengthLabel::None,
            1..=29 => StrengthLabel::Weak,
            30..=59 => StrengthLabel::Medium,
            _ => StrengthLabel::Strong,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StrengthLabel::None => "None",
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Medium => "Medium",
            StrengthLabel::Strong => "Strong",
        }
    }
}

impl std::fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Record submitted with a study response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordMetrics {
    pub password: String,
    /// Graphemes in the password
    pub total_length: usize,
    /// Graphemes that are not emojis
    pub text_characters: usize,
    pub emoji_count: usize,
    pub unique_emoji_count: usize,
    /// Share of graphemes that are emojis, rounded to a whole percent
    pub emoji_percentage: u32,
    /// Seconds spent creating the password, one decimal place
    pub creation_time_seconds: String,
    pub password_strength: u8,
    /// Unix epoch seconds when the record was made
    pub timestamp: u64,
}

impl PasswordMetrics {
    pub fn new(password: &str, creation_time_secs: f64) -> Self {
        let total_length = count_graphemes(password);
        let emoji_count = count_emojis(password);
        let emoji_percentage = if total_length == 0 {
            0
        } else {
            (emoji_count as f64 / total_length as f64 * 100.0).round() as u32
        };

        Self {
            password: password.to_string(),
            total_length,
            text_characters: total_length - emoji_count,
            emoji_count,
            unique_emoji_count: unique_emojis(password).len(),
            emoji_percentage,
            creation_time_seconds: format!("{:.1}", creation_time_secs.max(0.0)),
            password_strength: calculate_strength(password),
            timestamp: crate::recent_emojis::now_epoch_secs(),
        }
    }

    pub fn strength_label(&self) -> StrengthLabel {
        StrengthLabel::for_strength(self.password_strength)
    }

    pub fn time_to_crack(&self) -> &'static str {
        estimate_time_to_crack(self.password_strength)
    }

    /// Pretty JSON for pasting into the survey
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
