//! Basic character and word statistics.
//!
//! The five tallies are independent: a character may count toward more than
//! one of them, and they are not meant to sum to the text length.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::tokenize::is_word_char;

/// Character and word tallies for a text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct BasicStats {
    /// ASCII letters (`a-z`, `A-Z`).
    pub letters: usize,
    /// Whitespace-separated words in the trimmed text (never less than 1).
    pub words: usize,
    /// Individual whitespace characters.
    pub whitespace: usize,
    /// Newline (`\n`) characters.
    pub newlines: usize,
    /// Characters that are neither word characters nor whitespace.
    pub special_symbols: usize,
}

/// Whitespace as the browser regex engine defines it: Unicode `White_Space`
/// minus U+0085, plus the byte-order mark.
pub fn is_space(ch: char) -> bool {
    (ch.is_whitespace() && ch != '\u{85}') || ch == '\u{FEFF}'
}

/// Compute all five tallies for `text`.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn basic_stats(text: &str) -> BasicStats {
    let mut stats = BasicStats {
        words: count_words(text),
        ..BasicStats::default()
    };

    for ch in text.chars() {
        if ch.is_ascii_alphabetic() {
            stats.letters += 1;
        }
        if ch == '\n' {
            stats.newlines += 1;
        }
        if is_space(ch) {
            stats.whitespace += 1;
        } else if !is_word_char(ch) {
            stats.special_symbols += 1;
        }
    }

    tracing::debug!(
        letters = stats.letters,
        words = stats.words,
        whitespace = stats.whitespace,
        newlines = stats.newlines,
        special_symbols = stats.special_symbols,
        "computed basic stats"
    );
    stats
}

/// Count ASCII letters.
pub fn count_letters(text: &str) -> usize {
    text.chars().filter(char::is_ascii_alphabetic).count()
}

/// Count whitespace-separated words after trimming.
///
/// Text that is empty after trimming still counts as one word: splitting an
/// empty string yields a single empty piece.
pub fn count_words(text: &str) -> usize {
    let trimmed = text.trim_matches(is_space);
    if trimmed.is_empty() {
        return 1;
    }
    trimmed.split(is_space).filter(|w| !w.is_empty()).count()
}
