//! Word tokenization.
//!
//! A token is a maximal run of ASCII word characters (`A-Z`, `a-z`, `0-9`,
//! `_`), lowercased. Everything else, including non-Latin letters, separates
//! tokens.

use regex::Regex;
use std::sync::LazyLock;

/// Regex for a run of word characters.
static WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z0-9_]+").expect("valid regex"));

/// Lazily yield the lowercased tokens of `text`.
///
/// Never fails; text without word characters yields nothing.
pub fn tokens(text: &str) -> impl Iterator<Item = String> + '_ {
    WORD_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().to_ascii_lowercase())
}

/// Collect the lowercased tokens of `text`.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn tokenize(text: &str) -> Vec<String> {
    let words: Vec<String> = tokens(text).collect();
    tracing::debug!(tokens = words.len(), "tokenized text");
    words
}

/// Whether `ch` is a word character for tokenization purposes.
pub const fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}
