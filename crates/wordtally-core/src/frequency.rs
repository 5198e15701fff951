//! Categorized word frequency counting.
//!
//! Tallies the tokens of a text that belong to one [`Category`] and ranks
//! them by count, most frequent first. Ties keep the order in which the
//! words first appeared in the text.

use std::collections::HashMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::word_lists::Category;

/// Default number of ranked entries kept for pronouns and prepositions.
pub const DEFAULT_RANKING_LIMIT: usize = 15;

/// One ranked word and how often it occurred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct WordCount {
    /// The matched word (lowercase).
    pub word: String,
    /// Number of occurrences.
    pub count: usize,
}

/// Ranked frequency table for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RankedTable {
    /// Category the table was built for.
    pub category: Category,
    /// Entries ordered by count descending, ties by first occurrence.
    pub entries: Vec<WordCount>,
    /// Tokens in the text that belong to the category.
    pub matched_tokens: usize,
    /// Distinct category words found, before truncation.
    pub distinct_words: usize,
    /// Whether entries were dropped to honor the limit.
    pub truncated: bool,
}

/// Outcome of counting one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CategoryTally {
    /// At least one category word was found.
    Ranked(RankedTable),
    /// No category word occurs in the text.
    NoMatches {
        /// Category that was searched.
        category: Category,
        /// Human-readable message for display.
        message: String,
    },
}

impl CategoryTally {
    /// The category this tally describes.
    pub const fn category(&self) -> Category {
        match self {
            Self::Ranked(table) => table.category,
            Self::NoMatches { category, .. } => *category,
        }
    }

    /// Ranked entries, empty for [`CategoryTally::NoMatches`].
    pub fn entries(&self) -> &[WordCount] {
        match self {
            Self::Ranked(table) => &table.entries,
            Self::NoMatches { .. } => &[],
        }
    }

    /// Whether no category word was found.
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::NoMatches { .. })
    }

    /// Whether the ranked list was cut short.
    pub const fn is_truncated(&self) -> bool {
        match self {
            Self::Ranked(table) => table.truncated,
            Self::NoMatches { .. } => false,
        }
    }
}

/// Ranking limit applied to `category` when none is configured.
///
/// Articles are never truncated by default, unlike pronouns and prepositions.
pub const fn default_limit(category: Category) -> Option<usize> {
    match category {
        Category::Pronouns | Category::Prepositions => Some(DEFAULT_RANKING_LIMIT),
        Category::Articles => None,
    }
}

/// Build the full ranked table of category words among `tokens`.
///
/// Tokens must already be lowercased.
pub fn frequency_table<I, S>(tokens: I, category: Category) -> Vec<WordCount>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut table: Vec<WordCount> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for token in tokens {
        let token = token.as_ref();
        if !category.contains(token) {
            continue;
        }
        match index.get(token) {
            Some(&slot) => table[slot].count += 1,
            None => {
                index.insert(token.to_string(), table.len());
                table.push(WordCount {
                    word: token.to_string(),
                    count: 1,
                });
            }
        }
    }

    // sort_by is stable: equal counts keep first-occurrence order
    table.sort_by(|a, b| b.count.cmp(&a.count));
    table
}

/// Count and rank the words of `category` among `tokens`.
///
/// `limit` caps the number of ranked entries; `None` keeps them all.
#[tracing::instrument(skip_all, fields(category = %category, limit = ?limit))]
pub fn count_category<I, S>(tokens: I, category: Category, limit: Option<usize>) -> CategoryTally
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut entries = frequency_table(tokens, category);

    if entries.is_empty() {
        tracing::debug!("no category words found");
        return CategoryTally::NoMatches {
            category,
            message: category.empty_message().to_string(),
        };
    }

    let matched_tokens: usize = entries.iter().map(|e| e.count).sum();
    let distinct_words = entries.len();
    let truncated = limit.is_some_and(|max| distinct_words > max);
    if let Some(max) = limit {
        entries.truncate(max);
    }

    tracing::debug!(matched_tokens, distinct_words, truncated, "ranked category words");
    CategoryTally::Ranked(RankedTable {
        category,
        entries,
        matched_tokens,
        distinct_words,
        truncated,
    })
}
