//! Closed word lists for categorized counting.
//!
//! Each [`Category`] owns one fixed, lowercase, duplicate-free list. The
//! lists are kept as ordered slices for review and exposed as hash sets for
//! membership tests.

use std::collections::HashSet;
use std::str::FromStr;
use std::sync::LazyLock;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

/// Personal, relative, demonstrative, interrogative, and indefinite pronouns.
pub const PRONOUN_LIST: &[&str] = &[
    // personal and reflexive
    "i", "me", "my", "mine", "myself",
    "you", "your", "yours", "yourself", "yourselves",
    "he", "him", "his", "himself",
    "she", "her", "hers", "herself",
    "it", "its", "itself",
    "we", "us", "our", "ours", "ourselves",
    "they", "them", "their", "theirs", "themselves",
    // relative and interrogative
    "who", "whom", "whose", "which", "that", "what",
    // demonstrative
    "this", "these", "those",
    // indefinite
    "anybody", "anyone", "anything", "each", "either", "everybody", "everyone",
    "everything", "neither", "nobody", "none", "nothing", "one", "somebody",
    "someone", "something", "both", "few", "many", "several", "all", "any",
    "most", "some",
];

/// Common English prepositions.
pub const PREPOSITION_LIST: &[&str] = &[
    "about", "above", "across", "after", "against", "along", "amid", "among",
    "around", "as", "at", "before", "behind", "below", "beneath", "beside",
    "besides", "between", "beyond", "by", "concerning", "considering", "despite",
    "down", "during", "except", "for", "from", "in", "inside", "into", "like",
    "near", "of", "off", "on", "onto", "out", "outside", "over", "past", "regarding",
    "round", "since", "through", "throughout", "to", "toward", "towards", "under",
    "underneath", "until", "unto", "up", "upon", "with", "within", "without",
];

/// Articles and article-like determiners.
pub const ARTICLE_LIST: &[&str] = &["a", "an", "the", "some", "any"];

/// Pronoun lookup set.
pub static PRONOUNS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| PRONOUN_LIST.iter().copied().collect());

/// Preposition lookup set.
pub static PREPOSITIONS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| PREPOSITION_LIST.iter().copied().collect());

/// Article lookup set.
pub static ARTICLES: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| ARTICLE_LIST.iter().copied().collect());

/// A closed word category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Category {
    /// Pronouns ("i", "they", "something", ...).
    Pronouns,
    /// Prepositions ("to", "from", "within", ...).
    Prepositions,
    /// Articles and article-like determiners ("a", "an", "the", "some", "any").
    Articles,
}

impl Category {
    /// Every category, in report order.
    pub const ALL: [Self; 3] = [Self::Pronouns, Self::Prepositions, Self::Articles];

    /// Returns the category name as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pronouns => "pronouns",
            Self::Prepositions => "prepositions",
            Self::Articles => "articles",
        }
    }

    /// The ordered source list for this category.
    pub const fn list(&self) -> &'static [&'static str] {
        match self {
            Self::Pronouns => PRONOUN_LIST,
            Self::Prepositions => PREPOSITION_LIST,
            Self::Articles => ARTICLE_LIST,
        }
    }

    /// The lookup set for this category.
    pub fn words(&self) -> &'static HashSet<&'static str> {
        match self {
            Self::Pronouns => &PRONOUNS,
            Self::Prepositions => &PREPOSITIONS,
            Self::Articles => &ARTICLES,
        }
    }

    /// Whether `token` (already lowercased) belongs to this category.
    pub fn contains(&self, token: &str) -> bool {
        self.words().contains(token)
    }

    /// Message shown when a text contains no words from this category.
    pub const fn empty_message(&self) -> &'static str {
        match self {
            Self::Pronouns => "No pronouns found.",
            Self::Prepositions => "No prepositions found.",
            Self::Articles => "No indefinite articles found.",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AnalysisError::UnknownCategory {
                name: s.to_string(),
                available: Self::ALL.map(|c| c.as_str()).join(", "),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_are_non_empty_and_duplicate_free() {
        for category in Category::ALL {
            let list = category.list();
            assert!(!list.is_empty(), "{category} list is empty");
            assert_eq!(
                list.len(),
                category.words().len(),
                "{category} list has duplicates"
            );
        }
    }

    #[test]
    fn lists_are_lowercase() {
        for category in Category::ALL {
            for word in category.list() {
                assert_eq!(*word, word.to_lowercase(), "{word} in {category}");
            }
        }
    }

    #[test]
    fn membership_is_exact() {
        assert!(Category::Pronouns.contains("i"));
        assert!(!Category::Pronouns.contains("I"));
        assert!(!Category::Prepositions.contains("tow"));
        assert!(Category::Articles.contains("the"));
    }

    #[test]
    fn some_and_any_are_in_two_categories() {
        for word in ["some", "any"] {
            assert!(Category::Pronouns.contains(word));
            assert!(Category::Articles.contains(word));
        }
    }

    #[test]
    fn parses_category_names() {
        assert_eq!("pronouns".parse::<Category>().unwrap(), Category::Pronouns);
        assert_eq!(
            " Prepositions ".parse::<Category>().unwrap(),
            Category::Prepositions
        );
        assert_eq!("ARTICLES".parse::<Category>().unwrap(), Category::Articles);
    }

    #[test]
    fn unknown_category_lists_alternatives() {
        let err = "verbs".parse::<Category>().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("verbs"));
        assert!(msg.contains("pronouns, prepositions, articles"));
    }
}
