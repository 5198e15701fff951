//! Text analysis orchestration.
//!
//! [`analyze`] gates on input length, then runs the basic statistics and the
//! three category counters over the same text. Each step only reads the
//! input, so callers can also invoke them individually.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::frequency::{self, CategoryTally};
use crate::stats::{self, BasicStats};
use crate::tokenize;
use crate::word_lists::Category;

/// Minimum trimmed length, in characters, for a full analysis.
pub const DEFAULT_MIN_CHARS: usize = 500;

/// Advisory returned when the input is too short to analyze.
pub const SHORT_INPUT_ADVISORY: &str =
    "Please enter a longer text (10,000+ words recommended) for proper analysis.";

/// Knobs for a full analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyzerOptions {
    /// Minimum trimmed character count before analysis runs.
    pub min_chars: usize,
    /// Ranked entries kept for pronouns and prepositions.
    pub ranking_limit: Option<usize>,
    /// Ranked entries kept for articles (unbounded by default).
    pub article_limit: Option<usize>,
}

impl Default for AnalyzerOptions {
    fn default() -> Self {
        Self {
            min_chars: DEFAULT_MIN_CHARS,
            ranking_limit: frequency::default_limit(Category::Pronouns),
            article_limit: frequency::default_limit(Category::Articles),
        }
    }
}

impl AnalyzerOptions {
    /// Build options from loaded configuration, filling unset values with defaults.
    pub fn from_config(config: &Config) -> Self {
        let defaults = Self::default();
        Self {
            min_chars: config.min_chars.unwrap_or(defaults.min_chars),
            ranking_limit: config.ranking_limit.or(defaults.ranking_limit),
            article_limit: config.article_limit.or(defaults.article_limit),
        }
    }

    /// Override the minimum length.
    pub const fn with_min_chars(mut self, min_chars: usize) -> Self {
        self.min_chars = min_chars;
        self
    }

    /// The ranking limit that applies to `category`.
    pub const fn limit_for(&self, category: Category) -> Option<usize> {
        match category {
            Category::Pronouns | Category::Prepositions => self.ranking_limit,
            Category::Articles => self.article_limit,
        }
    }
}

/// Why an analysis was skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Rejection {
    /// Advisory for the user.
    pub message: String,
    /// Characters in the trimmed input.
    pub chars: usize,
    /// Characters required.
    pub min_chars: usize,
}

/// Results of a completed analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AnalysisReport {
    /// Character and word tallies.
    pub stats: BasicStats,
    /// Ranked pronouns.
    pub pronouns: CategoryTally,
    /// Ranked prepositions.
    pub prepositions: CategoryTally,
    /// Ranked articles.
    pub articles: CategoryTally,
}

impl AnalysisReport {
    /// The three category tallies in report order.
    pub const fn tallies(&self) -> [&CategoryTally; 3] {
        [&self.pronouns, &self.prepositions, &self.articles]
    }
}

/// Outcome of [`analyze`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Analysis {
    /// The text was long enough and was analyzed.
    Completed(AnalysisReport),
    /// The text was too short; nothing was computed.
    Rejected(Rejection),
}

impl Analysis {
    /// The report, if the analysis ran.
    pub const fn report(&self) -> Option<&AnalysisReport> {
        match self {
            Self::Completed(report) => Some(report),
            Self::Rejected(_) => None,
        }
    }

    /// The rejection, if the analysis was skipped.
    pub const fn rejection(&self) -> Option<&Rejection> {
        match self {
            Self::Completed(_) => None,
            Self::Rejected(rejection) => Some(rejection),
        }
    }
}

/// Check whether `text` is long enough to analyze.
pub fn check_length(text: &str, min_chars: usize) -> Result<(), Rejection> {
    let chars = text.trim_matches(stats::is_space).chars().count();
    if chars < min_chars {
        return Err(Rejection {
            message: SHORT_INPUT_ADVISORY.to_string(),
            chars,
            min_chars,
        });
    }
    Ok(())
}

/// Analyze `text`, skipping the work if it is shorter than `options.min_chars`.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn analyze(text: &str, options: &AnalyzerOptions) -> Analysis {
    if let Err(rejection) = check_length(text, options.min_chars) {
        tracing::warn!(
            chars = rejection.chars,
            min_chars = rejection.min_chars,
            "input too short, analysis skipped"
        );
        return Analysis::Rejected(rejection);
    }

    let report = analyze_all(text, options);
    tracing::info!(
        words = report.stats.words,
        pronouns = report.pronouns.entries().len(),
        prepositions = report.prepositions.entries().len(),
        articles = report.articles.entries().len(),
        "analysis complete"
    );
    Analysis::Completed(report)
}

/// Run every analysis step on `text` without the length gate.
pub fn analyze_all(text: &str, options: &AnalyzerOptions) -> AnalysisReport {
    let stats = stats::basic_stats(text);
    let tokens = tokenize::tokenize(text);
    let count = |category: Category| {
        frequency::count_category(&tokens, category, options.limit_for(category))
    };

    AnalysisReport {
        stats,
        pronouns: count(Category::Pronouns),
        prepositions: count(Category::Prepositions),
        articles: count(Category::Articles),
    }
}

/// Count a single category in `text` without the length gate.
pub fn tally(text: &str, category: Category, limit: Option<usize>) -> CategoryTally {
    frequency::count_category(tokenize::tokens(text), category, limit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::DEFAULT_RANKING_LIMIT;

    /// Repeat `unit` until the result is at least `min_len` characters.
    fn repeat_to(unit: &str, min_len: usize) -> String {
        let mut text = String::new();
        while text.chars().count() < min_len {
            text.push_str(unit);
        }
        text
    }

    fn counts(tally: &CategoryTally) -> Vec<(&str, usize)> {
        tally
            .entries()
            .iter()
            .map(|e| (e.word.as_str(), e.count))
            .collect()
    }

    #[test]
    fn short_input_is_rejected() {
        let result = analyze("the cat sat on the mat", &AnalyzerOptions::default());
        let rejection = result.rejection().expect("should be rejected");
        assert_eq!(rejection.message, SHORT_INPUT_ADVISORY);
        assert_eq!(rejection.chars, 22);
        assert_eq!(rejection.min_chars, 500);
        assert!(result.report().is_none());
    }

    #[test]
    fn gate_measures_trimmed_characters() {
        let padded = format!("   {}   ", "x".repeat(499));
        assert!(check_length(&padded, 500).is_err());
        let exact = format!("\n{}\n", "x".repeat(500));
        assert!(check_length(&exact, 500).is_ok());
    }

    #[test]
    fn gate_counts_characters_not_bytes() {
        // 250 two-byte characters are 500 bytes but only 250 chars.
        let text = "é".repeat(250);
        assert!(check_length(&text, 500).is_err());
    }

    #[test]
    fn repeated_sentences_rank_each_category() {
        let unit = "I love the quick brown fox. I run to the forest. ";
        let text = repeat_to(unit, 600);
        let reps = text.matches(unit).count();

        let result = analyze(&text, &AnalyzerOptions::default());
        let report = result.report().expect("should be analyzed");

        assert_eq!(counts(&report.pronouns), vec![("i", 2 * reps)]);
        assert_eq!(counts(&report.prepositions), vec![("to", reps)]);
        assert_eq!(counts(&report.articles), vec![("the", 2 * reps)]);
        assert_eq!(report.stats.words, 11 * reps);
    }

    #[test]
    fn text_without_prepositions_reports_empty_state() {
        let text = repeat_to("Alice, Bob; Carol! Dave? Eve... Mallory & Trent. ", 520);
        let report = analyze_all(&text, &AnalyzerOptions::default());
        assert_eq!(
            report.prepositions,
            CategoryTally::NoMatches {
                category: Category::Prepositions,
                message: "No prepositions found.".to_string(),
            }
        );
    }

    #[test]
    fn numerals_and_symbols_only() {
        let text = repeat_to("123 456, 7.89 -- #42! ", 520);
        let result = analyze(&text, &AnalyzerOptions::default());
        let report = result.report().expect("long enough to analyze");

        assert_eq!(report.stats.letters, 0);
        assert_eq!(report.stats.words, stats::count_words(&text));
        for tally in report.tallies() {
            assert!(tally.is_empty(), "{} should be empty", tally.category());
        }
    }

    #[test]
    fn truncation_is_asymmetric_by_default() {
        let options = AnalyzerOptions::default();
        assert_eq!(
            options.limit_for(Category::Pronouns),
            Some(DEFAULT_RANKING_LIMIT)
        );
        assert_eq!(
            options.limit_for(Category::Prepositions),
            Some(DEFAULT_RANKING_LIMIT)
        );
        assert_eq!(options.limit_for(Category::Articles), None);
    }

    #[test]
    fn analysis_is_idempotent() {
        let text = repeat_to("They said it was theirs, but we knew about the map. ", 600);
        let options = AnalyzerOptions::default();
        assert_eq!(analyze(&text, &options), analyze(&text, &options));
    }

    #[test]
    fn options_from_config_fill_defaults() {
        let config = Config {
            min_chars: Some(10),
            article_limit: Some(2),
            ..Config::default()
        };
        let options = AnalyzerOptions::from_config(&config);
        assert_eq!(options.min_chars, 10);
        assert_eq!(options.ranking_limit, Some(DEFAULT_RANKING_LIMIT));
        assert_eq!(options.article_limit, Some(2));
    }

    #[test]
    fn lowered_threshold_allows_short_text() {
        let options = AnalyzerOptions::default().with_min_chars(5);
        let result = analyze("the cat sat on the mat", &options);
        let report = result.report().expect("should be analyzed");
        assert_eq!(counts(&report.articles), vec![("the", 2)]);
        assert_eq!(counts(&report.prepositions), vec![("on", 1)]);
        assert!(report.pronouns.is_empty());
    }

    #[test]
    fn single_category_tally_skips_gate() {
        let result = tally("To be or not to be", Category::Prepositions, None);
        assert_eq!(counts(&result), vec![("to", 2)]);
    }

    #[test]
    fn outcome_serializes_with_tag() {
        let json = serde_json::to_value(analyze("short", &AnalyzerOptions::default())).unwrap();
        assert_eq!(json["outcome"], "rejected");
        assert_eq!(json["message"], SHORT_INPUT_ADVISORY);

        let options = AnalyzerOptions::default().with_min_chars(1);
        let json = serde_json::to_value(analyze("I went to the shop.", &options)).unwrap();
        assert_eq!(json["outcome"], "completed");
        assert_eq!(json["stats"]["words"], 5);
        assert_eq!(json["pronouns"]["status"], "ranked");
    }
}
