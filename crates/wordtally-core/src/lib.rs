//! Core library for wordtally.
//!
//! Counts letters, words, whitespace, newlines, and special symbols in a
//! text, and ranks the pronouns, prepositions, and articles it contains.
//! Also provides the bounded page-interaction [`events`] log.
//!
//! # Modules
//!
//! - [`analyze`] - Length-gated full analysis
//! - [`tokenize`] - Word tokenization
//! - [`stats`] - Character and word tallies
//! - [`frequency`] - Categorized, ranked word counts
//! - [`word_lists`] - The closed word categories
//! - [`events`] - Page interaction event log
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use wordtally_core::{Analysis, AnalyzerOptions, analyze};
//!
//! let text = "I love the quick brown fox. I run to the forest. ".repeat(12);
//! match analyze(&text, &AnalyzerOptions::default()) {
//!     Analysis::Completed(report) => {
//!         assert_eq!(report.pronouns.entries()[0].word, "i");
//!     }
//!     Analysis::Rejected(rejection) => panic!("{}", rejection.message),
//! }
//! ```
#![deny(unsafe_code)]

pub mod analyze;
pub mod config;
pub mod error;
pub mod events;
pub mod frequency;
pub mod stats;
pub mod tokenize;
pub mod word_lists;

pub use analyze::{Analysis, AnalysisReport, AnalyzerOptions, Rejection, analyze};
pub use config::{Config, ConfigLoader, ConfigSources, DEFAULT_MAX_INPUT_BYTES, LogLevel};
pub use error::{AnalysisError, AnalysisResult, ConfigError, ConfigResult, EventError, EventResult};
pub use frequency::{CategoryTally, RankedTable, WordCount};
pub use stats::BasicStats;
pub use word_lists::Category;
