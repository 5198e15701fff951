//! Library interface for the `wordtally` CLI.
//!
//! This crate exposes the CLI's argument parser and command structure as a library,
//! primarily for documentation generation and testing. The actual entry point is
//! in `main.rs`.
//!
//! # Structure
//!
//! - [`Cli`] - The root argument parser (clap derive)
//! - [`Commands`] - Available subcommands
//! - [`commands`] - Command implementations
//!
//! # Documentation Generation
//!
//! The [`command()`] function returns the clap `Command` for generating man pages
//! and shell completions via `xtask`.

pub mod commands;

#[cfg(feature = "mcp")]
pub mod server;

use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

/// Color output preference.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect terminal capabilities automatically.
    #[default]
    Auto,
    /// Always emit colors.
    Always,
    /// Never emit colors.
    Never,
}

impl ColorChoice {
    /// Configure global color output based on this choice.
    ///
    /// Call this once at startup to set the color mode.
    pub fn apply(self) {
        match self {
            Self::Auto => {} // owo-colors auto-detects by default
            Self::Always => owo_colors::set_override(true),
            Self::Never => owo_colors::set_override(false),
        }
    }
}

const ENV_HELP: &str = "\
ENVIRONMENT VARIABLES:
    RUST_LOG                       Log filter (e.g., debug, wordtally=trace)
    WORDTALLY_LOG_PATH             Explicit log file path
    WORDTALLY_LOG_DIR              Log directory
    WORDTALLY_MIN_CHARS            Minimum input length for `analyze`
    WORDTALLY_RANKING_LIMIT        Ranked entries for pronouns and prepositions
    WORDTALLY_EVENT_LOG_CAPACITY   Entries kept by `events`
";
/// Command-line interface definition for wordtally.
#[derive(Parser)]
#[command(name = "wordtally")]
#[command(about = "Letter, word, and function-word tallies for plain text", long_about = None)]
#[command(version, arg_required_else_help = true)]
#[command(after_long_help = ENV_HELP)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Print only the version number (for scripting)
    #[arg(long)]
    pub version_only: bool,

    /// Path to configuration file (overrides discovery)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Run as if started in DIR
    #[arg(short = 'C', long, global = true)]
    pub chdir: Option<PathBuf>,

    /// Only print errors (suppresses warnings/info)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// More detail (repeatable; e.g. -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Colorize output
    #[arg(long, global = true, value_enum, default_value_t)]
    pub color: ColorChoice,

    /// Output as JSON (for scripting)
    #[arg(long, global = true)]
    pub json: bool,
}

/// Available subcommands for the CLI.
#[derive(Subcommand)]
pub enum Commands {
    /// Basic statistics plus ranked pronouns, prepositions, and articles
    Analyze(commands::analyze::AnalyzeArgs),

    /// Count letters, words, whitespace, newlines, and special symbols
    Stats(commands::stats::StatsArgs),

    /// Rank the words of a single category
    Tally(commands::tally::TallyArgs),

    /// Replay recorded page interactions into the event log
    Events(commands::events::EventsArgs),

    /// Show package information and effective configuration
    Info(commands::info::InfoArgs),

    /// Start MCP (Model Context Protocol) server on stdio
    #[cfg(feature = "mcp")]
    Serve(commands::serve::ServeArgs),
}

/// Returns the clap command for documentation generation
pub fn command() -> clap::Command {
    Cli::command()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        command().debug_assert();
    }

    #[test]
    fn test_tally_requires_category() {
        let result = Cli::try_parse_from(["wordtally", "tally", "notes.txt"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_tally_parses_category_value() {
        let cli = Cli::try_parse_from([
            "wordtally",
            "tally",
            "notes.txt",
            "--category",
            "prepositions",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Tally(args)) => {
                assert_eq!(args.category, wordtally_core::Category::Prepositions);
                assert!(args.limit.is_none());
            }
            _ => panic!("expected tally command"),
        }
    }

    #[test]
    fn test_global_json_after_subcommand() {
        let cli = Cli::try_parse_from(["wordtally", "stats", "-", "--json"]).unwrap();
        assert!(cli.json);
    }
}
