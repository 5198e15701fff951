//! Analyze command — basic stats plus ranked pronouns, prepositions, and articles.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use wordtally_core::{Analysis, AnalyzerOptions, analyze};

use super::{print_stats, print_tally, read_input_file};

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// File to analyze (`-` for stdin).
    pub file: Utf8PathBuf,

    /// Minimum trimmed length in characters before analysis runs.
    #[arg(long)]
    pub min_chars: Option<usize>,
}

/// Run the full analysis on a file.
///
/// Input shorter than the minimum is a soft rejection: the advisory is
/// printed and the command still succeeds.
#[instrument(name = "cmd_analyze", skip_all, fields(file = %args.file))]
pub fn cmd_analyze(
    args: AnalyzeArgs,
    global_json: bool,
    options: AnalyzerOptions,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, min_chars = ?args.min_chars, "executing analyze command");

    let content = read_input_file(&args.file, max_input_bytes)?;
    let options = args
        .min_chars
        .map_or(options, |min| options.with_min_chars(min));

    let analysis = analyze(&content, &options);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
        return Ok(());
    }

    match analysis {
        Analysis::Rejected(rejection) => {
            eprintln!(
                "{} {} ({} of {} characters)",
                "warning:".yellow().bold(),
                rejection.message,
                rejection.chars,
                rejection.min_chars,
            );
        }
        Analysis::Completed(report) => {
            println!("{}", args.file.bold());
            print_stats(&report.stats);
            for tally in report.tallies() {
                print_tally(tally);
            }
        }
    }

    Ok(())
}
