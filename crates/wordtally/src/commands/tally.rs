//! Tally command — rank the words of one category.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use wordtally_core::analyze::tally;
use wordtally_core::{AnalyzerOptions, Category};

use super::{print_tally, read_input_file};

/// Arguments for the `tally` subcommand.
#[derive(Args, Debug)]
pub struct TallyArgs {
    /// File to count (`-` for stdin).
    pub file: Utf8PathBuf,

    /// Word category to rank.
    #[arg(long, short = 'k', value_enum)]
    pub category: Category,

    /// Maximum ranked entries (defaults: 15 for pronouns and prepositions, unbounded for articles).
    #[arg(long)]
    pub limit: Option<usize>,
}

/// Rank one category in a file. No minimum length applies.
#[instrument(name = "cmd_tally", skip_all, fields(file = %args.file, category = %args.category))]
pub fn cmd_tally(
    args: TallyArgs,
    global_json: bool,
    options: AnalyzerOptions,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, category = %args.category, limit = ?args.limit, "executing tally command");

    let content = read_input_file(&args.file, max_input_bytes)?;
    let limit = args.limit.or_else(|| options.limit_for(args.category));
    let result = tally(&content, args.category, limit);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", args.file.bold());
        print_tally(&result);
    }

    Ok(())
}
