//! Events command — replay recorded page interactions through the event log.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use wordtally_core::events::{self, DEFAULT_EVENT_LOG_CAPACITY};

use super::read_input_file;

/// Arguments for the `events` subcommand.
#[derive(Args, Debug)]
pub struct EventsArgs {
    /// JSON array of recorded interactions (`-` for stdin).
    pub file: Utf8PathBuf,

    /// Entries to keep (newest first).
    #[arg(long)]
    pub capacity: Option<usize>,
}

/// Replay interactions and print the retained log entries, newest first.
#[instrument(name = "cmd_events", skip_all, fields(file = %args.file))]
pub fn cmd_events(
    args: EventsArgs,
    global_json: bool,
    config_capacity: Option<usize>,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, capacity = ?args.capacity, "executing events command");

    let content = read_input_file(&args.file, max_input_bytes)?;
    let interactions = events::parse_interactions(&content)
        .with_context(|| format!("failed to parse {}", args.file))?;

    let capacity = args
        .capacity
        .or(config_capacity)
        .unwrap_or(DEFAULT_EVENT_LOG_CAPACITY);
    let log = events::replay(&interactions, capacity)?;

    if global_json {
        let entries: Vec<_> = log.entries().collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else if log.is_empty() {
        println!("{}", "No events recorded.".dimmed());
    } else {
        for entry in log.entries() {
            println!("{entry}");
        }
    }

    Ok(())
}
