//! Command implementations.

use std::io::Read;

use anyhow::Context;
use camino::Utf8Path;
use owo_colors::OwoColorize;

use wordtally_core::{BasicStats, CategoryTally};

pub mod analyze;
pub mod events;
pub mod info;
#[cfg(feature = "mcp")]
pub mod serve;
pub mod stats;
pub mod tally;

/// Path that selects standard input instead of a file.
pub const STDIN_PATH: &str = "-";

/// Read a file (or stdin for `-`) and validate its size against the configured limit.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    if path.as_str() == STDIN_PATH {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("failed to read standard input")?;
        if let Some(max) = max_bytes
            && content.len() > max
        {
            anyhow::bail!(
                "input too large: stdin is {} bytes (limit: {max} bytes)",
                content.len()
            );
        }
        return Ok(content);
    }

    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = metadata.len() as usize;
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(content)
}

/// Print the five basic tallies, one per line.
pub(crate) fn print_stats(stats: &BasicStats) {
    for (label, value) in [
        ("Letters:", stats.letters),
        ("Words:", stats.words),
        ("Spaces:", stats.whitespace),
        ("Newlines:", stats.newlines),
        ("Special Symbols:", stats.special_symbols),
    ] {
        println!("  {} {value}", label.cyan());
    }
}

/// Print a ranked category, or its empty-state message.
pub(crate) fn print_tally(tally: &CategoryTally) {
    let heading = capitalize(tally.category().as_str());
    match tally {
        CategoryTally::NoMatches { message, .. } => {
            println!("\n  {}", heading.bold());
            println!("    {}", message.dimmed());
        }
        CategoryTally::Ranked(table) => {
            println!("\n  {}", heading.bold());
            for entry in &table.entries {
                println!("    {}: {}", entry.word, entry.count);
            }
            if table.truncated {
                println!(
                    "    {}",
                    format!(
                        "(top {} of {} distinct)",
                        table.entries.len(),
                        table.distinct_words
                    )
                    .dimmed()
                );
            }
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
