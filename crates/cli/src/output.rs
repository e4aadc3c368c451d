//! Writes a ranking to its output file.
//!
//! One line per entry, `"<title>, <score>"` with the score to one decimal.
//! No header, and no newline after the last line.

use anyhow::{Context, Result};
use pipeline::RankedEntry;
use std::fs;
use std::path::Path;

/// Render a single result line
pub fn format_entry(entry: &RankedEntry) -> String {
    entry.to_string()
}

/// Render the whole ranking as file content
pub fn render_ranking(entries: &[RankedEntry]) -> String {
    entries
        .iter()
        .map(format_entry)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write the ranking to `path`, replacing any existing file
pub fn write_ranking(path: &Path, entries: &[RankedEntry]) -> Result<()> {
    fs::write(path, render_ranking(entries))
        .with_context(|| format!("Failed to write results to {}", path.display()))?;
    tracing::debug!("Wrote {} entries to {}", entries.len(), path.display());
    Ok(())
}
