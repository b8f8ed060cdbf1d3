//! Rich CLI output formatting with colored text and tables.

use colored::Colorize;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, ContentArrangement, Table};
use serde::Serialize;
use std::io::Write;

use crate::dedupe::{Removal, SearchRecord, SkippedTarget};

/// Machine-readable report of one run, emitted with `--json`.
#[derive(Debug, Serialize)]
pub struct RunReport<'a> {
    /// File that was processed.
    pub file: String,
    /// Which mode ran: "scan" or "window".
    pub mode: &'static str,
    /// Whether this was a preview only.
    pub dry_run: bool,
    /// Blocks removed (or previewed).
    pub removals: &'a [Removal],
    /// Targets skipped and why.
    pub skipped: &'a [SkippedTarget],
}

/// Prints the JSON report followed by a newline.
pub fn print_json_report<W: Write>(writer: &mut W, report: &RunReport<'_>) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, report)?;
    writeln!(writer)?;
    Ok(())
}

/// Prints one diagnostic line per search performed.
pub fn print_searches<W: Write>(writer: &mut W, searches: &[SearchRecord]) -> std::io::Result<()> {
    for search in searches {
        let scope = search.hint_line.map_or_else(String::new, |line| {
            format!(" near line {line}")
        });
        if search.matches.is_empty() {
            writeln!(
                writer,
                "{} '{}'{} ... no match",
                "Searching:".cyan(),
                search.name,
                scope
            )?;
        } else {
            let at = search
                .matches
                .iter()
                .map(|idx| (idx + 1).to_string())
                .collect::<Vec<_>>()
                .join(", ");
            writeln!(
                writer,
                "{} '{}'{} ... {} match(es) at line(s) {}",
                "Searching:".cyan(),
                search.name,
                scope,
                search.matches.len(),
                at
            )?;
        }
    }
    Ok(())
}

/// Prints one line per removal, in preview or applied form.
pub fn print_removals<W: Write>(
    writer: &mut W,
    removals: &[Removal],
    dry_run: bool,
) -> std::io::Result<()> {
    for removal in removals {
        if dry_run {
            writeln!(
                writer,
                "  Would remove '{}' (lines {}-{})",
                removal.name, removal.start_line, removal.end_line
            )?;
        } else {
            writeln!(
                writer,
                "  {} '{}' (lines {}-{}, {} line(s))",
                "Removed:".green(),
                removal.name,
                removal.start_line,
                removal.end_line,
                removal.lines_removed
            )?;
        }
    }
    Ok(())
}

/// Prints one line per skipped target.
pub fn print_skipped<W: Write>(writer: &mut W, skipped: &[SkippedTarget]) -> std::io::Result<()> {
    for skip in skipped {
        writeln!(
            writer,
            "  {} '{}': {}",
            "Skip:".yellow(),
            skip.name,
            skip.reason
        )?;
    }
    Ok(())
}

/// Prints a summary table of removals.
pub fn print_removal_table<W: Write>(writer: &mut W, removals: &[Removal]) -> std::io::Result<()> {
    if removals.is_empty() {
        return Ok(());
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Name", "Lines", "Removed"]);

    for removal in removals {
        table.add_row(vec![
            Cell::new(&removal.name),
            Cell::new(format!("{}-{}", removal.start_line, removal.end_line)),
            Cell::new(removal.lines_removed),
        ]);
    }

    writeln!(writer, "{table}")
}

/// Prints the final completion message.
pub fn print_completion<W: Write>(
    writer: &mut W,
    removals: &[Removal],
    skipped_count: usize,
    dry_run: bool,
) -> std::io::Result<()> {
    let lines_removed: usize = removals.iter().map(|r| r.lines_removed).sum();
    if dry_run {
        writeln!(
            writer,
            "{} {} block(s) would be removed ({} line(s)), {} target(s) skipped. File not modified.",
            "[DRY-RUN]".yellow(),
            removals.len(),
            lines_removed,
            skipped_count
        )
    } else {
        writeln!(
            writer,
            "{} {} block(s) removed ({} line(s)), {} target(s) skipped.",
            "Done.".green().bold(),
            removals.len(),
            lines_removed,
            skipped_count
        )
    }
}
