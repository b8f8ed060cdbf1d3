//! Windowed removal command (one duplicate near each hinted line).

use anyhow::{bail, Context, Result};
use std::io::Write;
use std::path::Path;

use crate::dedupe::{self, Removal, TargetHint};
use crate::document::Document;
use crate::output;

/// Resolved options for a `window` run.
#[derive(Debug, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct WindowOptions {
    /// Name/line hints to process.
    pub targets: Vec<TargetHint>,
    /// Search radius around each hinted line.
    pub radius: usize,
    /// Keywords allowed before the declaration name.
    pub keywords: Vec<String>,
    /// Preview only, do not write the file.
    pub dry_run: bool,
    /// Emit a JSON report instead of human output.
    pub json: bool,
    /// Per-search diagnostics.
    pub verbose: bool,
}

/// Parses a `NAME:LINE` target argument. The line is 1-based.
pub fn parse_target(raw: &str) -> Result<TargetHint> {
    let Some((name, line)) = raw.rsplit_once(':') else {
        bail!("invalid --target '{raw}': expected NAME:LINE");
    };
    let name = name.trim();
    if name.is_empty() {
        bail!("invalid --target '{raw}': empty name");
    }
    let line: usize = line
        .trim()
        .parse()
        .with_context(|| format!("invalid --target '{raw}': line is not a number"))?;
    if line == 0 {
        bail!("invalid --target '{raw}': lines are 1-based");
    }
    Ok(TargetHint {
        name: name.to_owned(),
        line,
    })
}

/// Runs the windowed mode against `file`. Returns the process exit code.
pub fn run_window<W: Write>(file: &Path, options: &WindowOptions, writer: &mut W) -> Result<i32> {
    if options.targets.is_empty() {
        writeln!(
            writer,
            "No targets given. Pass --target NAME:LINE or set `hints` in .dedupdecl.toml."
        )?;
        return Ok(1);
    }

    let mut doc = Document::load(file)
        .with_context(|| format!("cannot load {}", file.display()))?;

    if options.verbose && !options.json {
        writeln!(
            writer,
            "Loaded {} ({} lines), window +/-{}",
            file.display(),
            doc.len(),
            options.radius
        )?;
    }

    let plan = dedupe::plan_windowed(doc.lines(), &options.targets, options.radius, &options.keywords)
        .context("invalid signature pattern")?;

    let removals: Vec<Removal> = if options.dry_run {
        dedupe::preview(&plan)
    } else {
        let removals = dedupe::apply(&mut doc, &plan)?;
        if !removals.is_empty() {
            doc.save(file)?;
        }
        removals
    };

    if options.json {
        let report = output::RunReport {
            file: file.display().to_string(),
            mode: "window",
            dry_run: options.dry_run,
            removals: &removals,
            skipped: &plan.skipped,
        };
        output::print_json_report(writer, &report)?;
        return Ok(0);
    }

    output::print_searches(writer, &plan.searches)?;
    output::print_removals(writer, &removals, options.dry_run)?;
    output::print_skipped(writer, &plan.skipped)?;
    if !options.dry_run {
        output::print_removal_table(writer, &removals)?;
    }
    output::print_completion(writer, &removals, plan.skipped.len(), options.dry_run)?;

    Ok(0)
}
