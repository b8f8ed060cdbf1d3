//! Full-scan removal command (keep first occurrence, drop the rest).

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

use crate::dedupe::{self, Removal};
use crate::document::Document;
use crate::output;

/// Resolved options for a `scan` run.
#[derive(Debug, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct ScanOptions {
    /// Declaration names to deduplicate.
    pub names: Vec<String>,
    /// Keywords allowed before the declaration name.
    pub keywords: Vec<String>,
    /// Preview only, do not write the file.
    pub dry_run: bool,
    /// Emit a JSON report instead of human output.
    pub json: bool,
    /// Per-search diagnostics.
    pub verbose: bool,
}

/// Runs the full-scan mode against `file`. Returns the process exit code.
pub fn run_scan<W: Write>(file: &Path, options: &ScanOptions, writer: &mut W) -> Result<i32> {
    if options.names.is_empty() {
        writeln!(
            writer,
            "No target names given. Pass --name or set `names` in .dedupdecl.toml."
        )?;
        return Ok(1);
    }

    let mut doc = Document::load(file)
        .with_context(|| format!("cannot load {}", file.display()))?;

    if options.verbose && !options.json {
        writeln!(writer, "Loaded {} ({} lines)", file.display(), doc.len())?;
    }

    let plan = dedupe::plan_full_scan(doc.lines(), &options.names, &options.keywords)
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
            mode: "scan",
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

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn options(names: &[&str]) -> ScanOptions {
        ScanOptions {
            names: names.iter().map(|s| (*s).to_owned()).collect(),
            keywords: vec!["async".to_owned()],
            ..ScanOptions::default()
        }
    }

    #[test]
    fn test_scan_removes_duplicates_and_saves() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("storage.ts");
        std::fs::write(
            &file,
            "async foo() {\n  x();\n}\n\nasync foo() {\n  y();\n}\n",
        )
        .unwrap();

        let mut buffer = Vec::new();
        let code = run_scan(&file, &options(&["foo"]), &mut buffer).unwrap();
        assert_eq!(code, 0);

        let content = std::fs::read_to_string(&file).unwrap();
        assert_eq!(content, "async foo() {\n  x();\n}\n");

        let out = String::from_utf8(buffer).unwrap();
        assert!(out.contains("'foo'"));
        assert!(out.contains("block(s) removed"));
    }

    #[test]
    fn test_scan_dry_run_leaves_file_untouched() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("storage.ts");
        let source = "async foo() {\n}\n\nasync foo() {\n}\n";
        std::fs::write(&file, source).unwrap();

        let opts = ScanOptions {
            dry_run: true,
            ..options(&["foo"])
        };
        let mut buffer = Vec::new();
        run_scan(&file, &opts, &mut buffer).unwrap();

        assert_eq!(std::fs::read_to_string(&file).unwrap(), source);
        let out = String::from_utf8(buffer).unwrap();
        assert!(out.contains("Would remove 'foo'"));
        assert!(out.contains("File not modified"));
    }

    #[test]
    fn test_scan_no_names_is_usage_error() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("storage.ts");
        std::fs::write(&file, "x\n").unwrap();

        let mut buffer = Vec::new();
        let code = run_scan(&file, &options(&[]), &mut buffer).unwrap();
        assert_eq!(code, 1);
        assert!(String::from_utf8(buffer).unwrap().contains("No target names"));
    }

    #[test]
    fn test_scan_missing_name_skips_silently() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("storage.ts");
        std::fs::write(&file, "async foo() {\n}\n").unwrap();

        let mut buffer = Vec::new();
        let code = run_scan(&file, &options(&["nope"]), &mut buffer).unwrap();
        assert_eq!(code, 0);
        let out = String::from_utf8(buffer).unwrap();
        assert!(out.contains("signature not found"));
        assert!(out.contains("0 block(s) removed"));
    }

    #[test]
    fn test_scan_json_report() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("storage.ts");
        std::fs::write(&file, "async foo() {\n}\nasync foo() {\n}\n").unwrap();

        let opts = ScanOptions {
            json: true,
            ..options(&["foo"])
        };
        let mut buffer = Vec::new();
        run_scan(&file, &opts, &mut buffer).unwrap();

        let report: serde_json::Value =
            serde_json::from_slice(&buffer).expect("output should be valid JSON");
        assert_eq!(report["mode"], "scan");
        assert_eq!(report["removals"][0]["name"], "foo");
        assert_eq!(report["removals"][0]["start_line"], 3);
    }
}
