//! Shared entry point: argument parsing, config merging, command dispatch.
//!
//! The binary and the integration tests both go through [`run_with_args_to`]
//! so output can be captured without spawning a process.

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Commands, MatchOptions, OutputOptions};
use crate::commands::{self, ScanOptions, WindowOptions};
use crate::config::Config;
use crate::constants::{default_keywords, DEFAULT_WINDOW};
use crate::dedupe::TargetHint;

/// Runs dedupdecl with the given arguments, writing output to stdout.
///
/// Returns the process exit code.
pub fn run_with_args(args: Vec<String>) -> Result<i32> {
    run_with_args_to(args, &mut std::io::stdout())
}

/// Runs dedupdecl with the given arguments, writing output to the specified
/// writer. This is the testable version of [`run_with_args`].
pub fn run_with_args_to<W: std::io::Write>(args: Vec<String>, writer: &mut W) -> Result<i32> {
    let mut program_args = vec!["dedupdecl".to_owned()];
    program_args.extend(args);
    let cli = match Cli::try_parse_from(program_args) {
        Ok(c) => c,
        Err(e) => {
            match e.kind() {
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                    // Let clap print help/version as intended, but captured by redirect
                    write!(writer, "{e}")?;
                    writer.flush()?;
                    return Ok(0);
                }
                _ => {
                    eprint!("{e}");
                    return Ok(1);
                }
            }
        }
    };

    if cli.output.verbose && !cli.output.json {
        eprintln!("[VERBOSE] dedupdecl v{}", env!("CARGO_PKG_VERSION"));
    }

    match cli.command {
        Commands::Init => {
            commands::run_init(writer)?;
            Ok(0)
        }
        Commands::Scan { file, names, matching } => {
            if !file.exists() {
                eprintln!("Error: the file '{}' does not exist.", file.display());
                return Ok(1);
            }
            let config = Config::load_from_path(&file);
            report_config_source(&cli.output, &config);

            let names = if names.is_empty() {
                config.dedupdecl.names.clone().unwrap_or_default()
            } else {
                names
            };
            let options = ScanOptions {
                names,
                keywords: resolve_keywords(&matching, &config),
                dry_run: cli.output.dry_run,
                json: cli.output.json,
                verbose: cli.output.verbose,
            };
            commands::run_scan(&file, &options, writer)
        }
        Commands::Window { file, targets, matching } => {
            if !file.exists() {
                eprintln!("Error: the file '{}' does not exist.", file.display());
                return Ok(1);
            }
            let config = Config::load_from_path(&file);
            report_config_source(&cli.output, &config);

            let targets = if targets.is_empty() {
                config
                    .dedupdecl
                    .hints
                    .iter()
                    .map(|hint| TargetHint {
                        name: hint.name.clone(),
                        line: hint.line,
                    })
                    .collect()
            } else {
                let mut parsed = Vec::with_capacity(targets.len());
                for raw in &targets {
                    match commands::parse_target(raw) {
                        Ok(hint) => parsed.push(hint),
                        Err(e) => {
                            eprintln!("Error: {e}");
                            return Ok(1);
                        }
                    }
                }
                parsed
            };

            let options = WindowOptions {
                targets,
                radius: matching
                    .window
                    .or(config.dedupdecl.window)
                    .unwrap_or(DEFAULT_WINDOW),
                keywords: resolve_keywords(&matching, &config),
                dry_run: cli.output.dry_run,
                json: cli.output.json,
                verbose: cli.output.verbose,
            };
            commands::run_window(&file, &options, writer)
        }
    }
}

/// CLI keywords win over config; an absent config falls back to defaults.
/// A configured empty list is honored (bare-name matching).
fn resolve_keywords(matching: &MatchOptions, config: &Config) -> Vec<String> {
    if !matching.keywords.is_empty() {
        matching.keywords.clone()
    } else if let Some(keywords) = &config.dedupdecl.keywords {
        keywords.clone()
    } else {
        default_keywords()
    }
}

fn report_config_source(output: &OutputOptions, config: &Config) {
    if output.verbose && !output.json {
        match &config.config_file_path {
            Some(path) => eprintln!("[VERBOSE] Config: {}", path.display()),
            None => eprintln!("[VERBOSE] Config: defaults (no {} found)", crate::constants::CONFIG_FILENAME),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(args: &[&str]) -> (i32, String) {
        let mut output = Vec::new();
        let args_owned: Vec<String> = args.iter().map(|s| (*s).to_owned()).collect();
        let code = run_with_args_to(args_owned, &mut output).unwrap_or(1);
        (code, String::from_utf8_lossy(&output).into_owned())
    }

    #[test]
    fn test_help_exits_zero() {
        let (code, output) = run(&["--help"]);
        assert_eq!(code, 0);
        assert!(output.contains("scan"));
        assert!(output.contains("window"));
        assert!(output.contains(".dedupdecl.toml"));
    }

    #[test]
    fn test_missing_file_exits_one() {
        let (code, _) = run(&["scan", "no-such-file.ts", "--name", "foo"]);
        assert_eq!(code, 1);
    }

    #[test]
    fn test_bad_target_syntax_exits_one() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("f.ts");
        std::fs::write(&file, "x\n").unwrap();
        let path = file.to_string_lossy().into_owned();
        let (code, _) = run(&["window", &path, "--target", "nocolon"]);
        assert_eq!(code, 1);
    }
}
