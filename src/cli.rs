//! Command-line interface definitions.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Help text for configuration file options, shown at the bottom of --help.
const CONFIG_HELP: &str = "\
CONFIGURATION FILE (.dedupdecl.toml):
  Create this file next to the target file (or in any parent directory)
  to avoid repeating targets on the command line.

  [dedupdecl]
  window = 10                # Search radius around hinted lines
  keywords = [\"async\"]       # Keywords allowed before the declaration name
  names = [\"getUser\"]        # Targets for `scan`

  [[dedupdecl.hints]]        # Targets for `window`
  name = \"getUser\"
  line = 1542
";

/// Options for output formatting and verbosity.
#[derive(Args, Debug, Default, Clone)]
#[allow(clippy::struct_excessive_bools)]
pub struct OutputOptions {
    /// Output raw JSON instead of human-readable diagnostics.
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose output (per-search diagnostics, config source).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Preview removals without modifying the file.
    #[arg(long, global = true)]
    pub dry_run: bool,
}

/// Options controlling how signatures are matched.
#[derive(Args, Debug, Default, Clone)]
pub struct MatchOptions {
    /// Search radius (lines) around a hinted line (window mode only).
    #[arg(long)]
    pub window: Option<usize>,

    /// Keyword allowed before the declaration name (repeatable; overrides
    /// config). Pass none and configure `keywords = []` to match bare names.
    #[arg(long = "keyword", value_name = "KEYWORD")]
    pub keywords: Vec<String>,
}

/// Command line interface configuration using `clap`.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "dedupdecl - remove duplicate method declarations from generated source files",
    long_about = None,
    after_help = CONFIG_HELP
)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Output formatting options.
    #[command(flatten)]
    pub output: OutputOptions,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Full scan: keep the first occurrence of each name, remove the rest
    Scan {
        /// The file to clean.
        file: PathBuf,

        /// Declaration name to deduplicate (repeatable; overrides config
        /// `names`).
        #[arg(long = "name", value_name = "NAME")]
        names: Vec<String>,

        /// Signature matching options.
        #[command(flatten)]
        matching: MatchOptions,
    },
    /// Windowed removal: delete one duplicate near each hinted line
    Window {
        /// The file to clean.
        file: PathBuf,

        /// Target as NAME:LINE, line 1-based (repeatable; overrides config
        /// `hints`).
        #[arg(long = "target", value_name = "NAME:LINE")]
        targets: Vec<String>,

        /// Signature matching options.
        #[command(flatten)]
        matching: MatchOptions,
    },
    /// Write a starter .dedupdecl.toml in the current directory
    Init,
}
