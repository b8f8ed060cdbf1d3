//! Init command: write a starter configuration file.

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::Path;

use crate::constants::CONFIG_FILENAME;

/// Starter configuration written by `dedupdecl init`.
const DEFAULT_CONFIG: &str = r#"
[dedupdecl]
# Search radius (lines) around hinted lines for `window` mode
window = 10

# Keywords allowed before the declaration name in a signature line.
# Use [] to match bare `name(` signatures.
keywords = ["async"]

# Declaration names targeted by `scan` mode
names = []

# Targets for `window` mode: one block per hint
# [[dedupdecl.hints]]
# name = "getUser"
# line = 1542
"#;

/// Executes the init command in the current directory.
pub fn run_init<W: Write>(writer: &mut W) -> Result<()> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    run_init_in(&current_dir, writer)
}

/// Executes the init command in a specific directory.
///
/// This is primarily used for testing.
pub fn run_init_in<W: Write>(root: &Path, writer: &mut W) -> Result<()> {
    writeln!(writer, "Initializing dedupdecl configuration...")?;

    let config_path = root.join(CONFIG_FILENAME);
    if config_path.exists() {
        writeln!(writer, "  • {CONFIG_FILENAME} already exists - skipping.")?;
    } else {
        let mut file = fs::File::create(&config_path)?;
        writeln!(file, "{}", DEFAULT_CONFIG.trim())?;
        writeln!(
            writer,
            "  • Created {CONFIG_FILENAME} with default configuration."
        )?;
    }

    writeln!(writer, "Initialization complete!")?;
    Ok(())
}
