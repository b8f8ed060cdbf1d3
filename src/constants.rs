//! Shared constants.

/// Name of the configuration file searched for next to the target file.
pub const CONFIG_FILENAME: &str = ".dedupdecl.toml";

/// Default search radius (in lines) around a hinted line.
pub const DEFAULT_WINDOW: usize = 10;

/// Keywords allowed before a declaration name when no configuration is given.
///
/// The generated files this tool was built for declare methods as
/// `async name(...)`, so `async` is the only default.
pub const DEFAULT_KEYWORDS: &[&str] = &["async"];

/// Returns the default keyword list as owned strings.
#[must_use]
pub fn default_keywords() -> Vec<String> {
    DEFAULT_KEYWORDS.iter().map(|s| (*s).to_owned()).collect()
}
