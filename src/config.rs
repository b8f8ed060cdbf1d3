//! Configuration loading.
//!
//! Target names and line hints were originally hard-coded in the one-shot
//! cleanup scripts; here they live in a `.dedupdecl.toml` next to (or above)
//! the file being cleaned, so the tool is reusable.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::constants::CONFIG_FILENAME;

/// Top-level configuration struct.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct Config {
    /// The main configuration section for dedupdecl.
    #[serde(default)]
    pub dedupdecl: DedupdeclConfig,
    /// The path to the configuration file this was loaded from.
    /// `None` if using defaults or programmatic config.
    #[serde(skip)]
    pub config_file_path: Option<std::path::PathBuf>,
}

/// Configuration options for dedupdecl.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct DedupdeclConfig {
    /// Search radius (in lines) around a hinted line for `window` mode.
    pub window: Option<usize>,
    /// Keywords allowed before the declaration name in a signature line.
    /// An explicit empty list means bare `name(` signatures match.
    pub keywords: Option<Vec<String>>,
    /// Declaration names targeted by `scan` mode.
    pub names: Option<Vec<String>>,
    /// Name/line hints targeted by `window` mode.
    #[serde(default)]
    pub hints: Vec<HintEntry>,
}

/// A configured `window`-mode target.
#[derive(Debug, Deserialize, Clone)]
pub struct HintEntry {
    /// Declaration name.
    pub name: String,
    /// Approximate signature line, 1-based.
    pub line: usize,
}

impl Config {
    /// Loads configuration from the current directory, traversing up.
    #[must_use]
    pub fn load() -> Self {
        Self::load_from_path(Path::new("."))
    }

    /// Loads configuration starting from a specific path and traversing up.
    ///
    /// `path` may be the target file itself; the search starts in its
    /// directory. Returns defaults when no config file is found.
    #[must_use]
    pub fn load_from_path(path: &Path) -> Self {
        let mut current = path.to_path_buf();
        if current.is_file() {
            current.pop();
        }

        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                if let Ok(content) = fs::read_to_string(&candidate) {
                    if let Ok(mut config) = toml::from_str::<Config>(&content) {
                        config.config_file_path = Some(candidate);
                        return config;
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        Config::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_load_from_path_no_config() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from_path(dir.path());
        assert!(config.dedupdecl.window.is_none());
        assert!(config.dedupdecl.names.is_none());
        assert!(config.config_file_path.is_none());
    }

    #[test]
    fn test_load_from_path_full_config() {
        let dir = TempDir::new().unwrap();
        let mut file = std::fs::File::create(dir.path().join(".dedupdecl.toml")).unwrap();
        writeln!(
            file,
            r#"[dedupdecl]
window = 15
keywords = ["async", "static"]
names = ["getUser", "updateUser"]

[[dedupdecl.hints]]
name = "deleteUser"
line = 1542
"#
        )
        .unwrap();

        let config = Config::load_from_path(dir.path());
        assert_eq!(config.dedupdecl.window, Some(15));
        assert_eq!(
            config.dedupdecl.keywords,
            Some(vec!["async".to_owned(), "static".to_owned()])
        );
        assert_eq!(
            config.dedupdecl.names,
            Some(vec!["getUser".to_owned(), "updateUser".to_owned()])
        );
        assert_eq!(config.dedupdecl.hints.len(), 1);
        assert_eq!(config.dedupdecl.hints[0].name, "deleteUser");
        assert_eq!(config.dedupdecl.hints[0].line, 1542);
        assert!(config.config_file_path.is_some());
    }

    #[test]
    fn test_load_from_path_traverses_up() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("server").join("generated");
        std::fs::create_dir_all(&nested).unwrap();

        let mut file = std::fs::File::create(dir.path().join(".dedupdecl.toml")).unwrap();
        writeln!(
            file,
            r"[dedupdecl]
window = 25
"
        )
        .unwrap();

        let config = Config::load_from_path(&nested);
        assert_eq!(config.dedupdecl.window, Some(25));
    }

    #[test]
    fn test_load_from_file_path() {
        let dir = TempDir::new().unwrap();
        let mut file = std::fs::File::create(dir.path().join(".dedupdecl.toml")).unwrap();
        writeln!(
            file,
            r#"[dedupdecl]
names = ["foo"]
"#
        )
        .unwrap();

        let target = dir.path().join("storage.ts");
        std::fs::write(&target, "async foo() {}\n").unwrap();

        let config = Config::load_from_path(&target);
        assert_eq!(config.dedupdecl.names, Some(vec!["foo".to_owned()]));
    }

    #[test]
    fn test_empty_keywords_list_is_preserved() {
        let config = toml::from_str::<Config>(
            r"[dedupdecl]
keywords = []
",
        )
        .unwrap();
        assert_eq!(config.dedupdecl.keywords, Some(Vec::new()));
    }
}
