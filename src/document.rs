//! In-memory line buffer for the file being cleaned.
//!
//! The whole file is read once at the start, mutated in place by deletions,
//! and written once at the end. Splitting on `'\n'` (rather than using
//! [`str::lines`]) round-trips the file byte-for-byte when nothing is removed:
//! a trailing newline shows up as a final empty element and is restored by the
//! join on save.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors produced while loading, mutating, or saving a [`Document`].
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The file could not be read.
    #[error("failed to read {}: {}", .path.display(), .source)]
    Read {
        /// Path that failed to load.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The file could not be written.
    #[error("failed to write {}: {}", .path.display(), .source)]
    Write {
        /// Path that failed to save.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// A removal range does not fit inside the document.
    #[error("line range {start}..={end} out of bounds for document of {len} lines")]
    RangeOutOfBounds {
        /// First line of the rejected range (0-based).
        start: usize,
        /// Last line of the rejected range (0-based).
        end: usize,
        /// Document length at the time of the call.
        len: usize,
    },
}

/// An ordered, mutable sequence of text lines loaded wholly into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    lines: Vec<String>,
}

impl Document {
    /// Reads the file at `path` into a new document.
    pub fn load(path: &Path) -> Result<Self, DocumentError> {
        let content = fs::read_to_string(path).map_err(|source| DocumentError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_content(&content))
    }

    /// Builds a document from raw file content.
    #[must_use]
    pub fn from_content(content: &str) -> Self {
        Self {
            lines: content.split('\n').map(ToOwned::to_owned).collect(),
        }
    }

    /// Builds a document from an existing line vector.
    #[must_use]
    pub fn from_lines(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// Writes the current line sequence back to `path`, overwriting it.
    pub fn save(&self, path: &Path) -> Result<(), DocumentError> {
        fs::write(path, self.contents()).map_err(|source| DocumentError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Joins the lines back into file content.
    #[must_use]
    pub fn contents(&self) -> String {
        self.lines.join("\n")
    }

    /// Borrows the line sequence.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of lines currently in the document.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the document holds no lines at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Deletes lines `[start, end]` inclusive (0-based), plus one
    /// immediately-following blank line if present, so a removed block does
    /// not leave a double blank behind.
    ///
    /// Returns the number of lines actually deleted. Indices of lines after
    /// the range shift down; callers batching several removals must apply
    /// them highest-index first.
    pub fn remove_range(&mut self, start: usize, end: usize) -> Result<usize, DocumentError> {
        if start > end || end >= self.lines.len() {
            return Err(DocumentError::RangeOutOfBounds {
                start,
                end,
                len: self.lines.len(),
            });
        }
        let mut removed = end - start + 1;
        self.lines.drain(start..=end);
        if self
            .lines
            .get(start)
            .is_some_and(|line| line.trim().is_empty())
        {
            self.lines.remove(start);
            removed += 1;
        }
        Ok(removed)
    }
}
