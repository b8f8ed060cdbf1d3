//! Signature pattern matching and declaration marker location.
//!
//! A declaration marker is a line matching a fixed textual pattern: optional
//! leading whitespace, one or more configured keywords, the declaration name,
//! and an opening parameter list. No parsing is attempted; this is a plain
//! per-line regex match.

use regex::Regex;

/// Compiled signature pattern for one declaration name.
#[derive(Debug, Clone)]
pub struct SignaturePattern {
    regex: Regex,
}

impl SignaturePattern {
    /// Builds the pattern for `name`.
    ///
    /// With a non-empty keyword list the line must carry at least one of the
    /// keywords before the name (`async foo(`); with an empty list a bare
    /// `foo(` at the start of the line matches.
    pub fn new(name: &str, keywords: &[String]) -> Result<Self, regex::Error> {
        let escaped_name = regex::escape(name);
        let pattern = if keywords.is_empty() {
            format!(r"^\s*{escaped_name}\s*\(")
        } else {
            let alternation = keywords
                .iter()
                .map(|kw| regex::escape(kw))
                .collect::<Vec<_>>()
                .join("|");
            format!(r"^\s*(?:(?:{alternation})\s+)+{escaped_name}\s*\(")
        };
        Ok(Self {
            regex: Regex::new(&pattern)?,
        })
    }

    /// Whether `line` is a signature line for this declaration.
    #[must_use]
    pub fn is_match(&self, line: &str) -> bool {
        self.regex.is_match(line)
    }
}

/// A fixed-size search window around an approximate line (0-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    /// Center of the window.
    pub center: usize,
    /// Lines searched on each side of the center.
    pub radius: usize,
}

impl Window {
    /// Clamped `[first, last)` line range for a document of `len` lines.
    #[must_use]
    pub fn bounds(&self, len: usize) -> (usize, usize) {
        let first = self.center.saturating_sub(self.radius);
        let last = self
            .center
            .saturating_add(self.radius)
            .saturating_add(1)
            .min(len);
        (first, last)
    }
}

/// Returns the first line index matching `pattern`, searching the whole
/// document or only `window` when one is given.
#[must_use]
pub fn locate(lines: &[String], pattern: &SignaturePattern, window: Option<Window>) -> Option<usize> {
    let (first, last) = window.map_or((0, lines.len()), |w| w.bounds(lines.len()));
    (first..last).find(|&idx| pattern.is_match(&lines[idx]))
}

/// Returns every line index matching `pattern`, in ascending order.
#[must_use]
pub fn locate_all(lines: &[String], pattern: &SignaturePattern) -> Vec<usize> {
    lines
        .iter()
        .enumerate()
        .filter(|(_, line)| pattern.is_match(line))
        .map(|(idx, _)| idx)
        .collect()
}
