//! Brace-depth block extent detection.
//!
//! A declaration's textual extent is found by running a brace counter from
//! its signature line: `+1` per `{` and `-1` per `}`. The counter is "armed"
//! once it first becomes nonzero; the block closes at the first line where
//! the counter is back to exactly zero after arming and the line contains a
//! closing brace.
//!
//! The counter has no lexical awareness: braces inside strings, comments, or
//! regular expressions desynchronize it. Callers are expected to run this on
//! generated code where that does not occur.

/// Inclusive line range (0-based) covered by one declaration block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockExtent {
    /// Signature line of the block.
    pub start: usize,
    /// Line holding the matching closing brace.
    pub end: usize,
}

impl BlockExtent {
    /// Number of lines the extent spans.
    #[must_use]
    pub const fn line_count(&self) -> usize {
        self.end - self.start + 1
    }
}

/// Finds the extent of the block whose signature sits at `start_line`.
///
/// Returns `None` when `start_line` is past the end of the document or the
/// document ends before the brace counter closes.
#[must_use]
pub fn find_extent(lines: &[String], start_line: usize) -> Option<BlockExtent> {
    let mut depth: i64 = 0;
    let mut armed = false;

    for (idx, line) in lines.iter().enumerate().skip(start_line) {
        for ch in line.chars() {
            match ch {
                '{' => depth += 1,
                '}' => depth -= 1,
                _ => continue,
            }
            if depth != 0 {
                armed = true;
            }
        }
        if armed && depth == 0 && line.contains('}') {
            return Some(BlockExtent {
                start: start_line,
                end: idx,
            });
        }
    }

    None
}
