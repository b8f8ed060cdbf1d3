//! Duplicate-block planning and application.
//!
//! Two removal policies exist, matching the two ways the cleanup was run:
//!
//! - **Full scan**: collect every occurrence of a name; when more than one
//!   exists, remove all but the first.
//! - **Windowed**: a human supplies an approximate line per name; search only
//!   a fixed window around it and remove the single block found there. No
//!   check is made that an earlier canonical copy exists.
//!
//! Planning runs against the pristine document; removals are applied
//! highest-index first so earlier indices stay valid across deletions.

use std::fmt;

use rustc_hash::FxHashSet;
use serde::Serialize;

use crate::document::{Document, DocumentError};
use crate::extent::{find_extent, BlockExtent};
use crate::marker::{locate, locate_all, SignaturePattern, Window};

/// A declaration name plus a human-supplied approximate line (1-based).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetHint {
    /// Declaration name to search for.
    pub name: String,
    /// Approximate signature line, 1-based as shown in an editor.
    pub line: usize,
}

/// One search performed while planning, kept for diagnostics.
#[derive(Debug, Clone)]
pub struct SearchRecord {
    /// Name that was searched for.
    pub name: String,
    /// Hinted line (1-based) for windowed searches, `None` for full scans.
    pub hint_line: Option<usize>,
    /// Matching line indices (0-based), ascending.
    pub matches: Vec<usize>,
}

/// A duplicate block scheduled for deletion.
#[derive(Debug, Clone)]
pub struct PlannedRemoval {
    /// Declaration name the block belongs to.
    pub name: String,
    /// Extent of the block in the pristine document.
    pub extent: BlockExtent,
}

/// Why a configured target produced no removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// The signature pattern matched nothing in scope.
    NotFound,
    /// Exactly one occurrence exists; there is nothing to remove.
    NoDuplicates,
    /// A block opened but the document ended before the braces balanced.
    Unclosed {
        /// Signature line of the unclosed block, 1-based.
        line: usize,
    },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "signature not found in scope"),
            Self::NoDuplicates => write!(f, "only one occurrence, nothing to remove"),
            Self::Unclosed { line } => {
                write!(f, "block opened at line {line} never closes")
            }
        }
    }
}

/// A target that was skipped, with the reason.
#[derive(Debug, Clone, Serialize)]
pub struct SkippedTarget {
    /// Declaration name of the skipped target.
    pub name: String,
    /// Why it was skipped.
    pub reason: SkipReason,
}

/// Result of planning a dedupe run against a pristine document.
#[derive(Debug, Default)]
pub struct DedupePlan {
    /// Every search that was performed, in input order.
    pub searches: Vec<SearchRecord>,
    /// Blocks to delete.
    pub removals: Vec<PlannedRemoval>,
    /// Targets that produced no removal.
    pub skipped: Vec<SkippedTarget>,
}

/// A removal that was (or would be) applied, 1-based for display.
#[derive(Debug, Clone, Serialize)]
pub struct Removal {
    /// Declaration name of the removed block.
    pub name: String,
    /// First removed line, 1-based.
    pub start_line: usize,
    /// Last line of the block, 1-based.
    pub end_line: usize,
    /// Lines actually deleted, including an absorbed trailing blank.
    pub lines_removed: usize,
}

/// Plans a full-scan run: for each name, every occurrence after the first is
/// scheduled for removal. Repeated names in the input are processed once.
pub fn plan_full_scan(
    lines: &[String],
    names: &[String],
    keywords: &[String],
) -> Result<DedupePlan, regex::Error> {
    let mut plan = DedupePlan::default();
    let mut seen: FxHashSet<&str> = FxHashSet::default();

    for name in names {
        if !seen.insert(name.as_str()) {
            continue;
        }
        let pattern = SignaturePattern::new(name, keywords)?;
        let markers = locate_all(lines, &pattern);
        plan.searches.push(SearchRecord {
            name: name.clone(),
            hint_line: None,
            matches: markers.clone(),
        });

        match markers.len() {
            0 => plan.skipped.push(SkippedTarget {
                name: name.clone(),
                reason: SkipReason::NotFound,
            }),
            1 => plan.skipped.push(SkippedTarget {
                name: name.clone(),
                reason: SkipReason::NoDuplicates,
            }),
            _ => {
                for &marker in &markers[1..] {
                    match find_extent(lines, marker) {
                        Some(extent) => plan.removals.push(PlannedRemoval {
                            name: name.clone(),
                            extent,
                        }),
                        None => plan.skipped.push(SkippedTarget {
                            name: name.clone(),
                            reason: SkipReason::Unclosed { line: marker + 1 },
                        }),
                    }
                }
            }
        }
    }

    Ok(plan)
}

/// Plans a windowed run: each hint is searched within `radius` lines of its
/// approximate line and the single block found there is scheduled.
pub fn plan_windowed(
    lines: &[String],
    hints: &[TargetHint],
    radius: usize,
    keywords: &[String],
) -> Result<DedupePlan, regex::Error> {
    let mut plan = DedupePlan::default();

    for hint in hints {
        let pattern = SignaturePattern::new(&hint.name, keywords)?;
        let window = Window {
            center: hint.line.saturating_sub(1),
            radius,
        };
        let found = locate(lines, &pattern, Some(window));
        plan.searches.push(SearchRecord {
            name: hint.name.clone(),
            hint_line: Some(hint.line),
            matches: found.into_iter().collect(),
        });

        match found {
            None => plan.skipped.push(SkippedTarget {
                name: hint.name.clone(),
                reason: SkipReason::NotFound,
            }),
            Some(marker) => match find_extent(lines, marker) {
                Some(extent) => plan.removals.push(PlannedRemoval {
                    name: hint.name.clone(),
                    extent,
                }),
                None => plan.skipped.push(SkippedTarget {
                    name: hint.name.clone(),
                    reason: SkipReason::Unclosed { line: marker + 1 },
                }),
            },
        }
    }

    Ok(plan)
}

/// Applies a plan to the document, highest start index first.
///
/// An extent that reaches into lines already removed (two hints resolving to
/// the same block, or a brace-count desync) is clamped to stop short of them,
/// and dropped entirely when nothing of it is left. Each pristine line is
/// removed at most once.
pub fn apply(doc: &mut Document, plan: &DedupePlan) -> Result<Vec<Removal>, DocumentError> {
    let mut ordered: Vec<&PlannedRemoval> = plan.removals.iter().collect();
    ordered.sort_by(|a, b| b.extent.start.cmp(&a.extent.start));

    let mut removals = Vec::with_capacity(ordered.len());
    // Lowest pristine index removed so far; extents are planned against the
    // pristine document, so anything at or past this is already gone.
    let mut removed_floor = doc.len();
    for planned in ordered {
        if planned.extent.start >= removed_floor {
            continue;
        }
        let end = planned.extent.end.min(removed_floor - 1);
        let lines_removed = doc.remove_range(planned.extent.start, end)?;
        removed_floor = planned.extent.start;
        removals.push(Removal {
            name: planned.name.clone(),
            start_line: planned.extent.start + 1,
            end_line: end + 1,
            lines_removed,
        });
    }

    removals.reverse();
    Ok(removals)
}

/// Converts a plan's removals into display records without touching the
/// document. Used for dry runs and JSON previews.
#[must_use]
pub fn preview(plan: &DedupePlan) -> Vec<Removal> {
    plan.removals
        .iter()
        .map(|planned| Removal {
            name: planned.name.clone(),
            start_line: planned.extent.start + 1,
            end_line: planned.extent.end + 1,
            lines_removed: planned.extent.line_count(),
        })
        .collect()
}
