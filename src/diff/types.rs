// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Structured representation of a unified diff.

use serde::{Deserialize, Serialize};

/// A fully parsed unified diff.
///
/// Files appear in the order their `diff --git` headers appeared in the
/// input. Repeated paths are not deduplicated; each header starts a fresh
/// entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedDiff {
    /// The files touched by the diff, in diff order.
    pub files: Vec<FileDiff>,
}

impl ParsedDiff {
    /// Whether the parser recognized any file at all.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// One file section of a diff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDiff {
    /// Destination path from the file header (the `b/` side). Rename
    /// sources are discarded.
    pub path: String,
    /// The hunks of this file, in diff order.
    pub hunks: Vec<Hunk>,
}

impl FileDiff {
    /// Count of added plus deleted lines (context excluded).
    pub fn changed_lines(&self) -> usize {
        self.lines()
            .filter(|l| matches!(l.kind, LineKind::Add | LineKind::Del))
            .count()
    }

    /// All lines of all hunks, in diff order.
    pub fn lines(&self) -> impl Iterator<Item = &DiffLine> {
        self.hunks.iter().flat_map(|h| h.lines.iter())
    }

    /// Added lines only, in diff order.
    pub fn added_lines(&self) -> impl Iterator<Item = &DiffLine> {
        self.lines().filter(|l| l.kind == LineKind::Add)
    }
}

/// One contiguous block of changed lines within a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hunk {
    /// The raw `@@` header line.
    pub header: String,
    /// 1-based starting line in the old file.
    pub old_start: u32,
    /// 1-based starting line in the new file.
    pub new_start: u32,
    /// The lines of the hunk, in diff order.
    pub lines: Vec<DiffLine>,
}

/// The role of a single diff line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    /// Line added in the new version.
    Add,
    /// Line removed from the old version.
    Del,
    /// Unchanged line present in both versions.
    Context,
}

/// A single line inside a hunk.
///
/// `Add` lines carry only `new_line`, `Del` lines only `old_line`,
/// `Context` lines both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffLine {
    /// What this line does.
    pub kind: LineKind,
    /// 1-based line number in the old file, when applicable.
    pub old_line: Option<u32>,
    /// 1-based line number in the new file, when applicable.
    pub new_line: Option<u32>,
    /// Line text with the leading `+`/`-`/space marker stripped.
    pub content: String,
}

/// Aggregate counts over a parsed diff.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffStats {
    /// Total added lines across all hunks.
    pub added: usize,
    /// Total deleted lines across all hunks.
    pub deleted: usize,
    /// Number of file sections.
    pub files: usize,
}
