// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Review analysis types.
//!
//! The shapes here are the shared output contract of every analyzer,
//! heuristic or model-backed. JSON field names use camelCase to stay
//! compatible with consumers of the original wire format.

use serde::{Deserialize, Serialize};

use super::risk::Risk;

/// The full result of analyzing one diff.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewAnalysis {
    /// Diff-level summary.
    pub summary: Summary,
    /// Per-file reviews, in diff file order.
    pub files: Vec<FileReview>,
    /// Reviewer checklist items.
    pub checklist: Vec<String>,
    /// Bookkeeping about the analyzed diff.
    #[serde(default)]
    pub meta: AnalysisMeta,
}

/// Diff-level summary of an analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Maximum risk over all files.
    pub risk: Risk,
    /// Notable findings, or a single "no obvious risks" fallback.
    pub highlights: Vec<String>,
    /// Diff-level missing-tests messages.
    pub missing_tests: Vec<String>,
}

/// Review of a single file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileReview {
    /// File path as it appears in the diff.
    pub path: String,
    /// Risk classification for this file.
    pub risk: Risk,
    /// Comments in diff line order, capped per file.
    pub comments: Vec<Comment>,
    /// File-level missing-tests message (zero or one entries).
    pub missing_tests: Vec<String>,
}

/// Category of a review comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentKind {
    /// Potential security or correctness hazard.
    Risk,
    /// Improvement worth making before merge.
    Suggestion,
    /// Style-level remark.
    Nitpick,
}

impl CommentKind {
    /// Coerce an untrusted string to a comment kind.
    ///
    /// Only the exact wire names are accepted; anything else becomes
    /// `Suggestion`.
    pub fn from_loose(value: &str) -> CommentKind {
        match value {
            "risk" => CommentKind::Risk,
            "nitpick" => CommentKind::Nitpick,
            _ => CommentKind::Suggestion,
        }
    }
}

/// One review comment, optionally anchored to a new-file line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    /// Category of the comment.
    #[serde(rename = "type")]
    pub kind: CommentKind,
    /// Human-readable message.
    pub message: String,
    /// New-file line number, absent when not applicable.
    #[serde(default)]
    pub line: Option<u32>,
}

/// Bookkeeping about the analyzed diff.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisMeta {
    /// All touched paths, in diff order.
    pub files_changed: Vec<String>,
    /// The subset of touched paths that are test files.
    pub test_files_changed: Vec<String>,
}
