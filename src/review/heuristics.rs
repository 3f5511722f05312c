// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Heuristic diff analysis.
//!
//! Deterministic, pattern-based review: per-file risk classification,
//! comment generation from the ordered rule table, and missing-tests
//! detection. Pure and synchronous; operates only on the parsed diff.

use crate::diff::{DiffLine, FileDiff, ParsedDiff};

use super::patterns::{is_test_file, matches_high_risk, COMMENT_RULES};
use super::risk::Risk;
use super::types::{AnalysisMeta, Comment, FileReview, ReviewAnalysis, Summary};

/// Default per-file comment cap.
pub const DEFAULT_MAX_COMMENTS: usize = 15;

/// Hard upper bound for the per-file comment cap.
pub const MAX_COMMENTS_CEILING: usize = 50;

/// Changed-line count above which a file is at least medium risk.
const MEDIUM_RISK_LINES: usize = 200;

/// Changed-line count above which a file is at least high risk.
const HIGH_RISK_LINES: usize = 600;

/// Options for the heuristic analyzer.
#[derive(Debug, Clone, Copy)]
pub struct AnalyzeOptions {
    /// Effective per-file comment cap, already clamped to [1, 50].
    pub max_comments_per_file: usize,
}

impl AnalyzeOptions {
    /// Build options from an untrusted raw limit.
    ///
    /// A missing, non-finite, or non-positive value falls back to the
    /// default of 15; anything else is truncated and clamped to [1, 50].
    pub fn with_limit(raw: Option<f64>) -> Self {
        let max_comments_per_file = match raw {
            Some(v) if v.is_finite() && v > 0.0 => {
                (v.trunc() as usize).clamp(1, MAX_COMMENTS_CEILING)
            }
            _ => DEFAULT_MAX_COMMENTS,
        };
        Self {
            max_comments_per_file,
        }
    }
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        Self {
            max_comments_per_file: DEFAULT_MAX_COMMENTS,
        }
    }
}

/// Classify the risk of a single file.
///
/// Size thresholds raise the risk to medium and high; any added line
/// matching a high-risk pattern short-circuits straight to `High`,
/// regardless of size.
pub fn classify_file_risk(added_lines: &[&DiffLine], changed_lines: usize) -> Risk {
    let mut risk = Risk::Low;

    if changed_lines > MEDIUM_RISK_LINES {
        risk = risk.combine(Risk::Medium);
    }
    if changed_lines > HIGH_RISK_LINES {
        risk = risk.combine(Risk::High);
    }

    for line in added_lines {
        if matches_high_risk(&line.content) {
            return Risk::High;
        }
    }

    risk
}

/// Analyze a parsed diff and produce a review.
pub fn analyze(parsed: &ParsedDiff, options: &AnalyzeOptions) -> ReviewAnalysis {
    let max_comments = options.max_comments_per_file;

    let files_changed: Vec<String> = parsed.files.iter().map(|f| f.path.clone()).collect();
    let test_files_changed: Vec<String> = files_changed
        .iter()
        .filter(|p| is_test_file(p))
        .cloned()
        .collect();
    let has_test_changes = !test_files_changed.is_empty();

    let mut file_reviews = Vec::with_capacity(parsed.files.len());
    let mut missing_tests_summary = Vec::new();
    let mut highlights = Vec::new();

    for file in &parsed.files {
        let review = review_file(file, has_test_changes, max_comments);

        if !review.missing_tests.is_empty() {
            missing_tests_summary.push(format!(
                "No test changes despite changes in `{}`.",
                file.path
            ));
        }
        if review.risk == Risk::High {
            highlights.push(format!(
                "High risk in `{}` (validate security/impact).",
                file.path
            ));
        }

        file_reviews.push(review);
    }

    let overall_risk = file_reviews
        .iter()
        .fold(Risk::Low, |acc, fr| acc.combine(fr.risk));

    let mut checklist = vec![
        "Confirm expected behavior (happy path and edge cases).".to_string(),
        "Check error handling and input validation.".to_string(),
        "Ensure there is no debug/log code in production.".to_string(),
        "Update documentation/README if applicable.".to_string(),
    ];
    if !missing_tests_summary.is_empty() {
        checklist.insert(0, "Add/update tests for the changes.".to_string());
    }

    if highlights.is_empty() {
        highlights.push("No obvious risks detected by heuristics.".to_string());
    }

    ReviewAnalysis {
        summary: Summary {
            risk: overall_risk,
            highlights,
            missing_tests: missing_tests_summary,
        },
        files: file_reviews,
        checklist,
        meta: AnalysisMeta {
            files_changed,
            test_files_changed,
        },
    }
}

/// Review one file: risk, comments, missing-tests.
fn review_file(file: &FileDiff, has_test_changes: bool, max_comments: usize) -> FileReview {
    let added_lines: Vec<&DiffLine> = file.added_lines().collect();
    let changed_lines = file.changed_lines();

    let risk = classify_file_risk(&added_lines, changed_lines);

    let mut comments: Vec<Comment> = Vec::new();
    for line in &added_lines {
        // Every rule is tried for every line; one line may emit several
        // comments of different kinds, in table order.
        for rule in COMMENT_RULES.iter() {
            if rule.pattern.is_match(&line.content) {
                comments.push(Comment {
                    kind: rule.kind,
                    message: rule.message.to_string(),
                    line: line.new_line,
                });
            }
        }

        // The cap is checked only after all rules ran for the line, so a
        // final truncate is still needed below.
        if comments.len() >= max_comments {
            break;
        }
    }
    comments.truncate(max_comments);

    let mut missing_tests = Vec::new();
    let file_is_test = is_test_file(&file.path);
    if !file_is_test && !has_test_changes && changed_lines > 0 {
        missing_tests.push(format!(
            "Add/update tests to cover changes in `{}`.",
            file.path
        ));
    }

    FileReview {
        path: file.path.clone(),
        risk,
        comments,
        missing_tests,
    }
}
