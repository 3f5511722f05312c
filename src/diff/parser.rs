// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Unified diff parsing.
//!
//! The parser is deliberately lenient: it never fails. Malformed or empty
//! input yields an empty [`ParsedDiff`], and rejecting that is the
//! caller's job. Lines appearing before the first file header, or before
//! the first hunk header within a file, are silently dropped.

use lazy_static::lazy_static;
use regex::Regex;

use super::types::{DiffLine, DiffStats, FileDiff, Hunk, LineKind, ParsedDiff};

lazy_static! {
    static ref DIFF_GIT_RE: Regex = Regex::new(r"^diff --git a/(.+?) b/(.+)$").unwrap();
    static ref HUNK_RE: Regex = Regex::new(r"^@@ -(\d+)(?:,(\d+))? \+(\d+)(?:,(\d+))? @@").unwrap();
}

/// Parse unified diff text into a structured model.
pub fn parse(diff_text: &str) -> ParsedDiff {
    let mut files: Vec<FileDiff> = Vec::new();
    let mut old_line: u32 = 0;
    let mut new_line: u32 = 0;

    for line in diff_text.lines() {
        if let Some(caps) = DIFF_GIT_RE.captures(line) {
            // Only the destination path is tracked; rename sources are
            // discarded. Each header starts a fresh entry, even for a
            // repeated path.
            files.push(FileDiff {
                path: caps[2].to_string(),
                hunks: Vec::new(),
            });
            continue;
        }

        let Some(file) = files.last_mut() else {
            continue;
        };

        if let Some(caps) = HUNK_RE.captures(line) {
            // Lengths in the header are ignored; only the start counters
            // matter. Suffix text after the closing `@@` is ignored too.
            old_line = caps[1].parse().unwrap_or(0);
            new_line = caps[3].parse().unwrap_or(0);
            file.hunks.push(Hunk {
                header: line.to_string(),
                old_start: old_line,
                new_start: new_line,
                lines: Vec::new(),
            });
            continue;
        }

        // A fresh file starts with no hunks, so anything before its first
        // hunk header lands here and is dropped.
        let Some(hunk) = file.hunks.last_mut() else {
            continue;
        };
        if line.starts_with("\\ No newline at end of file") {
            continue;
        }

        if line.starts_with('+') && !line.starts_with("+++") {
            hunk.lines.push(DiffLine {
                kind: LineKind::Add,
                old_line: None,
                new_line: Some(new_line),
                content: line[1..].to_string(),
            });
            new_line += 1;
        } else if line.starts_with('-') && !line.starts_with("---") {
            hunk.lines.push(DiffLine {
                kind: LineKind::Del,
                old_line: Some(old_line),
                new_line: None,
                content: line[1..].to_string(),
            });
            old_line += 1;
        } else if line.starts_with(' ') {
            hunk.lines.push(DiffLine {
                kind: LineKind::Context,
                old_line: Some(old_line),
                new_line: Some(new_line),
                content: line[1..].to_string(),
            });
            old_line += 1;
            new_line += 1;
        }
        // Anything else (blank separators, +++/--- header lines, index
        // lines) is dropped without touching the counters.
    }

    ParsedDiff { files }
}

/// Aggregate line and file counts over a parsed diff.
pub fn diff_stats(parsed: &ParsedDiff) -> DiffStats {
    let mut stats = DiffStats {
        files: parsed.files.len(),
        ..DiffStats::default()
    };

    for file in &parsed.files {
        for line in file.lines() {
            match line.kind {
                LineKind::Add => stats.added += 1,
                LineKind::Del => stats.deleted += 1,
                LineKind::Context => {}
            }
        }
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIMPLE_DIFF: &str = "\
diff --git a/src/math.js b/src/math.js
index e69de29..4b825dc 100644
--- a/src/math.js
+++ b/src/math.js
@@ -1,3 +1,4 @@
 function add(a, b) {
-  return a+b;
+  return a + b;
+  // carefully
 }
";

    #[test]
    fn test_parse_single_file() {
        let parsed = parse(SIMPLE_DIFF);
        assert_eq!(parsed.files.len(), 1);
        assert_eq!(parsed.files[0].path, "src/math.js");
        assert_eq!(parsed.files[0].hunks.len(), 1);

        let hunk = &parsed.files[0].hunks[0];
        assert_eq!(hunk.old_start, 1);
        assert_eq!(hunk.new_start, 1);
        assert_eq!(hunk.lines.len(), 5);
    }

    #[test]
    fn test_line_numbering() {
        let parsed = parse(SIMPLE_DIFF);
        let lines = &parsed.files[0].hunks[0].lines;

        assert_eq!(lines[0].kind, LineKind::Context);
        assert_eq!(lines[0].old_line, Some(1));
        assert_eq!(lines[0].new_line, Some(1));

        assert_eq!(lines[1].kind, LineKind::Del);
        assert_eq!(lines[1].old_line, Some(2));
        assert_eq!(lines[1].new_line, None);

        assert_eq!(lines[2].kind, LineKind::Add);
        assert_eq!(lines[2].old_line, None);
        assert_eq!(lines[2].new_line, Some(2));

        assert_eq!(lines[3].kind, LineKind::Add);
        assert_eq!(lines[3].new_line, Some(3));

        assert_eq!(lines[4].kind, LineKind::Context);
        assert_eq!(lines[4].old_line, Some(3));
        assert_eq!(lines[4].new_line, Some(4));
    }

    #[test]
    fn test_marker_is_stripped() {
        let parsed = parse(SIMPLE_DIFF);
        let lines = &parsed.files[0].hunks[0].lines;
        assert_eq!(lines[1].content, "  return a+b;");
        assert_eq!(lines[2].content, "  return a + b;");
    }

    #[test]
    fn test_counters_strictly_increase_within_hunk() {
        let parsed = parse(SIMPLE_DIFF);
        let lines = &parsed.files[0].hunks[0].lines;

        let mut last_old = 0;
        let mut last_new = 0;
        for line in lines {
            if let Some(old) = line.old_line {
                assert!(old > last_old);
                last_old = old;
            }
            if let Some(new) = line.new_line {
                assert!(new > last_new);
                last_new = new;
            }
        }
    }

    #[test]
    fn test_empty_and_garbage_input() {
        assert!(parse("").is_empty());
        assert!(parse("not a diff at all\njust text\n").is_empty());
    }

    #[test]
    fn test_hunk_before_file_header_is_ignored() {
        let text = "@@ -1,2 +1,2 @@\n+orphan\ndiff --git a/a.txt b/a.txt\n@@ -1 +1 @@\n+kept\n";
        let parsed = parse(text);
        assert_eq!(parsed.files.len(), 1);
        assert_eq!(parsed.files[0].hunks.len(), 1);
        assert_eq!(parsed.files[0].hunks[0].lines.len(), 1);
        assert_eq!(parsed.files[0].hunks[0].lines[0].content, "kept");
    }

    #[test]
    fn test_lines_before_first_hunk_are_dropped() {
        let text = "diff --git a/a.txt b/a.txt\n+too early\n@@ -1 +1 @@\n+in hunk\n";
        let parsed = parse(text);
        assert_eq!(parsed.files[0].hunks[0].lines.len(), 1);
        assert_eq!(parsed.files[0].hunks[0].lines[0].content, "in hunk");
    }

    #[test]
    fn test_no_newline_marker_is_skipped() {
        let text = "diff --git a/a.txt b/a.txt\n@@ -1 +1 @@\n-old\n\\ No newline at end of file\n+new\n";
        let parsed = parse(text);
        let lines = &parsed.files[0].hunks[0].lines;
        assert_eq!(lines.len(), 2);
        // The marker must not advance either counter.
        assert_eq!(lines[1].new_line, Some(1));
    }

    #[test]
    fn test_hunk_header_suffix_ignored() {
        let text = "diff --git a/a.rs b/a.rs\n@@ -10,3 +20,4 @@ fn main() {\n+x\n";
        let parsed = parse(text);
        let hunk = &parsed.files[0].hunks[0];
        assert_eq!(hunk.old_start, 10);
        assert_eq!(hunk.new_start, 20);
        assert_eq!(hunk.lines[0].new_line, Some(20));
    }

    #[test]
    fn test_rename_uses_destination_path() {
        let text = "diff --git a/old/name.rs b/new/name.rs\n@@ -1 +1 @@\n+x\n";
        let parsed = parse(text);
        assert_eq!(parsed.files[0].path, "new/name.rs");
    }

    #[test]
    fn test_repeated_paths_not_deduplicated() {
        let text = "diff --git a/a.txt b/a.txt\n@@ -1 +1 @@\n+one\ndiff --git a/a.txt b/a.txt\n@@ -2 +2 @@\n+two\n";
        let parsed = parse(text);
        assert_eq!(parsed.files.len(), 2);
        assert_eq!(parsed.files[0].path, parsed.files[1].path);
    }

    #[test]
    fn test_files_preserve_header_order() {
        let text = "\
diff --git a/c.txt b/c.txt
@@ -1 +1 @@
+c
diff --git a/a.txt b/a.txt
@@ -1 +1 @@
+a
diff --git a/b.txt b/b.txt
@@ -1 +1 @@
+b
";
        let parsed = parse(text);
        let paths: Vec<_> = parsed.files.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, vec!["c.txt", "a.txt", "b.txt"]);
    }

    #[test]
    fn test_parse_is_pure() {
        assert_eq!(parse(SIMPLE_DIFF), parse(SIMPLE_DIFF));
    }

    #[test]
    fn test_diff_stats_matches_line_kinds() {
        let parsed = parse(SIMPLE_DIFF);
        let stats = diff_stats(&parsed);
        assert_eq!(stats.added, 2);
        assert_eq!(stats.deleted, 1);
        assert_eq!(stats.files, 1);

        let mut added = 0;
        let mut deleted = 0;
        for file in &parsed.files {
            for line in file.lines() {
                match line.kind {
                    LineKind::Add => added += 1,
                    LineKind::Del => deleted += 1,
                    LineKind::Context => {}
                }
            }
        }
        assert_eq!(stats.added, added);
        assert_eq!(stats.deleted, deleted);
    }

    #[test]
    fn test_crlf_input() {
        let text = "diff --git a/a.txt b/a.txt\r\n@@ -1 +1 @@\r\n+hello\r\n";
        let parsed = parse(text);
        assert_eq!(parsed.files[0].hunks[0].lines[0].content, "hello");
    }
}
