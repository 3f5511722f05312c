// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Built-in review pattern tables.
//!
//! The rules form one ordered table: high-risk first, then suggestions,
//! then nitpicks. That order is part of the contract: it determines the
//! order comments are emitted for a line, so it must not be reshuffled.

use lazy_static::lazy_static;
use regex::Regex;

use super::types::CommentKind;

/// One pattern rule: if `pattern` matches an added line, a comment of
/// `kind` with `message` is emitted.
#[derive(Debug)]
pub struct CommentRule {
    /// Category of the emitted comment.
    pub kind: CommentKind,
    /// Pattern tried against the line content.
    pub pattern: Regex,
    /// Message attached to the comment.
    pub message: &'static str,
}

lazy_static! {
    /// The ordered comment rule table.
    pub static ref COMMENT_RULES: Vec<CommentRule> = vec![
        // High-risk patterns. Any match also forces the file risk to high.
        CommentRule {
            kind: CommentKind::Risk,
            pattern: Regex::new(r"\beval\s*\(").unwrap(),
            message: "Use of `eval()` can enable arbitrary code execution.",
        },
        CommentRule {
            kind: CommentKind::Risk,
            pattern: Regex::new(r"\bchild_process\b|\bexecSync\s*\(|\bexec\s*\(").unwrap(),
            message: "System command execution should be validated/sanitized.",
        },
        CommentRule {
            kind: CommentKind::Risk,
            pattern: Regex::new(r"(?i)\bpassword\b|\bsecret\b|\bapi[_-]?key\b").unwrap(),
            message: "Possible exposure of credentials/secrets; ensure they are not hardcoded.",
        },
        // Suggestions.
        CommentRule {
            kind: CommentKind::Suggestion,
            pattern: Regex::new(r"\bTODO\b|\bFIXME\b").unwrap(),
            message: "Resolve/justify TODO/FIXME or create a tracking issue.",
        },
        // Nitpicks.
        CommentRule {
            kind: CommentKind::Nitpick,
            pattern: Regex::new(r"\bconsole\.log\s*\(").unwrap(),
            message: "Remove `console.log()` before merging.",
        },
        CommentRule {
            kind: CommentKind::Nitpick,
            pattern: Regex::new(r"\bdebugger\b").unwrap(),
            message: "Remove `debugger`.",
        },
        CommentRule {
            kind: CommentKind::Nitpick,
            pattern: Regex::new(r"\s+$").unwrap(),
            message: "Remove trailing whitespace.",
        },
    ];

    /// Test-file detection: an exact path segment of `__tests__`, `tests`,
    /// `test` or `spec`, or a filename containing `.test.`/`.spec.`.
    static ref TEST_FILE_RE: Regex =
        Regex::new(r"(?i)(^|/)(__tests__|tests|test|spec)(/|$)|\.test\.|\.spec\.").unwrap();
}

/// Whether any high-risk rule matches the given line content.
pub fn matches_high_risk(content: &str) -> bool {
    COMMENT_RULES
        .iter()
        .filter(|r| r.kind == CommentKind::Risk)
        .any(|r| r.pattern.is_match(content))
}

/// Whether a path refers to a test file.
pub fn is_test_file(path: &str) -> bool {
    TEST_FILE_RE.is_match(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_table_order() {
        // Risk rules precede suggestion rules, which precede nitpicks.
        let kinds: Vec<_> = COMMENT_RULES.iter().map(|r| r.kind).collect();
        let first_suggestion = kinds
            .iter()
            .position(|k| *k == CommentKind::Suggestion)
            .unwrap();
        let first_nitpick = kinds.iter().position(|k| *k == CommentKind::Nitpick).unwrap();
        assert!(kinds[..first_suggestion]
            .iter()
            .all(|k| *k == CommentKind::Risk));
        assert!(first_suggestion < first_nitpick);
    }

    #[test]
    fn test_high_risk_matches() {
        assert!(matches_high_risk("eval('2+2');"));
        assert!(matches_high_risk("const cp = require('child_process');"));
        assert!(matches_high_risk("execSync('rm -rf /tmp/x');"));
        assert!(matches_high_risk("let password = 'hunter2';"));
        assert!(matches_high_risk("API_KEY=abc123"));
        assert!(!matches_high_risk("let evaluation = score();"));
        assert!(!matches_high_risk("return a + b;"));
    }

    #[test]
    fn test_is_test_file() {
        assert!(is_test_file("src/__tests__/math.js"));
        assert!(is_test_file("tests/integration.rs"));
        assert!(is_test_file("test/app.py"));
        assert!(is_test_file("spec/models.rb"));
        assert!(is_test_file("src/math.test.js"));
        assert!(is_test_file("src/Math.Spec.ts"));
        assert!(!is_test_file("src/math.js"));
        assert!(!is_test_file("src/testing_utils.rs"));
        assert!(!is_test_file("contest/entry.rs"));
    }
}
