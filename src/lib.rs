// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! prb - Pull Request Review Assistant
//!
//! A CLI tool for reviewing unified diffs before they merge.
//!
//! # Features
//!
//! - **Diff Parsing**: Lenient unified-diff parser that never fails
//! - **Heuristic Review**: Ordered pattern rules for risk, suggestions and nitpicks
//! - **Risk Classification**: Per-file and per-diff severity with size thresholds
//! - **Policy Evaluation**: Organizational pass/fail rules with blockers
//! - **GitHub Integration**: Fetch a PR diff straight from a URL
//! - **Pluggable Analysis**: Swap the heuristics for an OpenAI-backed reviewer
//!
//! # Example
//!
//! ```
//! use prb::diff::parse;
//! use prb::review::{analyze, evaluate_policy, AnalyzeOptions};
//!
//! let diff = "diff --git a/src/app.js b/src/app.js\n@@ -1 +1 @@\n+eval(input);\n";
//! let parsed = parse(diff);
//! let analysis = analyze(&parsed, &AnalyzeOptions::default());
//! assert_eq!(analysis.summary.risk, prb::review::Risk::High);
//!
//! let evaluation = evaluate_policy(None, &analysis);
//! assert!(evaluation.passed);
//! ```

// Module declarations
pub mod cli;
pub mod config;
pub mod diff;
pub mod error;
pub mod providers;
pub mod review;

// Re-exports for convenience
pub use config::PrbConfig;
pub use error::{PrbError, Result};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of prb.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, &sha[..7.min(sha.len())], date)
            }
            (Some(sha), None) => {
                format!("{} ({})", VERSION, &sha[..7.min(sha.len())])
            }
            _ => VERSION.to_string(),
        }
    }
}
