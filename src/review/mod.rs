// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Review pipeline module.
//!
//! Heuristic analysis, policy evaluation, and the engine that chains
//! them together with the diff parser.

mod engine;
mod heuristics;
mod patterns;
mod policy;
mod report;
mod risk;
mod types;

pub use engine::{run_review, RequestEcho, ReviewRecord, ReviewRequest, ReviewResult};
pub use heuristics::{
    analyze, classify_file_risk, AnalyzeOptions, DEFAULT_MAX_COMMENTS, MAX_COMMENTS_CEILING,
};
pub use patterns::{is_test_file, matches_high_risk, CommentRule, COMMENT_RULES};
pub use policy::{evaluate_policy, Policy, PolicyEvaluation, PolicyRules};
pub use report::{print_json, print_text};
pub use risk::Risk;
pub use types::{AnalysisMeta, Comment, CommentKind, FileReview, ReviewAnalysis, Summary};
