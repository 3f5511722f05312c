// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The review pipeline.
//!
//! Composes the collaborators into one linear, synchronous chain:
//! resolve the diff text, validate it, parse, analyze, evaluate policy.
//! Nothing here retries or recovers; validation failures surface with
//! their machine-readable codes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::diff::parse;
use crate::error::{ReviewError, Result};
use crate::providers::{analyzer_for, github, OpenAiSettings};

use super::heuristics::AnalyzeOptions;
use super::policy::{evaluate_policy, Policy, PolicyEvaluation};
use super::types::{AnalysisMeta, FileReview, ReviewAnalysis, Summary};

/// Everything needed to run one review.
#[derive(Debug, Clone)]
pub struct ReviewRequest {
    /// Inline diff text, when not fetching from GitHub.
    pub diff: Option<String>,
    /// PR URL; when set, the diff is fetched from GitHub instead.
    pub pr_url: Option<String>,
    /// Provider name (`heuristic` or `openai`).
    pub provider: String,
    /// Raw per-file comment cap, clamped by the analyzer.
    pub max_comments_per_file: Option<f64>,
    /// Policy to evaluate, if any.
    pub policy: Option<Policy>,
    /// GitHub token for the authenticated diff fetch.
    pub github_token: Option<String>,
    /// OpenAI credentials and model.
    pub openai: OpenAiSettings,
}

/// Echo of the request, kept with the persisted record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestEcho {
    /// Where the diff came from (`inline` or `github`).
    pub source: String,
    /// The provider that produced the analysis.
    pub provider: String,
    /// The PR URL, when the diff was fetched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pr_url: Option<String>,
}

/// The persisted outcome of one review run.
///
/// The `result` wrapper is part of the wire format: consumers read
/// `{id, createdAt, request, result: {summary, files, checklist,
/// meta, policy}}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRecord {
    /// Unique id of this review.
    pub id: Uuid,
    /// When the review ran.
    pub created_at: DateTime<Utc>,
    /// Echo of the originating request.
    pub request: RequestEcho,
    /// The analysis and policy verdict.
    pub result: ReviewResult,
}

/// Analysis plus policy verdict, as persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewResult {
    /// Diff-level summary.
    pub summary: Summary,
    /// Per-file reviews, in diff file order.
    pub files: Vec<FileReview>,
    /// Reviewer checklist items.
    pub checklist: Vec<String>,
    /// Bookkeeping about the analyzed diff.
    pub meta: AnalysisMeta,
    /// The policy verdict.
    pub policy: PolicyEvaluation,
}

/// Run the full parse → analyze → evaluate chain.
pub fn run_review(request: &ReviewRequest) -> Result<ReviewRecord> {
    let (diff_text, source) = match &request.pr_url {
        Some(pr_url) => {
            let text = github::fetch_pr_diff(pr_url, request.github_token.as_deref())?;
            (text, "github")
        }
        None => (request.diff.clone().unwrap_or_default(), "inline"),
    };

    // Provider resolution happens before diff validation, so an unknown
    // provider is reported even alongside a missing diff.
    let options = AnalyzeOptions::with_limit(request.max_comments_per_file);
    let analyzer = analyzer_for(&request.provider, options, request.openai.clone())?;

    if diff_text.trim().is_empty() {
        return Err(ReviewError::DiffRequired.into());
    }

    let parsed = parse(&diff_text);
    if parsed.is_empty() {
        return Err(ReviewError::DiffEmpty.into());
    }
    debug!(files = parsed.files.len(), "parsed diff");

    let analysis = analyzer.review(&diff_text, &parsed)?;
    let policy = evaluate_policy(request.policy.as_ref(), &analysis);

    info!(
        provider = analyzer.name(),
        risk = %analysis.summary.risk,
        passed = policy.passed,
        "review complete"
    );

    let ReviewAnalysis {
        summary,
        files,
        checklist,
        meta,
    } = analysis;

    Ok(ReviewRecord {
        id: Uuid::new_v4(),
        created_at: Utc::now(),
        request: RequestEcho {
            source: source.to_string(),
            provider: analyzer.name().to_string(),
            pr_url: request.pr_url.clone(),
        },
        result: ReviewResult {
            summary,
            files,
            checklist,
            meta,
            policy,
        },
    })
}
