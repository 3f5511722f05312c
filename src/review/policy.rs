// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Organizational policy evaluation.
//!
//! A policy is an immutable value owned by the configuration layer; the
//! evaluator is pure and never fails.

use serde::{Deserialize, Serialize};

use super::types::ReviewAnalysis;

/// A named set of organizational review rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Policy {
    /// Policy identifier.
    pub id: String,
    /// The rules to evaluate.
    pub rules: PolicyRules,
    /// Whether this is the default policy.
    #[serde(default)]
    pub is_default: bool,
}

/// The rule set of a policy.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PolicyRules {
    /// Block when source changes lack accompanying test changes.
    pub require_tests_for_source_changes: bool,
    /// Emit an explicit merge-block message when any blocker exists.
    pub block_merge_on_policy_failure: bool,
}

/// Outcome of evaluating a policy against an analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyEvaluation {
    /// Id of the evaluated policy, absent when none was applied.
    pub policy_id: Option<String>,
    /// Whether the analysis passed the policy.
    pub passed: bool,
    /// Messages that fail the review.
    pub blockers: Vec<String>,
    /// Reserved; always empty in the current rule set.
    pub warnings: Vec<String>,
}

/// Evaluate a policy against a review analysis.
///
/// With no policy the result is a trivial pass. Note that
/// `block_merge_on_policy_failure` only fires when a blocker already
/// exists, adding a second explicit merge-block message on top; that is
/// the historical behavior and is kept as is.
pub fn evaluate_policy(policy: Option<&Policy>, analysis: &ReviewAnalysis) -> PolicyEvaluation {
    let Some(policy) = policy else {
        return PolicyEvaluation {
            policy_id: None,
            passed: true,
            blockers: Vec::new(),
            warnings: Vec::new(),
        };
    };

    let mut blockers = Vec::new();

    if policy.rules.require_tests_for_source_changes && !analysis.summary.missing_tests.is_empty()
    {
        blockers.push("Tests are required for production code changes.".to_string());
    }

    if policy.rules.block_merge_on_policy_failure && !blockers.is_empty() {
        blockers.push("Merge must be blocked (policy).".to_string());
    }

    PolicyEvaluation {
        policy_id: Some(policy.id.clone()),
        passed: blockers.is_empty(),
        blockers,
        warnings: Vec::new(),
    }
}
