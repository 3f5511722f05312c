// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for the prb application.
//!
//! Every client-facing error carries a stable machine-readable code
//! (exposed via [`PrbError::code`]) alongside the human message, so JSON
//! consumers can branch without parsing prose. Anything without a
//! dedicated code is reported as `internal_error` with no detail leaked.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for prb operations.
#[derive(Error, Debug)]
pub enum PrbError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Review request validation errors
    #[error("Review error: {0}")]
    Review(#[from] ReviewError),

    // GitHub diff fetch errors
    #[error("GitHub error: {0}")]
    Github(#[from] GithubError),

    // OpenAI provider errors
    #[error("OpenAI error: {0}")]
    OpenAi(#[from] OpenAiError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

impl PrbError {
    /// Stable machine-readable code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            PrbError::Review(e) => e.code(),
            PrbError::Github(e) => e.code(),
            PrbError::OpenAi(e) => e.code(),
            _ => "internal_error",
        }
    }
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    #[error("Configuration file already exists: {path}")]
    AlreadyExists { path: PathBuf },
}

/// Validation errors raised before the review pipeline runs.
///
/// The diff parser and the policy evaluator themselves never fail;
/// rejection of unusable input happens at this boundary.
#[derive(Error, Debug)]
pub enum ReviewError {
    #[error("diff is required (or the PR must have an accessible diff)")]
    DiffRequired,

    #[error("Could not detect files in the diff (expected unified diff format)")]
    DiffEmpty,

    #[error("provider must be heuristic|openai, got '{provider}'")]
    InvalidProvider { provider: String },
}

impl ReviewError {
    /// Stable machine-readable code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            ReviewError::DiffRequired => "diff_required",
            ReviewError::DiffEmpty => "diff_empty",
            ReviewError::InvalidProvider { .. } => "invalid_provider",
        }
    }
}

/// Errors from the GitHub PR diff fetch collaborator.
#[derive(Error, Debug)]
pub enum GithubError {
    #[error("Invalid GitHub PR URL: {url}")]
    InvalidPrUrl { url: String },

    #[error("Failed to fetch diff from GitHub: {message}")]
    FetchFailed { message: String },

    #[error("A GitHub token is required (private repo or restricted access)")]
    TokenMissing,
}

impl GithubError {
    /// Stable machine-readable code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            GithubError::InvalidPrUrl { .. } => "invalid_pr_url",
            GithubError::FetchFailed { .. } => "github_fetch_failed",
            GithubError::TokenMissing => "github_token_missing",
        }
    }
}

/// Errors from the OpenAI analysis provider.
#[derive(Error, Debug)]
pub enum OpenAiError {
    #[error("OPENAI_API_KEY is required for provider=openai")]
    ApiKeyMissing,

    #[error("OpenAI request failed: {message}")]
    RequestFailed { message: String },

    #[error("OpenAI returned an empty response")]
    EmptyResponse,

    #[error("OpenAI response was not valid JSON")]
    InvalidJson,
}

impl OpenAiError {
    /// Stable machine-readable code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            OpenAiError::ApiKeyMissing => "openai_api_key_missing",
            OpenAiError::RequestFailed { .. } => "openai_failed",
            OpenAiError::EmptyResponse => "openai_invalid_response",
            OpenAiError::InvalidJson => "openai_invalid_json",
        }
    }
}

/// Result type alias for prb operations.
pub type Result<T> = std::result::Result<T, PrbError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: std::error::Error + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| PrbError::WithContext {
            context: context.into(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_review_error_codes() {
        assert_eq!(ReviewError::DiffRequired.code(), "diff_required");
        assert_eq!(ReviewError::DiffEmpty.code(), "diff_empty");
        assert_eq!(
            ReviewError::InvalidProvider {
                provider: "claude".to_string()
            }
            .code(),
            "invalid_provider"
        );
    }

    #[test]
    fn test_code_propagates_through_prb_error() {
        let err: PrbError = GithubError::TokenMissing.into();
        assert_eq!(err.code(), "github_token_missing");

        let err: PrbError = OpenAiError::InvalidJson.into();
        assert_eq!(err.code(), "openai_invalid_json");
    }

    #[test]
    fn test_unexpected_errors_are_opaque() {
        let err: PrbError = std::io::Error::new(std::io::ErrorKind::Other, "boom").into();
        assert_eq!(err.code(), "internal_error");
    }

    #[test]
    fn test_invalid_provider_display() {
        let err = ReviewError::InvalidProvider {
            provider: "gemini".to_string(),
        };
        assert!(err.to_string().contains("gemini"));
    }
}
