// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! OpenAI-backed analysis provider.
//!
//! Sends the raw diff to the chat completions API with a JSON-only
//! prompt, then normalizes the untrusted response field by field into
//! the shared [`ReviewAnalysis`] shape. The request is a single attempt;
//! there is no retry here.

use serde_json::{json, Value};
use tracing::debug;

use crate::diff::ParsedDiff;
use crate::error::{OpenAiError, Result};
use crate::review::{
    is_test_file, AnalysisMeta, Comment, CommentKind, FileReview, ReviewAnalysis, Risk, Summary,
};

use super::Analyzer;

const API_URL: &str = "https://api.openai.com/v1/chat/completions";

const SYSTEM_PROMPT: &str = "\
You are PR Buddy, a pull request reviewer.
Goal: return an actionable, structured review.

Rules:
- Respond ONLY with valid JSON (no markdown).
- Risk must be: low | medium | high.
- Each comment must have: type (risk|suggestion|nitpick), message and line (or null).

Expected schema:
{
  \"summary\": {\"risk\":\"low|medium|high\",\"highlights\":[...],\"missingTests\":[...]},
  \"files\": [{\"path\":\"...\",\"risk\":\"low|medium|high\",\"comments\":[...],\"missingTests\":[...]}],
  \"checklist\": [\"...\"]
}";

/// Credentials and model selection for the OpenAI provider.
#[derive(Debug, Clone)]
pub struct OpenAiSettings {
    /// API key; its absence is only an error when the provider is used.
    pub api_key: Option<String>,
    /// Model identifier.
    pub model: String,
}

/// Abstraction over the chat completions call, for testability.
trait ChatClient {
    fn complete(&self, api_key: &str, body: &Value) -> Result<Value>;
}

/// Real HTTP client. Single attempt, no backoff.
struct HttpChatClient;

impl ChatClient for HttpChatClient {
    fn complete(&self, api_key: &str, body: &Value) -> Result<Value> {
        let response = ureq::post(API_URL)
            .set("Authorization", &format!("Bearer {api_key}"))
            .set("Content-Type", "application/json")
            .send_json(body);

        match response {
            Ok(res) => res.into_json().map_err(|e| {
                OpenAiError::RequestFailed {
                    message: format!("unreadable response body: {e}"),
                }
                .into()
            }),
            Err(ureq::Error::Status(code, res)) => {
                let text = res.into_string().unwrap_or_default();
                Err(OpenAiError::RequestFailed {
                    message: format!("{code} {text}"),
                }
                .into())
            }
            Err(e) => Err(OpenAiError::RequestFailed {
                message: e.to_string(),
            }
            .into()),
        }
    }
}

/// Model-backed analyzer sharing the heuristic provider's output contract.
pub struct OpenAiAnalyzer {
    settings: OpenAiSettings,
    client: Box<dyn ChatClient>,
}

impl OpenAiAnalyzer {
    /// Create an analyzer with the given settings.
    pub fn new(settings: OpenAiSettings) -> Self {
        Self {
            settings,
            client: Box::new(HttpChatClient),
        }
    }

    #[cfg(test)]
    fn with_client(settings: OpenAiSettings, client: Box<dyn ChatClient>) -> Self {
        Self { settings, client }
    }
}

impl Analyzer for OpenAiAnalyzer {
    fn name(&self) -> &'static str {
        super::OPENAI
    }

    fn review(&self, diff_text: &str, parsed: &ParsedDiff) -> Result<ReviewAnalysis> {
        let api_key = self
            .settings
            .api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or(OpenAiError::ApiKeyMissing)?;

        let body = json!({
            "model": self.settings.model,
            "temperature": 0.2,
            "response_format": { "type": "json_object" },
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT },
                { "role": "user", "content": format!("Diff:\n\n{diff_text}") }
            ]
        });

        debug!(model = %self.settings.model, "requesting OpenAI review");
        let data = self.client.complete(api_key, &body)?;

        let content = data
            .pointer("/choices/0/message/content")
            .and_then(Value::as_str)
            .filter(|c| !c.trim().is_empty())
            .ok_or(OpenAiError::EmptyResponse)?;

        let raw: Value = serde_json::from_str(content).map_err(|_| OpenAiError::InvalidJson)?;

        Ok(normalize_review(&raw, parsed))
    }
}

/// Coerce an untrusted JSON payload into the shared analysis shape.
///
/// Risks are coerced by loose match, comment types default to
/// `suggestion`, array fields default to empty, and non-numeric line
/// numbers are dropped. Meta is rebuilt from the parsed diff rather than
/// trusted from the model.
fn normalize_review(raw: &Value, parsed: &ParsedDiff) -> ReviewAnalysis {
    let summary = raw.get("summary");

    let files = array_of(raw.get("files"))
        .iter()
        .map(|f| FileReview {
            path: string_of(f.get("path")),
            risk: loose_risk(f.get("risk")),
            comments: array_of(f.get("comments"))
                .iter()
                .map(|c| Comment {
                    kind: CommentKind::from_loose(&string_of(c.get("type"))),
                    message: string_of(c.get("message")),
                    line: c.get("line").and_then(Value::as_u64).map(|n| n as u32),
                })
                .collect(),
            missing_tests: string_array_of(f.get("missingTests")),
        })
        .collect();

    let files_changed: Vec<String> = parsed.files.iter().map(|f| f.path.clone()).collect();
    let test_files_changed = files_changed
        .iter()
        .filter(|p| is_test_file(p))
        .cloned()
        .collect();

    ReviewAnalysis {
        summary: Summary {
            risk: loose_risk(summary.and_then(|s| s.get("risk"))),
            highlights: string_array_of(summary.and_then(|s| s.get("highlights"))),
            missing_tests: string_array_of(summary.and_then(|s| s.get("missingTests"))),
        },
        files,
        checklist: string_array_of(raw.get("checklist")),
        meta: AnalysisMeta {
            files_changed,
            test_files_changed,
        },
    }
}

fn loose_risk(value: Option<&Value>) -> Risk {
    Risk::from_loose(&string_of(value))
}

fn string_of(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

fn array_of(value: Option<&Value>) -> Vec<Value> {
    match value {
        Some(Value::Array(items)) => items.clone(),
        _ => Vec::new(),
    }
}

fn string_array_of(value: Option<&Value>) -> Vec<String> {
    array_of(value).iter().map(|v| string_of(Some(v))).collect()
}
