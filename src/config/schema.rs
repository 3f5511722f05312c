// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! Defines all configuration structures that can be loaded from prb.toml.

use serde::{Deserialize, Serialize};

use crate::review::{Policy, PolicyRules};

/// The main configuration structure for prb.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PrbConfig {
    /// Review behavior.
    pub review: ReviewConfig,

    /// Optional policy; when absent, reviews always pass policy.
    pub policy: Option<PolicySection>,

    /// GitHub collaborator settings.
    pub github: GithubConfig,

    /// OpenAI provider settings.
    pub openai: OpenAiConfig,
}

impl PrbConfig {
    /// Load configuration from the default locations.
    pub fn load() -> crate::error::Result<Self> {
        super::loader::load_config()
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> crate::error::Result<Self> {
        super::loader::load_config_from(path)
    }

    /// The policy value to evaluate, if one is configured.
    pub fn policy(&self) -> Option<Policy> {
        self.policy.as_ref().map(PolicySection::to_policy)
    }
}

/// Review behavior configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewConfig {
    /// Default provider name.
    pub provider: String,

    /// Per-file comment cap; clamped to [1, 50] at analysis time.
    pub max_comments_per_file: Option<f64>,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            provider: "heuristic".to_string(),
            max_comments_per_file: None,
        }
    }
}

/// Policy configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicySection {
    /// Policy identifier.
    pub id: String,

    /// Require test changes alongside source changes.
    pub require_tests_for_source_changes: bool,

    /// Add an explicit merge-block message on failure.
    pub block_merge_on_policy_failure: bool,

    /// Whether this is the default policy.
    pub is_default: bool,
}

impl Default for PolicySection {
    fn default() -> Self {
        Self {
            id: "default".to_string(),
            require_tests_for_source_changes: false,
            block_merge_on_policy_failure: false,
            is_default: true,
        }
    }
}

impl PolicySection {
    /// Build the immutable policy value the evaluator consumes.
    pub fn to_policy(&self) -> Policy {
        Policy {
            id: self.id.clone(),
            rules: PolicyRules {
                require_tests_for_source_changes: self.require_tests_for_source_changes,
                block_merge_on_policy_failure: self.block_merge_on_policy_failure,
            },
            is_default: self.is_default,
        }
    }
}

/// GitHub collaborator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GithubConfig {
    /// Environment variable holding the API token.
    pub token_env: String,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            token_env: "GITHUB_TOKEN".to_string(),
        }
    }
}

/// OpenAI provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenAiConfig {
    /// Model identifier.
    pub model: String,

    /// Environment variable holding the API key.
    pub api_key_env: String,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            model: "gpt-4o-mini".to_string(),
            api_key_env: "OPENAI_API_KEY".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PrbConfig::default();
        assert_eq!(config.review.provider, "heuristic");
        assert!(config.policy.is_none());
        assert_eq!(config.github.token_env, "GITHUB_TOKEN");
        assert_eq!(config.openai.model, "gpt-4o-mini");
    }

    #[test]
    fn test_parse_minimal_toml() {
        let config: PrbConfig = toml::from_str("").unwrap();
        assert_eq!(config.review.provider, "heuristic");
        assert!(config.policy().is_none());
    }

    #[test]
    fn test_parse_policy_section() {
        let toml_text = r#"
            [policy]
            id = "team"
            require_tests_for_source_changes = true
        "#;
        let config: PrbConfig = toml::from_str(toml_text).unwrap();
        let policy = config.policy().unwrap();
        assert_eq!(policy.id, "team");
        assert!(policy.rules.require_tests_for_source_changes);
        assert!(!policy.rules.block_merge_on_policy_failure);
    }

    #[test]
    fn test_parse_review_overrides() {
        let toml_text = r#"
            [review]
            provider = "openai"
            max_comments_per_file = 25

            [openai]
            model = "gpt-4o"
        "#;
        let config: PrbConfig = toml::from_str(toml_text).unwrap();
        assert_eq!(config.review.provider, "openai");
        assert_eq!(config.review.max_comments_per_file, Some(25.0));
        assert_eq!(config.openai.model, "gpt-4o");
    }
}
