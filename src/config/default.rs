// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Default configuration template for `prb init`.

use std::path::Path;

use crate::error::{ConfigError, PrbError, Result};

/// Starter prb.toml written by `prb init`.
pub const DEFAULT_CONFIG: &str = r#"# prb configuration

[review]
# Analysis provider: "heuristic" (built-in) or "openai".
provider = "heuristic"
# Per-file comment cap (clamped to 1..=50, default 15).
# max_comments_per_file = 15

# Uncomment to enforce a review policy.
# [policy]
# id = "default"
# require_tests_for_source_changes = true
# block_merge_on_policy_failure = false

[github]
# Environment variable read for the GitHub API token.
token_env = "GITHUB_TOKEN"

[openai]
model = "gpt-4o-mini"
# Environment variable read for the OpenAI API key.
api_key_env = "OPENAI_API_KEY"
"#;

/// Write the starter configuration to `path`.
///
/// Refuses to overwrite an existing file unless `force` is set.
pub fn write_default_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(PrbError::Config(ConfigError::AlreadyExists {
            path: path.to_path_buf(),
        }));
    }

    std::fs::write(path, DEFAULT_CONFIG)?;
    Ok(())
}
