// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! GitHub pull request diff fetching.
//!
//! With a token, the diff comes from the REST API; without one, from the
//! public `.diff` URL. Either way it is a single attempt with no retry.

use tracing::debug;

use crate::error::{GithubError, Result};

const USER_AGENT: &str = "prb";

/// A reference to a pull request on github.com.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrRef {
    /// Repository owner.
    pub owner: String,
    /// Repository name.
    pub repo: String,
    /// Pull request number.
    pub number: u64,
}

/// Parse a `https://github.com/<owner>/<repo>/pull/<number>` URL.
pub fn parse_pr_url(pr_url: &str) -> Option<PrRef> {
    let rest = pr_url
        .strip_prefix("https://github.com/")
        .or_else(|| pr_url.strip_prefix("http://github.com/"))?;

    // Ignore query string and fragment.
    let path = rest.split(['?', '#']).next().unwrap_or("");
    let mut parts = path.split('/').filter(|s| !s.is_empty());

    let owner = parts.next()?;
    let repo = parts.next()?;
    if parts.next()? != "pull" {
        return None;
    }
    // `u64::from_str` tolerates a leading `+`, which is not a valid PR number.
    let number = parts.next()?;
    if !number.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let number: u64 = number.parse().ok()?;

    Some(PrRef {
        owner: owner.to_string(),
        repo: repo.to_string(),
        number,
    })
}

/// Fetch the unified diff of a pull request.
pub fn fetch_pr_diff(pr_url: &str, token: Option<&str>) -> Result<String> {
    let pr = parse_pr_url(pr_url).ok_or_else(|| GithubError::InvalidPrUrl {
        url: pr_url.to_string(),
    })?;

    let token = token.map(str::trim).filter(|t| !t.is_empty());

    match token {
        Some(token) => fetch_via_api(&pr, token),
        None => fetch_public_diff(&pr),
    }
}

/// Authenticated fetch through the REST API.
fn fetch_via_api(pr: &PrRef, token: &str) -> Result<String> {
    let url = format!(
        "https://api.github.com/repos/{}/{}/pulls/{}",
        pr.owner, pr.repo, pr.number
    );
    debug!(%url, "fetching PR diff via GitHub API");

    let response = ureq::get(&url)
        .set("Authorization", &format!("Bearer {token}"))
        .set("Accept", "application/vnd.github.v3.diff")
        .set("User-Agent", USER_AGENT)
        .call();

    match response {
        Ok(res) => res.into_string().map_err(|e| {
            GithubError::FetchFailed {
                message: format!("unreadable response body: {e}"),
            }
            .into()
        }),
        Err(ureq::Error::Status(code, _)) => Err(GithubError::FetchFailed {
            message: format!("GitHub API error: {code}"),
        }
        .into()),
        Err(e) => Err(GithubError::FetchFailed {
            message: e.to_string(),
        }
        .into()),
    }
}

/// Unauthenticated fetch of the public `.diff` URL.
///
/// GitHub answers restricted-access requests with an HTML login page or
/// a redirect chain ending in one, which is reported as a missing token
/// rather than a fetch failure.
fn fetch_public_diff(pr: &PrRef) -> Result<String> {
    let url = format!(
        "https://github.com/{}/{}/pull/{}.diff",
        pr.owner, pr.repo, pr.number
    );
    debug!(%url, "fetching public PR diff");

    let response = ureq::get(&url)
        .set("Accept", "text/plain")
        .set("User-Agent", USER_AGENT)
        .call();

    match response {
        Ok(res) => {
            if res.content_type() == "text/html" {
                return Err(GithubError::TokenMissing.into());
            }
            res.into_string().map_err(|e| {
                GithubError::FetchFailed {
                    message: format!("unreadable response body: {e}"),
                }
                .into()
            })
        }
        Err(ureq::Error::Status(_, _)) => Err(GithubError::TokenMissing.into()),
        Err(e) => Err(GithubError::FetchFailed {
            message: e.to_string(),
        }
        .into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_pr_url() {
        let pr = parse_pr_url("https://github.com/rust-lang/rust/pull/12345").unwrap();
        assert_eq!(pr.owner, "rust-lang");
        assert_eq!(pr.repo, "rust");
        assert_eq!(pr.number, 12345);
    }

    #[test]
    fn test_parse_ignores_query_and_extra_segments() {
        let pr = parse_pr_url("https://github.com/a/b/pull/7/files?diff=split").unwrap();
        assert_eq!(pr.number, 7);
    }

    #[test]
    fn test_parse_rejects_other_hosts() {
        assert!(parse_pr_url("https://gitlab.com/a/b/pull/7").is_none());
        assert!(parse_pr_url("https://example.com/github.com/a/b/pull/7").is_none());
    }

    #[test]
    fn test_parse_rejects_non_pull_paths() {
        assert!(parse_pr_url("https://github.com/a/b/issues/7").is_none());
        assert!(parse_pr_url("https://github.com/a/b").is_none());
    }

    #[test]
    fn test_parse_rejects_non_numeric_number() {
        assert!(parse_pr_url("https://github.com/a/b/pull/seven").is_none());
        assert!(parse_pr_url("https://github.com/a/b/pull/+7").is_none());
        assert!(parse_pr_url("https://github.com/a/b/pull/-7").is_none());
    }

    #[test]
    fn test_invalid_url_error_code() {
        let err = fetch_pr_diff("not a url", None).unwrap_err();
        assert_eq!(err.code(), "invalid_pr_url");
    }
}
