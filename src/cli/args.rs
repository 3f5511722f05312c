// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// prb - Pull request review assistant
///
/// Reviews unified diffs with deterministic heuristics or an
/// OpenAI-backed analyzer, and evaluates the result against a policy.
#[derive(Parser, Debug)]
#[command(name = "prb")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Heuristic pull-request review assistant", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The command to run (defaults to review if not specified)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Output format for machine-readable output
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// Output format for CI and scripting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Styled text output (default)
    Text,
    /// JSON output for machine parsing
    Json,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Review a diff (default command)
    Review(ReviewArgs),

    /// Print added/deleted line and file counts for a diff
    Stats(StatsArgs),

    /// Initialize prb configuration
    Init(InitArgs),

    /// Print version information
    Version,
}

/// Arguments for the review command.
#[derive(Parser, Debug, Default, Clone)]
pub struct ReviewArgs {
    /// Diff file to review ("-" or omitted reads stdin)
    pub diff: Option<PathBuf>,

    /// Review a GitHub pull request instead of a local diff
    #[arg(long, conflicts_with = "diff")]
    pub pr_url: Option<String>,

    /// Analysis provider (heuristic or openai)
    #[arg(short, long)]
    pub provider: Option<String>,

    /// Maximum comments per file (clamped to 1..=50)
    #[arg(long)]
    pub max_comments: Option<i64>,

    /// Skip policy evaluation even when one is configured
    #[arg(long)]
    pub no_policy: bool,

    /// Override the configured OpenAI model
    #[arg(long)]
    pub model: Option<String>,
}

/// Arguments for the stats command.
#[derive(Parser, Debug, Default, Clone)]
pub struct StatsArgs {
    /// Diff file to inspect ("-" or omitted reads stdin)
    pub diff: Option<PathBuf>,
}

/// Arguments for the init command.
#[derive(Parser, Debug, Default, Clone)]
pub struct InitArgs {
    /// Overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,
}

impl Cli {
    /// Get the effective command, defaulting to review.
    pub fn effective_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or_else(|| Commands::Review(ReviewArgs::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_default_command_is_review() {
        let cli = Cli::parse_from(["prb"]);
        assert!(matches!(cli.effective_command(), Commands::Review(_)));
    }

    #[test]
    fn test_review_args() {
        let cli = Cli::parse_from([
            "prb",
            "review",
            "--provider",
            "openai",
            "--max-comments",
            "20",
            "changes.diff",
        ]);
        let Commands::Review(args) = cli.effective_command() else {
            panic!("expected review command");
        };
        assert_eq!(args.provider.as_deref(), Some("openai"));
        assert_eq!(args.max_comments, Some(20));
        assert_eq!(args.diff, Some(PathBuf::from("changes.diff")));
    }
}
