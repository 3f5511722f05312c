// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use std::io::Read;
use std::path::{Path, PathBuf};

use console::style;

use crate::config::PrbConfig;
use crate::diff::{diff_stats, parse};
use crate::error::Result;
use crate::providers::OpenAiSettings;
use crate::review::{print_json, print_text, run_review, ReviewRequest};

use super::args::{Cli, Commands, InitArgs, OutputFormat, ReviewArgs, StatsArgs};

/// Run the CLI with the given arguments.
pub fn run(cli: Cli) -> Result<()> {
    // Load configuration
    let config = if let Some(config_path) = &cli.config {
        PrbConfig::load_from(config_path)?
    } else {
        PrbConfig::load()?
    };

    // Dispatch to the appropriate command handler
    match cli.effective_command() {
        Commands::Review(args) => run_review_command(&cli, &config, args),
        Commands::Stats(args) => run_stats(args),
        Commands::Init(args) => run_init(args),
        Commands::Version => run_version(),
    }
}

/// Read diff text from a file, or from stdin for `-`/no argument.
fn read_diff_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => Ok(std::fs::read_to_string(path)?),
        _ => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

/// Run the review command.
fn run_review_command(cli: &Cli, config: &PrbConfig, args: ReviewArgs) -> Result<()> {
    tracing::debug!("Running review command with args: {:?}", args);

    let diff = if args.pr_url.is_some() {
        None
    } else {
        Some(read_diff_input(args.diff.as_deref())?)
    };

    let provider = args
        .provider
        .unwrap_or_else(|| config.review.provider.clone());
    let max_comments = args
        .max_comments
        .map(|v| v as f64)
        .or(config.review.max_comments_per_file);
    let policy = if args.no_policy {
        None
    } else {
        config.policy()
    };

    let request = ReviewRequest {
        diff,
        pr_url: args.pr_url,
        provider,
        max_comments_per_file: max_comments,
        policy,
        github_token: std::env::var(&config.github.token_env).ok(),
        openai: OpenAiSettings {
            api_key: std::env::var(&config.openai.api_key_env).ok(),
            model: args.model.unwrap_or_else(|| config.openai.model.clone()),
        },
    };

    let record = run_review(&request)?;

    match cli.format {
        Some(OutputFormat::Json) => print_json(&record)?,
        _ => print_text(&record),
    }

    // A failed policy is a nonzero exit for CI, after the report prints.
    if !record.result.policy.passed {
        std::process::exit(1);
    }
    Ok(())
}

/// Run the stats command.
fn run_stats(args: StatsArgs) -> Result<()> {
    let text = read_diff_input(args.diff.as_deref())?;
    let stats = diff_stats(&parse(&text));

    println!(
        "{} files changed, {} {}",
        style(stats.files).bold(),
        style(format!("+{}", stats.added)).green(),
        style(format!("-{}", stats.deleted)).red()
    );
    Ok(())
}

/// Run the init command.
fn run_init(args: InitArgs) -> Result<()> {
    let path = PathBuf::from("prb.toml");
    crate::config::write_default_config(&path, args.force)?;
    println!(
        "{} Wrote starter configuration to {}",
        style("✓").green().bold(),
        style(path.display()).cyan()
    );
    Ok(())
}

/// Run the version command.
fn run_version() -> Result<()> {
    println!("prb {}", crate::version::version_string());
    Ok(())
}
