// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Terminal and JSON rendering of review records.

use console::style;

use crate::error::{Result, ResultExt};

use super::engine::ReviewRecord;
use super::risk::Risk;
use super::types::CommentKind;

/// Print a record as pretty JSON to stdout.
pub fn print_json(record: &ReviewRecord) -> Result<()> {
    let json = serde_json::to_string_pretty(record).context("Failed to serialize review")?;
    println!("{json}");
    Ok(())
}

/// Print a record as a styled text report to stdout.
pub fn print_text(record: &ReviewRecord) {
    let summary = &record.result.summary;

    println!(
        "{} {}",
        style("Overall risk:").bold(),
        styled_risk(summary.risk)
    );

    println!("\n{}", style("Highlights").bold().underlined());
    for highlight in &summary.highlights {
        println!("  {} {}", style("•").dim(), highlight);
    }

    if !summary.missing_tests.is_empty() {
        println!("\n{}", style("Missing tests").bold().underlined());
        for entry in &summary.missing_tests {
            println!("  {} {}", style("⚠").yellow().bold(), entry);
        }
    }

    println!("\n{}", style("Files").bold().underlined());
    for file in &record.result.files {
        println!("  {} [{}]", style(&file.path).cyan(), styled_risk(file.risk));
        for comment in &file.comments {
            let marker = match comment.kind {
                CommentKind::Risk => style("✗").red().bold(),
                CommentKind::Suggestion => style("→").yellow(),
                CommentKind::Nitpick => style("·").dim(),
            };
            match comment.line {
                Some(line) => println!("    {} L{}: {}", marker, line, comment.message),
                None => println!("    {} {}", marker, comment.message),
            }
        }
    }

    println!("\n{}", style("Checklist").bold().underlined());
    for item in &record.result.checklist {
        println!("  {} {}", style("☐").dim(), item);
    }

    println!("\n{}", style("Policy").bold().underlined());
    match (&record.result.policy.policy_id, record.result.policy.passed) {
        (None, _) => println!("  {} no policy applied", style("–").dim()),
        (Some(id), true) => println!("  {} {} passed", style("✓").green().bold(), id),
        (Some(id), false) => {
            println!("  {} {} failed", style("✗").red().bold(), id);
            for blocker in &record.result.policy.blockers {
                println!("    {} {}", style("✗").red(), blocker);
            }
        }
    }
}

fn styled_risk(risk: Risk) -> console::StyledObject<&'static str> {
    match risk {
        Risk::Low => style("low").green(),
        Risk::Medium => style("medium").yellow(),
        Risk::High => style("high").red().bold(),
    }
}
