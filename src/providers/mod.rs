// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Analysis providers.
//!
//! A provider turns diff input into a [`ReviewAnalysis`]. Two
//! implementations share that contract: the built-in heuristics and the
//! OpenAI-backed analyzer. The GitHub diff fetch collaborator also lives
//! here.

pub mod github;
mod heuristic;
mod openai;

pub use heuristic::HeuristicAnalyzer;
pub use openai::{OpenAiAnalyzer, OpenAiSettings};

use crate::diff::ParsedDiff;
use crate::error::{ReviewError, Result};
use crate::review::{AnalyzeOptions, ReviewAnalysis};

/// Name of the default provider.
pub const HEURISTIC: &str = "heuristic";

/// Name of the OpenAI-backed provider.
pub const OPENAI: &str = "openai";

/// A source of review analyses.
///
/// Implementations receive both the raw diff text and the parsed model;
/// the heuristic provider works from the latter, the model-backed one
/// from the former.
pub trait Analyzer {
    /// Provider name, for logging and the record echo.
    fn name(&self) -> &'static str;

    /// Produce an analysis for the given diff.
    fn review(&self, diff_text: &str, parsed: &ParsedDiff) -> Result<ReviewAnalysis>;
}

/// Resolve a provider by name.
///
/// Unknown names are a validation error (`invalid_provider`).
pub fn analyzer_for(
    provider: &str,
    options: AnalyzeOptions,
    openai: OpenAiSettings,
) -> Result<Box<dyn Analyzer>> {
    match provider {
        HEURISTIC => Ok(Box::new(HeuristicAnalyzer::new(options))),
        OPENAI => Ok(Box::new(OpenAiAnalyzer::new(openai))),
        other => Err(ReviewError::InvalidProvider {
            provider: other.to_string(),
        }
        .into()),
    }
}
