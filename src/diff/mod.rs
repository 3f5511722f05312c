// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Unified diff parsing module.
//!
//! Turns raw diff text into the structured model the analyzer consumes.

mod parser;
mod types;

pub use parser::{diff_stats, parse};
pub use types::{DiffLine, DiffStats, FileDiff, Hunk, LineKind, ParsedDiff};
