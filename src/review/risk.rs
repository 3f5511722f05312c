// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Risk severity levels.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered risk severity assigned per file and aggregated per diff.
///
/// The derive order is the severity order; combining two risks is just
/// `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Risk {
    /// Routine change.
    Low,
    /// Large or otherwise notable change.
    Medium,
    /// Change that needs security/impact validation.
    High,
}

impl Risk {
    /// Combine two risks by taking the more severe one.
    pub fn combine(self, other: Risk) -> Risk {
        self.max(other)
    }

    /// Coerce an untrusted string to a risk level.
    ///
    /// Case-insensitive substring match, defaulting to `Low`. Used when
    /// normalizing externally-sourced analyses.
    pub fn from_loose(value: &str) -> Risk {
        let v = value.to_lowercase();
        if v.contains("high") {
            Risk::High
        } else if v.contains("medium") {
            Risk::Medium
        } else {
            Risk::Low
        }
    }

    /// Lowercase wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Risk::Low => "low",
            Risk::Medium => "medium",
            Risk::High => "high",
        }
    }
}

impl Default for Risk {
    fn default() -> Self {
        Risk::Low
    }
}

impl fmt::Display for Risk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
