// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The built-in heuristic provider.

use crate::diff::ParsedDiff;
use crate::error::Result;
use crate::review::{analyze, AnalyzeOptions, ReviewAnalysis};

use super::Analyzer;

/// Deterministic pattern-based analyzer; the default provider.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicAnalyzer {
    options: AnalyzeOptions,
}

impl HeuristicAnalyzer {
    /// Create a heuristic analyzer with the given options.
    pub fn new(options: AnalyzeOptions) -> Self {
        Self { options }
    }
}

impl Analyzer for HeuristicAnalyzer {
    fn name(&self) -> &'static str {
        super::HEURISTIC
    }

    fn review(&self, _diff_text: &str, parsed: &ParsedDiff) -> Result<ReviewAnalysis> {
        Ok(analyze(parsed, &self.options))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::parse;

    #[test]
    fn test_heuristic_provider_matches_direct_analyze() {
        let text = "diff --git a/src/a.js b/src/a.js\n@@ -1 +1 @@\n+eval(x);\n";
        let parsed = parse(text);
        let provider = HeuristicAnalyzer::new(AnalyzeOptions::default());

        let via_provider = provider.review(text, &parsed).unwrap();
        let direct = analyze(&parsed, &AnalyzeOptions::default());

        assert_eq!(
            serde_json::to_value(&via_provider).unwrap(),
            serde_json::to_value(&direct).unwrap()
        );
    }
}
