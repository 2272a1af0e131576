//! codeshift-analyze: Quick statistics for a code snippet
//!
//! Stats are derived from the text alone and recomputed on every call;
//! nothing is cached or persisted. Empty or absent input gives all-zero
//! stats, never an error.

mod functions;

pub use functions::{count_functions, function_breakdown, FunctionCounting, FunctionPattern};

use serde::Serialize;

/// Size and shape of a snippet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    /// Line breaks + 1, or 0 for empty input
    pub line_count: usize,
    /// Unicode scalar values
    pub char_count: usize,
    /// Maximal runs of non-whitespace
    pub word_count: usize,
    /// Function declarations found by the detection heuristics
    pub function_count: usize,
}

/// Compute stats with the legacy summed function count
pub fn analyze(code: &str) -> Stats {
    analyze_with(code, FunctionCounting::Summed)
}

/// Like [`analyze`], treating absent input as empty
pub fn analyze_opt(code: Option<&str>) -> Stats {
    code.map(analyze).unwrap_or_default()
}

/// Compute stats with an explicit function counting mode
pub fn analyze_with(code: &str, counting: FunctionCounting) -> Stats {
    if code.is_empty() {
        return Stats::default();
    }

    Stats {
        line_count: code.matches('\n').count() + 1,
        char_count: code.chars().count(),
        word_count: code.split_whitespace().count(),
        function_count: count_functions(code, counting),
    }
}
