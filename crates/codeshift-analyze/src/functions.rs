//! Function detection heuristics
//!
//! Each pattern looks for one declaration shape and knows nothing about the
//! others, so a construct two patterns recognize is counted by both under
//! [`FunctionCounting::Summed`].

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;

/// One independent function-declaration detector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FunctionPattern {
    /// `function name`
    Keyword,
    /// `def name`
    Def,
    /// `public [static] Type name(`
    AccessModifiedMethod,
    /// `const name = (...) =>`
    ArrowAssignment,
}

static KEYWORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"function\s+\w+").unwrap());
static DEF: Lazy<Regex> = Lazy::new(|| Regex::new(r"def\s+\w+").unwrap());
static ACCESS_MODIFIED_METHOD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"public\s+(static\s+)?\w+\s+\w+\s*\(").unwrap());
static ARROW_ASSIGNMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"const\s+\w+\s*=\s*\([^)]*\)\s*=>").unwrap());

impl FunctionPattern {
    pub const ALL: [FunctionPattern; 4] = [
        FunctionPattern::Keyword,
        FunctionPattern::Def,
        FunctionPattern::AccessModifiedMethod,
        FunctionPattern::ArrowAssignment,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FunctionPattern::Keyword => "keyword",
            FunctionPattern::Def => "def",
            FunctionPattern::AccessModifiedMethod => "access_modified_method",
            FunctionPattern::ArrowAssignment => "arrow_assignment",
        }
    }

    pub fn regex(self) -> &'static Regex {
        match self {
            FunctionPattern::Keyword => &KEYWORD,
            FunctionPattern::Def => &DEF,
            FunctionPattern::AccessModifiedMethod => &ACCESS_MODIFIED_METHOD,
            FunctionPattern::ArrowAssignment => &ARROW_ASSIGNMENT,
        }
    }

    /// Number of non-overlapping matches in `code`
    pub fn count(self, code: &str) -> usize {
        self.regex().find_iter(code).count()
    }
}

impl fmt::Display for FunctionPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How per-pattern matches combine into one function count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FunctionCounting {
    /// Sum of every pattern's count; overlapping detections count twice
    #[default]
    Summed,
    /// Overlapping detections from different patterns count once
    Distinct,
}

/// Count function declarations in `code`
pub fn count_functions(code: &str, counting: FunctionCounting) -> usize {
    match counting {
        FunctionCounting::Summed => FunctionPattern::ALL.iter().map(|p| p.count(code)).sum(),
        FunctionCounting::Distinct => count_distinct(code),
    }
}

fn count_distinct(code: &str) -> usize {
    let mut spans: Vec<(usize, usize)> = FunctionPattern::ALL
        .iter()
        .flat_map(|p| p.regex().find_iter(code).map(|m| (m.start(), m.end())))
        .collect();
    spans.sort_unstable();

    let mut count = 0;
    let mut covered_until = None;
    for (start, end) in spans {
        match covered_until {
            Some(until) if start < until => covered_until = Some(until.max(end)),
            _ => {
                count += 1;
                covered_until = Some(end);
            }
        }
    }
    count
}

/// Per-pattern match counts, in [`FunctionPattern::ALL`] order
pub fn function_breakdown(code: &str) -> Vec<(FunctionPattern, usize)> {
    FunctionPattern::ALL
        .iter()
        .map(|&p| (p, p.count(code)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_pattern() {
        assert_eq!(FunctionPattern::Keyword.count("function a() {}\nfunction b() {}"), 2);
        assert_eq!(FunctionPattern::Def.count("def f(x):\n    pass"), 1);
        assert_eq!(
            FunctionPattern::AccessModifiedMethod.count("public static void main(String[] a) {"),
            1
        );
        assert_eq!(FunctionPattern::AccessModifiedMethod.count("public String name() {"), 1);
        assert_eq!(FunctionPattern::ArrowAssignment.count("const add = (a, b) => a + b;"), 1);
    }

    #[test]
    fn test_patterns_are_not_word_bounded() {
        // Legacy heuristics match inside longer identifiers
        assert_eq!(FunctionPattern::Def.count("undef x"), 1);
    }

    #[test]
    fn test_summed_double_counts_overlaps() {
        // `public static def foo(` is seen by both the def and method patterns
        let code = "public static def foo(";
        assert_eq!(count_functions(code, FunctionCounting::Summed), 2);
        assert_eq!(count_functions(code, FunctionCounting::Distinct), 1);
    }

    #[test]
    fn test_distinct_keeps_separate_functions() {
        let code = "function a() {}\ndef b():\n    pass\nconst c = () => 1;";
        assert_eq!(count_functions(code, FunctionCounting::Summed), 3);
        assert_eq!(count_functions(code, FunctionCounting::Distinct), 3);
    }

    #[test]
    fn test_breakdown_order() {
        let breakdown = function_breakdown("def a():\n    pass\ndef b():\n    pass");
        assert_eq!(
            breakdown,
            vec![
                (FunctionPattern::Keyword, 0),
                (FunctionPattern::Def, 2),
                (FunctionPattern::AccessModifiedMethod, 0),
                (FunctionPattern::ArrowAssignment, 0),
            ]
        );
    }

    #[test]
    fn test_empty() {
        assert_eq!(count_functions("", FunctionCounting::Summed), 0);
        assert_eq!(count_functions("", FunctionCounting::Distinct), 0);
    }
}
