//! Built-in rule tables, one module per directly authored pipeline

mod java_to_javascript;
mod javascript_to_java;
mod javascript_to_python;
mod python_to_javascript;
mod transforms;

use codeshift_core::Language;

use crate::rule::RuleSpec;

/// A directly authored pipeline: source, target and its rules in authored order
pub(crate) struct Table {
    pub source: Language,
    pub target: Language,
    pub rules: &'static [RuleSpec],
}

pub(crate) const TABLES: &[Table] = &[
    Table {
        source: Language::JavaScript,
        target: Language::Python,
        rules: javascript_to_python::RULES,
    },
    Table {
        source: Language::JavaScript,
        target: Language::Java,
        rules: javascript_to_java::RULES,
    },
    Table {
        source: Language::Python,
        target: Language::JavaScript,
        rules: python_to_javascript::RULES,
    },
    Table {
        source: Language::Java,
        target: Language::JavaScript,
        rules: java_to_javascript::RULES,
    },
];
