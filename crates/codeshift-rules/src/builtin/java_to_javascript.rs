//! Java → JavaScript

use super::transforms::string_format_to_template;
use crate::rule::Phase::*;
use crate::rule::RuleSpec;

/// A declared type: primitive, `String`, or a capitalized (possibly generic) class, plus array dims
macro_rules! java_type {
    () => {
        r"(?:int|long|short|byte|double|float|boolean|char|String|[A-Z]\w*(?:<[^<>;=()]*(?:<[^<>;=()]*>)?[^<>;=()]*>)?)(?:\[\])*"
    };
}

pub(crate) const RULES: &[RuleSpec] = &[
    // Bindings
    RuleSpec::replace(
        "field",
        Bindings,
        concat!(
            r"(?m)^([ \t]*)(?:private|protected|public)\s+(?:static\s+)?(?:final\s+)?",
            java_type!(),
            r"\s+(\w+)\s*;"
        ),
        "${1}${2};",
    )
    .guarded(),
    RuleSpec::replace("final_var", Bindings, r"\bfinal\s+var\s+", "const ").guarded(),
    RuleSpec::replace(
        "final_typed",
        Bindings,
        concat!(r"\bfinal\s+", java_type!(), r"\s+(\w+)\s*="),
        "const $1 =",
    )
    .guarded(),
    RuleSpec::replace("var", Bindings, r"\bvar\s+", "let ").guarded(),
    RuleSpec::replace(
        "typed_init",
        Bindings,
        concat!(r"\b", java_type!(), r"\s+(\w+)\s*=([^=])"),
        "let ${1} =${2}",
    )
    .guarded(),
    RuleSpec::replace(
        "typed_decl",
        Bindings,
        concat!(r"(?m)^([ \t]*)", java_type!(), r"\s+(\w+)\s*;"),
        "${1}let ${2};",
    )
    .guarded(),
    // Callables
    RuleSpec::replace(
        "main",
        Callables,
        r"\bpublic\s+static\s+void\s+main\s*\([^()]*\)\s*\{",
        "static main() {",
    ),
    RuleSpec::replace(
        "method",
        Callables,
        concat!(
            r"\b(?:public|private|protected)\s+(static\s+)?(?:final\s+)?(?:synchronized\s+)?(?:void|",
            java_type!(),
            r")\s+(\w+)\s*\(([^()]*)\)\s*(?:throws\s+[\w.,\s]+?)?\{"
        ),
        "${1}${2}(${3}) {",
    ),
    RuleSpec::replace(
        "constructor",
        Callables,
        r"\b(?:public|private|protected)\s+[A-Z]\w*\s*\(([^()]*)\)\s*(?:throws\s+[\w.,\s]+?)?\{",
        "constructor($1) {",
    ),
    RuleSpec::replace(
        "class",
        Callables,
        r"\b(?:public\s+)?(?:abstract\s+|final\s+)?class\s+(\w+)(\s+extends\s+\w+)?(?:\s+implements\s+[\w.,\s<>]+?)?\s*\{",
        "class $1$2 {",
    ),
    RuleSpec::replace("lambda", Callables, r"([\w)])\s*->", "$1 =>").guarded(),
    // Library calls
    RuleSpec::replace("println", LibraryCalls, r"\bSystem\.out\.print(?:ln)?\s*\(", "console.log("),
    RuleSpec::replace("err_println", LibraryCalls, r"\bSystem\.err\.print(?:ln)?\s*\(", "console.error("),
    RuleSpec::replace("stream_map", LibraryCalls, r"\.stream\(\)\.map\(", ".map("),
    RuleSpec::replace("stream_filter", LibraryCalls, r"\.stream\(\)\.filter\(", ".filter("),
    RuleSpec::replace("stream_for_each", LibraryCalls, r"\.stream\(\)\.forEach\(", ".forEach("),
    RuleSpec::replace("collect_to_list", LibraryCalls, r"\.collect\(\s*Collectors\.toList\(\)\s*\)", ""),
    RuleSpec::replace("as_list", LibraryCalls, r"\b(?:Arrays\.asList|List\.of)\(([^()]*)\)", "[$1]"),
    RuleSpec::replace("new_list", LibraryCalls, r"\bnew\s+(?:ArrayList|LinkedList)<[^<>]*>\(\)", "[]"),
    RuleSpec::replace("new_map", LibraryCalls, r"\bnew\s+(?:HashMap|TreeMap)<[^<>]*>\(\)", "new Map()"),
    RuleSpec::replace("add", LibraryCalls, r"\.add\(", ".push("),
    RuleSpec::replace("size", LibraryCalls, r"\.size\(\)", ".length"),
    RuleSpec::replace("contains", LibraryCalls, r"\.contains\(", ".includes("),
    RuleSpec::replace("string_length", LibraryCalls, r"\.length\(\)", ".length"),
    RuleSpec::replace("equals", LibraryCalls, r"\b([\w.]+)\.equals\(([^()]+)\)", "$1 === $2"),
    // Control flow
    RuleSpec::replace(
        "enhanced_for",
        ControlFlow,
        concat!(r"\bfor\s*\(\s*(?:final\s+)?(?:let|", java_type!(), r")\s+(\w+)\s*:\s*([^)]+)\)"),
        "for (const $1 of $2)",
    ),
    RuleSpec::replace(
        "catch",
        ControlFlow,
        r"\bcatch\s*\(\s*(?:final\s+)?[\w.]+(?:\s*\|\s*[\w.]+)*\s+(\w+)\s*\)",
        "catch ($1)",
    ),
    // Interpolation
    RuleSpec::transform(
        "string_format",
        Interpolation,
        r#"\bString\.format\(\s*"((?:[^"\\]|\\.)*)"\s*,((?:[^()\n]|\([^()\n]*\))*)\)"#,
        string_format_to_template,
    ),
];
