//! JavaScript → Python

use super::transforms::{
    block_comment_to_docstring, counted_loop_to_range, template_literal_to_fstring,
};
use crate::rule::Phase::*;
use crate::rule::RuleSpec;

pub(crate) const RULES: &[RuleSpec] = &[
    // Comments
    RuleSpec::replace("line_comment", Comments, r"//(.*)", "#$1").guarded(),
    RuleSpec::transform("block_comment", Comments, r"(?s)/\*(.*?)\*/", block_comment_to_docstring)
        .guarded(),
    // Bindings
    RuleSpec::replace("drop_declaration_keyword", Bindings, r"\b(?:const|let|var)\s+", "")
        .guarded(),
    RuleSpec::replace("this_to_self", Bindings, r"\bthis\.", "self.").guarded(),
    // Callables
    RuleSpec::replace(
        "async_function",
        Callables,
        r"\basync\s+function\s+(\w+)\s*\(([^()]*)\)\s*\{",
        "async def $1($2):",
    )
    .guarded(),
    RuleSpec::replace(
        "function",
        Callables,
        r"\bfunction\s+(\w+)\s*\(([^()]*)\)\s*\{",
        "def $1($2):",
    )
    .guarded(),
    RuleSpec::replace("class_extends", Callables, r"\bclass\s+(\w+)\s+extends\s+(\w+)\s*\{", "class $1($2):")
        .guarded(),
    RuleSpec::replace("class", Callables, r"\bclass\s+(\w+)\s*\{", "class $1:").guarded(),
    RuleSpec::replace("constructor_no_args", Callables, r"\bconstructor\s*\(\s*\)\s*\{", "def __init__(self):")
        .guarded(),
    RuleSpec::replace(
        "constructor",
        Callables,
        r"\bconstructor\s*\(([^()]+)\)\s*\{",
        "def __init__(self, $1):",
    )
    .guarded(),
    RuleSpec::replace("arrow_block", Callables, r"\b(\w+)\s*=>\s*\{", "lambda $1:").guarded(),
    RuleSpec::replace("arrow_expr", Callables, r"\b(\w+)\s*=>\s*([^{;\n]+)", "lambda $1: $2")
        .guarded(),
    RuleSpec::replace(
        "arrow_params_block",
        Callables,
        r"\(([^()]*)\)\s*=>\s*\{",
        "def anonymous($1):",
    )
    .guarded(),
    RuleSpec::replace(
        "arrow_params_expr",
        Callables,
        r"\(([^()]*)\)\s*=>\s*([^{;\n]+)",
        "lambda $1: $2",
    )
    .guarded(),
    // Literals
    RuleSpec::replace("true", Literals, r"\btrue\b", "True").guarded(),
    RuleSpec::replace("false", Literals, r"\bfalse\b", "False").guarded(),
    RuleSpec::replace("null", Literals, r"\bnull\b", "None").guarded(),
    RuleSpec::replace("undefined", Literals, r"\bundefined\b", "None").guarded(),
    // Library calls
    RuleSpec::replace("console", LibraryCalls, r"\bconsole\.(?:log|error|warn|info)\s*\(", "print("),
    RuleSpec::replace("length_of_name", LibraryCalls, r"\b([\w.]+)\.length\b", "len($1)"),
    RuleSpec::replace("length", LibraryCalls, r"\.length\b", ".__len__()"),
    RuleSpec::replace("to_upper", LibraryCalls, r"\.toUpperCase\(\)", ".upper()"),
    RuleSpec::replace("to_lower", LibraryCalls, r"\.toLowerCase\(\)", ".lower()"),
    RuleSpec::replace("trim", LibraryCalls, r"\.trim\(\)", ".strip()"),
    RuleSpec::replace("trim_start", LibraryCalls, r"\.trimStart\(\)", ".lstrip()"),
    RuleSpec::replace("trim_end", LibraryCalls, r"\.trimEnd\(\)", ".rstrip()"),
    RuleSpec::replace("includes", LibraryCalls, r"\b([\w.]+)\.includes\(([^()]+)\)", "$2 in $1"),
    RuleSpec::replace("index_of", LibraryCalls, r"\.indexOf\(", ".find("),
    RuleSpec::replace("starts_with", LibraryCalls, r"\.startsWith\(", ".startswith("),
    RuleSpec::replace("ends_with", LibraryCalls, r"\.endsWith\(", ".endswith("),
    RuleSpec::replace("push", LibraryCalls, r"\.push\(", ".append("),
    RuleSpec::replace("shift", LibraryCalls, r"\.shift\(\)", ".pop(0)"),
    RuleSpec::replace("join", LibraryCalls, r"\b([\w.]+)\.join\(([^()]+)\)", "$2.join($1)"),
    RuleSpec::replace("json_stringify", LibraryCalls, r"\bJSON\.stringify\(", "json.dumps("),
    RuleSpec::replace("json_parse", LibraryCalls, r"\bJSON\.parse\(", "json.loads("),
    // Leftovers from Java input routed through JavaScript
    RuleSpec::replace("size_to_len", LibraryCalls, r"\b([\w.]+)\.size\(\)", "len($1)"),
    RuleSpec::replace("value_of_to_str", LibraryCalls, r"\bString\.valueOf\(([^()]*)\)", "str($1)"),
    RuleSpec::replace("parse_int_to_int", LibraryCalls, r"\bInteger\.parseInt\(([^()]*)\)", "int($1)"),
    RuleSpec::replace(
        "parse_double_to_float",
        LibraryCalls,
        r"\bDouble\.parseDouble\(([^()]*)\)",
        "float($1)",
    ),
    // Control flow
    RuleSpec::replace("else_if", ControlFlow, r"\}\s*else\s+if\s*\((.*)\)\s*\{", "elif $1:")
        .guarded(),
    RuleSpec::replace("else", ControlFlow, r"\}\s*else\s*\{", "else:").guarded(),
    RuleSpec::replace("if", ControlFlow, r"\bif\s*\((.*)\)\s*\{", "if $1:").guarded(),
    RuleSpec::replace(
        "for_of",
        ControlFlow,
        r"\bfor\s*\(\s*(?:(?:const|let|var)\s+)?(\w+)\s+of\s+([^)]+)\)\s*\{",
        "for $1 in $2:",
    )
    .guarded(),
    RuleSpec::transform(
        "counted_for",
        ControlFlow,
        r"\bfor\s*\(\s*(\w+)\s*=\s*([^;]+?)\s*;\s*(\w+)\s*(<=?)\s*([^;]+?)\s*;\s*(\w+)\s*(\+\+|\+=\s*[^)]+?)\s*\)\s*\{",
        counted_loop_to_range,
    )
    .guarded(),
    RuleSpec::replace("while", ControlFlow, r"\bwhile\s*\((.*)\)\s*\{", "while $1:").guarded(),
    RuleSpec::replace("try", ControlFlow, r"\btry\s*\{", "try:").guarded(),
    RuleSpec::replace(
        "catch",
        ControlFlow,
        r"\}\s*catch\s*\(\s*(\w+)\s*\)\s*\{",
        "except Exception as $1:",
    )
    .guarded(),
    RuleSpec::replace("catch_no_binding", ControlFlow, r"\}\s*catch\s*\{", "except Exception:")
        .guarded(),
    RuleSpec::replace("finally", ControlFlow, r"\}\s*finally\s*\{", "finally:").guarded(),
    RuleSpec::replace("throw", ControlFlow, r"\bthrow\s+new\s+Error\(", "raise Exception(")
        .guarded(),
    RuleSpec::replace("strict_equal", ControlFlow, r"===", "==").guarded(),
    RuleSpec::replace("strict_not_equal", ControlFlow, r"!==", "!=").guarded(),
    RuleSpec::replace("and", ControlFlow, r"\s*&&\s*", " and ").guarded(),
    RuleSpec::replace("or", ControlFlow, r"\s*\|\|\s*", " or ").guarded(),
    RuleSpec::replace("not", ControlFlow, r"!([\w(])", "not $1").guarded(),
    // Interpolation
    RuleSpec::transform("template_literal", Interpolation, r"`([^`]*)`", template_literal_to_fstring),
    // Block delimiters
    RuleSpec::replace("statement_terminator", BlockDelimiters, r"(?m);([ \t]*#.*)?[ \t]*$", "$1")
        .guarded(),
    RuleSpec::replace("open_brace", BlockDelimiters, r"(?m)[ \t]*\{[ \t]*$", ":").guarded(),
    RuleSpec::replace("close_brace_line", BlockDelimiters, r"(?m)^[ \t]*\}[ \t]*$", "")
        .guarded(),
];

#[cfg(test)]
mod tests {
    use crate::RuleSetLibrary;
    use codeshift_core::Language;

    fn convert(code: &str) -> String {
        RuleSetLibrary::shared()
            .pipeline(Language::JavaScript, Language::Python)
            .unwrap()
            .apply(code)
    }

    #[test]
    fn test_console_log() {
        assert_eq!(convert(r#"console.log("hi");"#), r#"print("hi")"#);
    }

    #[test]
    fn test_comment_inside_string_survives() {
        assert_eq!(
            convert("fetch('https://example.com'); // load"),
            "fetch('https://example.com') # load"
        );
    }

    #[test]
    fn test_block_comment_to_docstring() {
        assert_eq!(convert("/* note */"), "\"\"\" note \"\"\"");
    }

    #[test]
    fn test_function_and_block() {
        let input = "function add(a, b) {\n  return a + b;\n}";
        assert_eq!(convert(input), "def add(a, b):\n  return a + b\n");
    }

    #[test]
    fn test_async_function_keeps_async() {
        assert_eq!(
            convert("async function load(url) {"),
            "async def load(url):"
        );
    }

    #[test]
    fn test_declarations_and_literals() {
        assert_eq!(convert("let done = false;"), "done = False");
        assert_eq!(convert("const x = null;"), "x = None");
    }

    #[test]
    fn test_keywords_inside_strings_and_comments_are_kept() {
        assert_eq!(convert(r#"console.log("let it be");"#), r#"print("let it be")"#);
        assert_eq!(convert("const s = 'true or null';"), "s = 'true or null'");
        assert_eq!(convert("// return true if (x) {"), "# return true if (x) {");
        assert_eq!(convert("/* let x = true; */"), "\"\"\" let x = true; \"\"\"");
    }

    #[test]
    fn test_length() {
        assert_eq!(convert("items.length"), "len(items)");
        assert_eq!(convert("this.items.length"), "len(self.items)");
    }

    #[test]
    fn test_includes_operand_order() {
        assert_eq!(convert("if (names.includes(name)) {"), "if name in names:");
    }

    #[test]
    fn test_else_if_chain() {
        let input = "if (a) {\n  x();\n} else if (b) {\n  y();\n} else {\n  z();\n}";
        let expected = "if a:\n  x()\nelif b:\n  y()\nelse:\n  z()\n";
        assert_eq!(convert(input), expected);
    }

    #[test]
    fn test_loops() {
        assert_eq!(convert("for (let i = 0; i < n; i++) {"), "for i in range(n):");
        assert_eq!(convert("for (const x of xs) {"), "for x in xs:");
    }

    #[test]
    fn test_logical_operators() {
        assert_eq!(convert("if (a && !b) {"), "if a and not b:");
        assert_eq!(convert("const s = \"a && b\";"), "s = \"a && b\"");
    }

    #[test]
    fn test_template_literal() {
        assert_eq!(convert("console.log(`Total: ${sum}`);"), "print(f\"Total: {sum}\")");
    }

    #[test]
    fn test_java_leftovers() {
        assert_eq!(convert("String.valueOf(n)"), "str(n)");
        assert_eq!(convert("xs.size()"), "len(xs)");
    }
}
