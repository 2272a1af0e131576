//! Python → JavaScript

use super::transforms::{
    docstring_to_block_comment, fstring_to_template, indentation_to_braces, range_loop_to_counted,
};
use crate::rule::Phase::*;
use crate::rule::RuleSpec;

pub(crate) const RULES: &[RuleSpec] = &[
    // Comments
    RuleSpec::replace("line_comment", Comments, r"#(.*)", "//$1").guarded(),
    RuleSpec::transform("docstring", Comments, r#"(?s)"""(.*?)""""#, docstring_to_block_comment)
        .guarded(),
    RuleSpec::transform("docstring_single", Comments, r"(?s)'''(.*?)'''", docstring_to_block_comment)
        .guarded(),
    // Bindings
    RuleSpec::replace("self_to_this", Bindings, r"\bself\.", "this."),
    // Callables
    RuleSpec::replace(
        "async_def",
        Callables,
        r"\basync\s+def\s+(\w+)\s*\(([^()]*)\)\s*(?:->\s*[^:\n]+)?:",
        "async function $1($2) {",
    ),
    RuleSpec::replace(
        "def",
        Callables,
        r"\bdef\s+(\w+)\s*\(([^()]*)\)\s*(?:->\s*[^:\n]+)?:",
        "function $1($2) {",
    ),
    // Methods take `self` first; in a class body they lose the keyword too
    RuleSpec::replace("method", Callables, r"\bfunction\s+(\w+)\(\s*self\b\s*,?\s*", "$1("),
    RuleSpec::replace("init", Callables, r"\b__init__\(", "constructor("),
    RuleSpec::replace(
        "class_extends",
        Callables,
        r"\bclass\s+(\w+)\s*\(\s*(\w+)\s*\)\s*:",
        "class $1 extends $2 {",
    ),
    RuleSpec::replace("class", Callables, r"\bclass\s+(\w+)\s*(?:\(\s*\))?\s*:", "class $1 {"),
    RuleSpec::replace("lambda", Callables, r"\blambda\s+([^:\n]+):\s*", "($1) => "),
    RuleSpec::replace("lambda_no_args", Callables, r"\blambda\s*:\s*", "() => "),
    // Literals
    RuleSpec::replace("true", Literals, r"\bTrue\b", "true"),
    RuleSpec::replace("false", Literals, r"\bFalse\b", "false"),
    RuleSpec::replace("none", Literals, r"\bNone\b", "null"),
    // Library calls
    RuleSpec::replace("print", LibraryCalls, r"\bprint\s*\(", "console.log("),
    RuleSpec::replace("upper", LibraryCalls, r"\.upper\(\)", ".toUpperCase()"),
    RuleSpec::replace("lower", LibraryCalls, r"\.lower\(\)", ".toLowerCase()"),
    RuleSpec::replace("strip", LibraryCalls, r"\.strip\(\)", ".trim()"),
    RuleSpec::replace("lstrip", LibraryCalls, r"\.lstrip\(\)", ".trimStart()"),
    RuleSpec::replace("rstrip", LibraryCalls, r"\.rstrip\(\)", ".trimEnd()"),
    RuleSpec::replace("append", LibraryCalls, r"\.append\(", ".push("),
    RuleSpec::replace("pop_front", LibraryCalls, r"\.pop\(0\)", ".shift()"),
    RuleSpec::replace("startswith", LibraryCalls, r"\.startswith\(", ".startsWith("),
    RuleSpec::replace("endswith", LibraryCalls, r"\.endswith\(", ".endsWith("),
    RuleSpec::replace(
        "join",
        LibraryCalls,
        r#"("[^"\n]*"|'[^'\n]*')\.join\(([^()]+)\)"#,
        "$2.join($1)",
    ),
    RuleSpec::replace("json_dumps", LibraryCalls, r"\bjson\.dumps\(", "JSON.stringify("),
    RuleSpec::replace("json_loads", LibraryCalls, r"\bjson\.loads\(", "JSON.parse("),
    // Control flow
    RuleSpec::replace("elif", ControlFlow, r"\belif\s+([^:\n]+):", "} else if ($1) {"),
    RuleSpec::replace("else", ControlFlow, r"\belse\s*:", "} else {"),
    RuleSpec::replace("if", ControlFlow, r"\bif\s+([^:\n]+):", "if ($1) {"),
    RuleSpec::transform(
        "for_range",
        ControlFlow,
        r"\bfor\s+(\w+)\s+in\s+range\(((?:[^()]|\([^()]*\))*)\)\s*:",
        range_loop_to_counted,
    ),
    RuleSpec::replace("for_in", ControlFlow, r"\bfor\s+(\w+)\s+in\s+([\w.]+)\s*:", "for (const $1 of $2) {"),
    RuleSpec::replace("while", ControlFlow, r"\bwhile\s+([^:\n]+):", "while ($1) {"),
    RuleSpec::replace("try", ControlFlow, r"\btry\s*:", "try {"),
    RuleSpec::replace("except_as", ControlFlow, r"\bexcept\s+[\w.]+\s+as\s+(\w+)\s*:", "} catch ($1) {"),
    RuleSpec::replace("except", ControlFlow, r"\bexcept\b[^:\n]*:", "} catch (e) {"),
    RuleSpec::replace("finally", ControlFlow, r"\bfinally\s*:", "} finally {"),
    RuleSpec::replace("raise", ControlFlow, r"\braise\s+", "throw "),
    RuleSpec::replace("is_not", ControlFlow, r"\bis\s+not\s+", "!== ").guarded(),
    RuleSpec::replace("is", ControlFlow, r"\bis\s+", "=== ").guarded(),
    RuleSpec::replace("and", ControlFlow, r"\band\b", "&&").guarded(),
    RuleSpec::replace("or", ControlFlow, r"\bor\b", "||").guarded(),
    RuleSpec::replace("not", ControlFlow, r"\bnot\s+", "!").guarded(),
    // Interpolation
    RuleSpec::transform("fstring", Interpolation, r#"\bf"([^"\n]*)""#, fstring_to_template),
    RuleSpec::transform("fstring_single", Interpolation, r"\bf'([^'\n]*)'", fstring_to_template),
    // Block delimiters
    RuleSpec::transform("braces_from_indentation", BlockDelimiters, r"(?s)\A.+\z", indentation_to_braces),
];

#[cfg(test)]
mod tests {
    use crate::RuleSetLibrary;
    use codeshift_core::Language;

    fn convert(code: &str) -> String {
        RuleSetLibrary::shared()
            .pipeline(Language::Python, Language::JavaScript)
            .unwrap()
            .apply(code)
    }

    #[test]
    fn test_print() {
        assert_eq!(convert("print(\"hi\")"), "console.log(\"hi\");");
    }

    #[test]
    fn test_comment_inside_string_survives() {
        assert_eq!(convert("x = '#1'  # first"), "x = '#1';  // first");
    }

    #[test]
    fn test_function_gets_braces() {
        let input = "def add(a, b):\n    return a + b\n";
        assert_eq!(convert(input), "function add(a, b) {\n    return a + b;\n}\n");
    }

    #[test]
    fn test_if_elif_else() {
        let input = "if a:\n    x()\nelif b:\n    y()\nelse:\n    z()";
        let expected = "if (a) {\n    x();\n} else if (b) {\n    y();\n} else {\n    z();\n}";
        assert_eq!(convert(input), expected);
    }

    #[test]
    fn test_range_loop() {
        let input = "for i in range(3):\n    print(i)";
        assert_eq!(
            convert(input),
            "for (let i = 0; i < 3; i++) {\n    console.log(i);\n}"
        );
    }

    #[test]
    fn test_class_with_methods() {
        let input = "class User:\n    def __init__(self, name):\n        self.name = name\n";
        let expected = "class User {\n    constructor(name) {\n        this.name = name;\n    }\n}\n";
        assert_eq!(convert(input), expected);
    }

    #[test]
    fn test_literals_and_operators() {
        assert_eq!(convert("ok = a and not b"), "ok = a && !b;");
        assert_eq!(convert("x = None"), "x = null;");
        assert_eq!(convert("s = \"this and that\""), "s = \"this and that\";");
    }

    #[test]
    fn test_fstring() {
        assert_eq!(
            convert("print(f\"Hello {name}\")"),
            "console.log(`Hello ${name}`);"
        );
    }

    #[test]
    fn test_try_except() {
        let input = "try:\n    go()\nexcept ValueError as err:\n    print(err)";
        let expected = "try {\n    go();\n} catch (err) {\n    console.log(err);\n}";
        assert_eq!(convert(input), expected);
    }

    #[test]
    fn test_lambda() {
        assert_eq!(convert("double = lambda x: x * 2"), "double = (x) => x * 2;");
    }
}
