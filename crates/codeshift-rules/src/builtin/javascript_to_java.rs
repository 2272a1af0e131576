//! JavaScript → Java

use super::transforms::template_literal_to_concat;
use crate::rule::Phase::*;
use crate::rule::RuleSpec;

pub(crate) const RULES: &[RuleSpec] = &[
    // Bindings
    RuleSpec::replace("const", Bindings, r"\bconst\s+(\w+)\s*=", "final var $1 ="),
    RuleSpec::replace("let", Bindings, r"\blet\s+(\w+)\s*=", "var $1 ="),
    RuleSpec::replace("var", Bindings, r"\bvar\s+(\w+)\s*=", "var $1 ="),
    // Callables
    RuleSpec::replace(
        "async_function",
        Callables,
        r"\basync\s+function\s+(\w+)\s*\(([^()]*)\)\s*\{",
        "public static CompletableFuture<Void> $1($2) {",
    ),
    RuleSpec::replace(
        "function",
        Callables,
        r"\bfunction\s+(\w+)\s*\(([^()]*)\)\s*\{",
        "public static void $1($2) {",
    ),
    RuleSpec::replace("arrow_params", Callables, r"\(([^()]*)\)\s*=>", "($1) ->"),
    RuleSpec::replace("arrow", Callables, r"\b(\w+)\s*=>", "$1 ->"),
    // Literals
    RuleSpec::replace("undefined", Literals, r"\bundefined\b", "null"),
    // Library calls
    RuleSpec::replace("console_log", LibraryCalls, r"\bconsole\.(?:log|info)\s*\(", "System.out.println("),
    RuleSpec::replace("console_error", LibraryCalls, r"\bconsole\.error\s*\(", "System.err.println("),
    RuleSpec::replace(
        "console_warn",
        LibraryCalls,
        r"\bconsole\.warn\s*\(",
        r#"System.out.println("[WARN] " + "#,
    ),
    RuleSpec::replace("length", LibraryCalls, r"\.length\b", ".length()"),
    RuleSpec::replace("includes", LibraryCalls, r"\.includes\(", ".contains("),
    RuleSpec::replace("push", LibraryCalls, r"\.push\(", ".add("),
    RuleSpec::replace("pop", LibraryCalls, r"\b([\w.]+)\.pop\(\)", "$1.remove($1.size() - 1)"),
    RuleSpec::replace("map", LibraryCalls, r"\.map\(", ".stream().map("),
    RuleSpec::replace("filter", LibraryCalls, r"\.filter\(", ".stream().filter("),
    // Leftovers from Python input routed through JavaScript
    RuleSpec::replace("len_to_size", LibraryCalls, r"\blen\(([\w.]+)\)", "$1.size()"),
    RuleSpec::replace("str_to_value_of", LibraryCalls, r"\bstr\(([^()]*)\)", "String.valueOf($1)"),
    RuleSpec::replace("int_to_parse_int", LibraryCalls, r"\bint\(([^()]*)\)", "Integer.parseInt($1)"),
    RuleSpec::replace(
        "float_to_parse_double",
        LibraryCalls,
        r"\bfloat\(([^()]*)\)",
        "Double.parseDouble($1)",
    ),
    // Control flow
    RuleSpec::replace(
        "for_of",
        ControlFlow,
        r"\bfor\s*\(\s*(?:const|let|var)\s+(\w+)\s+of\s+",
        "for (var $1 : ",
    ),
    RuleSpec::replace("strict_equal", ControlFlow, r"===", "=="),
    RuleSpec::replace("strict_not_equal", ControlFlow, r"!==", "!="),
    // Interpolation
    RuleSpec::transform("template_literal", Interpolation, r"`([^`]*)`", template_literal_to_concat),
];

#[cfg(test)]
mod tests {
    use crate::RuleSetLibrary;
    use codeshift_core::Language;

    fn convert(code: &str) -> String {
        RuleSetLibrary::shared()
            .pipeline(Language::JavaScript, Language::Java)
            .unwrap()
            .apply(code)
    }

    #[test]
    fn test_console() {
        assert_eq!(convert("console.log(x);"), "System.out.println(x);");
        assert_eq!(convert("console.error(e);"), "System.err.println(e);");
        assert_eq!(convert("console.warn(w);"), "System.out.println(\"[WARN] \" + w);");
    }

    #[test]
    fn test_declarations() {
        assert_eq!(convert("const total = 0;"), "final var total = 0;");
        assert_eq!(convert("let i = 1;"), "var i = 1;");
    }

    #[test]
    fn test_functions() {
        assert_eq!(convert("function run(a) {"), "public static void run(a) {");
        assert_eq!(
            convert("async function load(url) {"),
            "public static CompletableFuture<Void> load(url) {"
        );
    }

    #[test]
    fn test_arrows() {
        assert_eq!(convert("xs.map(n => n * 2)"), "xs.stream().map(n -> n * 2)");
        assert_eq!(convert("(a, b) => a + b"), "(a, b) -> a + b");
    }

    #[test]
    fn test_collection_calls() {
        assert_eq!(convert("items.push(x);"), "items.add(x);");
        assert_eq!(convert("items.pop();"), "items.remove(items.size() - 1);");
        assert_eq!(convert("s.includes(\"a\")"), "s.contains(\"a\")");
        assert_eq!(convert("s.length"), "s.length()");
    }

    #[test]
    fn test_python_leftovers() {
        assert_eq!(convert("len(items)"), "items.size()");
        assert_eq!(convert("str(n)"), "String.valueOf(n)");
        assert_eq!(convert("int(s)"), "Integer.parseInt(s)");
    }

    #[test]
    fn test_for_of() {
        assert_eq!(convert("for (const x of xs) {"), "for (var x : xs) {");
    }

    #[test]
    fn test_template_literal() {
        assert_eq!(
            convert("console.log(`Hello, ${name}!`);"),
            "System.out.println(\"Hello, \" + name + \"!\");"
        );
    }

    #[test]
    fn test_booleans_unchanged() {
        assert_eq!(convert("if (ok === true) {"), "if (ok == true) {");
    }
}
