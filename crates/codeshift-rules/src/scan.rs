//! Tracks whether an offset sits inside a string literal or a comment

use codeshift_core::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Code,
    Quote(u8),
    TripleQuote(u8),
    LineComment,
    BlockComment,
}

/// Incremental scanner over one text
///
/// Queries must come with non-decreasing offsets, which is the order regex
/// matches are produced in. Delimiters are all ASCII, so scanning bytes never
/// confuses a multi-byte character for one.
pub(crate) struct LiteralScanner<'s> {
    bytes: &'s [u8],
    syntax: Language,
    pos: usize,
    state: State,
    escaped: bool,
}

impl<'s> LiteralScanner<'s> {
    pub fn new(text: &'s str, syntax: Language) -> Self {
        Self {
            bytes: text.as_bytes(),
            syntax,
            pos: 0,
            state: State::Code,
            escaped: false,
        }
    }

    /// Whether `offset` lies inside a string literal or comment
    pub fn is_inside_literal(&mut self, offset: usize) -> bool {
        self.advance_to(offset.min(self.bytes.len()));
        self.state != State::Code
    }

    fn advance_to(&mut self, target: usize) {
        let line_comment = self.syntax.line_comment().as_bytes();

        while self.pos < target {
            let rest = &self.bytes[self.pos..];
            let b = rest[0];

            match self.state {
                State::Code => {
                    if rest.starts_with(line_comment) {
                        self.state = State::LineComment;
                        self.pos += line_comment.len();
                        continue;
                    }
                    if self.syntax.has_block_comments() && rest.starts_with(b"/*") {
                        self.state = State::BlockComment;
                        self.pos += 2;
                        continue;
                    }
                    if self.syntax == Language::Python
                        && (rest.starts_with(b"\"\"\"") || rest.starts_with(b"'''"))
                    {
                        self.state = State::TripleQuote(b);
                        self.pos += 3;
                        continue;
                    }
                    match b {
                        b'\'' | b'"' => self.state = State::Quote(b),
                        b'`' if self.syntax == Language::JavaScript => self.state = State::Quote(b),
                        _ => {}
                    }
                }
                State::Quote(quote) => {
                    if self.escaped {
                        self.escaped = false;
                    } else if b == b'\\' {
                        self.escaped = true;
                    } else if b == quote {
                        self.state = State::Code;
                    } else if b == b'\n' && quote != b'`' {
                        // Unterminated string: don't let it swallow the rest of the text
                        self.state = State::Code;
                    }
                }
                State::TripleQuote(quote) => {
                    if self.escaped {
                        self.escaped = false;
                    } else if b == b'\\' {
                        self.escaped = true;
                    } else if rest.starts_with(&[quote; 3]) {
                        self.state = State::Code;
                        self.pos += 3;
                        continue;
                    }
                }
                State::LineComment => {
                    if b == b'\n' {
                        self.state = State::Code;
                    }
                }
                State::BlockComment => {
                    if rest.starts_with(b"*/") {
                        self.state = State::Code;
                        self.pos += 2;
                        continue;
                    }
                }
            }

            self.pos += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inside(text: &str, needle: &str, syntax: Language) -> bool {
        let offset = text.find(needle).unwrap();
        LiteralScanner::new(text, syntax).is_inside_literal(offset)
    }

    #[test]
    fn test_code_is_not_literal() {
        assert!(!inside("let x = 1; // c", "//", Language::JavaScript));
    }

    #[test]
    fn test_single_and_double_quotes() {
        assert!(inside("f('http://x')", "//", Language::JavaScript));
        assert!(inside("f(\"http://x\")", "//", Language::JavaScript));
    }

    #[test]
    fn test_escaped_quote() {
        assert!(inside(r#"s = "a \" // b""#, "//", Language::JavaScript));
    }

    #[test]
    fn test_template_literal_spans_lines() {
        assert!(inside("s = `a\n// b`", "//", Language::JavaScript));
        // Backticks are not strings in Java
        assert!(!inside("s = `a // b", "//", Language::Java));
    }

    #[test]
    fn test_apostrophe_in_comment_does_not_open_string() {
        let text = "// don't\nx = 1 // real";
        let offset = text.rfind("//").unwrap();
        assert!(!LiteralScanner::new(text, Language::JavaScript).is_inside_literal(offset));
    }

    #[test]
    fn test_block_comment() {
        assert!(inside("/* a // b */", "// b", Language::Java));
        assert!(!inside("/* a */ // b", "// b", Language::Java));
    }

    #[test]
    fn test_python_hash_and_docstrings() {
        assert!(inside("x = '#'", "#", Language::Python));
        assert!(inside("\"\"\"\ndoc # not comment\n\"\"\"", "#", Language::Python));
        assert!(!inside("\"\"\"doc\"\"\" # comment", "#", Language::Python));
    }

    #[test]
    fn test_unterminated_string_ends_at_newline() {
        assert!(!inside("x = 'oops\n# real", "#", Language::Python));
    }

    #[test]
    fn test_incremental_queries() {
        let text = "a // one\n'//' // two";
        let mut scanner = LiteralScanner::new(text, Language::JavaScript);
        let offsets: Vec<usize> = text.match_indices("//").map(|(i, _)| i).collect();
        let results: Vec<bool> = offsets.iter().map(|&o| scanner.is_inside_literal(o)).collect();
        assert_eq!(results, vec![false, true, false]);
    }
}
