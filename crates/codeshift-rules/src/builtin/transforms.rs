//! Rewrites that need more than a replacement template
//!
//! Every function returns the whole match unchanged when the input does not
//! have the shape it expects, so a failed recognition is always a no-op.

use regex::Captures;

fn group<'t>(caps: &Captures<'t>, idx: usize) -> &'t str {
    caps.get(idx).map_or("", |m| m.as_str())
}

fn whole(caps: &Captures<'_>) -> String {
    group(caps, 0).to_string()
}

// ---------------------------------------------------------------------------
// Comments
// ---------------------------------------------------------------------------

/// `/* body */` → `"""body"""`
pub(crate) fn block_comment_to_docstring(caps: &Captures<'_>) -> String {
    format!("\"\"\"{}\"\"\"", group(caps, 1))
}

/// `"""body"""` → `/* body */`
pub(crate) fn docstring_to_block_comment(caps: &Captures<'_>) -> String {
    format!("/*{}*/", group(caps, 1))
}

// ---------------------------------------------------------------------------
// Interpolation
// ---------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq)]
enum Segment<'a> {
    Text(&'a str),
    Expr(&'a str),
}

/// Split an interpolated string body on `open` ... `}` placeholders
///
/// Returns `None` when there is no placeholder or a placeholder is not
/// closed, i.e. the body is not something we recognize.
fn split_placeholders<'a>(body: &'a str, open: &str) -> Option<Vec<Segment<'a>>> {
    let mut segments = Vec::new();
    let mut rest = body;
    let mut found = false;

    while let Some(start) = rest.find(open) {
        if start > 0 {
            segments.push(Segment::Text(&rest[..start]));
        }
        let inner = &rest[start + open.len()..];

        let mut depth = 1usize;
        let mut close = None;
        for (i, c) in inner.char_indices() {
            match c {
                '{' => depth += 1,
                '}' => {
                    depth -= 1;
                    if depth == 0 {
                        close = Some(i);
                        break;
                    }
                }
                _ => {}
            }
        }

        let close = close?;
        let expr = inner[..close].trim();
        if expr.is_empty() {
            return None;
        }
        segments.push(Segment::Expr(expr));
        found = true;
        rest = &inner[close + 1..];
    }

    if !rest.is_empty() {
        segments.push(Segment::Text(rest));
    }

    found.then_some(segments)
}

fn is_simple_expr(expr: &str) -> bool {
    expr.chars()
        .all(|c| c.is_alphanumeric() || matches!(c, '_' | '.' | '(' | ')' | '[' | ']' | '$'))
}

/// `` `Hi ${name}` `` → `f"Hi {name}"`
pub(crate) fn template_literal_to_fstring(caps: &Captures<'_>) -> String {
    let body = group(caps, 1);
    let Some(segments) = split_placeholders(body, "${") else {
        return whole(caps);
    };

    let mut inner = String::new();
    for segment in segments {
        match segment {
            Segment::Text(text) => inner.push_str(&text.replace('{', "{{").replace('}', "}}")),
            Segment::Expr(expr) => {
                inner.push('{');
                inner.push_str(expr);
                inner.push('}');
            }
        }
    }

    let quote = if body.contains('\n') {
        "\"\"\""
    } else if body.contains('"') && !body.contains('\'') {
        "'"
    } else {
        inner = inner.replace('"', "\\\"");
        "\""
    };

    format!("f{quote}{inner}{quote}")
}

fn java_string_literal(text: &str) -> String {
    let escaped = text
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n");
    format!("\"{escaped}\"")
}

/// `` `Hi ${name}!` `` → `"Hi " + name + "!"`
pub(crate) fn template_literal_to_concat(caps: &Captures<'_>) -> String {
    let Some(segments) = split_placeholders(group(caps, 1), "${") else {
        return whole(caps);
    };

    let mut parts: Vec<String> = Vec::new();
    for segment in segments {
        match segment {
            Segment::Text(text) => parts.push(java_string_literal(text)),
            Segment::Expr(expr) if is_simple_expr(expr) => parts.push(expr.to_string()),
            Segment::Expr(expr) => parts.push(format!("({expr})")),
        }
    }

    // A leading expression would otherwise be added numerically
    if !parts[0].starts_with('"') {
        parts.insert(0, "\"\"".to_string());
    }

    parts.join(" + ")
}

fn template_text(text: &str) -> String {
    text.replace('`', "\\`").replace("${", "\\${")
}

/// Strip a trailing Python format spec or conversion: `x:.2f` → `x`, `x!r` → `x`
fn strip_format_spec(expr: &str) -> &str {
    let expr = match expr.rsplit_once('!') {
        Some((head, conv)) if matches!(conv, "r" | "s" | "a") => head,
        _ => expr,
    };
    match expr.rsplit_once(':') {
        Some((head, spec))
            if !head.trim().is_empty()
                && !head.contains("lambda")
                && !spec.contains(['[', ']', '(', ')', '\'', '"']) =>
        {
            head.trim_end()
        }
        _ => expr,
    }
}

/// `f"Hi {name}"` → `` `Hi ${name}` ``
pub(crate) fn fstring_to_template(caps: &Captures<'_>) -> String {
    let body = group(caps, 1);
    if body.contains("{{") || body.contains("}}") {
        return whole(caps);
    }
    let Some(segments) = split_placeholders(body, "{") else {
        return whole(caps);
    };

    let mut out = String::from("`");
    for segment in segments {
        match segment {
            Segment::Text(text) => out.push_str(&template_text(text)),
            Segment::Expr(expr) => {
                out.push_str("${");
                out.push_str(strip_format_spec(expr));
                out.push('}');
            }
        }
    }
    out.push('`');
    out
}

/// Split call arguments on top-level commas; `None` if brackets don't balance
fn split_args(args: &str) -> Option<Vec<&str>> {
    let mut parts = Vec::new();
    let mut depth = 0i32;
    let mut quote: Option<char> = None;
    let mut escaped = false;
    let mut start = 0;

    for (i, c) in args.char_indices() {
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == q {
                quote = None;
            }
            continue;
        }
        match c {
            '"' | '\'' => quote = Some(c),
            '(' | '[' | '{' => depth += 1,
            ')' | ']' | '}' => {
                depth -= 1;
                if depth < 0 {
                    return None;
                }
            }
            ',' if depth == 0 => {
                parts.push(args[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }

    if depth != 0 || quote.is_some() {
        return None;
    }
    let last = args[start..].trim();
    if !last.is_empty() {
        parts.push(last);
    }
    Some(parts)
}

/// `String.format("%s (%d)", a, b)` → `` `${a} (${b})` ``
pub(crate) fn string_format_to_template(caps: &Captures<'_>) -> String {
    let format = group(caps, 1);
    let Some(args) = split_args(group(caps, 2)) else {
        return whole(caps);
    };

    let mut out = String::from("`");
    let mut next_arg = args.iter();
    let mut chars = format.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some('"') => out.push('"'),
                Some(other) => {
                    out.push('\\');
                    out.push(other);
                }
                None => out.push('\\'),
            },
            '%' => {
                // flags, width and precision are dropped
                while chars
                    .peek()
                    .is_some_and(|c| c.is_ascii_digit() || matches!(c, '-' | '#' | '+' | ' ' | ',' | '.' | '('))
                {
                    chars.next();
                }
                match chars.next() {
                    Some('%') => out.push('%'),
                    Some('n') => out.push_str("\\n"),
                    Some(conv) if "sdfxXcbeEgG".contains(conv) => match next_arg.next() {
                        Some(arg) => {
                            out.push_str("${");
                            out.push_str(arg);
                            out.push('}');
                        }
                        None => return whole(caps),
                    },
                    _ => return whole(caps),
                }
            }
            '`' => out.push_str("\\`"),
            '$' if chars.peek() == Some(&'{') => out.push_str("\\$"),
            other => out.push(other),
        }
    }

    if next_arg.next().is_some() {
        return whole(caps);
    }
    out.push('`');
    out
}

// ---------------------------------------------------------------------------
// Loops
// ---------------------------------------------------------------------------

/// `for i in range(a, b):` → `for (let i = a; i < b; i++) {`
pub(crate) fn range_loop_to_counted(caps: &Captures<'_>) -> String {
    let var = group(caps, 1);
    let Some(args) = split_args(group(caps, 2)) else {
        return whole(caps);
    };

    match args.as_slice() {
        [end] => format!("for (let {var} = 0; {var} < {end}; {var}++) {{"),
        [start, end] => format!("for (let {var} = {start}; {var} < {end}; {var}++) {{"),
        [start, end, step] => {
            format!("for (let {var} = {start}; {var} < {end}; {var} += {step}) {{")
        }
        _ => whole(caps),
    }
}

/// `for (i = 0; i < n; i++) {` → `for i in range(n):`
///
/// Capture groups: 1 var, 2 start, 3 var, 4 comparison, 5 end, 6 var, 7 step.
pub(crate) fn counted_loop_to_range(caps: &Captures<'_>) -> String {
    let var = group(caps, 1);
    if group(caps, 3) != var || group(caps, 6) != var {
        return whole(caps);
    }

    let start = group(caps, 2).trim();
    let end = match group(caps, 4) {
        "<=" => format!("{} + 1", group(caps, 5).trim()),
        _ => group(caps, 5).trim().to_string(),
    };
    let step = group(caps, 7)
        .trim()
        .strip_prefix("+=")
        .map(|s| s.trim().to_string());

    let args = match (start, step) {
        ("0", None) => end,
        (start, None) => format!("{start}, {end}"),
        (start, Some(step)) => format!("{start}, {end}, {step}"),
    };

    format!("for {var} in range({args}):")
}

// ---------------------------------------------------------------------------
// Block delimiters
// ---------------------------------------------------------------------------

/// Leading whitespace of a line and its width (tabs count as four columns)
fn indentation(line: &str) -> (usize, &str) {
    let indent_len = line.len() - line.trim_start_matches([' ', '\t']).len();
    let indent = &line[..indent_len];
    let width = indent.chars().map(|c| if c == '\t' { 4 } else { 1 }).sum();
    (width, indent)
}

/// Net change in open `(` / `[` across a line, and where its trailing `//`
/// comment starts (the line length if it has none)
fn scan_line(line: &str) -> (i32, usize) {
    let mut delta = 0;
    let mut quote: Option<char> = None;
    let mut escaped = false;
    let mut prev: Option<(usize, char)> = None;

    for (i, c) in line.char_indices() {
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == q {
                quote = None;
            }
            prev = Some((i, c));
            continue;
        }
        match c {
            '"' | '\'' | '`' => quote = Some(c),
            '/' if matches!(prev, Some((_, '/'))) => {
                return (delta, prev.map_or(i, |(p, _)| p));
            }
            '(' | '[' => delta += 1,
            ')' | ']' => delta -= 1,
            _ => {}
        }
        prev = Some((i, c));
    }

    (delta, line.len())
}

fn needs_terminator(trimmed: &str) -> bool {
    if trimmed.starts_with('@') || trimmed.starts_with("//") {
        return false;
    }
    trimmed
        .chars()
        .last()
        .is_some_and(|c| c.is_alphanumeric() || matches!(c, '_' | ')' | ']' | '"' | '\'' | '`'))
}

/// Close indentation-delimited blocks with braces and terminate statements
///
/// Earlier phases leave every block header ending in `{`. A block closes
/// when a later line is indented no deeper than its header; a line that
/// already starts with `}` at the header's depth (`} else {`) closes it
/// itself.
pub(crate) fn indentation_to_braces(caps: &Captures<'_>) -> String {
    let text = group(caps, 0);
    let mut out: Vec<String> = Vec::new();
    let mut open: Vec<(usize, String)> = Vec::new();
    let mut blanks: Vec<&str> = Vec::new();
    let mut depth = 0i32;
    let mut in_block_comment = false;

    for line in text.split('\n') {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            blanks.push(line);
            continue;
        }

        let in_comment = in_block_comment || trimmed.starts_with("/*");
        if in_comment {
            in_block_comment = !trimmed.contains("*/");
        }
        let continuation = depth > 0;
        let (width, indent) = indentation(line);

        if !in_comment && !continuation {
            while let Some((open_width, open_indent)) = open.last() {
                if *open_width < width {
                    break;
                }
                if *open_width == width && trimmed.starts_with('}') {
                    open.pop();
                    break;
                }
                out.push(format!("{open_indent}}}"));
                open.pop();
            }
        }

        out.extend(blanks.drain(..).map(str::to_string));

        if in_comment {
            out.push(line.to_string());
            continue;
        }

        let (delta, comment_start) = scan_line(line);
        depth = (depth + delta).max(0);
        let code = line[..comment_start].trim_end();
        let comment = line[code.len()..].trim_end();

        if continuation || depth > 0 {
            out.push(line.to_string());
        } else if code.ends_with('{') {
            open.push((width, indent.to_string()));
            out.push(line.to_string());
        } else if needs_terminator(code.trim_start()) {
            out.push(format!("{code};{comment}"));
        } else {
            out.push(line.to_string());
        }
    }

    while let Some((_, indent)) = open.pop() {
        out.push(format!("{indent}}}"));
    }
    out.extend(blanks.into_iter().map(str::to_string));

    out.join("\n")
}
