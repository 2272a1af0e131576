//! Rewrite rules and the phases they belong to

use codeshift_core::{apply_edits, Edit, Language, Span};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::scan::LiteralScanner;

/// Phases of a pipeline, in execution order
///
/// Later phases assume earlier ones already ran: comments are translated
/// before anything can mistake their contents for code, and block
/// delimiters are normalized last because every other phase matches on the
/// source language's block shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Comments,
    Bindings,
    Callables,
    Literals,
    LibraryCalls,
    ControlFlow,
    Interpolation,
    BlockDelimiters,
}

impl Phase {
    pub const ALL: [Phase; 8] = [
        Phase::Comments,
        Phase::Bindings,
        Phase::Callables,
        Phase::Literals,
        Phase::LibraryCalls,
        Phase::ControlFlow,
        Phase::Interpolation,
        Phase::BlockDelimiters,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Phase::Comments => "comments",
            Phase::Bindings => "bindings",
            Phase::Callables => "callables",
            Phase::Literals => "literals",
            Phase::LibraryCalls => "library_calls",
            Phase::ControlFlow => "control_flow",
            Phase::Interpolation => "interpolation",
            Phase::BlockDelimiters => "block_delimiters",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Computes a replacement from the captures of one match
pub type TransformFn = fn(&Captures<'_>) -> String;

/// How a match is rewritten
#[derive(Debug, Clone)]
pub enum RuleAction {
    /// Replacement template; `$1`, `${1}` and `$name` refer to captures
    Replace(String),
    /// Named function over the captures, for rewrites a template cannot express
    Transform(TransformFn),
}

/// Which matches a rule is allowed to rewrite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Guard {
    /// Every match is rewritten
    #[default]
    None,
    /// Matches starting inside a string literal or an existing comment are skipped
    OutsideStringsAndComments,
}

/// Static description of a built-in rule
#[derive(Clone, Copy)]
pub(crate) struct RuleSpec {
    pub name: &'static str,
    pub phase: Phase,
    pub pattern: &'static str,
    pub action: SpecAction,
    pub guard: Guard,
}

#[derive(Clone, Copy)]
pub(crate) enum SpecAction {
    Replace(&'static str),
    Transform(TransformFn),
}

impl RuleSpec {
    pub const fn replace(
        name: &'static str,
        phase: Phase,
        pattern: &'static str,
        replacement: &'static str,
    ) -> Self {
        Self {
            name,
            phase,
            pattern,
            action: SpecAction::Replace(replacement),
            guard: Guard::None,
        }
    }

    pub const fn transform(
        name: &'static str,
        phase: Phase,
        pattern: &'static str,
        transform: TransformFn,
    ) -> Self {
        Self {
            name,
            phase,
            pattern,
            action: SpecAction::Transform(transform),
            guard: Guard::None,
        }
    }

    pub const fn guarded(mut self) -> Self {
        self.guard = Guard::OutsideStringsAndComments;
        self
    }
}

/// A compiled pattern → rewrite step
#[derive(Debug, Clone)]
pub struct Rule {
    name: String,
    phase: Phase,
    regex: Regex,
    action: RuleAction,
    guard: Guard,
}

impl Rule {
    /// Compile a rule from its pattern
    pub fn new(
        name: impl Into<String>,
        phase: Phase,
        pattern: &str,
        action: RuleAction,
    ) -> Result<Self, regex::Error> {
        Ok(Self {
            name: name.into(),
            phase,
            regex: Regex::new(pattern)?,
            action,
            guard: Guard::None,
        })
    }

    pub(crate) fn from_spec(spec: &RuleSpec) -> Result<Self, regex::Error> {
        let action = match spec.action {
            SpecAction::Replace(template) => RuleAction::Replace(template.to_string()),
            SpecAction::Transform(f) => RuleAction::Transform(f),
        };
        Ok(Self::new(spec.name, spec.phase, spec.pattern, action)?.with_guard(spec.guard))
    }

    pub fn with_guard(mut self, guard: Guard) -> Self {
        self.guard = guard;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    pub fn guard(&self) -> Guard {
        self.guard
    }

    /// Edits this rule would make to `text`
    ///
    /// `syntax` is the language whose string and comment syntax the guard
    /// recognizes. Matches are non-overlapping and left to right. A match
    /// rejected by the guard does not consume its text, so a real match
    /// starting inside it is still found.
    pub fn edits(&self, text: &str, syntax: Language) -> Vec<Edit> {
        let mut scanner = match self.guard {
            Guard::None => None,
            Guard::OutsideStringsAndComments => Some(LiteralScanner::new(text, syntax)),
        };

        let mut edits = Vec::new();
        let mut pos = 0;
        while pos <= text.len() {
            let Some(caps) = self.regex.captures_at(text, pos) else {
                break;
            };
            let Some(whole) = caps.get(0) else {
                break;
            };

            if let Some(scanner) = scanner.as_mut() {
                if scanner.is_inside_literal(whole.start()) {
                    pos = next_char_boundary(text, whole.start());
                    continue;
                }
            }

            pos = if whole.end() > whole.start() {
                whole.end()
            } else {
                next_char_boundary(text, whole.end())
            };

            let replacement = self.render(&caps);
            if replacement == whole.as_str() {
                continue;
            }

            edits.push(
                Edit::new(Span::new(whole.start(), whole.end()), replacement)
                    .with_rule(self.name.as_str()),
            );
        }

        edits
    }

    /// Apply this rule to every match in `text`
    ///
    /// Never fails: text without a match comes back unchanged.
    pub fn apply(&self, text: &str, syntax: Language) -> String {
        let edits = self.edits(text, syntax);
        match apply_edits(text, &edits) {
            Ok(rewritten) => rewritten,
            Err(err) => {
                tracing::warn!(rule = %self.name, error = %err, "discarding rule output");
                text.to_string()
            }
        }
    }

    fn render(&self, caps: &Captures<'_>) -> String {
        match &self.action {
            RuleAction::Replace(template) => {
                let mut out = String::new();
                caps.expand(template, &mut out);
                out
            }
            RuleAction::Transform(transform) => transform(caps),
        }
    }
}

fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .chars()
        .next()
        .map_or(pos + 1, |c| pos + c.len_utf8())
}
