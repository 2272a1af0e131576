//! YAML rule schema definitions

use codeshift_core::Language;
use serde::{Deserialize, Serialize};

use crate::pipeline::Pipeline;
use crate::rule::{Guard, Phase, Rule, RuleAction};

/// A user-defined rule appended to a built-in pipeline
///
/// ```yaml
/// name: lodash_map
/// description: Use native Array.map
/// source: javascript
/// target: python
/// phase: library_calls
/// pattern: '_\.map\((\w+),\s*'
/// replace: 'map('
/// tests:
///   - input: "_.map(xs, f)"
///     output: "map(f)"
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct YamlRule {
    /// Unique rule identifier within its pipeline
    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Language the pipeline reads
    pub source: Language,

    /// Language the pipeline writes
    pub target: Language,

    /// Phase the rule runs in; it goes after the built-in rules of that phase
    #[serde(default = "default_phase")]
    pub phase: Phase,

    /// Regular expression to match
    pub pattern: String,

    /// Replacement template (`$1`, `${name}`)
    pub replace: String,

    /// Skip matches inside string literals and comments
    #[serde(default)]
    pub guarded: bool,

    /// Inline examples checked at load time
    #[serde(default)]
    pub tests: Vec<TestCase>,
}

fn default_phase() -> Phase {
    Phase::LibraryCalls
}

/// An inline example for a rule
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TestCase {
    pub input: String,

    /// Expected output; when absent the input must come back unchanged
    #[serde(default)]
    pub output: Option<String>,

    #[serde(default)]
    pub skip: bool,
}

impl YamlRule {
    /// Compile into a pipeline rule
    pub fn to_rule(&self) -> Result<Rule, String> {
        let guard = if self.guarded {
            Guard::OutsideStringsAndComments
        } else {
            Guard::None
        };

        Rule::new(
            self.name.clone(),
            self.phase,
            &self.pattern,
            RuleAction::Replace(self.replace.clone()),
        )
        .map(|rule| rule.with_guard(guard))
        .map_err(|e| format!("rule '{}': invalid pattern: {}", self.name, e))
    }

    /// Check the rule is well formed and that every inline test passes
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Rule name is required".to_string());
        }
        if self.source == self.target {
            return Err(format!(
                "rule '{}': source and target are both {}",
                self.name, self.source
            ));
        }

        let rule = self.to_rule()?;
        let harness = Pipeline::new(self.source, self.target, vec![rule]);

        for (idx, case) in self.tests.iter().enumerate() {
            if case.skip {
                continue;
            }
            let expected = case.output.as_deref().unwrap_or(&case.input);
            let actual = harness.apply(&case.input);
            if actual != expected {
                return Err(format!(
                    "rule '{}': test {} failed: expected {:?}, got {:?}",
                    self.name,
                    idx + 1,
                    expected,
                    actual
                ));
            }
        }

        Ok(())
    }
}
