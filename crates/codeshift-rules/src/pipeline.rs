//! Ordered rule sequences for one directed language pair

use codeshift_core::Language;

use crate::rule::{Phase, Rule};

/// The rewrite pipeline from `source` to `target`
///
/// Rules run strictly in phase order; within a phase they keep the order
/// they were authored in. A pipeline is a pure function of its input text.
#[derive(Debug, Clone)]
pub struct Pipeline {
    source: Language,
    target: Language,
    rules: Vec<Rule>,
}

impl Pipeline {
    pub fn new(source: Language, target: Language, mut rules: Vec<Rule>) -> Self {
        // Stable sort keeps authored order inside each phase
        rules.sort_by_key(|rule| rule.phase());
        Self {
            source,
            target,
            rules,
        }
    }

    pub fn source(&self) -> Language {
        self.source
    }

    pub fn target(&self) -> Language {
        self.target
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Rules belonging to one phase, in execution order
    pub fn rules_in(&self, phase: Phase) -> impl Iterator<Item = &Rule> {
        self.rules.iter().filter(move |rule| rule.phase() == phase)
    }

    /// Append a rule at the end of its phase
    pub fn push(&mut self, rule: Rule) {
        let idx = self
            .rules
            .iter()
            .rposition(|existing| existing.phase() <= rule.phase())
            .map_or(0, |i| i + 1);
        self.rules.insert(idx, rule);
    }

    /// Run every rule over `text`
    pub fn apply(&self, text: &str) -> String {
        self.run(text, self.rules.iter())
    }

    /// Run only the rules of one phase
    pub fn apply_phase(&self, text: &str, phase: Phase) -> String {
        self.run(text, self.rules_in(phase))
    }

    fn run<'r>(&self, text: &str, rules: impl Iterator<Item = &'r Rule>) -> String {
        rules.fold(text.to_string(), |current, rule| {
            rule.apply(&current, self.syntax_for(rule.phase()))
        })
    }

    /// Comment syntax seen by guards: the source's until comments are
    /// rewritten, the target's afterwards
    fn syntax_for(&self, phase: Phase) -> Language {
        match phase {
            Phase::Comments => self.source,
            _ => self.target,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::RuleAction;

    fn rule(name: &str, phase: Phase, pattern: &str, replacement: &str) -> Rule {
        Rule::new(name, phase, pattern, RuleAction::Replace(replacement.to_string())).unwrap()
    }

    #[test]
    fn test_rules_sorted_by_phase() {
        let pipeline = Pipeline::new(
            Language::JavaScript,
            Language::Python,
            vec![
                rule("late", Phase::BlockDelimiters, ";$", ""),
                rule("early", Phase::Comments, "//", "#"),
                rule("middle_a", Phase::Literals, "true", "True"),
                rule("middle_b", Phase::Literals, "false", "False"),
            ],
        );

        let names: Vec<&str> = pipeline.rules().iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["early", "middle_a", "middle_b", "late"]);
    }

    #[test]
    fn test_order_matters() {
        // The second rule only sees what the first produced
        let pipeline = Pipeline::new(
            Language::JavaScript,
            Language::Python,
            vec![
                rule("a_to_b", Phase::Literals, "a", "b"),
                rule("b_to_c", Phase::Literals, "b", "c"),
            ],
        );
        assert_eq!(pipeline.apply("a"), "c");
    }

    #[test]
    fn test_push_goes_to_end_of_phase() {
        let mut pipeline = Pipeline::new(
            Language::JavaScript,
            Language::Python,
            vec![
                rule("comments", Phase::Comments, "//", "#"),
                rule("literals", Phase::Literals, "true", "True"),
                rule("blocks", Phase::BlockDelimiters, ";$", ""),
            ],
        );
        pipeline.push(rule("custom", Phase::Literals, "yes", "True"));
        pipeline.push(rule("first", Phase::Comments, "/\\*", "\"\"\""));

        let names: Vec<&str> = pipeline.rules().iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["comments", "first", "literals", "custom", "blocks"]);
    }

    #[test]
    fn test_push_into_empty_pipeline() {
        let mut pipeline = Pipeline::new(Language::Java, Language::JavaScript, Vec::new());
        pipeline.push(rule("only", Phase::ControlFlow, "x", "y"));
        assert_eq!(pipeline.rules().len(), 1);
    }

    #[test]
    fn test_apply_phase_runs_only_that_phase() {
        let pipeline = Pipeline::new(
            Language::JavaScript,
            Language::Python,
            vec![
                rule("comments", Phase::Comments, "//", "#"),
                rule("literals", Phase::Literals, "true", "True"),
            ],
        );
        assert_eq!(pipeline.apply_phase("true // x", Phase::Literals), "True // x");
        assert_eq!(pipeline.apply("true // x"), "True # x");
    }
}
