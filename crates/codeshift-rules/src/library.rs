//! Registry of rewrite pipelines keyed by directed language pair

use codeshift_core::Language;
use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::builtin::TABLES;
use crate::pipeline::Pipeline;
use crate::rule::{Phase, Rule};
use crate::yaml_rules::{LoadError, YamlRule};

static BUILTIN: Lazy<RuleSetLibrary> = Lazy::new(RuleSetLibrary::builtin);

/// Registry of all directly authored pipelines
#[derive(Debug, Clone, Default)]
pub struct RuleSetLibrary {
    pipelines: BTreeMap<(Language, Language), Pipeline>,
}

/// One rule as listed by [`RuleSetLibrary::describe`]
#[derive(Debug, Clone, Serialize)]
pub struct RuleInfo {
    pub name: String,
    pub phase: Phase,
}

/// One pipeline as listed by [`RuleSetLibrary::describe`]
#[derive(Debug, Clone, Serialize)]
pub struct PipelineInfo {
    pub source: Language,
    pub target: Language,
    pub rules: Vec<RuleInfo>,
}

impl RuleSetLibrary {
    /// Create a library with all built-in pipelines
    ///
    /// # Panics
    ///
    /// If a built-in pattern does not compile. The table tests compile every
    /// one, so this only fires on a broken build.
    pub fn builtin() -> Self {
        let mut library = Self::empty();

        for table in TABLES {
            let rules = table
                .rules
                .iter()
                .map(|spec| match Rule::from_spec(spec) {
                    Ok(rule) => rule,
                    Err(e) => panic!("built-in rule '{}' does not compile: {}", spec.name, e),
                })
                .collect();
            library.insert(Pipeline::new(table.source, table.target, rules));
        }

        library
    }

    /// The process-wide built-in library, compiled on first use
    pub fn shared() -> &'static RuleSetLibrary {
        &BUILTIN
    }

    /// A library with no pipelines
    pub fn empty() -> Self {
        Self::default()
    }

    /// Register a pipeline, replacing any existing one for the same pair
    pub fn insert(&mut self, pipeline: Pipeline) {
        self.pipelines
            .insert((pipeline.source(), pipeline.target()), pipeline);
    }

    /// The directly authored pipeline for a pair, if any
    pub fn pipeline(&self, source: Language, target: Language) -> Option<&Pipeline> {
        self.pipelines.get(&(source, target))
    }

    pub fn pipeline_mut(&mut self, source: Language, target: Language) -> Option<&mut Pipeline> {
        self.pipelines.get_mut(&(source, target))
    }

    /// All pipelines, ordered by (source, target)
    pub fn pipelines(&self) -> impl Iterator<Item = &Pipeline> {
        self.pipelines.values()
    }

    /// Append a custom rule to the end of its phase in its pipeline
    ///
    /// Only directly authored pipelines accept custom rules; a composed pair
    /// picks them up from its two legs.
    pub fn add_custom(&mut self, rule: &YamlRule) -> Result<(), LoadError> {
        rule.validate().map_err(LoadError::Validation)?;
        let compiled = rule.to_rule().map_err(LoadError::Validation)?;

        let Some(pipeline) = self.pipeline_mut(rule.source, rule.target) else {
            return Err(LoadError::Validation(format!(
                "rule '{}': no direct {} → {} pipeline to extend",
                rule.name, rule.source, rule.target
            )));
        };

        tracing::debug!(
            rule = %rule.name,
            source = %rule.source,
            target = %rule.target,
            phase = %rule.phase,
            "adding custom rule"
        );
        pipeline.push(compiled);
        Ok(())
    }

    /// Every pipeline with its rules in execution order (for `codeshift rules`)
    pub fn describe(&self) -> Vec<PipelineInfo> {
        self.pipelines()
            .map(|pipeline| PipelineInfo {
                source: pipeline.source(),
                target: pipeline.target(),
                rules: pipeline
                    .rules()
                    .iter()
                    .map(|rule| RuleInfo {
                        name: rule.name().to_string(),
                        phase: rule.phase(),
                    })
                    .collect(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::yaml_rules::load_rules_from_string;

    #[test]
    fn test_builtin_pairs() {
        let library = RuleSetLibrary::builtin();
        let pairs: Vec<_> = library
            .pipelines()
            .map(|p| (p.source(), p.target()))
            .collect();

        assert_eq!(pairs.len(), 4);
        assert!(library.pipeline(Language::JavaScript, Language::Python).is_some());
        assert!(library.pipeline(Language::JavaScript, Language::Java).is_some());
        assert!(library.pipeline(Language::Python, Language::JavaScript).is_some());
        assert!(library.pipeline(Language::Java, Language::JavaScript).is_some());
        assert!(library.pipeline(Language::Python, Language::Java).is_none());
        assert!(library.pipeline(Language::Java, Language::Python).is_none());
    }

    #[test]
    fn test_shared_is_builtin() {
        assert_eq!(
            RuleSetLibrary::shared().describe().len(),
            RuleSetLibrary::builtin().describe().len()
        );
    }

    #[test]
    fn test_describe_lists_rules_in_phase_order() {
        let info = RuleSetLibrary::builtin().describe();
        for pipeline in &info {
            assert!(!pipeline.rules.is_empty());
            let phases: Vec<Phase> = pipeline.rules.iter().map(|r| r.phase).collect();
            let mut sorted = phases.clone();
            sorted.sort();
            assert_eq!(phases, sorted);
        }
    }

    #[test]
    fn test_add_custom_rule() {
        let rules = load_rules_from_string(
            r#"
name: math_floor
source: javascript
target: python
pattern: 'Math\.floor\('
replace: 'math.floor('
"#,
        )
        .unwrap();

        let mut library = RuleSetLibrary::builtin();
        library.add_custom(&rules[0]).unwrap();

        let pipeline = library.pipeline(Language::JavaScript, Language::Python).unwrap();
        assert!(pipeline.rules().iter().any(|r| r.name() == "math_floor"));
        assert_eq!(pipeline.apply("Math.floor(x);"), "math.floor(x)");
    }

    #[test]
    fn test_custom_rule_needs_direct_pipeline() {
        let rules = load_rules_from_string(
            r#"
name: composed_pair
source: python
target: java
pattern: 'a'
replace: 'b'
"#,
        )
        .unwrap();

        let mut library = RuleSetLibrary::builtin();
        assert!(matches!(
            library.add_custom(&rules[0]),
            Err(LoadError::Validation(_))
        ));
    }
}
