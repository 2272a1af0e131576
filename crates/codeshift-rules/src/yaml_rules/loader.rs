//! YAML rule loader
//!
//! Load custom rules from files or strings. A document holds either one rule
//! or a list of rules; every rule is validated before it is returned.

use std::fs;
use std::path::Path;
use thiserror::Error;

use super::schema::YamlRule;

/// Errors that can occur when loading YAML rules
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid rule: {0}")]
    Validation(String),
}

/// Load one rule or a list of rules from a string
pub fn load_rules_from_string(yaml: &str) -> Result<Vec<YamlRule>, LoadError> {
    if let Ok(rule) = serde_yaml::from_str::<YamlRule>(yaml) {
        rule.validate().map_err(LoadError::Validation)?;
        return Ok(vec![rule]);
    }

    let rules: Vec<YamlRule> = serde_yaml::from_str(yaml)?;
    for rule in &rules {
        rule.validate().map_err(LoadError::Validation)?;
    }

    Ok(rules)
}

/// Load rules from a YAML file
pub fn load_rules_from_file(path: &Path) -> Result<Vec<YamlRule>, LoadError> {
    let content = fs::read_to_string(path)?;
    load_rules_from_string(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_single_rule() {
        let yaml = r#"
name: require_to_import
source: javascript
target: python
phase: bindings
pattern: 'require\(''(\w+)''\)'
replace: '__import__("$1")'
tests:
  - input: "require('os')"
    output: '__import__("os")'
"#;

        let rules = load_rules_from_string(yaml).unwrap();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].name, "require_to_import");
    }

    #[test]
    fn test_load_multiple_rules() {
        let yaml = r#"
- name: rule_one
  source: java
  target: javascript
  pattern: 'Math\.max\('
  replace: 'Math.max('
- name: rule_two
  source: java
  target: javascript
  pattern: 'Integer\.MAX_VALUE'
  replace: 'Number.MAX_SAFE_INTEGER'
"#;

        let rules = load_rules_from_string(yaml).unwrap();
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].name, "rule_one");
        assert_eq!(rules[1].name, "rule_two");
    }

    #[test]
    fn test_validation_error() {
        let yaml = r#"
name: ""
source: java
target: javascript
pattern: 'x'
replace: 'y'
"#;

        assert!(matches!(
            load_rules_from_string(yaml),
            Err(LoadError::Validation(_))
        ));
    }

    #[test]
    fn test_unknown_language_is_yaml_error() {
        let yaml = r#"
name: ruby
source: ruby
target: python
pattern: 'x'
replace: 'y'
"#;

        assert!(matches!(load_rules_from_string(yaml), Err(LoadError::Yaml(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "name: floor\nsource: javascript\ntarget: python\npattern: 'Math\\.floor\\('\nreplace: 'math.floor('"
        )
        .unwrap();

        let rules = load_rules_from_file(file.path()).unwrap();
        assert_eq!(rules[0].replace, "math.floor(");
    }

    #[test]
    fn test_missing_file() {
        let result = load_rules_from_file(Path::new("/nonexistent/rules.yaml"));
        assert!(matches!(result, Err(LoadError::Io(_))));
    }
}
