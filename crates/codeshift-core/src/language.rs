//! Supported languages

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a language id is not recognized
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown language '{0}'. Valid options: javascript, python, java")]
pub struct LanguageParseError(pub String);

/// A language codeshift can convert from and to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    JavaScript,
    Python,
    Java,
}

impl Language {
    /// All supported languages, in registry order
    pub const ALL: [Language; 3] = [Language::JavaScript, Language::Python, Language::Java];

    /// Stable id shared with persisted history and the CLI
    pub fn id(self) -> &'static str {
        match self {
            Language::JavaScript => "javascript",
            Language::Python => "python",
            Language::Java => "java",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Language::JavaScript => "JavaScript",
            Language::Python => "Python",
            Language::Java => "Java",
        }
    }

    /// Default file extension (without the dot)
    pub fn extension(self) -> &'static str {
        match self {
            Language::JavaScript => "js",
            Language::Python => "py",
            Language::Java => "java",
        }
    }

    /// Token that starts a line comment
    pub fn line_comment(self) -> &'static str {
        match self {
            Language::Python => "#",
            Language::JavaScript | Language::Java => "//",
        }
    }

    /// Whether `/* ... */` block comments exist
    pub fn has_block_comments(self) -> bool {
        !matches!(self, Language::Python)
    }

    /// Whether blocks are delimited by indentation rather than braces
    pub fn is_indentation_significant(self) -> bool {
        matches!(self, Language::Python)
    }

    /// Guess the language from a file extension
    pub fn from_extension(ext: &str) -> Option<Language> {
        Language::ALL
            .into_iter()
            .find(|lang| lang.extension().eq_ignore_ascii_case(ext))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Language {
    type Err = LanguageParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "javascript" | "js" | "node" => Ok(Language::JavaScript),
            "python" | "py" | "python3" => Ok(Language::Python),
            "java" => Ok(Language::Java),
            _ => Err(LanguageParseError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ids_and_aliases() {
        assert_eq!("javascript".parse::<Language>().unwrap(), Language::JavaScript);
        assert_eq!("JS".parse::<Language>().unwrap(), Language::JavaScript);
        assert_eq!("py".parse::<Language>().unwrap(), Language::Python);
        assert_eq!(" Java ".parse::<Language>().unwrap(), Language::Java);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "cobol".parse::<Language>().unwrap_err();
        assert_eq!(err, LanguageParseError("cobol".to_string()));
        assert!(err.to_string().contains("cobol"));
    }

    #[test]
    fn test_id_roundtrip() {
        for lang in Language::ALL {
            assert_eq!(lang.id().parse::<Language>().unwrap(), lang);
        }
    }

    #[test]
    fn test_extensions() {
        assert_eq!(Language::from_extension("py"), Some(Language::Python));
        assert_eq!(Language::from_extension("JAVA"), Some(Language::Java));
        assert_eq!(Language::from_extension("rs"), None);
    }

    #[test]
    fn test_serde_uses_ids() {
        let json = serde_json::to_string(&Language::JavaScript).unwrap();
        assert_eq!(json, "\"javascript\"");
        let lang: Language = serde_json::from_str("\"java\"").unwrap();
        assert_eq!(lang, Language::Java);
    }

    #[test]
    fn test_comment_syntax() {
        assert_eq!(Language::Python.line_comment(), "#");
        assert!(!Language::Python.has_block_comments());
        assert!(Language::Java.has_block_comments());
        assert!(Language::Python.is_indentation_significant());
    }
}
