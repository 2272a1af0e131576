//! Where the code to convert or analyze comes from

use anyhow::{anyhow, bail, Context, Result};
use codeshift_core::templates::{self, Template};
use codeshift_core::Language;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Code read for a command, with what it says about its own language
#[derive(Debug, Clone)]
pub struct Source {
    pub code: String,
    /// Language implied by the file extension or template
    pub language: Option<Language>,
    /// Human-readable origin: a path, "<stdin>" or "template <name>"
    pub origin: String,
}

/// Read a file, or stdin when `path` is absent or "-"
pub fn read_source(path: Option<&Path>) -> Result<Source> {
    match path {
        Some(path) if path != Path::new("-") => read_file(path),
        _ => {
            let mut code = String::new();
            std::io::stdin()
                .read_to_string(&mut code)
                .context("Failed to read stdin")?;
            Ok(Source {
                code,
                language: None,
                origin: "<stdin>".to_string(),
            })
        }
    }
}

pub fn read_file(path: &Path) -> Result<Source> {
    let code = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let language = path
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(Language::from_extension);

    Ok(Source {
        code,
        language,
        origin: path.display().to_string(),
    })
}

/// Find a built-in template by name, restricted to `language` when given
pub fn find_template(name: &str, language: Option<Language>) -> Result<&'static Template> {
    let found = match language {
        Some(language) => templates::find(language, name),
        None => templates::all()
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name)),
    };

    found.ok_or_else(|| match language {
        Some(language) => anyhow!(
            "No {} template named '{}'. Run `codeshift templates` to list them",
            language.display_name(),
            name
        ),
        None => anyhow!(
            "No template named '{}'. Run `codeshift templates` to list them",
            name
        ),
    })
}

/// Load a built-in template as conversion input
pub fn from_template(name: &str, language: Option<Language>) -> Result<Source> {
    let template = find_template(name, language)?;
    Ok(Source {
        code: template.code.to_string(),
        language: Some(template.language),
        origin: format!("template {}", template.name),
    })
}

/// Resolve the file a conversion is written to
///
/// A directory receives `converted_code.<ext>` for the target language.
pub fn output_path(requested: &Path, target: Language) -> Result<PathBuf> {
    if requested.is_dir() {
        return Ok(requested.join(format!("converted_code.{}", target.extension())));
    }
    if requested.as_os_str().is_empty() {
        bail!("Output path is empty");
    }
    Ok(requested.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_read_file_infers_language() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("hello.py");
        fs::write(&path, "print('hi')").unwrap();

        let source = read_file(&path).unwrap();
        assert_eq!(source.code, "print('hi')");
        assert_eq!(source.language, Some(Language::Python));
        assert!(source.origin.ends_with("hello.py"));
    }

    #[test]
    fn test_read_file_unknown_extension() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("notes.txt");
        fs::write(&path, "x").unwrap();

        assert_eq!(read_file(&path).unwrap().language, None);
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_file(Path::new("/definitely/not/here.js")).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to read"));
    }

    #[test]
    fn test_template_lookup() {
        let source = from_template("api fetch", None).unwrap();
        assert_eq!(source.language, Some(Language::JavaScript));
        assert!(source.code.contains("async function fetchData"));

        let source = from_template("API Fetch", Some(Language::JavaScript)).unwrap();
        assert_eq!(source.origin, "template API Fetch");

        assert!(from_template("API Fetch", Some(Language::Java)).is_err());
        assert!(from_template("nope", None).is_err());
    }

    #[test]
    fn test_output_path_for_directory() {
        let temp = TempDir::new().unwrap();
        assert_eq!(
            output_path(temp.path(), Language::Python).unwrap(),
            temp.path().join("converted_code.py")
        );

        let file = temp.path().join("out.java");
        assert_eq!(output_path(&file, Language::Java).unwrap(), file);
    }
}
