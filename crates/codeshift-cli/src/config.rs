//! Configuration file support for codeshift
//!
//! Loads `.codeshift.toml` from current directory or parent directories.

use anyhow::{Context, Result};
use codeshift_core::Language;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = ".codeshift.toml";

/// Configuration file structure
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub convert: ConvertConfig,
    pub history: HistoryConfig,
    pub rules: RulesConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ConvertConfig {
    /// Source language used when `--from` is absent and the file extension doesn't say
    pub from: Option<String>,
    /// Target language used when `--to` is absent
    pub to: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Record conversions made by `convert`
    pub enabled: bool,
    /// Directory holding the history file (defaults to the user data dir)
    pub dir: Option<PathBuf>,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            dir: None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Glob patterns of YAML rule files, relative to the config file
    pub extra: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format: "text" or "json"
    pub format: Option<String>,
}

impl Config {
    /// Load config from `.codeshift.toml` searching from current directory upward
    pub fn load() -> Result<Option<(Config, PathBuf)>> {
        Self::load_from(std::env::current_dir()?)
    }

    /// Load config searching from the given directory upward
    pub fn load_from(start_dir: PathBuf) -> Result<Option<(Config, PathBuf)>> {
        let mut current = Some(start_dir.as_path());

        while let Some(dir) = current {
            let config_path = dir.join(CONFIG_FILE);
            if config_path.exists() {
                let config = Self::load_path(&config_path)?;
                return Ok(Some((config, config_path)));
            }
            current = dir.parent();
        }

        Ok(None)
    }

    /// Load config from a specific path
    pub fn load_path(path: &Path) -> Result<Config> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(config)
    }

    pub fn default_source(&self) -> Result<Option<Language>> {
        parse_language(self.convert.from.as_deref(), "convert.from")
    }

    pub fn default_target(&self) -> Result<Option<Language>> {
        parse_language(self.convert.to.as_deref(), "convert.to")
    }

    /// Where the history file lives, or `None` if no data dir is known
    pub fn history_dir(&self) -> Option<PathBuf> {
        self.history
            .dir
            .clone()
            .or_else(|| dirs::data_dir().map(|dir| dir.join("codeshift")))
    }

    /// Expand `[rules] extra` into rule files, resolving relative patterns against `base`
    pub fn extra_rule_files(&self, base: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for pattern in &self.rules.extra {
            let full = if Path::new(pattern).is_absolute() {
                pattern.clone()
            } else {
                base.join(pattern).to_string_lossy().into_owned()
            };

            let paths = glob::glob(&full)
                .with_context(|| format!("Invalid rule file pattern '{}'", pattern))?;
            let before = files.len();
            for entry in paths {
                let path = entry.with_context(|| format!("Failed to expand '{}'", pattern))?;
                if path.is_file() {
                    files.push(path);
                }
            }
            if files.len() == before {
                tracing::warn!(pattern = %pattern, "rule file pattern matched nothing");
            }
        }

        files.sort();
        files.dedup();
        Ok(files)
    }
}

fn parse_language(value: Option<&str>, key: &str) -> Result<Option<Language>> {
    value
        .map(|id| {
            id.parse::<Language>()
                .with_context(|| format!("Invalid value for {} in config", key))
        })
        .transpose()
}
