//! Output formatting for codeshift
//!
//! Supports text (colored terminal) and JSON output formats.

use anyhow::{Context, Result};
use codeshift_analyze::Stats;
use codeshift_core::Language;
use codeshift_history::HistoryEntry;
use codeshift_rules::PipelineInfo;
use colored::*;
use serde::Serialize;

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Option<OutputFormat> {
        match s.to_lowercase().as_str() {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

/// Input and output stats of one conversion
#[derive(Debug, Clone, Serialize)]
pub struct StatsPair {
    pub input: Stats,
    pub output: Stats,
}

/// Result of a `convert` run
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionReport {
    pub source: Language,
    pub target: Language,
    /// How the pair was routed, e.g. "python → javascript → java"
    pub route: String,
    pub output: String,
    /// Set when the output went to a file instead of stdout
    #[serde(skip_serializing_if = "Option::is_none")]
    pub written_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<StatsPair>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PatternCount {
    pub pattern: &'static str,
    pub count: usize,
}

/// Result of a `stats` run
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsReport {
    pub source: String,
    pub stats: Stats,
    pub distinct_function_count: usize,
    pub breakdown: Vec<PatternCount>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LanguageInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub extension: &'static str,
    pub hub: bool,
}

/// A pair reached by chaining two pipelines through the hub
#[derive(Debug, Clone, Serialize)]
pub struct ComposedRoute {
    pub source: Language,
    pub target: Language,
    pub route: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TemplateInfo {
    pub name: &'static str,
    pub language: Language,
    pub lines: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<&'static str>,
}

/// Full JSON output structure
#[derive(Debug, Serialize)]
struct JsonOutput<T: Serialize> {
    version: &'static str,
    #[serde(flatten)]
    body: T,
}

/// Prints command results in the selected format
pub struct Reporter {
    format: OutputFormat,
    verbose: bool,
}

impl Reporter {
    pub fn new(format: OutputFormat, verbose: bool) -> Self {
        Self { format, verbose }
    }

    /// Report a finished conversion
    ///
    /// In text mode the converted code goes to stdout untouched so it can be
    /// piped; everything else goes to stderr.
    pub fn conversion(&self, report: &ConversionReport) -> Result<()> {
        match self.format {
            OutputFormat::Text => {
                match &report.written_to {
                    Some(path) => eprintln!(
                        "{} {} → {} ({})",
                        "Wrote".green().bold(),
                        report.source,
                        report.target,
                        path
                    ),
                    None => print!("{}", with_trailing_newline(&report.output)),
                }

                if self.verbose {
                    eprintln!("{} {}", "Route:".bold(), report.route);
                }
                if let Some(stats) = &report.stats {
                    eprintln!("{} {}", "Input: ".bold(), stats_line(&stats.input));
                    eprintln!("{} {}", "Output:".bold(), stats_line(&stats.output));
                }
                Ok(())
            }
            OutputFormat::Json => print_json(report),
        }
    }

    pub fn stats(&self, report: &StatsReport) -> Result<()> {
        match self.format {
            OutputFormat::Text => {
                println!("{}", report.source.bold().underline());
                println!("  Lines:      {}", report.stats.line_count);
                println!("  Characters: {}", report.stats.char_count);
                println!("  Words:      {}", report.stats.word_count);
                println!("  Functions:  {}", report.stats.function_count);
                if report.distinct_function_count != report.stats.function_count {
                    println!(
                        "  {}",
                        format!(
                            "({} distinct; some declarations match more than one pattern)",
                            report.distinct_function_count
                        )
                        .dimmed()
                    );
                }
                if self.verbose {
                    for entry in &report.breakdown {
                        println!("    {:<24} {}", entry.pattern, entry.count);
                    }
                }
                Ok(())
            }
            OutputFormat::Json => print_json(report),
        }
    }

    pub fn history(&self, entries: &[HistoryEntry]) -> Result<()> {
        match self.format {
            OutputFormat::Text => {
                if entries.is_empty() {
                    println!("{}", "No conversions recorded".dimmed());
                    return Ok(());
                }
                for entry in entries {
                    println!(
                        "{} {} → {}",
                        entry
                            .timestamp
                            .format("%Y-%m-%d %H:%M:%S")
                            .to_string()
                            .dimmed(),
                        entry.source_lang.display_name().cyan(),
                        entry.target_lang.display_name().cyan()
                    );
                    println!("  {}", preview(&entry.input_code, 60));
                    if self.verbose {
                        println!("  {} {}", "=>".green(), preview(&entry.output_code, 60));
                    }
                }
                Ok(())
            }
            OutputFormat::Json => print_json(&HistoryBody { entries }),
        }
    }

    pub fn history_cleared(&self) -> Result<()> {
        match self.format {
            OutputFormat::Text => {
                println!("{}", "Conversion history cleared".green());
                Ok(())
            }
            OutputFormat::Json => print_json(&HistoryBody { entries: &[] }),
        }
    }

    pub fn languages(&self, languages: &[LanguageInfo]) -> Result<()> {
        match self.format {
            OutputFormat::Text => {
                for lang in languages {
                    let hub = if lang.hub { " (hub)".yellow().to_string() } else { String::new() };
                    println!(
                        "{:<12} {:<12} .{}{}",
                        lang.id.bold(),
                        lang.name,
                        lang.extension,
                        hub
                    );
                }
                Ok(())
            }
            OutputFormat::Json => print_json(&LanguagesBody { languages }),
        }
    }

    pub fn rules(&self, pipelines: &[PipelineInfo], composed: &[ComposedRoute]) -> Result<()> {
        match self.format {
            OutputFormat::Text => {
                for pipeline in pipelines {
                    println!(
                        "{} {} → {} ({} rules)",
                        "Pipeline".bold(),
                        pipeline.source,
                        pipeline.target,
                        pipeline.rules.len()
                    );
                    for rule in &pipeline.rules {
                        println!("  {:<28} {}", rule.name, format!("{:?}", rule.phase).dimmed());
                    }
                }
                for route in composed {
                    println!("{} {}", "Composed".bold(), route.route);
                }
                Ok(())
            }
            OutputFormat::Json => print_json(&RulesBody {
                pipelines,
                composed,
            }),
        }
    }

    pub fn templates(&self, templates: &[TemplateInfo]) -> Result<()> {
        match self.format {
            OutputFormat::Text => {
                for template in templates {
                    match template.code {
                        Some(code) => println!("{}", with_trailing_newline(code)),
                        None => println!(
                            "{:<12} {:<20} {}",
                            template.language.id().cyan(),
                            template.name,
                            format!("{} lines", template.lines).dimmed()
                        ),
                    }
                }
                Ok(())
            }
            OutputFormat::Json => print_json(&TemplatesBody { templates }),
        }
    }
}

#[derive(Serialize)]
struct HistoryBody<'a> {
    entries: &'a [HistoryEntry],
}

#[derive(Serialize)]
struct LanguagesBody<'a> {
    languages: &'a [LanguageInfo],
}

#[derive(Serialize)]
struct RulesBody<'a> {
    pipelines: &'a [PipelineInfo],
    composed: &'a [ComposedRoute],
}

#[derive(Serialize)]
struct TemplatesBody<'a> {
    templates: &'a [TemplateInfo],
}

fn print_json<T: Serialize>(body: T) -> Result<()> {
    let output = JsonOutput {
        version: env!("CARGO_PKG_VERSION"),
        body,
    };
    let json = serde_json::to_string_pretty(&output).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}

fn stats_line(stats: &Stats) -> String {
    format!(
        "{} lines, {} chars, {} words, {} functions",
        stats.line_count, stats.char_count, stats.word_count, stats.function_count
    )
}

fn with_trailing_newline(code: &str) -> String {
    if code.is_empty() || code.ends_with('\n') {
        code.to_string()
    } else {
        format!("{}\n", code)
    }
}

/// First line of `code`, cut to `width` characters
fn preview(code: &str, width: usize) -> String {
    let first = code.lines().find(|line| !line.trim().is_empty()).unwrap_or("");
    let first = first.trim();
    match first.char_indices().nth(width) {
        Some((cut, _)) => format!("{}…", &first[..cut]),
        None => first.to_string(),
    }
}
