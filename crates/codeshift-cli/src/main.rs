//! codeshift CLI - rule-based code conversion between JavaScript, Python and Java
//!
//! Commands:
//! - convert: Convert a file, stdin or a built-in template
//! - stats: Line, character, word and function counts for a snippet
//! - history: List or clear recent conversions
//! - languages: Supported languages
//! - rules: Rules of every pipeline and the routes composed through the hub
//! - templates: Built-in sample snippets

mod config;
mod input;
mod output;

use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand};
use codeshift_analyze::{analyze, count_functions, function_breakdown, FunctionCounting};
use codeshift_core::{templates, Language};
use codeshift_history::{FileStore, HistoryStore};
use codeshift_rules::yaml_rules::load_rules_from_file;
use codeshift_rules::{Converter, HubPolicy, RuleSetLibrary};
use colored::*;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use config::Config;
use output::{
    ComposedRoute, ConversionReport, LanguageInfo, OutputFormat, PatternCount, Reporter,
    StatsPair, StatsReport, TemplateInfo,
};

#[derive(Parser)]
#[command(name = "codeshift")]
#[command(version)]
#[command(about = "Rule-based code conversion between JavaScript, Python and Java")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Show verbose output
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    /// Output format: text, json (default: config, then text)
    #[arg(long, value_name = "FORMAT", global = true)]
    format: Option<String>,

    /// Shorthand for --format json
    #[arg(long, global = true, conflicts_with = "format")]
    json: bool,

    /// Path to config file (default: auto-detect .codeshift.toml)
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    /// Ignore config files
    #[arg(long, global = true, conflicts_with = "config")]
    no_config: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Convert code from one language to another
    Convert(ConvertArgs),

    /// Show statistics for a snippet
    Stats(StatsArgs),

    /// Recent conversions
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },

    /// List supported languages
    Languages,

    /// List the rules of each pipeline
    Rules {
        /// Only pipelines converting from this language
        #[arg(long, value_name = "LANG")]
        from: Option<Language>,

        /// Only pipelines converting to this language
        #[arg(long, value_name = "LANG")]
        to: Option<Language>,
    },

    /// List built-in sample snippets
    Templates {
        /// Only templates in this language
        #[arg(long, short = 'l', value_name = "LANG")]
        language: Option<Language>,

        /// Print the code of the named template
        #[arg(long, value_name = "NAME")]
        show: Option<String>,
    },
}

#[derive(Args)]
struct ConvertArgs {
    /// File to convert; reads stdin when absent or "-"
    input: Option<PathBuf>,

    /// Source language (default: file extension, then config)
    #[arg(long, short = 'f', value_name = "LANG")]
    from: Option<Language>,

    /// Target language (default: config)
    #[arg(long, short = 't', value_name = "LANG")]
    to: Option<Language>,

    /// Convert a built-in template instead of a file
    #[arg(long, value_name = "NAME", conflicts_with = "input")]
    template: Option<String>,

    /// Write the result to a file (or `converted_code.<ext>` inside a directory)
    #[arg(long, short = 'o', value_name = "PATH")]
    output: Option<PathBuf>,

    /// Also report input and output statistics
    #[arg(long)]
    stats: bool,

    /// Don't record this conversion in the history
    #[arg(long)]
    no_history: bool,
}

#[derive(Args)]
struct StatsArgs {
    /// File to analyze; reads stdin when absent or "-"
    input: Option<PathBuf>,

    /// Analyze a built-in template instead of a file
    #[arg(long, value_name = "NAME", conflicts_with = "input")]
    template: Option<String>,
}

#[derive(Subcommand)]
enum HistoryAction {
    /// Show recent conversions, newest first
    List,
    /// Erase the history
    Clear,
}

/// Everything a command needs besides its own arguments
struct App {
    config: Config,
    /// Directory relative rule patterns resolve against
    base_dir: PathBuf,
    reporter: Reporter,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {:#}", "Error".red(), e);
            ExitCode::from(1)
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let (config, config_path) = if cli.no_config {
        (Config::default(), None)
    } else if let Some(path) = &cli.config {
        (Config::load_path(path)?, Some(path.clone()))
    } else {
        match Config::load()? {
            Some((config, path)) => (config, Some(path)),
            None => (Config::default(), None),
        }
    };

    if let Some(path) = &config_path {
        tracing::debug!(path = %path.display(), "using config");
    }

    let base_dir = match config_path.as_deref().and_then(Path::parent) {
        Some(dir) => dir.to_path_buf(),
        None => std::env::current_dir()?,
    };

    let format = if cli.json {
        OutputFormat::Json
    } else {
        let requested = cli
            .format
            .as_deref()
            .or(config.output.format.as_deref())
            .unwrap_or("text");
        OutputFormat::from_str(requested)
            .ok_or_else(|| anyhow!("Invalid output format '{}'. Use: text, json", requested))?
    };

    let app = App {
        config,
        base_dir,
        reporter: Reporter::new(format, cli.verbose),
    };

    match cli.command {
        Command::Convert(args) => run_convert(&app, args),
        Command::Stats(args) => run_stats(&app, args),
        Command::History { action } => run_history(&app, action),
        Command::Languages => run_languages(&app),
        Command::Rules { from, to } => run_rules(&app, from, to),
        Command::Templates { language, show } => run_templates(&app, language, show),
    }
}

/// Diagnostics go to stderr, filtered by `CODESHIFT_LOG` (e.g. `codeshift_rules=debug`)
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("CODESHIFT_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Built-in pipelines plus the YAML rules named in `[rules] extra`
fn build_library(app: &App) -> Result<RuleSetLibrary> {
    let mut library = RuleSetLibrary::shared().clone();

    for path in app.config.extra_rule_files(&app.base_dir)? {
        let rules = load_rules_from_file(&path)
            .with_context(|| format!("Failed to load rules from {}", path.display()))?;
        for rule in &rules {
            library
                .add_custom(rule)
                .with_context(|| format!("Rule '{}' in {}", rule.name, path.display()))?;
        }
        tracing::info!(path = %path.display(), rules = rules.len(), "loaded custom rules");
    }

    Ok(library)
}

fn run_convert(app: &App, args: ConvertArgs) -> Result<()> {
    let source = match &args.template {
        Some(name) => input::from_template(name, args.from)?,
        None => input::read_source(args.input.as_deref())?,
    };

    let from = match args.from.or(source.language) {
        Some(lang) => lang,
        None => app.config.default_source()?.ok_or_else(|| {
            anyhow!(
                "Cannot tell the source language of {}. Pass --from",
                source.origin
            )
        })?,
    };
    let to = match args.to {
        Some(lang) => lang,
        None => app
            .config
            .default_target()?
            .ok_or_else(|| anyhow!("No target language. Pass --to or set [convert] to"))?,
    };

    let library = build_library(app)?;
    let converter = Converter::new(&library);
    let route = converter
        .route(from, to)
        .map(|path| path.describe())
        .unwrap_or_else(|| "unroutable".to_string());
    let converted = converter.convert(&source.code, from, to);

    let written_to = match &args.output {
        Some(requested) => {
            let path = input::output_path(requested, to)?;
            std::fs::write(&path, &converted)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            Some(path.display().to_string())
        }
        None => None,
    };

    if app.config.history.enabled && !args.no_history && !source.code.trim().is_empty() {
        match app.config.history_dir() {
            Some(dir) => {
                HistoryStore::new(FileStore::new(dir)).add(from, to, &source.code, &converted);
            }
            None => tracing::warn!("no data directory available; conversion not recorded"),
        }
    }

    let stats = args.stats.then(|| StatsPair {
        input: analyze(&source.code),
        output: analyze(&converted),
    });

    app.reporter.conversion(&ConversionReport {
        source: from,
        target: to,
        route,
        output: converted,
        written_to,
        stats,
    })
}

fn run_stats(app: &App, args: StatsArgs) -> Result<()> {
    let source = match &args.template {
        Some(name) => input::from_template(name, None)?,
        None => input::read_source(args.input.as_deref())?,
    };

    let breakdown = function_breakdown(&source.code)
        .into_iter()
        .map(|(pattern, count)| PatternCount {
            pattern: pattern.name(),
            count,
        })
        .collect();

    app.reporter.stats(&StatsReport {
        stats: analyze(&source.code),
        distinct_function_count: count_functions(&source.code, FunctionCounting::Distinct),
        breakdown,
        source: source.origin,
    })
}

fn history_store(app: &App) -> Result<HistoryStore<FileStore>> {
    let dir = app
        .config
        .history_dir()
        .ok_or_else(|| anyhow!("No data directory available. Set [history] dir"))?;
    Ok(HistoryStore::new(FileStore::new(dir)))
}

fn run_history(app: &App, action: HistoryAction) -> Result<()> {
    let history = history_store(app)?;
    match action {
        HistoryAction::List => app.reporter.history(&history.list()),
        HistoryAction::Clear => {
            history.clear();
            app.reporter.history_cleared()
        }
    }
}

fn run_languages(app: &App) -> Result<()> {
    let hub = HubPolicy::default().hub();
    let languages: Vec<LanguageInfo> = Language::ALL
        .into_iter()
        .map(|lang| LanguageInfo {
            id: lang.id(),
            name: lang.display_name(),
            extension: lang.extension(),
            hub: lang == hub,
        })
        .collect();

    app.reporter.languages(&languages)
}

fn run_rules(app: &App, from: Option<Language>, to: Option<Language>) -> Result<()> {
    let library = build_library(app)?;
    let converter = Converter::new(&library);
    let wanted = |source: Language, target: Language| {
        from.map_or(true, |f| f == source) && to.map_or(true, |t| t == target)
    };

    let pipelines: Vec<_> = library
        .describe()
        .into_iter()
        .filter(|p| wanted(p.source, p.target))
        .collect();

    let mut composed = Vec::new();
    for source in Language::ALL {
        for target in Language::ALL {
            if source == target || library.pipeline(source, target).is_some() {
                continue;
            }
            if !wanted(source, target) {
                continue;
            }
            if let Some(path) = converter.route(source, target) {
                composed.push(ComposedRoute {
                    source,
                    target,
                    route: path.describe(),
                });
            }
        }
    }

    app.reporter.rules(&pipelines, &composed)
}

fn run_templates(app: &App, language: Option<Language>, show: Option<String>) -> Result<()> {
    if let Some(name) = show {
        let template = input::find_template(&name, language)?;
        return app.reporter.templates(&[template_info(template, true)]);
    }

    let listed: Vec<TemplateInfo> = templates::all()
        .iter()
        .filter(|t| language.map_or(true, |lang| t.language == lang))
        .map(|t| template_info(t, false))
        .collect();

    app.reporter.templates(&listed)
}

fn template_info(template: &'static templates::Template, with_code: bool) -> TemplateInfo {
    TemplateInfo {
        name: template.name,
        language: template.language,
        lines: template.code.lines().count(),
        code: with_code.then_some(template.code),
    }
}
