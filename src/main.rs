mod analyze;
mod annotate;
mod cli;
mod config;
mod demo;
mod error;
mod parse;
mod report;
mod types;

use crate::annotate::patterns::PatternLibrary;
use crate::error::ConnscopeError;
use crate::parse::LabelSet;
use crate::types::config::ConnscopeConfig;
use clap::{CommandFactory, Parser};
use std::io::Read;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const RUNTIME_FAILURE: i32 = 1;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    // Logs go to stderr so reports on stdout stay machine-consumable.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_pipeline(
    text: &str,
    cfg: Option<&ConnscopeConfig>,
    format: report::OutputFormat,
) -> Result<String, ConnscopeError> {
    let owned_labels;
    let labels: &LabelSet = match cfg.and_then(|cfg| cfg.labels.as_ref()) {
        Some(labels_cfg) => {
            owned_labels = LabelSet::with_personas(&labels_cfg.persona)?;
            &owned_labels
        }
        None => LabelSet::builtin(),
    };

    let owned_patterns;
    let patterns: &PatternLibrary = match cfg.and_then(|cfg| cfg.patterns.as_ref()) {
        Some(extras) => {
            owned_patterns = PatternLibrary::with_extras(extras)?;
            &owned_patterns
        }
        None => PatternLibrary::builtin(),
    };

    let mut turns = parse::parse_conversation(text, labels);
    annotate::annotate_turns(&mut turns, patterns);
    let analysis = analyze::aggregate(&turns);
    report::render(&analysis, format)
}

fn run() -> Result<i32, ConnscopeError> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let cfg = config::load_config(cli.config.as_deref())?;
    let format = match cli.format {
        cli::ReportFormat::Text => report::OutputFormat::Text,
        cli::ReportFormat::Json => report::OutputFormat::Json,
    };

    if cli.demo {
        println!("{}", demo::render_comparison()?);
        return Ok(exit_code::SUCCESS);
    }

    if let Some(path) = &cli.path {
        let text = std::fs::read_to_string(path).map_err(|source| {
            ConnscopeError::InputUnreadable {
                path: path.clone(),
                source,
            }
        })?;
        println!("{}", run_pipeline(&text, cfg.as_ref(), format)?);
        return Ok(exit_code::SUCCESS);
    }

    let mut text = String::new();
    std::io::stdin().read_to_string(&mut text)?;
    if text.trim().is_empty() {
        cli::Cli::command().print_help()?;
        println!();
        return Ok(exit_code::SUCCESS);
    }
    println!("{}", run_pipeline(&text, cfg.as_ref(), format)?);
    Ok(exit_code::SUCCESS)
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
