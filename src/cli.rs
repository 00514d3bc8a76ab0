use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "connscope",
    version,
    about = "Score connection depth in human-AI conversation transcripts",
    after_help = "With no PATH, reads a transcript from standard input until end-of-stream."
)]
pub struct Cli {
    /// Conversation transcript to analyze; reads stdin when omitted
    pub path: Option<PathBuf>,

    /// Analyze two embedded example conversations and print both reports
    #[arg(long, conflicts_with = "path")]
    pub demo: bool,

    /// Report output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,

    /// Config file (default: ./connscope.toml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
}
