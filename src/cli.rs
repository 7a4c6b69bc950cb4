//! CLI argument definitions using clap

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::reporters::Reporter;

/// Run scss-lint over a batch of files and report per-file results
#[derive(Parser, Debug)]
#[command(name = "scsslint-bridge")]
#[command(about = "Runs scss-lint once over a batch of files and reports per-file results")]
#[command(version)]
pub struct Cli {
    /// Files to lint
    #[arg(value_name = "FILES", required = true)]
    pub files: Vec<PathBuf>,

    /// scss-lint rules file, passed as `-c`
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// scss-lint executable, optionally with wrapper tokens (e.g. "bundle exec scss-lint")
    #[arg(short, long, value_name = "CMD", env = "SCSSLINT_BIN")]
    pub bin: Option<String>,

    /// Exclusion glob, passed as `-e`
    #[arg(short, long, value_name = "GLOB")]
    pub exclude: Option<String>,

    /// Settings file (defaults to ./scsslint.toml)
    #[arg(long, value_name = "PATH")]
    pub settings: Option<PathBuf>,

    /// Base directory for relative paths in reports (defaults to current dir)
    #[arg(long, value_name = "DIR")]
    pub base: Option<PathBuf>,

    /// Reporter to run on the results
    #[arg(short, long, value_enum)]
    pub reporter: Option<Reporter>,

    /// Output format
    #[arg(short, long, default_value = "text", value_enum)]
    pub format: OutputFormat,

    /// Show verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Output format for results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable reporter output
    #[default]
    Text,
    /// Annotated files as a JSON array
    Json,
}
