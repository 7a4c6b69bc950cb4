//! Reporters consume annotated files after the pipeline.
//!
//! - `log` (default) prints a block per failing file and passes everything on
//! - `fail` turns any failing file into a `LintFailed` error

use std::io::{self, Write};
use std::str::FromStr;

use clap::ValueEnum;
use console::style;

use crate::error::{Result, ScssLintError};
use crate::lint::SourceFile;

/// Available reporters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Reporter {
    /// Print issues for failing files
    #[default]
    #[value(alias = "log")]
    Default,

    /// Error out if any file failed
    Fail,
}

impl FromStr for Reporter {
    type Err = ScssLintError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "default" | "log" => Ok(Reporter::Default),
            "fail" => Ok(Reporter::Fail),
            other => Err(ScssLintError::Config {
                message: format!("Unknown reporter: {}", other),
            }),
        }
    }
}

impl Reporter {
    /// Run this reporter, writing any log output to stdout
    pub fn report(self, files: Vec<SourceFile>) -> Result<Vec<SourceFile>> {
        match self {
            Reporter::Default => {
                let stdout = io::stdout();
                let mut out = stdout.lock();
                log_report(&files, &mut out)?;
                Ok(files)
            }
            Reporter::Fail => fail_report(files),
        }
    }
}

/// Write a human-readable block for every failing file
pub fn log_report(files: &[SourceFile], out: &mut impl Write) -> Result<()> {
    for file in files {
        let Some(annotation) = file.scsslint.as_ref().filter(|a| !a.success) else {
            continue;
        };

        let count = annotation.error_count.unwrap_or(annotation.issues().len());
        writeln!(
            out,
            "{} {} {} found in {}",
            style("Invalid CSS:").red().bold(),
            style(count).cyan(),
            if count == 1 { "issue" } else { "issues" },
            style(file.relative()).magenta()
        )?;

        for issue in annotation.issues() {
            let severity = if issue.is_error() {
                style(issue.severity.as_str()).red()
            } else {
                style(issue.severity.as_str()).yellow()
            };
            let location = match issue.column {
                Some(col) => format!("line {}, col {}", issue.line, col),
                None => format!("line {}", issue.line),
            };
            match &issue.linter {
                Some(linter) => writeln!(
                    out,
                    "  {} {}: {} ({})",
                    severity,
                    location,
                    issue.reason,
                    style(linter).dim()
                )?,
                None => writeln!(out, "  {} {}: {}", severity, location, issue.reason)?,
            }
        }
    }
    out.flush()?;
    Ok(())
}

/// Pass files through, or error naming every failing file
pub fn fail_report(files: Vec<SourceFile>) -> Result<Vec<SourceFile>> {
    let failed: Vec<String> = files
        .iter()
        .filter(|f| f.has_failures())
        .map(SourceFile::relative)
        .collect();

    if failed.is_empty() {
        Ok(files)
    } else {
        Err(ScssLintError::LintFailed { files: failed })
    }
}
