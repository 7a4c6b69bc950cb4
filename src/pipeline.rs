//! Buffer-then-flush lint pipeline.
//!
//! ```text
//! Collecting --finish()--> Draining --ok--> Done
//!                                   \--err--> Errored
//! ```
//!
//! Files are buffered while `Collecting`. `finish()` runs scss-lint once over
//! the whole batch, then hands back every file annotated, in arrival order,
//! or a single error with no files.

use std::fmt;
use std::path::PathBuf;

use crate::config::LintOptions;
use crate::error::{Result, ScssLintError};
use crate::lint::{format_annotation, parse_report, run_lint, Report, SourceFile};

/// Pipeline lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Collecting,
    Draining,
    Done,
    Errored,
}

impl PipelineState {
    pub fn as_str(&self) -> &'static str {
        match self {
            PipelineState::Collecting => "collecting",
            PipelineState::Draining => "draining",
            PipelineState::Done => "done",
            PipelineState::Errored => "errored",
        }
    }
}

impl fmt::Display for PipelineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Collects files and lints them as one batch
#[derive(Debug)]
pub struct LintPipeline {
    options: LintOptions,
    state: PipelineState,
    files: Vec<SourceFile>,
}

impl LintPipeline {
    /// Create a pipeline; options are fixed for its lifetime
    pub fn new(options: LintOptions) -> Self {
        Self {
            options,
            state: PipelineState::Collecting,
            files: Vec::new(),
        }
    }

    /// Current state
    pub fn state(&self) -> PipelineState {
        self.state
    }

    /// Number of buffered files
    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Buffer a file for the batch
    pub fn push(&mut self, file: SourceFile) -> Result<()> {
        self.ensure_collecting()?;
        self.files.push(file);
        Ok(())
    }

    /// Close the batch, lint it, and return the annotated files
    pub fn finish(&mut self) -> Result<Vec<SourceFile>> {
        self.ensure_collecting()?;
        self.state = PipelineState::Draining;

        let files = std::mem::take(&mut self.files);
        match self.drain(files) {
            Ok(files) => {
                self.state = PipelineState::Done;
                Ok(files)
            }
            Err(e) => {
                tracing::warn!("Lint batch failed: {}", e);
                self.state = PipelineState::Errored;
                Err(e)
            }
        }
    }

    fn drain(&self, mut files: Vec<SourceFile>) -> Result<Vec<SourceFile>> {
        let paths: Vec<PathBuf> = files.iter().filter_map(|f| f.path.clone()).collect();

        // Without paths scss-lint would lint its whole working directory
        let report = if paths.is_empty() {
            tracing::debug!("No file paths in batch of {}, skipping scss-lint", files.len());
            Report::new()
        } else {
            let run = run_lint(&self.options, &paths)?;
            let report = parse_report(Some(&run.stdout))?;
            if run.has_findings() && report.is_empty() {
                tracing::warn!(
                    "scss-lint exited with code {} but its report lists no issues",
                    run.exit_code
                );
            }
            report
        };

        for file in &mut files {
            file.scsslint = Some(format_annotation(file, &report));
        }

        let failed = files.iter().filter(|f| f.has_failures()).count();
        tracing::info!("Linted {} files, {} with issues", files.len(), failed);

        Ok(files)
    }

    fn ensure_collecting(&self) -> Result<()> {
        if self.state == PipelineState::Collecting {
            Ok(())
        } else {
            Err(ScssLintError::PipelineClosed {
                state: self.state.as_str(),
            })
        }
    }
}

/// Lint a batch of files in one go
pub fn lint_files(
    options: LintOptions,
    files: impl IntoIterator<Item = SourceFile>,
) -> Result<Vec<SourceFile>> {
    let mut pipeline = LintPipeline::new(options);
    for file in files {
        pipeline.push(file)?;
    }
    pipeline.finish()
}
