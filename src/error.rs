//! Error types and exit codes for scsslint-bridge

use std::process::ExitCode;
use thiserror::Error;

/// Main error type for scsslint-bridge operations
#[derive(Error, Debug)]
pub enum ScssLintError {
    #[error("Parsing SCSS-Lint XML output failed: {message}")]
    Parse { message: String },

    #[error(
        "{bin} could not be found\n\
         1. Please make sure you have ruby installed: `ruby -v`\n\
         2. Install the `scss-lint` gem by running:\n\
         gem update --system && gem install scss-lint"
    )]
    ToolNotFound { bin: String },

    #[error("{message}")]
    ToolExecution { code: Option<i32>, message: String },

    #[error("ScssLint failed for: {}", files.join(", "))]
    LintFailed { files: Vec<String> },

    #[error("Lint pipeline is already {state}; create a new pipeline for another batch")]
    PipelineClosed { state: &'static str },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ScssLintError {
    /// Convert error to the CLI exit code:
    /// - 0: Success
    /// - 1: Lint failures escalated by the fail reporter
    /// - 2: Linter binary not found
    /// - 3: Linter exited with an execution error
    /// - 4: Linter XML output could not be parsed
    /// - 5: Configuration or pipeline usage error
    /// - 6: IO error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::LintFailed { .. } => ExitCode::from(1),
            Self::ToolNotFound { .. } => ExitCode::from(2),
            Self::ToolExecution { .. } => ExitCode::from(3),
            Self::Parse { .. } => ExitCode::from(4),
            Self::Config { .. } | Self::PipelineClosed { .. } => ExitCode::from(5),
            Self::Io(_) => ExitCode::from(6),
        }
    }
}

impl From<roxmltree::Error> for ScssLintError {
    fn from(err: roxmltree::Error) -> Self {
        Self::Parse {
            message: err.to_string(),
        }
    }
}

/// Result type alias for scsslint-bridge operations
pub type Result<T> = std::result::Result<T, ScssLintError>;
