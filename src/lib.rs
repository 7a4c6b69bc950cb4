//! scsslint-bridge: run scss-lint over a batch of files and attach results
//!
//! scss-lint does the actual linting. This crate spawns it once per batch,
//! parses its XML report, and hands each file back with a pass/fail
//! `Annotation`.
//!
//! # Example
//!
//! ```ignore
//! use scsslint_bridge::{lint_files, LintOptions, Reporter, SourceFile};
//!
//! let files = vec![
//!     SourceFile::new("styles/app.scss", std::fs::read("styles/app.scss")?),
//!     SourceFile::new("styles/theme.scss", std::fs::read("styles/theme.scss")?),
//! ];
//!
//! let options = LintOptions::from("config/scss-lint.yml").with_bin("bundle exec scss-lint");
//! let annotated = lint_files(options, files)?;
//! let annotated = Reporter::Fail.report(annotated)?;
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod lint;
pub mod pipeline;
pub mod reporters;

// Re-export commonly used types
pub use cli::{Cli, OutputFormat};
pub use config::{LintOptions, Settings};
pub use error::{Result, ScssLintError};
pub use lint::{Annotation, Issue, Report, SourceFile};
pub use pipeline::{lint_files, LintPipeline, PipelineState};
pub use reporters::Reporter;
