//! scss-lint integration.
//!
//! - `runner` - Spawns scss-lint once per batch and classifies its exit status
//! - `report` - Parses the XML report into per-file issues
//! - `format` - Turns a report entry into a per-file `Annotation`
//! - `types` - Shared data types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use scsslint_bridge::config::LintOptions;
//! use scsslint_bridge::lint::{format_annotation, parse_report, run_lint, SourceFile};
//! use std::path::PathBuf;
//!
//! let file = SourceFile::new("styles/app.scss", std::fs::read("styles/app.scss")?);
//! let run = run_lint(&LintOptions::default(), &[PathBuf::from("styles/app.scss")])?;
//! let report = parse_report(Some(&run.stdout))?;
//! let annotation = format_annotation(&file, &report);
//! ```

mod format;
mod report;
mod runner;
mod types;

pub use format::format_annotation;
pub use report::parse_report;
pub use runner::{
    build_args, classify_exit, run_lint, LintRun, COMMAND_NOT_FOUND_CODE, LINT_FINDINGS_CODE,
};
pub use types::{Annotation, Issue, Report, SourceFile, STDIN_KEY};
