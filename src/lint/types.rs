//! Core types for the lint module.
//!
//! - `Issue` - A single problem reported by scss-lint
//! - `Report` - Issues grouped by file path, as parsed from one batch
//! - `Annotation` - The pass/fail result attached to a file
//! - `SourceFile` - A file flowing through the pipeline

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Report key used for files that have no path (stdin input)
pub const STDIN_KEY: &str = "stdin";

// ============================================================================
// Issue Types
// ============================================================================

/// A single lint issue, mirroring the attributes of an `<issue>` element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Line number (1-based)
    pub line: usize,

    /// Column number (1-based, optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<usize>,

    /// Length of the offending span
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<usize>,

    /// Severity as reported, e.g. "warning" or "error"
    pub severity: String,

    /// Human-readable message
    pub reason: String,

    /// Name of the scss-lint linter that reported this
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linter: Option<String>,

    /// Any other attributes, kept verbatim
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl Issue {
    /// Create an issue with the required attributes
    pub fn new(line: usize, severity: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            line,
            column: None,
            length: None,
            severity: severity.into(),
            reason: reason.into(),
            linter: None,
            extra: BTreeMap::new(),
        }
    }

    /// Set column
    pub fn with_column(mut self, column: usize) -> Self {
        self.column = Some(column);
        self
    }

    /// Set linter name
    pub fn with_linter(mut self, linter: impl Into<String>) -> Self {
        self.linter = Some(linter.into());
        self
    }

    /// Whether scss-lint flagged this as an error rather than a warning
    pub fn is_error(&self) -> bool {
        self.severity.eq_ignore_ascii_case("error")
    }
}

/// Issues per file path for one batch, in document order per file
pub type Report = HashMap<String, Vec<Issue>>;

// ============================================================================
// Result Types
// ============================================================================

/// Per-file lint result
///
/// A passing file serializes as `{"success": true}`; a failing one also
/// carries `errorCount` and `results`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Annotation {
    pub success: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_count: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<Issue>>,
}

impl Annotation {
    /// The annotation for a file without issues
    pub fn passed() -> Self {
        Self {
            success: true,
            error_count: None,
            results: None,
        }
    }

    /// The annotation for a file with at least one issue
    pub fn failed(issues: Vec<Issue>) -> Self {
        Self {
            success: false,
            error_count: Some(issues.len()),
            results: Some(issues),
        }
    }

    /// Issues attached to this annotation (empty on success)
    pub fn issues(&self) -> &[Issue] {
        self.results.as_deref().unwrap_or(&[])
    }
}

// ============================================================================
// Pipeline File
// ============================================================================

/// A file passed through the lint pipeline
///
/// Contents are carried along for the caller; linting only looks at `path`.
#[derive(Debug, Clone, Default)]
pub struct SourceFile {
    /// Path handed to scss-lint (None = anonymous stdin input)
    pub path: Option<PathBuf>,

    /// Base directory used to compute `relative()`
    pub base: Option<PathBuf>,

    /// Raw file contents
    pub contents: Vec<u8>,

    /// Lint result, set by the pipeline
    pub scsslint: Option<Annotation>,
}

impl SourceFile {
    /// Create a file with the given path and contents
    pub fn new(path: impl Into<PathBuf>, contents: impl Into<Vec<u8>>) -> Self {
        Self {
            path: Some(path.into()),
            base: None,
            contents: contents.into(),
            scsslint: None,
        }
    }

    /// Create an anonymous file (e.g. read from stdin)
    pub fn anonymous(contents: impl Into<Vec<u8>>) -> Self {
        Self {
            contents: contents.into(),
            ..Self::default()
        }
    }

    /// Set base directory
    pub fn with_base(mut self, base: impl Into<PathBuf>) -> Self {
        self.base = Some(base.into());
        self
    }

    /// Key used to look this file up in a `Report`
    pub fn report_key(&self) -> String {
        match &self.path {
            Some(path) => path.to_string_lossy().to_string(),
            None => STDIN_KEY.to_string(),
        }
    }

    /// Path relative to `base`, falling back to the full path
    pub fn relative(&self) -> String {
        let Some(path) = &self.path else {
            return STDIN_KEY.to_string();
        };
        let rel: &Path = self
            .base
            .as_deref()
            .and_then(|base| path.strip_prefix(base).ok())
            .unwrap_or(path);
        rel.to_string_lossy().to_string()
    }

    /// Whether the pipeline attached a failing annotation
    pub fn has_failures(&self) -> bool {
        self.scsslint.as_ref().is_some_and(|a| !a.success)
    }
}
