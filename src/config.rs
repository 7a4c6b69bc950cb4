//! Lint options and settings file handling.
//!
//! Options can come from three places, highest precedence first:
//! - CLI flags
//! - `scsslint.toml` in the working directory (or `--settings <path>`)
//! - built-in defaults
//!
//! ```toml
//! config = "scss-lint.yml"
//! bin = "bundle exec scss-lint"
//! exclude = "vendor/**"
//!
//! [logging]
//! level = "warn"
//!
//! [output]
//! reporter = "fail"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScssLintError};

/// Default scss-lint executable
pub const DEFAULT_BIN: &str = "scss-lint";

/// Default settings file name
pub const SETTINGS_FILE: &str = "scsslint.toml";

// ============================================================================
// Lint Options
// ============================================================================

/// Options controlling how scss-lint is invoked
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LintOptions {
    /// Path to a scss-lint rules file, passed as `-c <config>`
    #[serde(default)]
    pub config: Option<PathBuf>,

    /// Executable plus optional wrapper tokens, e.g. `bundle exec scss-lint`
    #[serde(default = "default_bin")]
    pub bin: String,

    /// Exclusion glob, passed as `-e <exclude>`
    #[serde(default)]
    pub exclude: Option<String>,
}

fn default_bin() -> String {
    DEFAULT_BIN.to_string()
}

impl Default for LintOptions {
    fn default() -> Self {
        Self {
            config: None,
            bin: default_bin(),
            exclude: None,
        }
    }
}

impl LintOptions {
    /// Options with only a rules file set
    pub fn from_config_path(config: impl Into<PathBuf>) -> Self {
        Self {
            config: Some(config.into()),
            ..Self::default()
        }
    }

    /// Set the executable
    pub fn with_bin(mut self, bin: impl Into<String>) -> Self {
        self.bin = bin.into();
        self
    }

    /// Set the exclusion pattern
    pub fn with_exclude(mut self, exclude: impl Into<String>) -> Self {
        self.exclude = Some(exclude.into());
        self
    }

    /// Executable tokens, split on whitespace; blank falls back to the default
    pub fn bin_tokens(&self) -> Vec<String> {
        let tokens: Vec<String> = self.bin.split_whitespace().map(str::to_string).collect();
        if tokens.is_empty() {
            vec![DEFAULT_BIN.to_string()]
        } else {
            tokens
        }
    }

    /// Apply CLI overrides on top of these options
    pub fn merge(
        mut self,
        config: Option<PathBuf>,
        bin: Option<String>,
        exclude: Option<String>,
    ) -> Self {
        if config.is_some() {
            self.config = config;
        }
        if let Some(bin) = bin {
            self.bin = bin;
        }
        if exclude.is_some() {
            self.exclude = exclude;
        }
        self
    }
}

impl From<&str> for LintOptions {
    /// A bare string is a path to the scss-lint rules file
    fn from(config: &str) -> Self {
        Self::from_config_path(config)
    }
}

// ============================================================================
// Settings File
// ============================================================================

/// Contents of `scsslint.toml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Linter invocation options
    #[serde(flatten)]
    pub lint: LintOptions,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Reporter name ("default", "log" or "fail")
    #[serde(default)]
    pub reporter: Option<String>,
}

impl Settings {
    /// Load settings from `scsslint.toml` in `dir`; a missing file yields defaults
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(SETTINGS_FILE);
        if !path.exists() {
            tracing::debug!("No settings file at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load settings from a specific path, which must exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ScssLintError::Config {
                message: format!("Settings file not found: {}", path.display()),
            });
        }

        let content = fs::read_to_string(path).map_err(|e| ScssLintError::Config {
            message: format!("Failed to read {}: {}", path.display(), e),
        })?;

        Self::parse(&content).map_err(|e| match e {
            ScssLintError::Config { message } => ScssLintError::Config {
                message: format!("{} ({})", message, path.display()),
            },
            other => other,
        })
    }

    /// Parse settings from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| ScssLintError::Config {
            message: format!("Failed to parse settings: {}", e),
        })
    }
}
