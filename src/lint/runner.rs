//! scss-lint execution and exit status classification.
//!
//! One process is spawned per batch with every file path as a separate
//! argument; no shell is involved, so paths are passed verbatim.

use std::io::ErrorKind;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use crate::config::LintOptions;
use crate::error::{Result, ScssLintError};

/// Exit code scss-lint uses when lint warnings or errors were found
pub const LINT_FINDINGS_CODE: i32 = 65;

/// Shell exit code when the command does not exist
pub const COMMAND_NOT_FOUND_CODE: i32 = 127;

/// scss-lint exit codes that are unrelated to lint findings
const EXECUTION_ERROR_CODES: &[(i32, &str)] = &[
    (64, "Command line usage error"),
    (66, "Input file did not exist or was not readable"),
    (70, "Internal software error"),
    (78, "Configuration error"),
];

/// Output of a completed scss-lint run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintRun {
    /// Captured XML report
    pub stdout: String,

    /// Exit code (0 = clean, 65 = findings present)
    pub exit_code: i32,
}

impl LintRun {
    /// Whether scss-lint reported any findings
    pub fn has_findings(&self) -> bool {
        self.exit_code == LINT_FINDINGS_CODE
    }
}

/// Build the full argument vector, program first
///
/// Shape: `<bin tokens...> [-c <config>] [-e <exclude>] -fXML <paths...>`
pub fn build_args(options: &LintOptions, paths: &[PathBuf]) -> Vec<String> {
    let mut args = options.bin_tokens();

    if let Some(config) = &options.config {
        args.push("-c".to_string());
        args.push(config.to_string_lossy().to_string());
    }

    if let Some(exclude) = &options.exclude {
        args.push("-e".to_string());
        args.push(exclude.clone());
    }

    // XML output is what the report parser understands
    args.push("-fXML".to_string());

    args.extend(paths.iter().map(|p| p.to_string_lossy().to_string()));
    args
}

/// Map a process exit status to success or an execution error
///
/// `None` means the process was terminated by a signal.
pub fn classify_exit(code: Option<i32>, bin: &str) -> Result<()> {
    let Some(code) = code else {
        return Err(ScssLintError::ToolExecution {
            code: None,
            message: "scss-lint was terminated by a signal".to_string(),
        });
    };

    match code {
        0 | LINT_FINDINGS_CODE => Ok(()),
        COMMAND_NOT_FOUND_CODE => Err(ScssLintError::ToolNotFound {
            bin: bin.to_string(),
        }),
        _ => {
            let message = EXECUTION_ERROR_CODES
                .iter()
                .find(|(known, _)| *known == code)
                .map(|(_, msg)| msg.to_string())
                .unwrap_or_else(|| format!("scss-lint exited with code {}", code));
            Err(ScssLintError::ToolExecution {
                code: Some(code),
                message,
            })
        }
    }
}

/// Run scss-lint once over `paths` and capture its report
///
/// stderr is inherited so scss-lint diagnostics reach the operator directly.
pub fn run_lint(options: &LintOptions, paths: &[PathBuf]) -> Result<LintRun> {
    let mut args = build_args(options, paths);
    let program = args.remove(0);

    tracing::debug!(
        "Running {} {} ({} files)",
        program,
        args.join(" "),
        paths.len()
    );

    let child = Command::new(&program)
        .args(&args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit())
        .spawn()
        .map_err(|e| match e.kind() {
            ErrorKind::NotFound => ScssLintError::ToolNotFound {
                bin: options.bin.clone(),
            },
            _ => ScssLintError::Io(e),
        })?;

    // Buffer the whole report; scss-lint only writes the XML once it is done
    let output = child.wait_with_output()?;
    let exit_code = output.status.code();

    tracing::debug!("{} exited with {:?}", program, exit_code);

    classify_exit(exit_code, &options.bin)?;

    Ok(LintRun {
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        exit_code: exit_code.unwrap_or_default(),
    })
}
