//! scsslint-bridge CLI entry point

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use scsslint_bridge::{
    Cli, LintPipeline, OutputFormat, Reporter, ScssLintError, Settings, SourceFile,
};

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            // Bad arguments are a usage error, not a missing linter
            let _ = e.print();
            return ScssLintError::Config {
                message: e.to_string(),
            }
            .exit_code();
        }
    };

    match run(&cli) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    }
}

fn run(cli: &Cli) -> scsslint_bridge::Result<String> {
    let cwd = std::env::current_dir()?;

    let settings = match &cli.settings {
        Some(path) => Settings::load_from(path)?,
        None => Settings::load(&cwd)?,
    };

    init_tracing(cli.verbose, &settings.logging.level);

    let options = settings
        .lint
        .clone()
        .merge(cli.config.clone(), cli.bin.clone(), cli.exclude.clone());

    let reporter = match cli.reporter {
        Some(r) => r,
        None => settings
            .output
            .reporter
            .as_deref()
            .map(str::parse::<Reporter>)
            .transpose()?
            .unwrap_or_default(),
    };

    let base = cli.base.clone().unwrap_or_else(|| cwd.clone());

    tracing::debug!("Options: {:?}, reporter: {:?}", options, reporter);

    let mut pipeline = LintPipeline::new(options);
    for path in &cli.files {
        pipeline.push(read_source(path, &base)?)?;
    }
    let files = pipeline.finish()?;

    match cli.format {
        OutputFormat::Text => {
            reporter.report(files)?;
            Ok(String::new())
        }
        OutputFormat::Json => {
            let output = render_json(&files)?;
            if reporter == Reporter::Fail {
                if let Err(e) = scsslint_bridge::reporters::fail_report(files) {
                    print!("{}", output);
                    return Err(e);
                }
            }
            Ok(output)
        }
    }
}

/// Initialize tracing to stderr; `RUST_LOG` wins over settings and `--verbose`
fn init_tracing(verbose: bool, level: &str) {
    let level = if verbose { "debug" } else { level };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("scsslint_bridge={}", level)));

    // May fail if already initialized, which is fine
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn read_source(path: &Path, base: &Path) -> scsslint_bridge::Result<SourceFile> {
    let contents = fs::read(path).map_err(|e| {
        ScssLintError::Io(std::io::Error::new(
            e.kind(),
            format!("{}: {}", path.display(), e),
        ))
    })?;
    Ok(SourceFile::new(PathBuf::from(path), contents).with_base(base))
}

fn render_json(files: &[SourceFile]) -> scsslint_bridge::Result<String> {
    let items: Vec<serde_json::Value> = files
        .iter()
        .map(|f| {
            serde_json::json!({
                "path": f.report_key(),
                "relative": f.relative(),
                "scsslint": f.scsslint,
            })
        })
        .collect();

    let mut json = serde_json::to_string_pretty(&items).map_err(|e| ScssLintError::Config {
        message: format!("JSON serialization failed: {}", e),
    })?;
    json.push('\n');
    Ok(json)
}
