//! Reporter tests over real pipeline output

use scsslint_bridge::reporters::{fail_report, log_report};
use scsslint_bridge::{lint_files, Reporter, ScssLintError};

use crate::common::{assert_contains, FakeLinter, TestRepo};

#[test]
fn test_log_reporter_describes_failures() {
    let repo = TestRepo::new();
    let options = repo.options(FakeLinter::FlagFiles { severity: "error" });
    let files = lint_files(options, vec![repo.scss("error.scss"), repo.scss("pass.scss")]).unwrap();

    console::set_colors_enabled(false);
    let mut out = Vec::new();
    log_report(&files, &mut out).unwrap();
    let out = String::from_utf8(out).unwrap();

    assert_contains(&out, "Invalid CSS: 1 issue found in error.scss");
    assert_contains(&out, "error line 3, col 10:");
    assert!(!out.contains("pass.scss"));
}

#[test]
fn test_default_reporter_passes_files_through() {
    let repo = TestRepo::new();
    let options = repo.options(FakeLinter::FlagFiles {
        severity: "warning",
    });
    let files = lint_files(options, vec![repo.scss("pass.scss")]).unwrap();

    let out = Reporter::Default.report(files).unwrap();
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].relative(), "pass.scss");
}

#[test]
fn test_fail_reporter_names_failing_file() {
    let repo = TestRepo::new();
    let options = repo.options(FakeLinter::FlagFiles { severity: "error" });
    let files = lint_files(options, vec![repo.scss("pass.scss"), repo.scss("error.scss")]).unwrap();

    match fail_report(files) {
        Err(ScssLintError::LintFailed { files }) => assert_eq!(files, vec!["error.scss"]),
        other => panic!("expected LintFailed, got {:?}", other),
    }
}

#[test]
fn test_fail_reporter_accepts_clean_batch() {
    let repo = TestRepo::new();
    let options = repo.options(FakeLinter::FlagFiles { severity: "error" });
    let files = lint_files(options, vec![repo.scss("pass.scss")]).unwrap();

    let out = Reporter::Fail.report(files).unwrap();
    assert_eq!(out.len(), 1);
}
