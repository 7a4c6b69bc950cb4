//! Tests for batching, argument shape and result association

use std::path::PathBuf;

use scsslint_bridge::{lint_files, LintPipeline, PipelineState};

use crate::common::{assert_failed, assert_passed, FakeLinter, TestRepo};

#[test]
fn test_single_clean_file_passes() {
    let repo = TestRepo::new();
    let options = repo.options(FakeLinter::FlagFiles {
        severity: "warning",
    });

    let files = lint_files(options, vec![repo.scss("pass.scss")]).unwrap();

    assert_eq!(files.len(), 1);
    assert_passed(&files[0]);
    assert_eq!(files[0].relative(), "pass.scss");
    assert!(!files[0].contents.is_empty(), "contents must pass through");
}

#[test]
fn test_single_warning_is_attached() {
    let repo = TestRepo::new();
    let options = repo.options(FakeLinter::FlagFiles {
        severity: "warning",
    });

    let files = lint_files(options, vec![repo.scss("warning.scss")]).unwrap();

    assert_eq!(files.len(), 1);
    assert_failed(&files[0], 1);
    let issue = &files[0].scsslint.as_ref().unwrap().issues()[0];
    assert_eq!(issue.line, 3);
    assert_eq!(issue.column, Some(10));
    assert_eq!(issue.severity, "warning");
    assert_eq!(issue.linter.as_deref(), Some("ColorKeyword"));
    assert!(issue.reason.contains("hexadecimal"));
}

#[test]
fn test_two_failing_files() {
    let repo = TestRepo::new();
    let options = repo.options(FakeLinter::FlagFiles { severity: "error" });

    let files = lint_files(
        options,
        vec![repo.scss("error.scss"), repo.scss("warning.scss")],
    )
    .unwrap();

    assert_eq!(files.len(), 2);
    assert_failed(&files[0], 1);
    assert_failed(&files[1], 1);
    assert!(files[0].scsslint.as_ref().unwrap().issues()[0].is_error());
}

#[test]
fn test_arrival_order_is_preserved() {
    let repo = TestRepo::new();
    let options = repo.options(FakeLinter::FlagFiles {
        severity: "warning",
    });

    let names = ["b.scss", "pass-a.scss", "c/nested.scss", "pass-z.scss"];
    let inputs: Vec<_> = names.iter().map(|n| repo.scss(n)).collect();
    let files = lint_files(options, inputs).unwrap();

    let relative: Vec<String> = files.iter().map(|f| f.relative()).collect();
    assert_eq!(relative, names);
    assert_failed(&files[0], 1);
    assert_passed(&files[1]);
    assert_failed(&files[2], 1);
    assert_passed(&files[3]);
}

#[test]
fn test_one_process_per_batch() {
    let repo = TestRepo::new();
    let options = repo.options(FakeLinter::FlagFiles {
        severity: "warning",
    });

    let mut pipeline = LintPipeline::new(options);
    for name in ["a.scss", "b.scss", "pass.scss"] {
        pipeline.push(repo.scss(name)).unwrap();
    }
    assert_eq!(pipeline.state(), PipelineState::Collecting);
    assert_eq!(repo.invocation_count(), 0, "push must not spawn");

    let files = pipeline.finish().unwrap();
    assert_eq!(files.len(), 3);
    assert_eq!(repo.invocation_count(), 1);
    assert_eq!(pipeline.state(), PipelineState::Done);
}

#[test]
fn test_path_with_spaces_is_passed_verbatim() {
    let repo = TestRepo::new();
    let options = repo.options(FakeLinter::FlagFiles {
        severity: "warning",
    });

    let spaced = repo.scss("dir with spaces/file name.scss");
    let expected_path = spaced.path.clone().unwrap();
    let files = lint_files(options, vec![spaced]).unwrap();

    assert_eq!(files[0].path.as_ref(), Some(&expected_path));
    assert_eq!(files[0].relative(), "dir with spaces/file name.scss");
    assert_failed(&files[0], 1);

    let args = repo.recorded_args();
    assert_eq!(
        args.last().map(PathBuf::from),
        Some(expected_path),
        "path must arrive as a single argument"
    );
}

#[test]
fn test_argument_shape() {
    let repo = TestRepo::new();
    let options = repo
        .options(FakeLinter::FlagFiles {
            severity: "warning",
        })
        .merge(
            Some(PathBuf::from("config/scss-lint.yml")),
            None,
            Some("vendor/**".to_string()),
        );

    let a = repo.scss("pass-a.scss");
    let b = repo.scss("pass-b.scss");
    let a_path = a.report_key();
    let b_path = b.report_key();
    lint_files(options, vec![a, b]).unwrap();

    assert_eq!(
        repo.recorded_args(),
        vec![
            "-c".to_string(),
            "config/scss-lint.yml".to_string(),
            "-e".to_string(),
            "vendor/**".to_string(),
            "-fXML".to_string(),
            a_path,
            b_path,
        ]
    );
}

#[test]
fn test_clean_run_with_empty_stdout() {
    let repo = TestRepo::new();
    let options = repo.options(FakeLinter::Raw {
        stdout: String::new(),
        code: 0,
    });

    let files = lint_files(options, vec![repo.scss("a.scss"), repo.scss("b.scss")]).unwrap();
    assert_eq!(files.len(), 2);
    files.iter().for_each(assert_passed);
}

#[test]
fn test_report_for_unknown_path_is_ignored() {
    let repo = TestRepo::new();
    let options = repo.options(FakeLinter::Raw {
        stdout: r#"<lint><file name="elsewhere.scss"><issue line="1" severity="error" reason="x" /></file></lint>"#
            .to_string(),
        code: 65,
    });

    let files = lint_files(options, vec![repo.scss("a.scss")]).unwrap();
    assert_passed(&files[0]);
}
