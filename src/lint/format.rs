//! Re-associates a batch report with individual files.

use crate::lint::types::{Annotation, Report, SourceFile};

/// Build the annotation for `file` from the batch `report`
///
/// Files are looked up by path (or `"stdin"` when anonymous); a missing or
/// empty entry means the file passed.
pub fn format_annotation(file: &SourceFile, report: &Report) -> Annotation {
    match report.get(&file.report_key()) {
        Some(issues) if !issues.is_empty() => Annotation::failed(issues.clone()),
        _ => Annotation::passed(),
    }
}
