//! scss-lint XML report parser.
//!
//! scss-lint `--format XML` output:
//! ```xml
//! <?xml version="1.0" encoding="utf-8"?>
//! <lint>
//!   <file name="styles/app.scss">
//!     <issue linter="PropertySpelling" line="3" column="3" length="5"
//!            severity="warning" reason="Unknown property colr" />
//!   </file>
//! </lint>
//! ```

use roxmltree::{Document, Node};

use crate::error::{Result, ScssLintError};
use crate::lint::types::{Issue, Report};

/// Parse scss-lint XML output into a `Report`
///
/// Missing or blank output means no issues. Files without issues get no entry.
pub fn parse_report(xml: Option<&str>) -> Result<Report> {
    let mut report = Report::new();

    let xml = xml.unwrap_or("");
    if xml.trim().is_empty() {
        return Ok(report);
    }

    let doc = Document::parse(xml)?;
    let root = doc.root_element();
    if root.tag_name().name() != "lint" {
        return Err(ScssLintError::Parse {
            message: format!("expected <lint> root element, found <{}>", root.tag_name().name()),
        });
    }

    for file in root.children().filter(|n| n.has_tag_name("file")) {
        let name = file.attribute("name").ok_or_else(|| ScssLintError::Parse {
            message: "<file> element is missing the name attribute".to_string(),
        })?;

        let issues = file
            .children()
            .filter(|n| n.has_tag_name("issue"))
            .map(|n| parse_issue(n, name))
            .collect::<Result<Vec<_>>>()?;

        if !issues.is_empty() {
            report.entry(name.to_string()).or_default().extend(issues);
        }
    }

    Ok(report)
}

fn parse_issue(node: Node<'_, '_>, file: &str) -> Result<Issue> {
    let line = node
        .attribute("line")
        .and_then(|v| v.trim().parse::<usize>().ok())
        .ok_or_else(|| ScssLintError::Parse {
            message: format!("<issue> in {} has a missing or non-numeric line", file),
        })?;

    let mut issue = Issue::new(line, String::new(), String::new());

    for attr in node.attributes() {
        let value = attr.value();
        match (attr.name(), value.trim().parse::<usize>()) {
            ("line", _) => {}
            ("column", Ok(column)) => issue = issue.with_column(column),
            ("length", Ok(length)) => issue.length = Some(length),
            ("severity", _) => issue.severity = value.to_string(),
            ("reason", _) => issue.reason = value.to_string(),
            ("linter", _) => issue = issue.with_linter(value),
            // Non-numeric column/length land here too, untouched
            (other, _) => {
                issue.extra.insert(other.to_string(), value.to_string());
            }
        }
    }

    Ok(issue)
}
