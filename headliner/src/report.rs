//! Text and JSON rendering of page reports

use crate::headlines::{headline_rows, summarize, HeadlineRow, LevelSummary};
use crate::hierarchy::Warning;
use crate::outline::{flatten, OutlineEntry};
use crate::pipeline::PageReport;
use serde::Serialize;
use std::fmt::Write as _;
use std::path::Path;
use thiserror::Error;

/// Output format of a rendered report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    /// Indented plain text
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Errors that can occur while rendering a report
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}

#[derive(Serialize)]
struct OutlineView<'a> {
    path: &'a Path,
    entries: &'a [OutlineEntry],
}

#[derive(Serialize)]
struct HeadlinesView<'a> {
    path: &'a Path,
    summary: LevelSummary,
    headlines: Vec<HeadlineRow>,
}

#[derive(Serialize)]
struct CheckView<'a> {
    path: &'a Path,
    warnings: &'a [Warning],
    warning_count: usize,
    error_count: usize,
}

/// Render the sectioning-aware outline of each page
pub fn render_outline(reports: &[PageReport], format: ReportFormat) -> Result<String, ReportError> {
    match format {
        ReportFormat::Json => {
            let views: Vec<OutlineView> = reports
                .iter()
                .map(|report| OutlineView {
                    path: &report.path,
                    entries: report.outline.entries(),
                })
                .collect();
            Ok(serde_json::to_string_pretty(&views)?)
        }
        ReportFormat::Text => {
            let mut output = String::new();
            for report in reports {
                write_page_header(&mut output, &report.path, None);
                let rows = flatten(&report.outline);
                if rows.is_empty() {
                    output.push_str("  (no outline)\n");
                }
                for row in rows {
                    write_indented(&mut output, row.depth, &row.label);
                }
            }
            Ok(output)
        }
    }
}

/// Render the level-based headline list and per-level counts of each page
pub fn render_headlines(
    reports: &[PageReport],
    format: ReportFormat,
) -> Result<String, ReportError> {
    match format {
        ReportFormat::Json => {
            let views: Vec<HeadlinesView> = reports
                .iter()
                .map(|report| HeadlinesView {
                    path: &report.path,
                    summary: summarize(&report.headings),
                    headlines: headline_rows(&report.headings),
                })
                .collect();
            Ok(serde_json::to_string_pretty(&views)?)
        }
        ReportFormat::Text => {
            let mut output = String::new();
            for report in reports {
                write_page_header(&mut output, &report.path, None);

                let summary = summarize(&report.headings);
                let mut counts: Vec<String> = summary
                    .levels
                    .iter()
                    .map(|level| format!("{}: {}", level.tag, level.count))
                    .collect();
                counts.push(format!("total: {}", summary.total));
                let _ = writeln!(output, "  {}", counts.join("  "));

                for row in headline_rows(&report.headings) {
                    write_indented(&mut output, row.depth, &row.label);
                }
            }
            Ok(output)
        }
    }
}

/// Render the hierarchy findings of each page
pub fn render_check(reports: &[PageReport], format: ReportFormat) -> Result<String, ReportError> {
    match format {
        ReportFormat::Json => {
            let views: Vec<CheckView> = reports
                .iter()
                .map(|report| CheckView {
                    path: &report.path,
                    warnings: &report.hierarchy.warnings,
                    warning_count: report.hierarchy.warning_count,
                    error_count: report.hierarchy.error_count,
                })
                .collect();
            Ok(serde_json::to_string_pretty(&views)?)
        }
        ReportFormat::Text => {
            let mut output = String::new();
            for report in reports {
                let counts = format!(
                    "{} {}, {} {}",
                    report.hierarchy.warning_count,
                    plural(report.hierarchy.warning_count, "warning", "warnings"),
                    report.hierarchy.error_count,
                    plural(report.hierarchy.error_count, "error", "errors"),
                );
                write_page_header(&mut output, &report.path, Some(&counts));
                for warning in &report.hierarchy.warnings {
                    let _ = writeln!(output, "  [{}] {}", warning.severity, warning.message);
                }
            }
            Ok(output)
        }
    }
}

/// Count of pages with at least one error-severity finding
pub fn pages_with_errors(reports: &[PageReport]) -> usize {
    reports
        .iter()
        .filter(|report| report.hierarchy.has_errors())
        .count()
}

/// Failure message when `--fail-on-error` should stop the run
///
/// # Returns
/// * `Some(String)` - At least one page has an error-severity finding
/// * `None` - No page has errors
pub fn error_summary(reports: &[PageReport]) -> Option<String> {
    match pages_with_errors(reports) {
        0 => None,
        failing => Some(format!(
            "{} of {} pages have heading errors",
            failing,
            reports.len()
        )),
    }
}

fn write_page_header(output: &mut String, path: &Path, detail: Option<&str>) {
    match detail {
        Some(detail) => {
            let _ = writeln!(output, "== {} ({})", path.display(), detail);
        }
        None => {
            let _ = writeln!(output, "== {}", path.display());
        }
    }
}

fn write_indented(output: &mut String, depth: usize, text: &str) {
    let _ = writeln!(output, "{}{}", "  ".repeat(depth), text);
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 {
        one
    } else {
        many
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hierarchy::HierarchyChecks;
    use crate::pipeline::analyze_page;
    use std::path::PathBuf;

    fn page(html: &str) -> PageReport {
        analyze_page(PathBuf::from("page.html"), html, &HierarchyChecks::default())
    }

    #[test]
    fn test_render_outline_text() {
        let reports = vec![page("<h1>A</h1><section><h2>B</h2><h3>C</h3></section>")];
        let text = render_outline(&reports, ReportFormat::Text).unwrap();

        assert_eq!(
            text,
            "== page.html\n  A (H1)\n  B (H2 in <section>)\n    C (H3)\n"
        );
    }

    #[test]
    fn test_render_outline_text_empty_page() {
        let text = render_outline(&[page("<p>nothing</p>")], ReportFormat::Text).unwrap();
        assert!(text.contains("(no outline)"));
    }

    #[test]
    fn test_render_outline_json() {
        let json = render_outline(&[page("<nav></nav>")], ReportFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value[0]["path"], "page.html");
        assert_eq!(value[0]["entries"][0]["type"], "section");
        assert_eq!(value[0]["entries"][0]["tag"], "NAV");
    }

    #[test]
    fn test_render_headlines_text() {
        let text =
            render_headlines(&[page("<h1>T</h1><h2>A</h2><h2></h2>")], ReportFormat::Text).unwrap();
        assert_eq!(
            text,
            "== page.html\n  H1: 1  H2: 2  total: 3\n  T\n    A\n    untitled\n"
        );
    }

    #[test]
    fn test_render_check_text() {
        let text = render_check(&[page("<h1>T</h1><h3>X</h3>")], ReportFormat::Text).unwrap();
        assert_eq!(
            text,
            "== page.html (1 warning, 0 errors)\n  [warning] Skipped hierarchy level: <H3> follows <H1>.\n"
        );
    }

    #[test]
    fn test_render_check_json() {
        let json = render_check(&[page("")], ReportFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value[0]["error_count"], 1);
        assert_eq!(value[0]["warnings"][0]["severity"], "error");
        assert_eq!(value[0]["warnings"][0]["message"], "No top-level heading found.");
    }

    #[test]
    fn test_pages_with_errors() {
        let reports = vec![page("<h1>ok</h1>"), page("<h2>no top</h2>")];
        assert_eq!(pages_with_errors(&reports), 1);
    }

    #[test]
    fn test_error_summary() {
        let reports = vec![page("<h1>ok</h1>"), page("<h2>no top</h2>")];
        assert_eq!(
            error_summary(&reports).as_deref(),
            Some("1 of 2 pages have heading errors")
        );
    }

    #[test]
    fn test_error_summary_ignores_warnings() {
        let reports = vec![page("<h1>A</h1><h1>B</h1><h4>C</h4>")];
        assert_eq!(reports[0].hierarchy.warning_count, 2);
        assert_eq!(error_summary(&reports), None);
    }
}
