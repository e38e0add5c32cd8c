//! Heading hierarchy checks
//!
//! Works on the flat heading sequence only; sectioning containers are
//! ignored here. Every check can be switched off independently.

use crate::heading::HeadingRecord;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Message for more than one level-1 heading
pub const MULTIPLE_TOP_LEVEL: &str = "Multiple top-level headings found.";

/// Message for a page without any level-1 heading
pub const MISSING_TOP_LEVEL: &str = "No top-level heading found.";

/// Message emitted when no check reported anything
pub const NO_ISSUES: &str = "No issues found.";

/// Which checks to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HierarchyChecks {
    /// Warn when more than one H1 is present
    pub multiple_top_level: bool,
    /// Error when no H1 is present
    pub missing_top_level: bool,
    /// Warn for every heading that is more than one level deeper than its predecessor
    pub skipped_level: bool,
}

impl Default for HierarchyChecks {
    fn default() -> Self {
        Self {
            multiple_top_level: true,
            missing_top_level: true,
            skipped_level: true,
        }
    }
}

/// Severity of a finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Success => write!(f, "success"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A single finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Warning {
    /// How serious the finding is
    pub severity: Severity,
    /// Human-readable description
    pub message: String,
}

impl Warning {
    fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }
}

/// Result of analyzing one heading sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HierarchyReport {
    /// Findings in check order
    pub warnings: Vec<Warning>,
    /// Number of warning-severity findings
    pub warning_count: usize,
    /// Number of error-severity findings
    pub error_count: usize,
}

impl HierarchyReport {
    /// Whether any check reported an error
    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    /// Whether the page passed every enabled check
    pub fn is_clean(&self) -> bool {
        self.warning_count == 0 && self.error_count == 0
    }
}

/// Analyze a heading sequence in document order
///
/// Findings appear in a fixed order: multiple top-level headings, missing
/// top-level heading, then skipped levels by position. The result depends on
/// nothing but `headings` and `checks`.
pub fn analyze(headings: &[HeadingRecord], checks: &HierarchyChecks) -> HierarchyReport {
    let mut warnings = Vec::new();
    let top_level = headings.iter().filter(|h| h.level() == 1).count();

    if checks.multiple_top_level && top_level > 1 {
        warnings.push(Warning::new(Severity::Warning, MULTIPLE_TOP_LEVEL));
    }

    if checks.missing_top_level && top_level == 0 {
        warnings.push(Warning::new(Severity::Error, MISSING_TOP_LEVEL));
    }

    if checks.skipped_level {
        warnings.extend(headings.windows(2).filter_map(|pair| {
            let (previous, current) = (&pair[0], &pair[1]);
            (current.level() > previous.level() + 1).then(|| {
                Warning::new(
                    Severity::Warning,
                    skipped_level_message(previous, current),
                )
            })
        }));
    }

    let warning_count = count(&warnings, Severity::Warning);
    let error_count = count(&warnings, Severity::Error);

    if warning_count == 0 && error_count == 0 {
        warnings.push(Warning::new(Severity::Success, NO_ISSUES));
    }

    log::debug!(
        "Analyzed {} headings: {} warnings, {} errors",
        headings.len(),
        warning_count,
        error_count
    );

    HierarchyReport {
        warnings,
        warning_count,
        error_count,
    }
}

/// Message for a heading that skips one or more levels after its predecessor
pub fn skipped_level_message(previous: &HeadingRecord, current: &HeadingRecord) -> String {
    format!(
        "Skipped hierarchy level: <{}> follows <{}>.",
        current.tag, previous.tag
    )
}

fn count(warnings: &[Warning], severity: Severity) -> usize {
    warnings.iter().filter(|w| w.severity == severity).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heading::HeadingTag;

    fn headings(tags: &[HeadingTag]) -> Vec<HeadingRecord> {
        tags.iter()
            .enumerate()
            .map(|(i, tag)| HeadingRecord::new(*tag, format!("Heading {}", i)))
            .collect()
    }

    #[test]
    fn test_skipped_level_after_h1() {
        use HeadingTag::*;
        let report = analyze(&headings(&[H1, H3]), &HierarchyChecks::default());

        assert_eq!(
            report.warnings,
            vec![Warning::new(
                Severity::Warning,
                "Skipped hierarchy level: <H3> follows <H1>."
            )]
        );
        assert_eq!(report.warning_count, 1);
        assert_eq!(report.error_count, 0);
    }

    #[test]
    fn test_empty_page_reports_missing_top_level_only() {
        let report = analyze(&[], &HierarchyChecks::default());

        assert_eq!(
            report.warnings,
            vec![Warning::new(Severity::Error, MISSING_TOP_LEVEL)]
        );
        assert_eq!(report.warning_count, 0);
        assert_eq!(report.error_count, 1);
        assert!(report.has_errors());
    }

    #[test]
    fn test_empty_page_without_checks_is_clean() {
        let checks = HierarchyChecks {
            multiple_top_level: false,
            missing_top_level: false,
            skipped_level: false,
        };
        let report = analyze(&[], &checks);
        assert_eq!(report.warnings, vec![Warning::new(Severity::Success, NO_ISSUES)]);
        assert!(report.is_clean());
    }

    #[test]
    fn test_multiple_top_level() {
        use HeadingTag::*;
        let report = analyze(&headings(&[H1, H1]), &HierarchyChecks::default());

        assert_eq!(
            report.warnings,
            vec![Warning::new(Severity::Warning, MULTIPLE_TOP_LEVEL)]
        );
        assert_eq!(report.warning_count, 1);
        assert_eq!(report.error_count, 0);
    }

    #[test]
    fn test_well_formed_page_is_clean() {
        use HeadingTag::*;
        let report = analyze(&headings(&[H1, H2, H3, H2, H3]), &HierarchyChecks::default());
        assert_eq!(report.warnings, vec![Warning::new(Severity::Success, NO_ISSUES)]);
    }

    #[test]
    fn test_skips_fire_once_per_gap_in_position_order() {
        use HeadingTag::*;
        let report = analyze(&headings(&[H1, H3, H4, H6]), &HierarchyChecks::default());

        let messages: Vec<&str> = report.warnings.iter().map(|w| w.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "Skipped hierarchy level: <H3> follows <H1>.",
                "Skipped hierarchy level: <H6> follows <H4>.",
            ]
        );
    }

    #[test]
    fn test_repeated_skips_are_not_deduplicated() {
        use HeadingTag::*;
        let report = analyze(&headings(&[H1, H3, H2, H4]), &HierarchyChecks::default());
        let messages: Vec<&str> = report.warnings.iter().map(|w| w.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "Skipped hierarchy level: <H3> follows <H1>.",
                "Skipped hierarchy level: <H4> follows <H2>.",
            ]
        );
        assert_eq!(report.warning_count, 2);
    }

    #[test]
    fn test_check_order() {
        use HeadingTag::*;
        // Two H1s and a skip: multiple-top-level comes before skipped levels
        let report = analyze(&headings(&[H1, H1, H4]), &HierarchyChecks::default());
        let severities: Vec<Severity> = report.warnings.iter().map(|w| w.severity).collect();
        assert_eq!(severities, vec![Severity::Warning, Severity::Warning]);
        assert_eq!(report.warnings[0].message, MULTIPLE_TOP_LEVEL);

        // Missing H1 plus a skip: error before the skip warning
        let report = analyze(&headings(&[H2, H4]), &HierarchyChecks::default());
        assert_eq!(report.warnings[0].message, MISSING_TOP_LEVEL);
        assert_eq!(report.warnings[1].severity, Severity::Warning);
        assert_eq!(report.warning_count, 1);
        assert_eq!(report.error_count, 1);
    }

    #[test]
    fn test_disabled_checks_are_silent() {
        use HeadingTag::*;
        let checks = HierarchyChecks {
            multiple_top_level: false,
            missing_top_level: true,
            skipped_level: false,
        };
        let report = analyze(&headings(&[H1, H1, H5]), &checks);
        assert_eq!(report.warnings, vec![Warning::new(Severity::Success, NO_ISSUES)]);
    }

    #[test]
    fn test_decreasing_levels_are_not_skips() {
        use HeadingTag::*;
        let report = analyze(&headings(&[H1, H2, H3, H4, H1]), &HierarchyChecks::default());
        assert_eq!(report.warnings[0].message, MULTIPLE_TOP_LEVEL);
        assert_eq!(report.warnings.len(), 1);
    }

    #[test]
    fn test_analysis_is_idempotent() {
        use HeadingTag::*;
        let input = headings(&[H2, H5, H1, H1, H3]);
        let checks = HierarchyChecks::default();
        assert_eq!(analyze(&input, &checks), analyze(&input, &checks));
    }

    #[test]
    fn test_checks_deserialize_with_defaults() {
        let checks: HierarchyChecks = toml::from_str("skipped_level = false").unwrap();
        assert!(checks.multiple_top_level);
        assert!(checks.missing_top_level);
        assert!(!checks.skipped_level);
    }
}
