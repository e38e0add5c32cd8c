//! Page processing pipeline
//!
//! This module orchestrates the processing of one or more pages:
//! 1. **Discovery**: Find page files below the input path
//! 2. **Snapshot**: Read and parse each page into an immutable element tree
//! 3. **Analysis**: Build the outline and run the hierarchy checks
//!
//! The two analyses of a page read the same snapshot and do not depend on
//! each other, so they run side by side when the `parallel` feature is on.

use crate::config::HeadlinerConfig;
use crate::heading::HeadingRecord;
use crate::hierarchy::{self, HierarchyChecks, HierarchyReport};
use crate::outline::{Outline, OutlineBuilder};
use crate::snapshot::PageSnapshot;
use serde::Serialize;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Everything extracted from one page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageReport {
    /// Page path (relative to the input directory when one was scanned)
    pub path: PathBuf,
    /// Headings in document order
    pub headings: Vec<HeadingRecord>,
    /// Sectioning-aware outline
    pub outline: Outline,
    /// Hierarchy findings
    pub hierarchy: HierarchyReport,
}

/// Errors that can occur while processing pages
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Input path does not exist: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read {}: {}", .0.display(), .1)]
    IoError(PathBuf, #[source] std::io::Error),

    #[error("Failed to walk directory: {0}")]
    WalkError(#[from] walkdir::Error),
}

/// Find all pages below `input`
///
/// # Parameters
/// * `input` - A page file or a directory to scan
/// * `config` - Supplies the page file extensions
///
/// # Returns
/// * `Ok(Vec<PathBuf>)` - Pages sorted by path (a single entry for a file input)
/// * `Err(PipelineError)` - The input does not exist or the walk failed
pub fn discover_pages(input: &Path, config: &HeadlinerConfig) -> Result<Vec<PathBuf>, PipelineError> {
    if input.is_file() {
        return Ok(vec![input.to_path_buf()]);
    }
    if !input.is_dir() {
        return Err(PipelineError::NotFound(input.to_path_buf()));
    }

    let mut pages = Vec::new();
    for entry in WalkDir::new(input).follow_links(false).sort_by_file_name() {
        let entry = entry?;
        let path = entry.path();
        if !entry.file_type().is_file() {
            continue;
        }

        let matches = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| config.matches_extension(ext));
        if matches {
            pages.push(path.to_path_buf());
        } else {
            log::debug!("Skipping non-page file {}", path.display());
        }
    }

    log::info!("Discovered {} pages under {}", pages.len(), input.display());
    Ok(pages)
}

/// Discover, load and analyze every page below `input`
///
/// # Returns
/// * `Ok(Vec<PageReport>)` - One report per page, in discovery order
/// * `Err(PipelineError)` - Discovery failed or a page could not be read
pub fn run(input: &Path, config: &HeadlinerConfig) -> Result<Vec<PageReport>, PipelineError> {
    let pages = discover_pages(input, config)?;
    let root = if input.is_dir() { input } else { Path::new("") };

    #[cfg(feature = "parallel")]
    let reports: Result<Vec<_>, _> = pages
        .par_iter()
        .map(|path| load_page(path, root, &config.checks))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let reports: Result<Vec<_>, _> = pages
        .iter()
        .map(|path| load_page(path, root, &config.checks))
        .collect();

    reports
}

/// Read and analyze a single page file
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD, so a page saved
/// in a legacy encoding is still analyzed.
fn load_page(path: &Path, root: &Path, checks: &HierarchyChecks) -> Result<PageReport, PipelineError> {
    let bytes = std::fs::read(path).map_err(|e| PipelineError::IoError(path.to_path_buf(), e))?;
    let html = String::from_utf8_lossy(&bytes);
    if matches!(html, Cow::Owned(_)) {
        log::warn!(
            "{} is not valid UTF-8; invalid bytes were replaced",
            path.display()
        );
    }

    let relative = path.strip_prefix(root).unwrap_or(path).to_path_buf();
    log::debug!("Analyzing {}", relative.display());

    Ok(analyze_page(relative, &html, checks))
}

/// Analyze the HTML of one page
pub fn analyze_page(path: PathBuf, html: &str, checks: &HierarchyChecks) -> PageReport {
    let snapshot = PageSnapshot::parse(html);
    let (outline, headings, hierarchy) = analyze_snapshot(&snapshot, checks);

    PageReport {
        path,
        headings,
        outline,
        hierarchy,
    }
}

/// Run both analyses over one snapshot
///
/// # Returns
/// * The outline, the heading list and its hierarchy report
pub fn analyze_snapshot(
    snapshot: &PageSnapshot,
    checks: &HierarchyChecks,
) -> (Outline, Vec<HeadingRecord>, HierarchyReport) {
    let build_outline = || OutlineBuilder::build(&snapshot.body);
    let check_headings = || {
        let headings = snapshot.headings();
        let report = hierarchy::analyze(&headings, checks);
        (headings, report)
    };

    #[cfg(feature = "parallel")]
    let (outline, (headings, report)) = rayon::join(build_outline, check_headings);

    #[cfg(not(feature = "parallel"))]
    let (outline, (headings, report)) = (build_outline(), check_headings());

    (outline, headings, report)
}
