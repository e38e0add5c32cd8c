//! headliner - page heading outlines and hierarchy checks
//!
//! Extracts the headings of an HTML page, arranges them into a
//! sectioning-aware outline, and reports structural problems such as a
//! missing or repeated top-level heading and skipped heading levels.

#![deny(unsafe_code)]
#![cfg_attr(all(not(debug_assertions), not(test)), deny(clippy::all))]
#![cfg_attr(all(not(debug_assertions), not(test)), deny(clippy::pedantic))]
// Allow some pedantic lints that are too strict for this project
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::enum_variant_names)]

pub mod config;
pub mod heading;
pub mod headlines;
pub mod hierarchy;
pub mod outline;
pub mod snapshot;

// Page processing and output
pub mod pipeline;
pub mod report;

pub use config::HeadlinerConfig;
pub use heading::{HeadingRecord, HeadingTag};
pub use hierarchy::{analyze, HierarchyChecks, HierarchyReport, Severity, Warning};
pub use outline::{HeadingNode, Outline, OutlineBuilder, OutlineEntry, SectionNode, SectionTag};
pub use snapshot::{DomNode, ElementNode, PageSnapshot};
