//! Sectioning-aware document outline
//!
//! This module turns a page snapshot into a forest of section and heading
//! nodes:
//! 1. **Building**: walk the element tree, opening a new scope for every
//!    sectioning container and nesting headings by level inside each scope
//! 2. **Flattening**: turn the forest into labelled rows for display

// Submodules
mod builder;
mod rows;
mod node;

// Re-export public types
pub use builder::OutlineBuilder;
pub use rows::{flatten, OutlineRow, UNTITLED};
pub use node::{HeadingNode, OutlineEntry, SectionNode, SectionTag};

use serde::Serialize;

/// The outline of one page
///
/// Wraps the implicit root section. The root never carries a title; its
/// children are the top-level outline entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outline {
    /// The implicit root section (tag `ROOT`)
    pub root: SectionNode,
}

impl Outline {
    /// Top-level outline entries in document order
    pub fn entries(&self) -> &[OutlineEntry] {
        &self.root.children
    }

    /// Whether the page produced no outline entries at all
    pub fn is_empty(&self) -> bool {
        self.root.children.is_empty()
    }

    /// Total number of sectioning containers in the outline
    pub fn section_count(&self) -> usize {
        self.root
            .children
            .iter()
            .map(OutlineEntry::section_count)
            .sum()
    }

    /// Total number of headings in the outline
    pub fn heading_count(&self) -> usize {
        self.root
            .children
            .iter()
            .map(OutlineEntry::heading_count)
            .sum()
    }
}
