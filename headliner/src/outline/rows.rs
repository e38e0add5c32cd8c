//! Flatten an outline into display rows
//!
//! Each row carries a pseudo-depth (1 for top-level entries) so that a
//! renderer can indent it without walking the tree again.

use super::node::{HeadingNode, OutlineEntry, SectionNode};
use super::Outline;
use serde::Serialize;

/// Label used for sections without a title and headings without text
pub const UNTITLED: &str = "untitled";

/// One display row of a flattened outline
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutlineRow {
    /// Display label
    pub label: String,
    /// Lower-case tag of the entry ("section", "h2", ...)
    pub tag_class: String,
    /// Pseudo-depth, starting at 1
    pub depth: usize,
    /// Whether the entry has no text to show
    pub empty: bool,
}

/// Flatten an outline into rows in display order
///
/// A titled section shows as `"{text} ({TAG} in <{section}>)"`, a heading as
/// `"{text} ({TAG})"`, and anything without text as `untitled`. Below a
/// section come its title's nested headings, then the section's own children.
pub fn flatten(outline: &Outline) -> Vec<OutlineRow> {
    let mut rows = Vec::new();
    for entry in outline.entries() {
        flatten_entry(entry, 1, &mut rows);
    }
    rows
}

fn flatten_entry(entry: &OutlineEntry, depth: usize, rows: &mut Vec<OutlineRow>) {
    match entry {
        OutlineEntry::Section(section) => flatten_section(section, depth, rows),
        OutlineEntry::Heading(heading) => flatten_heading(heading, depth, rows),
    }
}

fn flatten_section(section: &SectionNode, depth: usize, rows: &mut Vec<OutlineRow>) {
    let (label, empty) = match &section.heading {
        Some(title) if !title.text.is_empty() => (
            format!(
                "{} ({} in <{}>)",
                title.text,
                title.tag,
                section.tag.class_name()
            ),
            false,
        ),
        Some(title) => (
            format!(
                "{} ({} in <{}>)",
                UNTITLED,
                title.tag,
                section.tag.class_name()
            ),
            true,
        ),
        None => (UNTITLED.to_string(), true),
    };

    rows.push(OutlineRow {
        label,
        tag_class: section.tag.class_name().to_string(),
        depth,
        empty,
    });

    if let Some(title) = &section.heading {
        for child in &title.children {
            flatten_heading(child, depth + 1, rows);
        }
    }
    for child in &section.children {
        flatten_entry(child, depth + 1, rows);
    }
}

fn flatten_heading(heading: &HeadingNode, depth: usize, rows: &mut Vec<OutlineRow>) {
    let empty = heading.text.is_empty();
    let label = if empty {
        UNTITLED.to_string()
    } else {
        format!("{} ({})", heading.text, heading.tag)
    };

    rows.push(OutlineRow {
        label,
        tag_class: heading.tag.class_name().to_string(),
        depth,
        empty,
    });

    for child in &heading.children {
        flatten_heading(child, depth + 1, rows);
    }
}
