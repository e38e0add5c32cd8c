//! Level-based headline list
//!
//! The plain view of a page: every heading in document order, indented by its
//! own level, plus a count of headings per level. Sectioning containers play
//! no part here.

use crate::heading::{HeadingRecord, HeadingTag};
use crate::outline::{HeadingNode, UNTITLED};
use itertools::Itertools;
use serde::Serialize;

/// One row of the headline list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeadlineRow {
    /// Position of the heading in document order
    pub index: usize,
    /// Heading tag
    pub tag: HeadingTag,
    /// Heading text, or `untitled`
    pub label: String,
    /// Indentation depth (equal to the heading level)
    pub depth: usize,
    /// Whether the heading has no text
    pub empty: bool,
}

/// Number of headings at one level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LevelCount {
    pub tag: HeadingTag,
    pub count: usize,
}

/// Per-level heading counts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LevelSummary {
    /// Counts for the levels present on the page, shallowest first
    pub levels: Vec<LevelCount>,
    /// Total number of headings
    pub total: usize,
}

/// Build the headline rows for a heading sequence
pub fn headline_rows(headings: &[HeadingRecord]) -> Vec<HeadlineRow> {
    headings
        .iter()
        .enumerate()
        .map(|(index, heading)| HeadlineRow {
            index,
            tag: heading.tag,
            label: if heading.is_untitled() {
                UNTITLED.to_string()
            } else {
                heading.text.clone()
            },
            depth: usize::from(heading.level()),
            empty: heading.is_untitled(),
        })
        .collect()
}

/// Count headings per level
pub fn summarize(headings: &[HeadingRecord]) -> LevelSummary {
    let counts = headings.iter().counts_by(|heading| heading.tag);
    let levels = counts
        .into_iter()
        .sorted_by_key(|(tag, _)| *tag)
        .map(|(tag, count)| LevelCount { tag, count })
        .collect();

    LevelSummary {
        levels,
        total: headings.len(),
    }
}

/// Nest headings purely by level, ignoring any sectioning
///
/// A heading closes every open heading at the same or a deeper level, then
/// becomes a child of whatever is still open.
pub fn nest_by_level(headings: &[HeadingRecord]) -> Vec<HeadingNode> {
    let mut roots = Vec::new();
    let mut open: Vec<HeadingNode> = Vec::new();

    for heading in headings {
        let level = heading.level();
        while open.last().is_some_and(|top| top.level >= level) {
            close_top(&mut open, &mut roots);
        }
        open.push(HeadingNode::new(heading.tag, &heading.text));
    }

    while !open.is_empty() {
        close_top(&mut open, &mut roots);
    }

    roots
}

fn close_top(open: &mut Vec<HeadingNode>, roots: &mut Vec<HeadingNode>) {
    if let Some(done) = open.pop() {
        match open.last_mut() {
            Some(parent) => parent.children.push(done),
            None => roots.push(done),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(tag: HeadingTag, text: &str) -> HeadingRecord {
        HeadingRecord::new(tag, text)
    }

    #[test]
    fn test_rows_use_level_as_depth() {
        let rows = headline_rows(&[
            record(HeadingTag::H1, "Title"),
            record(HeadingTag::H3, ""),
        ]);

        assert_eq!(rows[0].label, "Title");
        assert_eq!(rows[0].depth, 1);
        assert!(!rows[0].empty);

        assert_eq!(rows[1].index, 1);
        assert_eq!(rows[1].label, UNTITLED);
        assert_eq!(rows[1].depth, 3);
        assert!(rows[1].empty);
    }

    #[test]
    fn test_summary_counts_present_levels_in_order() {
        let summary = summarize(&[
            record(HeadingTag::H2, "a"),
            record(HeadingTag::H1, "b"),
            record(HeadingTag::H2, "c"),
            record(HeadingTag::H4, "d"),
        ]);

        assert_eq!(
            summary.levels,
            vec![
                LevelCount { tag: HeadingTag::H1, count: 1 },
                LevelCount { tag: HeadingTag::H2, count: 2 },
                LevelCount { tag: HeadingTag::H4, count: 1 },
            ]
        );
        assert_eq!(summary.total, 4);
    }

    #[test]
    fn test_summary_of_empty_page() {
        let summary = summarize(&[]);
        assert!(summary.levels.is_empty());
        assert_eq!(summary.total, 0);
    }

    #[test]
    fn test_nest_by_level() {
        let tree = nest_by_level(&[
            record(HeadingTag::H2, "A"),
            record(HeadingTag::H4, "B"),
            record(HeadingTag::H3, "C"),
            record(HeadingTag::H1, "D"),
            record(HeadingTag::H2, "E"),
        ]);

        let expected = vec![
            HeadingNode::new(HeadingTag::H2, "A")
                .with_child(HeadingNode::new(HeadingTag::H4, "B"))
                .with_child(HeadingNode::new(HeadingTag::H3, "C")),
            HeadingNode::new(HeadingTag::H1, "D").with_child(HeadingNode::new(HeadingTag::H2, "E")),
        ];
        assert_eq!(tree, expected);
    }
}
