//! Outline tree nodes

use crate::heading::HeadingTag;
use serde::Serialize;
use std::fmt;

/// Tag of a section node
///
/// `Root` is the sentinel used for the implicit document root. It can never be
/// produced from an element name, so it cannot collide with a real container
/// or a heading tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SectionTag {
    Root,
    Article,
    Aside,
    Nav,
    Section,
    Main,
    Footer,
    Address,
}

impl SectionTag {
    /// Parse an element name into a sectioning tag (case-insensitive)
    ///
    /// # Returns
    /// * `Some(SectionTag)` - One of article, aside, nav, section, main, footer, address
    /// * `None` - Any other element name (including "root")
    pub fn from_name(name: &str) -> Option<Self> {
        const SECTIONING: [(&str, SectionTag); 7] = [
            ("article", SectionTag::Article),
            ("aside", SectionTag::Aside),
            ("nav", SectionTag::Nav),
            ("section", SectionTag::Section),
            ("main", SectionTag::Main),
            ("footer", SectionTag::Footer),
            ("address", SectionTag::Address),
        ];

        SECTIONING
            .iter()
            .find(|(tag_name, _)| name.eq_ignore_ascii_case(tag_name))
            .map(|(_, tag)| *tag)
    }

    /// Upper-case tag name
    pub fn as_str(self) -> &'static str {
        match self {
            SectionTag::Root => "ROOT",
            SectionTag::Article => "ARTICLE",
            SectionTag::Aside => "ASIDE",
            SectionTag::Nav => "NAV",
            SectionTag::Section => "SECTION",
            SectionTag::Main => "MAIN",
            SectionTag::Footer => "FOOTER",
            SectionTag::Address => "ADDRESS",
        }
    }

    /// Lower-case element name, as written in markup
    pub fn class_name(self) -> &'static str {
        match self {
            SectionTag::Root => "root",
            SectionTag::Article => "article",
            SectionTag::Aside => "aside",
            SectionTag::Nav => "nav",
            SectionTag::Section => "section",
            SectionTag::Main => "main",
            SectionTag::Footer => "footer",
            SectionTag::Address => "address",
        }
    }

    /// Whether this is the implicit root sentinel
    pub fn is_root(self) -> bool {
        self == SectionTag::Root
    }
}

impl fmt::Display for SectionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An explicit sectioning container, or the implicit root
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionNode {
    /// Container tag (or `ROOT`)
    pub tag: SectionTag,
    /// First heading found directly in this section; acts as its title
    pub heading: Option<HeadingNode>,
    /// Entries at this section's top level that are not below `heading`
    pub children: Vec<OutlineEntry>,
}

impl SectionNode {
    /// Create an empty, untitled section
    pub fn new(tag: SectionTag) -> Self {
        Self {
            tag,
            heading: None,
            children: Vec::new(),
        }
    }

    /// Create the implicit document root
    pub fn root() -> Self {
        Self::new(SectionTag::Root)
    }
}

/// A heading within the outline
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeadingNode {
    /// Heading tag
    pub tag: HeadingTag,
    /// Trimmed text content (may be empty)
    pub text: String,
    /// Heading level, always `tag.level()`
    pub level: u8,
    /// Headings nested below this one by level
    pub children: Vec<HeadingNode>,
}

impl HeadingNode {
    /// Create a heading node with no children
    pub fn new(tag: HeadingTag, text: impl AsRef<str>) -> Self {
        Self {
            tag,
            text: text.as_ref().trim().to_string(),
            level: tag.level(),
            children: Vec::new(),
        }
    }

    /// Append a nested heading (builder style)
    pub fn with_child(mut self, child: HeadingNode) -> Self {
        self.children.push(child);
        self
    }

    /// Number of headings in this subtree, including this one
    pub fn subtree_len(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(HeadingNode::subtree_len)
            .sum::<usize>()
    }
}

/// One entry in a section's children list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum OutlineEntry {
    Section(SectionNode),
    Heading(HeadingNode),
}

impl OutlineEntry {
    /// Number of sectioning containers in this subtree
    pub fn section_count(&self) -> usize {
        match self {
            OutlineEntry::Section(section) => {
                1 + section
                    .children
                    .iter()
                    .map(OutlineEntry::section_count)
                    .sum::<usize>()
            }
            OutlineEntry::Heading(_) => 0,
        }
    }

    /// Number of headings in this subtree
    pub fn heading_count(&self) -> usize {
        match self {
            OutlineEntry::Section(section) => {
                section.heading.as_ref().map_or(0, HeadingNode::subtree_len)
                    + section
                        .children
                        .iter()
                        .map(OutlineEntry::heading_count)
                        .sum::<usize>()
            }
            OutlineEntry::Heading(heading) => heading.subtree_len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_tag_from_name() {
        assert_eq!(SectionTag::from_name("section"), Some(SectionTag::Section));
        assert_eq!(SectionTag::from_name("ARTICLE"), Some(SectionTag::Article));
        assert_eq!(SectionTag::from_name("Nav"), Some(SectionTag::Nav));
        assert_eq!(SectionTag::from_name("address"), Some(SectionTag::Address));
        assert_eq!(SectionTag::from_name("div"), None);
        assert_eq!(SectionTag::from_name("header"), None);
        assert_eq!(SectionTag::from_name("h1"), None);
    }

    #[test]
    fn test_root_sentinel_is_unreachable_from_markup() {
        assert_eq!(SectionTag::from_name("root"), None);
        assert_eq!(SectionTag::from_name("ROOT"), None);
        assert!(HeadingTag::from_name(SectionTag::Root.as_str()).is_none());
        assert!(SectionNode::root().tag.is_root());
    }

    #[test]
    fn test_heading_node_level_follows_tag() {
        let node = HeadingNode::new(HeadingTag::H4, " Details ");
        assert_eq!(node.level, 4);
        assert_eq!(node.text, "Details");
    }

    #[test]
    fn test_entry_counts() {
        let mut section = SectionNode::new(SectionTag::Article);
        section.heading = Some(
            HeadingNode::new(HeadingTag::H2, "Title")
                .with_child(HeadingNode::new(HeadingTag::H3, "Sub")),
        );
        section
            .children
            .push(OutlineEntry::Section(SectionNode::new(SectionTag::Aside)));
        section
            .children
            .push(OutlineEntry::Heading(HeadingNode::new(HeadingTag::H2, "Next")));

        let entry = OutlineEntry::Section(section);
        assert_eq!(entry.section_count(), 2);
        assert_eq!(entry.heading_count(), 3);
    }

    #[test]
    fn test_entry_serializes_with_type_tag() {
        let entry = OutlineEntry::Heading(HeadingNode::new(HeadingTag::H1, "A"));
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["type"], "heading");
        assert_eq!(json["tag"], "H1");
        assert_eq!(json["level"], 1);

        let entry = OutlineEntry::Section(SectionNode::new(SectionTag::Nav));
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["type"], "section");
        assert_eq!(json["tag"], "NAV");
        assert!(json["heading"].is_null());
    }
}
