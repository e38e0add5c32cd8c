//! Heading tags and flat heading records
//!
//! A `HeadingRecord` is the snapshot of one `<h1>`..`<h6>` occurrence as it
//! appeared in the page. Records are kept in document order and feed both the
//! hierarchy analyzer and the level-based headline list.

use serde::Serialize;
use std::fmt;

/// One of the six HTML heading tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum HeadingTag {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl HeadingTag {
    /// All heading tags, shallowest first
    pub const ALL: [HeadingTag; 6] = [
        HeadingTag::H1,
        HeadingTag::H2,
        HeadingTag::H3,
        HeadingTag::H4,
        HeadingTag::H5,
        HeadingTag::H6,
    ];

    /// Parse an element name into a heading tag (case-insensitive)
    ///
    /// # Parameters
    /// * `name` - Element name such as "h2" or "H2"
    ///
    /// # Returns
    /// * `Some(HeadingTag)` - The name is one of h1..h6
    /// * `None` - Any other element name
    pub fn from_name(name: &str) -> Option<Self> {
        let bytes = name.as_bytes();
        if bytes.len() != 2 || !bytes[0].eq_ignore_ascii_case(&b'h') {
            return None;
        }
        match bytes[1] {
            b'1' => Some(HeadingTag::H1),
            b'2' => Some(HeadingTag::H2),
            b'3' => Some(HeadingTag::H3),
            b'4' => Some(HeadingTag::H4),
            b'5' => Some(HeadingTag::H5),
            b'6' => Some(HeadingTag::H6),
            _ => None,
        }
    }

    /// Numeric level of the tag (1 for H1 through 6 for H6)
    pub fn level(self) -> u8 {
        match self {
            HeadingTag::H1 => 1,
            HeadingTag::H2 => 2,
            HeadingTag::H3 => 3,
            HeadingTag::H4 => 4,
            HeadingTag::H5 => 5,
            HeadingTag::H6 => 6,
        }
    }

    /// Upper-case tag name ("H1".."H6")
    pub fn as_str(self) -> &'static str {
        match self {
            HeadingTag::H1 => "H1",
            HeadingTag::H2 => "H2",
            HeadingTag::H3 => "H3",
            HeadingTag::H4 => "H4",
            HeadingTag::H5 => "H5",
            HeadingTag::H6 => "H6",
        }
    }

    /// Lower-case class name used by renderers ("h1".."h6")
    pub fn class_name(self) -> &'static str {
        match self {
            HeadingTag::H1 => "h1",
            HeadingTag::H2 => "h2",
            HeadingTag::H3 => "h3",
            HeadingTag::H4 => "h4",
            HeadingTag::H5 => "h5",
            HeadingTag::H6 => "h6",
        }
    }
}

impl fmt::Display for HeadingTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single heading occurrence, captured at extraction time
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeadingRecord {
    /// Heading tag
    pub tag: HeadingTag,
    /// Trimmed text content of the heading element
    pub text: String,
}

impl HeadingRecord {
    /// Create a record from a heading tag and raw text content
    ///
    /// The text is trimmed the same way the page snapshot trims it.
    pub fn new(tag: HeadingTag, text: impl AsRef<str>) -> Self {
        Self {
            tag,
            text: text.as_ref().trim().to_string(),
        }
    }

    /// Create a record from a raw `{tagName, textContent}` pair
    ///
    /// # Returns
    /// * `Some(HeadingRecord)` - `tag_name` is a heading tag
    /// * `None` - `tag_name` is not h1..h6
    pub fn from_tag_name(tag_name: &str, text_content: &str) -> Option<Self> {
        HeadingTag::from_name(tag_name).map(|tag| Self::new(tag, text_content))
    }

    /// Heading level, always equal to the tag's numeric suffix
    pub fn level(&self) -> u8 {
        self.tag.level()
    }

    /// Whether the heading has no visible text
    pub fn is_untitled(&self) -> bool {
        self.text.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_is_case_insensitive() {
        assert_eq!(HeadingTag::from_name("h1"), Some(HeadingTag::H1));
        assert_eq!(HeadingTag::from_name("H4"), Some(HeadingTag::H4));
        assert_eq!(HeadingTag::from_name("h6"), Some(HeadingTag::H6));
    }

    #[test]
    fn test_from_name_rejects_non_headings() {
        assert_eq!(HeadingTag::from_name("h7"), None);
        assert_eq!(HeadingTag::from_name("h0"), None);
        assert_eq!(HeadingTag::from_name("hr"), None);
        assert_eq!(HeadingTag::from_name("header"), None);
        assert_eq!(HeadingTag::from_name("section"), None);
        assert_eq!(HeadingTag::from_name(""), None);
    }

    #[test]
    fn test_level_matches_tag_suffix() {
        for tag in HeadingTag::ALL {
            let suffix: u8 = tag.as_str()[1..].parse().unwrap();
            assert_eq!(tag.level(), suffix);
        }
    }

    #[test]
    fn test_record_from_tag_name_trims_text() {
        let record = HeadingRecord::from_tag_name("H2", "  Getting started \n").unwrap();
        assert_eq!(record.tag, HeadingTag::H2);
        assert_eq!(record.text, "Getting started");
        assert_eq!(record.level(), 2);
        assert!(!record.is_untitled());

        assert!(HeadingRecord::from_tag_name("P", "text").is_none());
        assert!(HeadingRecord::from_tag_name("h3", "   ").unwrap().is_untitled());
    }
}
