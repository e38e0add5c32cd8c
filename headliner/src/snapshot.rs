//! Immutable page snapshots
//!
//! The outline builder and the heading extractor never touch the HTML parser
//! directly. A page is parsed once with `scraper`, and the part below `<body>`
//! is copied into an owned `ElementNode` tree. Every later pass reads that
//! snapshot, so repeated or concurrent analyses of the same page cannot
//! observe different input.

use crate::heading::{HeadingRecord, HeadingTag};
use scraper::{ElementRef, Html, Node};

/// A node of the snapshot tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomNode {
    /// An element with its own children
    Element(ElementNode),
    /// A text node
    Text(String),
    /// A comment node (kept so traversal sees the same node sequence as the page)
    Comment(String),
}

/// An element and its children in source order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementNode {
    /// Element name as reported by the parser (usually lower-case)
    pub name: String,
    /// Child nodes in source order
    pub children: Vec<DomNode>,
}

impl ElementNode {
    /// Create an element with no children
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// Append a child element (builder style)
    pub fn with_child(mut self, child: ElementNode) -> Self {
        self.children.push(DomNode::Element(child));
        self
    }

    /// Append a text node (builder style)
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(DomNode::Text(text.into()));
        self
    }

    /// Append a comment node (builder style)
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.children.push(DomNode::Comment(comment.into()));
        self
    }

    /// Child elements, skipping text and comment nodes
    pub fn child_elements(&self) -> impl Iterator<Item = &ElementNode> {
        self.children.iter().filter_map(|child| match child {
            DomNode::Element(element) => Some(element),
            DomNode::Text(_) | DomNode::Comment(_) => None,
        })
    }

    /// Concatenated text of all descendant text nodes (DOM `textContent`)
    pub fn text_content(&self) -> String {
        let mut text = String::new();
        self.collect_text(&mut text);
        text
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                DomNode::Element(element) => element.collect_text(out),
                DomNode::Text(text) => out.push_str(text),
                DomNode::Comment(_) => {}
            }
        }
    }

    /// Heading tag of this element, if it is h1..h6
    pub fn heading_tag(&self) -> Option<HeadingTag> {
        HeadingTag::from_name(&self.name)
    }
}

/// Immutable snapshot of one page, rooted at its `<body>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSnapshot {
    /// The body element (or the document root when there is no body)
    pub body: ElementNode,
}

impl PageSnapshot {
    /// Parse an HTML document into a snapshot
    ///
    /// HTML parsing is error-tolerant, so this never fails: malformed markup
    /// is repaired by the parser the same way a browser would.
    pub fn parse(html: &str) -> Self {
        let document = Html::parse_document(html);
        let root = document.root_element();

        let body = root
            .children()
            .filter_map(ElementRef::wrap)
            .find(|element| element.value().name().eq_ignore_ascii_case("body"))
            .unwrap_or(root);

        Self {
            body: convert_element(body),
        }
    }

    /// Wrap an already-built element tree
    pub fn from_element(body: ElementNode) -> Self {
        Self { body }
    }

    /// All headings in document order
    ///
    /// Matches `querySelectorAll("h1, h2, h3, h4, h5, h6")`: every heading
    /// element below the body is reported, including ones inside sectioning
    /// containers.
    pub fn headings(&self) -> Vec<HeadingRecord> {
        let mut headings = Vec::new();
        collect_headings(&self.body, &mut headings);
        headings
    }
}

/// Copy a `scraper` element and its subtree into an owned `ElementNode`
fn convert_element(element: ElementRef<'_>) -> ElementNode {
    let mut node = ElementNode::new(element.value().name());

    for child in element.children() {
        match child.value() {
            Node::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    node.children
                        .push(DomNode::Element(convert_element(child_element)));
                }
            }
            Node::Text(text) => node.children.push(DomNode::Text(text.to_string())),
            Node::Comment(comment) => node.children.push(DomNode::Comment(comment.to_string())),
            _ => {}
        }
    }

    node
}

fn collect_headings(element: &ElementNode, out: &mut Vec<HeadingRecord>) {
    for child in element.child_elements() {
        if let Some(tag) = child.heading_tag() {
            out.push(HeadingRecord::new(tag, child.text_content()));
        }
        collect_headings(child, out);
    }
}
