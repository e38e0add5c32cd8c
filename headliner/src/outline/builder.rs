//! Outline construction
//!
//! Walks a snapshot tree depth-first in source order. Sectioning containers
//! open a new scope; headings are placed inside the current scope by level.
//! Each scope keeps a private nesting stack that is dropped when the scope
//! closes, so the returned tree carries no build-time bookkeeping.

use super::node::{HeadingNode, OutlineEntry, SectionNode, SectionTag};
use super::Outline;
use crate::snapshot::ElementNode;

/// Builds sectioning-aware outlines from element trees
///
/// The builder holds no state between calls; every `build` is independent
/// and may run concurrently with others.
#[derive(Debug, Default, Clone, Copy)]
pub struct OutlineBuilder;

impl OutlineBuilder {
    /// Build the outline of an element tree
    ///
    /// # Parameters
    /// * `root` - Root element (normally `<body>`, or any subtree)
    ///
    /// # Returns
    /// * `Outline` - The implicit root section and its entries
    pub fn build(root: &ElementNode) -> Outline {
        let mut scope = SectionScope::new(SectionTag::Root);
        visit(root, &mut scope);
        let root = scope.finish();

        log::debug!(
            "Built outline with {} top-level entries",
            root.children.len()
        );

        Outline { root }
    }
}

/// Visit one element against the current section scope
fn visit(element: &ElementNode, scope: &mut SectionScope) {
    if let Some(tag) = SectionTag::from_name(&element.name) {
        let mut inner = SectionScope::new(tag);
        visit_children(element, &mut inner);
        let section = inner.finish();
        log::debug!(
            "Closed <{}> section with {} entries",
            tag.class_name(),
            section.children.len()
        );
        scope.push_section(section);
        return;
    }

    // Headings are leaves; anything nested inside one is ignored
    if let Some(tag) = element.heading_tag() {
        scope.place_heading(HeadingNode::new(tag, element.text_content()));
        return;
    }

    visit_children(element, scope);
}

fn visit_children(element: &ElementNode, scope: &mut SectionScope) {
    for child in element.child_elements() {
        visit(child, scope);
    }
}

/// Where the open heading chain of a scope starts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChainBase {
    /// The section's title heading
    Title,
    /// A heading in the section's `children` at this index
    Child(usize),
}

/// Chain of currently open headings in one scope
///
/// Entry `k + 1` is always the last child of entry `k`, so the chain is fully
/// described by where it starts and the level of each open heading.
#[derive(Debug, Default)]
struct NestingStack {
    base: Option<ChainBase>,
    levels: Vec<u8>,
}

impl NestingStack {
    fn reset(&mut self, base: ChainBase, level: u8) {
        self.base = Some(base);
        self.levels.clear();
        self.levels.push(level);
    }

    /// Close every open heading whose level is >= `level`
    fn close_from(&mut self, level: u8) {
        while self.levels.last().is_some_and(|&open| open >= level) {
            self.levels.pop();
        }
        if self.levels.is_empty() {
            self.base = None;
        }
    }
}

/// A section under construction together with its private nesting stack
struct SectionScope {
    node: SectionNode,
    stack: NestingStack,
}

impl SectionScope {
    fn new(tag: SectionTag) -> Self {
        Self {
            node: SectionNode::new(tag),
            stack: NestingStack::default(),
        }
    }

    fn push_section(&mut self, section: SectionNode) {
        self.node.children.push(OutlineEntry::Section(section));
    }

    /// Place a heading according to the section's nesting stack
    fn place_heading(&mut self, heading: HeadingNode) {
        let level = heading.level;

        // The first heading titles an explicit section. The root never takes a
        // title, so its headings always go through the sibling path.
        if self.node.heading.is_none() && !self.node.tag.is_root() {
            self.node.heading = Some(heading);
            self.stack.reset(ChainBase::Title, level);
            return;
        }

        self.stack.close_from(level);

        let Some(base) = self.stack.base else {
            self.push_sibling(heading);
            return;
        };

        match open_heading(&mut self.node, base, self.stack.levels.len()) {
            Some(parent) => {
                parent.children.push(heading);
                self.stack.levels.push(level);
            }
            None => self.push_sibling(heading),
        }
    }

    /// Attach a heading at the same rank as the section title
    fn push_sibling(&mut self, heading: HeadingNode) {
        let level = heading.level;
        self.node.children.push(OutlineEntry::Heading(heading));
        self.stack
            .reset(ChainBase::Child(self.node.children.len() - 1), level);
    }

    /// Drop the nesting stack and hand back the finished section
    fn finish(self) -> SectionNode {
        self.node
    }
}

/// Resolve the innermost open heading of a chain `depth` entries long
fn open_heading(
    section: &mut SectionNode,
    base: ChainBase,
    depth: usize,
) -> Option<&mut HeadingNode> {
    let mut current = match base {
        ChainBase::Title => section.heading.as_mut()?,
        ChainBase::Child(index) => match section.children.get_mut(index)? {
            OutlineEntry::Heading(heading) => heading,
            OutlineEntry::Section(_) => return None,
        },
    };

    for _ in 1..depth {
        current = current.children.last_mut()?;
    }

    Some(current)
}
