//! Document root and tree traversal.

use super::{Element, Node};

/// Root container of a parsed SVG file.
///
/// Holds the top-level nodes, normally a single `<svg>` element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub children: Vec<Node>,
}

impl Document {
    pub fn new(children: Vec<Node>) -> Self {
        Self { children }
    }

    /// Document with a single root element.
    pub fn with_root(root: Element) -> Self {
        Self::new(vec![Node::Element(root)])
    }

    /// Root container with no content.
    pub fn empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// First top-level node, if it is an element.
    pub fn root(&self) -> Option<&Element> {
        self.children.first().and_then(Node::as_element)
    }

    pub fn root_mut(&mut self) -> Option<&mut Element> {
        self.children.first_mut().and_then(Node::as_element_mut)
    }

    /// All elements in document order (pre-order).
    pub fn elements(&self) -> Elements<'_> {
        Elements {
            stack: self.children.iter().rev().collect(),
        }
    }

    /// Visit every element mutably, children before their parent.
    pub fn walk_post_order_mut<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut Element),
    {
        walk_nodes(&mut self.children, &mut f);
    }
}

fn walk_nodes<F>(nodes: &mut [Node], f: &mut F)
where
    F: FnMut(&mut Element),
{
    for node in nodes {
        if let Node::Element(elem) = node {
            walk_nodes(&mut elem.children, f);
            f(elem);
        }
    }
}

/// Pre-order element iterator, see [`Document::elements`].
pub struct Elements<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Elements<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            if let Node::Element(elem) = node {
                self.stack.extend(elem.children.iter().rev());
                return Some(elem);
            }
        }
        None
    }
}
