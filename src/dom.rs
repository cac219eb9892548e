//! Raw document tree collaborator
//!
//! canopy does not parse text; it consumes a tree that already exists.
//! [`RawNode`] is the minimal shape the engine needs from that tree: a kind
//! discriminant, a name, children in document order, and an optional source
//! line for diagnostics. Applications that own a richer DOM convert into
//! this shape (or build it directly, as the tests do).
//!
//! The predicate helpers mirror the usual DOM node-type checks and are the
//! building blocks for matcher closures.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Discriminant for a raw document node, following the classic DOM node
/// types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    Element,
    Text,
    ProcessingInstruction,
    Comment,
    Doctype,
}

/// One node of the raw document tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawNode {
    pub kind: NodeKind,
    /// Element/target name, or the conventional `#text` / `#comment`.
    pub name: String,
    /// Children in document order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RawNode>,
    /// 1-based source line, when the producing parser tracked one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
}

impl RawNode {
    pub fn new(kind: NodeKind, name: impl Into<String>) -> Self {
        RawNode {
            kind,
            name: name.into(),
            children: Vec::new(),
            line: None,
        }
    }

    pub fn element(name: impl Into<String>) -> Self {
        RawNode::new(NodeKind::Element, name)
    }

    pub fn text() -> Self {
        RawNode::new(NodeKind::Text, "#text")
    }

    pub fn processing_instruction(target: impl Into<String>) -> Self {
        RawNode::new(NodeKind::ProcessingInstruction, target)
    }

    pub fn comment() -> Self {
        RawNode::new(NodeKind::Comment, "#comment")
    }

    pub fn doctype(name: impl Into<String>) -> Self {
        RawNode::new(NodeKind::Doctype, name)
    }

    pub fn with_child(mut self, child: RawNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = RawNode>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn at_line(mut self, line: u32) -> Self {
        self.line = Some(line);
        self
    }
}

/// True when the node is an element.
pub fn is_element(node: &RawNode) -> bool {
    node.kind == NodeKind::Element
}

/// True when the node is an element with the given name.
pub fn is_element_named(node: &RawNode, name: &str) -> bool {
    node.kind == NodeKind::Element && node.name == name
}

/// True when the node is a processing instruction.
pub fn is_processing_instruction(node: &RawNode) -> bool {
    node.kind == NodeKind::ProcessingInstruction
}

/// True when the node is a doctype declaration.
pub fn is_doctype(node: &RawNode) -> bool {
    node.kind == NodeKind::Doctype
}

impl fmt::Display for RawNode {
    /// Compact rendering used in diagnostics, children omitted.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            NodeKind::Element => write!(f, "<{}>", self.name),
            NodeKind::Text => write!(f, "{}", self.name),
            NodeKind::ProcessingInstruction => write!(f, "<?{}?>", self.name),
            NodeKind::Comment => write!(f, "<!--{}-->", self.name),
            NodeKind::Doctype => write!(f, "<!DOCTYPE {}>", self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predicates_discriminate_node_kinds() {
        let para = RawNode::element("para");
        let pi = RawNode::processing_instruction("xml");
        let doctype = RawNode::doctype("html");

        assert!(is_element(&para));
        assert!(is_element_named(&para, "para"));
        assert!(!is_element_named(&para, "title"));
        assert!(is_processing_instruction(&pi));
        assert!(!is_element(&pi));
        assert!(is_doctype(&doctype));
    }

    #[test]
    fn display_renders_by_kind() {
        assert_eq!(RawNode::element("para").to_string(), "<para>");
        assert_eq!(RawNode::text().to_string(), "#text");
        assert_eq!(
            RawNode::processing_instruction("xml").to_string(),
            "<?xml?>"
        );
        assert_eq!(RawNode::comment().to_string(), "<!--#comment-->");
        assert_eq!(RawNode::doctype("html").to_string(), "<!DOCTYPE html>");
    }

    #[test]
    fn builders_accumulate_children_and_line() {
        let node = RawNode::element("doc")
            .with_child(RawNode::element("title"))
            .with_children([RawNode::element("para"), RawNode::element("para")])
            .at_line(3);

        assert_eq!(node.children.len(), 3);
        assert_eq!(node.line, Some(3));
    }
}
