//! Tree snapshot - a normalized representation of a semantic tree
//!
//! A [`TreeSnapshot`] captures the shape of a semantic tree (kind names and
//! child structure) in a plain, serializable form, so it can be compared,
//! stored, or handed to other tooling without dragging definitions, raw
//! nodes, or configuration along.

use super::node::SemanticNode;
use serde::{Deserialize, Serialize};

/// A snapshot of one semantic node in a normalized, serializable form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeSnapshot {
    /// The kind name of the node's definition.
    pub name: String,

    /// Child snapshots in document order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeSnapshot>,
}

impl TreeSnapshot {
    pub fn new(name: impl Into<String>) -> Self {
        TreeSnapshot {
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// Add a child snapshot.
    pub fn with_child(mut self, child: TreeSnapshot) -> Self {
        self.children.push(child);
        self
    }

    /// Capture the shape of a semantic tree.
    pub fn of<S, C, T>(node: &SemanticNode<'_, S, C, T>) -> Self {
        TreeSnapshot {
            name: node.name().to_string(),
            children: node.children().iter().map(TreeSnapshot::of).collect(),
        }
    }

    /// Render the snapshot as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
