//! Semantic node wrapper
//!
//! A [`SemanticNode`] is produced exactly once per raw node during
//! conversion. It owns its converted children (a strict tree, no
//! cross-links), keeps a non-owning back-reference to the raw node it was
//! derived from, and shares the tree-wide configuration by reference. The
//! tree is immutable once built; `parse` may be called repeatedly.

use super::definition::{KindLike, NodeDefinition};
use super::error::{CardinalityScope, SchemaError};
use crate::dom::RawNode;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

pub struct SemanticNode<'d, S, C, T> {
    definition: Rc<NodeDefinition<S, C, T>>,
    children: Vec<SemanticNode<'d, S, C, T>>,
    raw: &'d RawNode,
    config: Rc<C>,
}

impl<'d, S, C, T> SemanticNode<'d, S, C, T> {
    pub(crate) fn new(
        definition: Rc<NodeDefinition<S, C, T>>,
        children: Vec<SemanticNode<'d, S, C, T>>,
        raw: &'d RawNode,
        config: Rc<C>,
    ) -> Self {
        SemanticNode {
            definition,
            children,
            raw,
            config,
        }
    }

    /// The kind name of this node's definition.
    pub fn name(&self) -> &str {
        self.definition.name()
    }

    pub fn definition(&self) -> &NodeDefinition<S, C, T> {
        &self.definition
    }

    pub fn children(&self) -> &[SemanticNode<'d, S, C, T>] {
        &self.children
    }

    /// The raw node this one was converted from.
    pub fn raw(&self) -> &'d RawNode {
        self.raw
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    /// Find a specific kind of node among the direct children.
    ///
    /// Fails unless exactly one child matches; zero and many are both
    /// call-site bugs, not document errors.
    pub fn get_child(&self, kind: impl KindLike) -> Result<&SemanticNode<'d, S, C, T>, SchemaError> {
        let name = kind.kind_name();
        let found: Vec<_> = self
            .children
            .iter()
            .filter(|child| child.name() == name)
            .collect();

        if found.len() != 1 {
            return Err(SchemaError::Cardinality {
                kind: name.to_string(),
                found: found.len(),
                scope: CardinalityScope::Children,
            });
        }

        Ok(found[0])
    }

    /// Find a specific kind of node among all descendants.
    ///
    /// Fails unless exactly one descendant matches.
    pub fn get_descendant(
        &self,
        kind: impl KindLike,
    ) -> Result<&SemanticNode<'d, S, C, T>, SchemaError> {
        let name = kind.kind_name();
        let found = self.get_all_descendants(name);

        if found.len() != 1 {
            return Err(SchemaError::Cardinality {
                kind: name.to_string(),
                found: found.len(),
                scope: CardinalityScope::Descendants,
            });
        }

        Ok(found[0])
    }

    /// Find a specific kind of node among all descendants, tolerating its
    /// absence.
    ///
    /// Returns `Ok(None)` for zero matches and still fails on more than
    /// one.
    pub fn find_descendant(
        &self,
        kind: impl KindLike,
    ) -> Result<Option<&SemanticNode<'d, S, C, T>>, SchemaError> {
        let name = kind.kind_name();
        let found = self.get_all_descendants(name);

        match found.len() {
            0 => Ok(None),
            1 => Ok(Some(found[0])),
            many => Err(SchemaError::Cardinality {
                kind: name.to_string(),
                found: many,
                scope: CardinalityScope::Descendants,
            }),
        }
    }

    /// Collect every descendant of the given kind, breadth-first.
    ///
    /// Returns an empty vector when none match; never fails.
    pub fn get_all_descendants(&self, kind: impl KindLike) -> Vec<&SemanticNode<'d, S, C, T>> {
        let name = kind.kind_name();
        let mut found = Vec::new();
        let mut queue: VecDeque<&SemanticNode<'d, S, C, T>> = self.children.iter().collect();

        while let Some(node) = queue.pop_front() {
            if node.name() == name {
                found.push(node);
            }
            queue.extend(node.children.iter());
        }

        found
    }

    /// Invoke the definition's parser with this node, the threaded
    /// application state, and the shared configuration.
    pub fn parse(&self, state: &mut S) -> Result<T, SchemaError> {
        match self.definition.parser() {
            Some(parser) => Ok(parser(self, state, &self.config)),
            None => Err(SchemaError::NoParserDefined {
                kind: self.name().to_string(),
            }),
        }
    }
}

impl<S, C, T> Drop for SemanticNode<'_, S, C, T> {
    // Deep documents produce equally deep semantic trees; unwind the
    // children iteratively so drop does not recurse per nesting level.
    fn drop(&mut self) {
        let mut stack = std::mem::take(&mut self.children);
        while let Some(mut node) = stack.pop() {
            stack.append(&mut node.children);
        }
    }
}

impl<S, C, T> fmt::Display for SemanticNode<'_, S, C, T> {
    /// Compact diagnostic rendering: `<name [child, child]>`, or `<name>`
    /// for a childless node.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.name())?;
        if !self.children.is_empty() {
            f.write_str(" [")?;
            for (index, child) in self.children.iter().enumerate() {
                if index > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{}", child)?;
            }
            f.write_str("]")?;
        }
        f.write_str(">")
    }
}

impl<S, C, T> fmt::Debug for SemanticNode<'_, S, C, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SemanticNode")
            .field("name", &self.name())
            .field("children", &self.children)
            .finish()
    }
}
