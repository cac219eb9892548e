//! Registry and conversion
//!
//! The registry has two phases. During setup, a [`SchemaBuilder`]
//! accumulates definitions in registration order; [`SchemaBuilder::finish`]
//! then freezes it into an immutable [`Schema`]. All registration must
//! complete before the first conversion, and the type split makes that
//! ordering structural rather than conventional.
//!
//! Conversion walks the raw tree with an explicit work-list, so document
//! depth is bounded by the heap, not the call stack. For every raw node the
//! first definition (in registration order) whose matcher accepts it is
//! chosen; there is no best-match disambiguation, so narrower matchers must
//! be registered first.

use super::definition::{DefinitionBuilder, Kind, KindLike, NodeDefinition};
use super::error::{truncate, SchemaError, RENDER_LIMIT};
use super::node::SemanticNode;
use super::validation;
use crate::dom::RawNode;
use std::collections::HashMap;
use std::rc::Rc;

/// Mutable setup phase of the registry.
///
/// Generic over the application state `S` threaded through `parse`, the
/// shared configuration `C`, and the parser output `T`.
pub struct SchemaBuilder<S, C, T> {
    definitions: Vec<Rc<NodeDefinition<S, C, T>>>,
    by_name: HashMap<String, usize>,
    config: Rc<C>,
}

impl<S, C, T> SchemaBuilder<S, C, T> {
    pub fn new(config: C) -> Self {
        SchemaBuilder {
            definitions: Vec::new(),
            by_name: HashMap::new(),
            config: Rc::new(config),
        }
    }

    /// Start a new definition with the given kind name.
    pub fn define(&mut self, name: impl Into<String>) -> DefinitionBuilder<'_, S, C, T> {
        DefinitionBuilder::new(self, name.into())
    }

    /// Register a finished definition, preserving registration order.
    pub(crate) fn commit(&mut self, definition: NodeDefinition<S, C, T>) -> Result<Kind, SchemaError> {
        if self.by_name.contains_key(definition.name()) {
            return Err(SchemaError::DuplicateDefinition {
                kind: definition.name().to_string(),
            });
        }

        let kind = Kind::new(definition.name());
        self.by_name
            .insert(definition.name().to_string(), self.definitions.len());
        self.definitions.push(Rc::new(definition));
        Ok(kind)
    }

    /// Freeze the registry. No further definitions can be added.
    pub fn finish(self) -> Schema<S, C, T> {
        Schema {
            definitions: self.definitions,
            by_name: self.by_name,
            config: self.config,
        }
    }
}

/// Immutable registry of node definitions plus the shared configuration,
/// ready to convert raw trees.
pub struct Schema<S, C, T> {
    definitions: Vec<Rc<NodeDefinition<S, C, T>>>,
    by_name: HashMap<String, usize>,
    config: Rc<C>,
}

impl<S, C, T> Schema<S, C, T> {
    pub fn config(&self) -> &C {
        &self.config
    }

    /// Look up a definition by kind, O(1) by name.
    pub fn get(&self, kind: impl KindLike) -> Option<&NodeDefinition<S, C, T>> {
        self.by_name
            .get(kind.kind_name())
            .map(|&index| &*self.definitions[index])
    }

    /// Convert a raw document tree into a semantic tree.
    ///
    /// Children are converted in document order. Fails with
    /// [`SchemaError::UnmatchedNode`] as soon as some raw node is accepted
    /// by no registered matcher.
    pub fn convert<'d>(&self, raw: &'d RawNode) -> Result<SemanticNode<'d, S, C, T>, SchemaError> {
        struct Frame<'d, S, C, T> {
            raw: &'d RawNode,
            definition: Rc<NodeDefinition<S, C, T>>,
            children: Vec<SemanticNode<'d, S, C, T>>,
            next: usize,
        }

        let mut stack = vec![Frame {
            raw,
            definition: self.find_definition(raw)?,
            children: Vec::with_capacity(raw.children.len()),
            next: 0,
        }];

        loop {
            let frame = match stack.last_mut() {
                Some(frame) => frame,
                // The root frame only leaves the stack through the return
                // below.
                None => unreachable!("conversion work-list drained without producing a root"),
            };

            let raw = frame.raw;
            if frame.next < raw.children.len() {
                let child = &raw.children[frame.next];
                frame.next += 1;
                let definition = self.find_definition(child)?;
                stack.push(Frame {
                    raw: child,
                    definition,
                    children: Vec::with_capacity(child.children.len()),
                    next: 0,
                });
            } else if let Some(done) = stack.pop() {
                let node = SemanticNode::new(
                    done.definition,
                    done.children,
                    done.raw,
                    Rc::clone(&self.config),
                );
                match stack.last_mut() {
                    Some(parent) => parent.children.push(node),
                    None => return Ok(node),
                }
            }
        }
    }

    /// Validate a converted tree against each node's children constraint.
    pub fn validate(&self, root: &SemanticNode<'_, S, C, T>) -> Result<(), SchemaError> {
        validation::validate(root)
    }

    fn find_definition(
        &self,
        raw: &RawNode,
    ) -> Result<Rc<NodeDefinition<S, C, T>>, SchemaError> {
        // First match wins; registration order is the tie-break.
        self.definitions
            .iter()
            .find(|definition| definition.is_match(raw))
            .cloned()
            .ok_or_else(|| SchemaError::UnmatchedNode {
                raw: truncate(&raw.to_string(), RENDER_LIMIT),
                line: raw.line,
            })
    }
}
