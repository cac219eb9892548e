//! Node definitions and the registration builder
//!
//! A [`NodeDefinition`] describes one semantic node kind: a unique name, a
//! matcher predicate over raw nodes, the children constraint enforced at
//! validation, and an optional parser that extracts application data from a
//! converted node. Definitions are built incrementally through
//! [`DefinitionBuilder`] and are immutable once committed to the registry.
//!
//! Matchers are tried in registration order and the first hit wins, so
//! narrower matchers must be registered before broader ones.

use super::constraints::ChildrenConstraint;
use super::error::SchemaError;
use super::node::SemanticNode;
use super::registry::SchemaBuilder;
use crate::dom::{self, RawNode};
use regex::Regex;
use std::collections::HashSet;
use std::fmt;

/// Matcher predicate over raw nodes. Must be pure; the engine assumes but
/// cannot enforce this.
pub type Matcher = Box<dyn Fn(&RawNode) -> bool>;

/// User-supplied extraction callback, invoked with the semantic node, the
/// threaded application state, and the shared configuration.
pub type Parser<S, C, T> = Box<dyn for<'d> Fn(&SemanticNode<'d, S, C, T>, &mut S, &C) -> T>;

/// A cheap, name-carrying handle to a node kind.
///
/// Everywhere the API accepts "a kind", it accepts either a `Kind`, a bare
/// `&str`, or a [`NodeDefinition`] reference, via [`KindLike`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Kind(String);

impl Kind {
    pub fn new(name: impl Into<String>) -> Self {
        Kind(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Anything that names a node kind: a definition, a [`Kind`] handle, or a
/// bare string.
pub trait KindLike {
    fn kind_name(&self) -> &str;
}

impl KindLike for str {
    fn kind_name(&self) -> &str {
        self
    }
}

impl KindLike for String {
    fn kind_name(&self) -> &str {
        self.as_str()
    }
}

impl KindLike for Kind {
    fn kind_name(&self) -> &str {
        self.name()
    }
}

impl<S, C, T> KindLike for NodeDefinition<S, C, T> {
    fn kind_name(&self) -> &str {
        self.name()
    }
}

impl<K: KindLike + ?Sized> KindLike for &K {
    fn kind_name(&self) -> &str {
        (**self).kind_name()
    }
}

/// An application-declared descriptor of one semantic node kind.
pub struct NodeDefinition<S, C, T> {
    name: String,
    matcher: Matcher,
    constraint: Option<ChildrenConstraint>,
    parser: Option<Parser<S, C, T>>,
}

impl<S, C, T> NodeDefinition<S, C, T> {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The children constraint, if one was declared. Validation treats the
    /// absence as a configuration error, not a passing default.
    pub fn constraint(&self) -> Option<&ChildrenConstraint> {
        self.constraint.as_ref()
    }

    pub(crate) fn is_match(&self, raw: &RawNode) -> bool {
        (self.matcher)(raw)
    }

    pub(crate) fn parser(&self) -> Option<&Parser<S, C, T>> {
        self.parser.as_ref()
    }
}

impl<S, C, T> fmt::Debug for NodeDefinition<S, C, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeDefinition")
            .field("name", &self.name)
            .field("constraint", &self.constraint)
            .field("has_parser", &self.parser.is_some())
            .finish()
    }
}

/// Incremental construction of a [`NodeDefinition`], finalized with
/// [`commit`](DefinitionBuilder::commit) which registers it and returns the
/// [`Kind`] handle.
pub struct DefinitionBuilder<'r, S, C, T> {
    registry: &'r mut SchemaBuilder<S, C, T>,
    name: String,
    matcher: Option<Matcher>,
    constraint: Option<ChildrenConstraint>,
    parser: Option<Parser<S, C, T>>,
}

impl<'r, S, C, T> DefinitionBuilder<'r, S, C, T> {
    pub(crate) fn new(registry: &'r mut SchemaBuilder<S, C, T>, name: String) -> Self {
        DefinitionBuilder {
            registry,
            name,
            matcher: None,
            constraint: None,
            parser: None,
        }
    }

    /// Supply the matcher predicate.
    pub fn matches(mut self, matcher: impl Fn(&RawNode) -> bool + 'static) -> Self {
        self.matcher = Some(Box::new(matcher));
        self
    }

    /// Match elements with exactly this name.
    pub fn match_element(self, name: &str) -> Self {
        let name = name.to_string();
        self.matches(move |raw| dom::is_element_named(raw, &name))
    }

    /// Match elements whose name matches the pattern.
    pub fn match_element_pattern(self, pattern: Regex) -> Self {
        self.matches(move |raw| dom::is_element(raw) && pattern.is_match(&raw.name))
    }

    /// Supply the children constraint.
    pub fn children(mut self, constraint: ChildrenConstraint) -> Self {
        self.constraint = Some(constraint);
        self
    }

    /// Supply the extraction callback invoked by
    /// [`SemanticNode::parse`](super::node::SemanticNode::parse).
    pub fn parser(
        mut self,
        parser: impl for<'d> Fn(&SemanticNode<'d, S, C, T>, &mut S, &C) -> T + 'static,
    ) -> Self {
        self.parser = Some(Box::new(parser));
        self
    }

    /// Finalize and register the definition.
    ///
    /// When no matcher was supplied, the definition matches elements named
    /// like the definition itself. Fails on a duplicate definition name and
    /// on duplicate kind entries inside a `Contains` constraint; both are
    /// setup bugs and are caught here rather than at validation.
    pub fn commit(self) -> Result<Kind, SchemaError> {
        let DefinitionBuilder {
            registry,
            name,
            matcher,
            constraint,
            parser,
        } = self;

        if let Some(ChildrenConstraint::Contains(entries)) = &constraint {
            let mut seen = HashSet::new();
            for entry in entries {
                if !seen.insert(entry.kind.name()) {
                    return Err(SchemaError::DuplicateConstraintKind {
                        definition: name,
                        kind: entry.kind.name().to_string(),
                    });
                }
            }
        }

        let matcher = matcher.unwrap_or_else(|| {
            let name = name.clone();
            Box::new(move |raw: &RawNode| dom::is_element_named(raw, &name))
        });

        registry.commit(NodeDefinition {
            name,
            matcher,
            constraint,
            parser,
        })
    }
}
