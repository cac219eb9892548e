//! # canopy
//!
//! A declarative schema layer for document trees.
//!
//! canopy takes a generic, weakly-typed tree of document nodes (a parsed
//! XML/HTML-like DOM) and converts it into a strongly-shaped semantic tree
//! whose node kinds, allowed children, and per-kind parsing behavior are
//! declared ahead of time. The flow is:
//!
//! 1. Register node definitions on a [`schema::SchemaBuilder`] (matcher,
//!    children constraint, optional parser), then freeze it into a
//!    [`schema::Schema`].
//! 2. [`schema::Schema::convert`] the raw tree into a semantic tree.
//! 3. [`schema::validate`] the semantic tree against each node's
//!    children constraint.
//! 4. Extract structured data with the typed accessors and `parse` on
//!    [`schema::SemanticNode`].
//!
//! ```
//! use canopy::dom::RawNode;
//! use canopy::schema::{one, ChildrenConstraint, SchemaBuilder};
//!
//! let mut builder = SchemaBuilder::<(), (), ()>::new(());
//! builder
//!     .define("doc")
//!     .children(ChildrenConstraint::contains([one("title")]))
//!     .commit()?;
//! builder
//!     .define("title")
//!     .children(ChildrenConstraint::None)
//!     .commit()?;
//! let schema = builder.finish();
//!
//! let raw = RawNode::element("doc").with_child(RawNode::element("title"));
//! let tree = schema.convert(&raw)?;
//! schema.validate(&tree)?;
//! assert_eq!(tree.to_string(), "<doc [<title>]>");
//! # Ok::<(), canopy::schema::SchemaError>(())
//! ```
//!
//! ## Testing
//!
//! Integration tests assert tree shape with the fluent helper in the
//! [`testing`] module rather than counting nodes; see that module for the
//! guidelines.

pub mod dom;
pub mod schema;
pub mod testing;

pub use dom::{NodeKind, RawNode};
pub use schema::{Schema, SchemaBuilder, SchemaError, SemanticNode};
