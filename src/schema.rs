//! Semantic tree schema engine
//!
//! This module holds the whole conversion and validation pipeline:
//!
//! - `constraints` - the declarative children-cardinality model
//! - `definition` - node definitions, kind references, and the builder
//! - `registry` - the two-phase registry ([`SchemaBuilder`] then [`Schema`])
//!   and the first-match converter
//! - `node` - the semantic node wrapper with typed accessors
//! - `validation` - the breadth-first constraint validator
//! - `error` - everything that can go wrong, in one enum
//! - `snapshot` - a normalized, serializable view of a semantic tree

pub mod constraints;
pub mod definition;
pub mod error;
pub mod node;
pub mod registry;
pub mod snapshot;
pub mod validation;

// Re-export commonly used types at module root
pub use constraints::{
    any, at_least_one, at_most_one, one, ChildrenAppearance, ChildrenConstraint, Max,
};
pub use definition::{DefinitionBuilder, Kind, KindLike, NodeDefinition};
pub use error::{CardinalityScope, SchemaError};
pub use node::SemanticNode;
pub use registry::{Schema, SchemaBuilder};
pub use snapshot::TreeSnapshot;
pub use validation::validate;
