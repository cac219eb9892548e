//! Children cardinality constraints
//!
//! A node definition declares what its children may look like with a
//! [`ChildrenConstraint`]: no opinion at all, no children whatsoever, or an
//! exhaustive list of allowed kinds with per-kind occurrence bounds. The
//! `Contains` case is a closed whitelist: every child kind that shows up in
//! the document must be listed, even if only as `any(..)`.

use super::definition::{Kind, KindLike};
use std::fmt;

/// Upper bound for a [`ChildrenAppearance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Max {
    Count(usize),
    Unbounded,
}

impl Max {
    pub fn allows(self, observed: usize) -> bool {
        match self {
            Max::Count(n) => observed <= n,
            Max::Unbounded => true,
        }
    }
}

impl fmt::Display for Max {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Max::Count(n) => write!(f, "{}", n),
            Max::Unbounded => write!(f, "unbounded"),
        }
    }
}

/// One entry of a `Contains` constraint: the kind must appear `n` times,
/// where `min <= n` and `max` allows `n`.
#[derive(Debug, Clone, PartialEq)]
pub struct ChildrenAppearance {
    pub kind: Kind,
    pub min: usize,
    pub max: Max,
}

/// The kind may appear any number of times, including not at all.
pub fn any(kind: impl KindLike) -> ChildrenAppearance {
    ChildrenAppearance {
        kind: Kind::new(kind.kind_name()),
        min: 0,
        max: Max::Unbounded,
    }
}

/// The kind must appear exactly once.
pub fn one(kind: impl KindLike) -> ChildrenAppearance {
    ChildrenAppearance {
        kind: Kind::new(kind.kind_name()),
        min: 1,
        max: Max::Count(1),
    }
}

/// The kind may appear at most once.
pub fn at_most_one(kind: impl KindLike) -> ChildrenAppearance {
    ChildrenAppearance {
        kind: Kind::new(kind.kind_name()),
        min: 0,
        max: Max::Count(1),
    }
}

/// The kind must appear at least once.
pub fn at_least_one(kind: impl KindLike) -> ChildrenAppearance {
    ChildrenAppearance {
        kind: Kind::new(kind.kind_name()),
        min: 1,
        max: Max::Unbounded,
    }
}

/// What a definition demands of its children.
#[derive(Debug, Clone, PartialEq)]
pub enum ChildrenConstraint {
    /// Anything goes; the validator skips this node's children entirely.
    NoConstraints,
    /// The node must have zero children.
    None,
    /// The node's children must match this list exhaustively.
    Contains(Vec<ChildrenAppearance>),
}

impl ChildrenConstraint {
    pub fn contains(entries: impl IntoIterator<Item = ChildrenAppearance>) -> Self {
        ChildrenConstraint::Contains(entries.into_iter().collect())
    }
}
