//! Testing utilities for semantic tree assertions
//!
//! Asserting generalities like node counts is not informative; what a tree
//! test should pin down is the shape: which kind sits where, with which
//! children. [`assert_tree`] provides a fluent assertion over a converted
//! tree so whole hierarchies can be checked in one expression:
//!
//! ```rust,ignore
//! assert_tree(&tree)
//!     .name("doc")
//!     .child_count(2)
//!     .child(0, |child| {
//!         child.name("title").child_count(0);
//!     });
//! ```
//!
//! The helpers panic with a descriptive message on mismatch, so they belong
//! in tests only.

use crate::schema::SemanticNode;

/// Entry point: wrap a node for fluent shape assertions.
pub fn assert_tree<'a, 'd, S, C, T>(
    node: &'a SemanticNode<'d, S, C, T>,
) -> TreeAssert<'a, 'd, S, C, T> {
    TreeAssert { node }
}

pub struct TreeAssert<'a, 'd, S, C, T> {
    node: &'a SemanticNode<'d, S, C, T>,
}

impl<'a, 'd, S, C, T> TreeAssert<'a, 'd, S, C, T> {
    /// Assert the node's kind name.
    pub fn name(self, expected: &str) -> Self {
        assert_eq!(
            self.node.name(),
            expected,
            "expected node kind {:?}, found {:?}",
            expected,
            self.node.name()
        );
        self
    }

    /// Assert the number of direct children.
    pub fn child_count(self, expected: usize) -> Self {
        assert_eq!(
            self.node.children().len(),
            expected,
            "child count mismatch for <{}>",
            self.node.name()
        );
        self
    }

    /// Descend into the child at `index` and run assertions on it.
    pub fn child(self, index: usize, check: impl FnOnce(TreeAssert<'a, 'd, S, C, T>)) -> Self {
        let child = self.node.children().get(index).unwrap_or_else(|| {
            panic!(
                "<{}> has {} children, no child at index {}",
                self.node.name(),
                self.node.children().len(),
                index
            )
        });
        check(TreeAssert { node: child });
        self
    }

    /// Assert the compact diagnostic rendering of the whole subtree.
    pub fn renders_as(self, expected: &str) -> Self {
        assert_eq!(self.node.to_string(), expected);
        self
    }
}
