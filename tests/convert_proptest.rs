//! Property: conversion preserves the raw tree's shape
//!
//! For any raw tree accepted by the registered matchers, the semantic tree
//! has the same number of nodes, the same parent/child structure, and the
//! same child order.

use canopy::dom::RawNode;
use canopy::schema::{ChildrenConstraint, Schema, SchemaBuilder, SemanticNode};
use proptest::prelude::*;

const NAMES: &[&str] = &["alpha", "beta", "gamma"];

fn schema() -> Schema<(), (), ()> {
    let mut builder = SchemaBuilder::<(), (), ()>::new(());
    for name in NAMES {
        builder
            .define(*name)
            .children(ChildrenConstraint::NoConstraints)
            .commit()
            .unwrap();
    }
    builder.finish()
}

fn raw_tree() -> impl Strategy<Value = RawNode> {
    let name = prop::sample::select(NAMES.to_vec());
    let leaf = name.clone().prop_map(|name| RawNode::element(name));

    leaf.prop_recursive(4, 48, 5, move |inner| {
        (name.clone(), prop::collection::vec(inner, 0..5))
            .prop_map(|(name, children)| RawNode::element(name).with_children(children))
    })
}

fn same_shape(raw: &RawNode, node: &SemanticNode<'_, (), (), ()>) -> bool {
    raw.name == node.name()
        && raw.children.len() == node.children().len()
        && raw
            .children
            .iter()
            .zip(node.children())
            .all(|(raw_child, child)| same_shape(raw_child, child))
}

fn node_count(raw: &RawNode) -> usize {
    1 + raw.children.iter().map(node_count).sum::<usize>()
}

proptest! {
    #[test]
    fn conversion_preserves_shape(raw in raw_tree()) {
        let schema = schema();
        let tree = schema.convert(&raw).unwrap();

        prop_assert!(same_shape(&raw, &tree));

        // Every node carries one of the registered names, so summing the
        // per-kind descendant counts plus the root covers the whole tree.
        let descendants: usize = NAMES
            .iter()
            .map(|name| tree.get_all_descendants(*name).len())
            .sum();
        prop_assert_eq!(node_count(&raw), descendants + 1);
    }

    #[test]
    fn conversion_is_deterministic(raw in raw_tree()) {
        let schema = schema();
        let first = schema.convert(&raw).unwrap();
        let second = schema.convert(&raw).unwrap();

        prop_assert_eq!(first.to_string(), second.to_string());
    }
}
