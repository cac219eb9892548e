//! Breadth-first constraint validation
//!
//! [`validate`] walks the whole semantic tree from the root, visiting every
//! node exactly once and checking that node's own children against its own
//! definition's constraint. Constraints are never inherited or aggregated
//! across levels. The walk stops at the first violation.
//!
//! The `Contains` case is a closed whitelist: observed child counts are
//! keyed by kind name, each listed entry is checked against its bounds and
//! removed, and any leftover kinds fail the node. The `match` over
//! [`ChildrenConstraint`] is exhaustive, so adding a variant will not
//! compile until this module handles it.

use super::constraints::{ChildrenAppearance, ChildrenConstraint};
use super::error::{truncate, SchemaError, RENDER_LIMIT};
use super::node::SemanticNode;
use std::collections::{BTreeMap, VecDeque};

/// Validate a converted tree, failing fast on the first violation in
/// breadth-first order.
pub fn validate<S, C, T>(root: &SemanticNode<'_, S, C, T>) -> Result<(), SchemaError> {
    let mut queue = VecDeque::new();
    queue.push_back(root);

    while let Some(node) = queue.pop_front() {
        check_children(node)?;
        queue.extend(node.children().iter());
    }

    Ok(())
}

fn check_children<S, C, T>(node: &SemanticNode<'_, S, C, T>) -> Result<(), SchemaError> {
    let constraint =
        node.definition()
            .constraint()
            .ok_or_else(|| SchemaError::MissingConstraint {
                kind: node.name().to_string(),
            })?;

    match constraint {
        ChildrenConstraint::NoConstraints => Ok(()),
        ChildrenConstraint::None => check_none(node),
        ChildrenConstraint::Contains(entries) => check_contains(node, entries),
    }
}

fn check_none<S, C, T>(node: &SemanticNode<'_, S, C, T>) -> Result<(), SchemaError> {
    if node.children().is_empty() {
        return Ok(());
    }

    Err(children_error(
        node,
        format!("has {} children", node.children().len()),
        "has no children".to_string(),
    ))
}

fn check_contains<S, C, T>(
    node: &SemanticNode<'_, S, C, T>,
    entries: &[ChildrenAppearance],
) -> Result<(), SchemaError> {
    // BTreeMap keeps the leftover-kinds message deterministic.
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for child in node.children() {
        *counts.entry(child.name()).or_insert(0) += 1;
    }

    for entry in entries {
        let observed = counts.remove(entry.kind.name()).unwrap_or(0);

        if observed < entry.min || !entry.max.allows(observed) {
            return Err(children_error(
                node,
                format!("has {} of {}", observed, entry.kind),
                format!(
                    "has (min: {}, max: {}) of {}",
                    entry.min, entry.max, entry.kind
                ),
            ));
        }
    }

    if !counts.is_empty() {
        let names: Vec<&str> = counts.keys().copied().collect();
        return Err(children_error(
            node,
            format!("contains {}", names.join(", ")),
            "contains no such children".to_string(),
        ));
    }

    Ok(())
}

fn children_error<S, C, T>(
    node: &SemanticNode<'_, S, C, T>,
    actual: String,
    expected: String,
) -> SchemaError {
    SchemaError::ChildrenCardinality {
        node: truncate(&node.to_string(), RENDER_LIMIT),
        raw: truncate(&node.raw().to_string(), RENDER_LIMIT),
        line: node.raw().line,
        actual,
        expected,
    }
}
