//! Error types for schema setup, conversion, and validation
//!
//! Every failure mode of the engine lives in [`SchemaError`]. These are
//! structural or schema mismatches, never transient faults: they surface to
//! the caller and nothing is retried. Rendered node forms embedded in
//! messages are truncated to keep them readable.

use std::fmt;

/// Cap on rendered node/raw-node forms embedded in error messages.
pub(crate) const RENDER_LIMIT: usize = 200;

pub(crate) fn truncate(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }

    let cut: String = text.chars().take(limit.saturating_sub(3)).collect();
    format!("{}...", cut)
}

/// Where an accessor's uniqueness contract was violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardinalityScope {
    Children,
    Descendants,
}

impl fmt::Display for CardinalityScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardinalityScope::Children => f.write_str("children"),
            CardinalityScope::Descendants => f.write_str("descendants"),
        }
    }
}

/// Everything that can go wrong during setup, conversion, validation, or
/// node access.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaError {
    /// No registered matcher accepted a raw node during conversion.
    UnmatchedNode { raw: String, line: Option<u32> },
    /// Two definitions were committed under the same name.
    DuplicateDefinition { kind: String },
    /// A `Contains` constraint lists the same kind twice.
    DuplicateConstraintKind { definition: String, kind: String },
    /// A definition reached validation without any children constraint.
    /// A setup bug, not a malformed document.
    MissingConstraint { kind: String },
    /// A node's children violate its `None` or `Contains` constraint.
    ChildrenCardinality {
        /// Rendered semantic node, truncated.
        node: String,
        /// Rendered raw node, truncated.
        raw: String,
        line: Option<u32>,
        actual: String,
        expected: String,
    },
    /// An accessor found zero or several matches where exactly one (or at
    /// most one) was required.
    Cardinality {
        kind: String,
        found: usize,
        scope: CardinalityScope,
    },
    /// `parse` was called on a node whose definition declared no parser.
    NoParserDefined { kind: String },
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaError::UnmatchedNode { raw, line } => {
                write!(f, "No definition found for {}", raw)?;
                if let Some(line) = line {
                    write!(f, " (line {})", line)?;
                }
                Ok(())
            }
            SchemaError::DuplicateDefinition { kind } => {
                write!(f, "A definition named {} is already registered", kind)
            }
            SchemaError::DuplicateConstraintKind { definition, kind } => {
                write!(
                    f,
                    "Definition {} lists {} more than once in its children constraint",
                    definition, kind
                )
            }
            SchemaError::MissingConstraint { kind } => {
                write!(f, "No children constraints defined for {}", kind)
            }
            SchemaError::ChildrenCardinality {
                node,
                raw,
                line,
                actual,
                expected,
            } => {
                write!(f, "Node: {}\nRaw node: {}", node, raw)?;
                if let Some(line) = line {
                    write!(f, "\nLine: {}", line)?;
                }
                write!(f, "\nActual: {}\nExpected: {}", actual, expected)
            }
            SchemaError::Cardinality { kind, found, scope } => {
                write!(f, "Found {} {} of {}", found, scope, kind)
            }
            SchemaError::NoParserDefined { kind } => {
                write!(f, "No parser defined for {}", kind)
            }
        }
    }
}

impl std::error::Error for SchemaError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_leaves_short_text_alone() {
        assert_eq!(truncate("short", 200), "short");
    }

    #[test]
    fn truncate_bounds_long_text_with_ellipsis() {
        let long = "x".repeat(500);
        let rendered = truncate(&long, 200);
        assert_eq!(rendered.chars().count(), 200);
        assert!(rendered.ends_with("..."));
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        let long = "é".repeat(300);
        let rendered = truncate(&long, 200);
        assert_eq!(rendered.chars().count(), 200);
    }

    #[test]
    fn children_cardinality_message_includes_line_when_present() {
        let error = SchemaError::ChildrenCardinality {
            node: "<doc>".to_string(),
            raw: "<doc>".to_string(),
            line: Some(3),
            actual: "has 1 children".to_string(),
            expected: "has no children".to_string(),
        };

        let message = error.to_string();
        assert!(message.contains("Line: 3"));
        assert!(message.contains("Actual: has 1 children"));
        assert!(message.contains("Expected: has no children"));
    }
}
