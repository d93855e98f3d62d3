//! Tree-sitter node helpers
//!
//! Small traversal and conversion functions shared by grammar parsers.

use tree_sitter::Node;

use crate::domain::value_objects::{Position, Span};
use crate::error::HeraldResult;

/// Comment kinds that tree-sitter inserts anywhere as extras
pub fn is_comment(node: &Node<'_>) -> bool {
    matches!(node.kind(), "line_comment" | "block_comment")
}

/// First direct child with the given kind
pub fn find_child_by_kind<'t>(node: Node<'t>, kind: &str) -> Option<Node<'t>> {
    let mut cursor = node.walk();
    let found = node.children(&mut cursor).find(|child| child.kind() == kind);
    found
}

/// Whether any direct child has the given kind (including anonymous tokens)
pub fn has_child_kind(node: Node<'_>, kind: &str) -> bool {
    find_child_by_kind(node, kind).is_some()
}

/// Named children, comments excluded
pub fn named_children(node: Node<'_>) -> Vec<Node<'_>> {
    let mut cursor = node.walk();
    let children = node
        .named_children(&mut cursor)
        .filter(|child| !is_comment(child))
        .collect();
    children
}

/// Source text covered by a node
pub fn node_text<'s>(node: &Node<'_>, source: &'s str) -> &'s str {
    source.get(node.byte_range()).unwrap_or_default()
}

/// Zero-based span of a node
pub fn node_span(node: &Node<'_>) -> HeraldResult<Span> {
    let start = node.start_position();
    let end = node.end_position();
    Span::new(
        Position::new(start.row, start.column),
        Position::new(end.row, end.column),
    )
}

/// First ERROR or MISSING node in document order
pub fn first_error(node: Node<'_>) -> Option<Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    let children: Vec<_> = node.children(&mut cursor).collect();
    children.into_iter().find_map(first_error)
}
