use std::collections::BTreeSet;

use tree_sitter::Node;

use super::{find_child, node_text};

const ANNOTATION_KINDS: [&str; 2] = ["marker_annotation", "annotation"];

/// Check if a node is an annotation (`@Foo` or `@Foo(...)`)
pub fn is_annotation(node: Node<'_>) -> bool {
    ANNOTATION_KINDS.contains(&node.kind())
}

/// Modifier keywords of a declaration, e.g. `private static final`.
pub fn modifier_keywords(declaration: Node<'_>) -> BTreeSet<String> {
    let Some(modifiers) = find_child(declaration, "modifiers") else {
        return BTreeSet::new();
    };
    let mut cursor = modifiers.walk();
    let keywords = modifiers
        .children(&mut cursor)
        .filter(|child| !child.is_named())
        .map(|child| child.kind().to_string())
        .collect();
    keywords
}

/// Annotation names of a declaration as written, so `@javax.persistence.Transient`
/// yields `javax.persistence.Transient`.
pub fn annotation_names(declaration: Node<'_>, source: &str) -> Vec<String> {
    let Some(modifiers) = find_child(declaration, "modifiers") else {
        return Vec::new();
    };
    let mut cursor = modifiers.walk();
    let names = modifiers
        .children(&mut cursor)
        .filter(|child| is_annotation(*child))
        .filter_map(|annotation| annotation.child_by_field_name("name"))
        .filter_map(|name| node_text(name, source))
        .map(str::to_string)
        .collect();
    names
}
