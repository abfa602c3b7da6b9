//! Node-level helpers shared by the Java tree queries.

pub mod attributes;
pub mod types;

use tree_sitter::Node;

/// Source text covered by `node`.
pub fn node_text<'s>(node: Node<'_>, source: &'s str) -> Option<&'s str> {
    node.utf8_text(source.as_bytes()).ok()
}

/// First direct child of `node` with the given kind.
pub fn find_child<'t>(node: Node<'t>, kind: &str) -> Option<Node<'t>> {
    let mut cursor = node.walk();
    let found = node.children(&mut cursor).find(|child| child.kind() == kind);
    found
}

/// Every named descendant of `node` with the given kind, in pre-order (source order).
///
/// Walks with an explicit stack; expression chains can nest thousands of levels deep.
pub fn collect_descendants<'t>(node: Node<'t>, kind: &str, out: &mut Vec<Node<'t>>) {
    let mut stack = named_children_reversed(node);
    while let Some(current) = stack.pop() {
        if current.kind() == kind {
            out.push(current);
        }
        stack.extend(named_children_reversed(current));
    }
}

fn named_children_reversed(node: Node<'_>) -> Vec<Node<'_>> {
    let mut cursor = node.walk();
    let mut children: Vec<Node<'_>> = node.named_children(&mut cursor).collect();
    children.reverse();
    children
}
