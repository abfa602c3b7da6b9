use tree_sitter::Node;

use super::node_text;

/// Simple name of a type node: no package qualifier, type arguments or array dimensions.
///
/// `java.util.Map<K, V>` -> `Map`, `String[]` -> `String`, `int` -> `int`.
pub fn simple_type_name(node: Node<'_>, source: &str) -> Option<String> {
    match node.kind() {
        "generic_type" => first_named_child(node).and_then(|inner| simple_type_name(inner, source)),
        "array_type" => node
            .child_by_field_name("element")
            .and_then(|element| simple_type_name(element, source)),
        "scoped_type_identifier" | "annotated_type" => {
            last_named_child(node).and_then(|inner| simple_type_name(inner, source))
        }
        _ => node_text(node, source).map(|text| text.trim().to_string()),
    }
}

fn first_named_child(node: Node<'_>) -> Option<Node<'_>> {
    let mut cursor = node.walk();
    let first = node.named_children(&mut cursor).next();
    first
}

fn last_named_child(node: Node<'_>) -> Option<Node<'_>> {
    let mut cursor = node.walk();
    let last = node.named_children(&mut cursor).last();
    last
}
