//! tree-sitter backed [`SyntaxTree`] for Java source.

use std::str::FromStr;

use log::{debug, trace};
use tree_sitter::{Node, Parser, Tree};

use crate::errors::{SyntaxError, SyntaxResult};
use crate::item_info::{FieldDecl, Span, TypeDecl, TypeKind, VariableDecl};
use crate::tree::SyntaxTree;
use crate::utils::attributes::{annotation_names, modifier_keywords};
use crate::utils::types::simple_type_name;
use crate::utils::{collect_descendants, node_text};

const FIELD_DECLARATION: &str = "field_declaration";

/// Named nodes allowed directly under `program` besides type declarations.
const COMPILATION_UNIT_ITEMS: [&str; 5] = [
    "package_declaration",
    "import_declaration",
    "module_declaration",
    "line_comment",
    "block_comment",
];

/// A parsed Java compilation unit.
///
/// Parsing is strict: source that tree-sitter can only recover from with
/// error or missing nodes is rejected with [`SyntaxError::Parse`].
pub struct JavaSyntaxTree {
    source: String,
    tree: Tree,
}

impl std::fmt::Debug for JavaSyntaxTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JavaSyntaxTree")
            .field("len", &self.source.len())
            .field("root", &self.tree.root_node().kind())
            .finish()
    }
}

impl JavaSyntaxTree {
    pub fn parse(source: impl Into<String>) -> SyntaxResult<Self> {
        let source = source.into();
        let mut parser = Parser::new();
        parser.set_language(&tree_sitter_java::LANGUAGE.into())?;
        let tree = parser.parse(&source, None).ok_or(SyntaxError::Cancelled)?;

        let root = tree.root_node();
        if root.has_error() {
            let (line, column) = first_error(root)
                .map(|node| {
                    let point = node.start_position();
                    (point.row + 1, point.column + 1)
                })
                .unwrap_or((1, 1));
            debug!("rejecting Java source: syntax error at {line}:{column}");
            return Err(SyntaxError::Parse { line, column });
        }

        // tree-sitter-java accepts bare statements at the top level; a compilation unit does not.
        if let Some(stray) = first_stray_item(root) {
            let point = stray.start_position();
            debug!(
                "rejecting Java source: {} outside a type at {}:{}",
                stray.kind(),
                point.row + 1,
                point.column + 1
            );
            return Err(SyntaxError::Parse {
                line: point.row + 1,
                column: point.column + 1,
            });
        }

        trace!(
            "parsed Java source: {} top-level items",
            root.named_child_count()
        );
        Ok(Self { source, tree })
    }

    /// Finds the node a declaration was built from.
    fn node_at(&self, span: Span, kind: &str) -> Option<Node<'_>> {
        let mut node = self
            .tree
            .root_node()
            .descendant_for_byte_range(span.start, span.end)?;
        loop {
            if node.kind() == kind && Span::from(node.byte_range()) == span {
                return Some(node);
            }
            node = node.parent()?;
        }
    }

    fn type_decl(&self, node: Node<'_>) -> Option<TypeDecl> {
        let kind = TypeKind::from_str(node.kind()).ok()?;
        let name = node
            .child_by_field_name("name")
            .and_then(|name| node_text(name, &self.source))?
            .to_string();
        let supertype = match kind {
            TypeKind::Class => node
                .child_by_field_name("superclass")
                .and_then(|superclass| {
                    let mut cursor = superclass.walk();
                    let ty = superclass.named_children(&mut cursor).next();
                    ty
                })
                .and_then(|ty| simple_type_name(ty, &self.source)),
            _ => None,
        };
        Some(TypeDecl {
            name,
            kind,
            supertype,
            span: node.byte_range().into(),
        })
    }

    fn field_decl(&self, node: Node<'_>) -> Option<FieldDecl> {
        let declared_type = node
            .child_by_field_name("type")
            .and_then(|ty| simple_type_name(ty, &self.source))?;
        Some(FieldDecl {
            declared_type,
            modifiers: modifier_keywords(node),
            annotations: annotation_names(node, &self.source),
            span: node.byte_range().into(),
        })
    }
}

impl SyntaxTree for JavaSyntaxTree {
    fn find_primary_type(&self) -> Option<TypeDecl> {
        let root = self.tree.root_node();
        let mut cursor = root.walk();
        let primary = root
            .named_children(&mut cursor)
            .find_map(|child| self.type_decl(child));
        if let Some(decl) = &primary {
            debug!(
                "primary type: {} {} (extends {:?})",
                decl.kind.keyword(),
                decl.name,
                decl.supertype
            );
        }
        primary
    }

    fn find_field_declarations(&self, scope: &TypeDecl) -> Vec<FieldDecl> {
        let Some(scope_node) = self.node_at(scope.span, scope.kind.as_ref()) else {
            debug!("scope {} is not part of this tree", scope.name);
            return Vec::new();
        };
        let mut nodes = Vec::new();
        collect_descendants(scope_node, FIELD_DECLARATION, &mut nodes);
        nodes
            .into_iter()
            .filter_map(|node| self.field_decl(node))
            .collect()
    }

    fn find_variable_declarators(&self, field: &FieldDecl) -> Vec<VariableDecl> {
        let Some(field_node) = self.node_at(field.span, FIELD_DECLARATION) else {
            return Vec::new();
        };
        let mut cursor = field_node.walk();
        let declarators = field_node
            .children_by_field_name("declarator", &mut cursor)
            .filter_map(|declarator| {
                let name = declarator.child_by_field_name("name")?;
                Some(VariableDecl {
                    name: node_text(name, &self.source)?.to_string(),
                    span: declarator.byte_range().into(),
                })
            })
            .collect();
        declarators
    }
}

/// The first top-level node that is neither a type declaration nor a
/// package, import, module or comment item.
fn first_stray_item(root: Node<'_>) -> Option<Node<'_>> {
    let mut cursor = root.walk();
    let stray = root.named_children(&mut cursor).find(|child| {
        TypeKind::from_str(child.kind()).is_err() && !COMPILATION_UNIT_ITEMS.contains(&child.kind())
    });
    stray
}

/// The first error or missing node under `node`, in source order.
fn first_error(node: Node<'_>) -> Option<Node<'_>> {
    let mut stack = vec![node];
    while let Some(current) = stack.pop() {
        if current.is_error() || current.is_missing() {
            return Some(current);
        }
        let mut cursor = current.walk();
        let mut children: Vec<Node<'_>> = current
            .children(&mut cursor)
            .filter(|child| child.has_error())
            .collect();
        children.reverse();
        stack.extend(children);
    }
    None
}
