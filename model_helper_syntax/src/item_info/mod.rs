//! Owned declaration records produced by [`SyntaxTree`](crate::SyntaxTree) queries.

use std::collections::BTreeSet;
use std::ops::Range;

use strum::{AsRefStr, EnumIter, EnumString};

/// Byte range of a declaration in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

/// Kinds of type declaration that can be a primary type.
///
/// The string forms are the tree-sitter node kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumString, EnumIter)]
pub enum TypeKind {
    #[strum(serialize = "class_declaration")]
    Class,
    #[strum(serialize = "interface_declaration")]
    Interface,
    #[strum(serialize = "enum_declaration")]
    Enum,
    #[strum(serialize = "record_declaration")]
    Record,
    #[strum(serialize = "annotation_type_declaration")]
    AnnotationType,
}

impl TypeKind {
    /// The Java keyword introducing this kind of declaration.
    pub fn keyword(&self) -> &'static str {
        match self {
            TypeKind::Class => "class",
            TypeKind::Interface => "interface",
            TypeKind::Enum => "enum",
            TypeKind::Record => "record",
            TypeKind::AnnotationType => "@interface",
        }
    }
}

/// A type declaration such as `public class Widget extends Base { ... }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDecl {
    pub name: String,
    pub kind: TypeKind,
    /// Simple name of the `extends` target, classes only.
    pub supertype: Option<String>,
    pub span: Span,
}

/// A field declaration. One declaration may introduce several variables,
/// see [`SyntaxTree::find_variable_declarators`](crate::SyntaxTree::find_variable_declarators).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDecl {
    /// Simple name of the declared type, without package or type arguments.
    pub declared_type: String,
    /// Modifier keywords (`private`, `static`, `final`, ...).
    pub modifiers: BTreeSet<String>,
    /// Annotation names as written, in source order.
    pub annotations: Vec<String>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableDecl {
    pub name: String,
    pub span: Span,
}
