use crate::item_info::{FieldDecl, TypeDecl, VariableDecl};

/// Queries the extractor needs from a parsed compilation unit.
///
/// Declarations are returned as owned values carrying the [`Span`](crate::Span)
/// of the node they came from, so an implementation can find the node again
/// when it is handed back as a scope.
pub trait SyntaxTree {
    /// The first top-level type declaration, if the unit has one.
    fn find_primary_type(&self) -> Option<TypeDecl>;

    /// Every field declaration nested anywhere inside `scope`, in source order.
    fn find_field_declarations(&self, scope: &TypeDecl) -> Vec<FieldDecl>;

    /// The variables introduced by `field`, in source order.
    fn find_variable_declarators(&self, field: &FieldDecl) -> Vec<VariableDecl>;
}
