//! Declaration extraction: from a parsed compilation unit to a [`TreeInfo`].

use std::collections::BTreeSet;
use std::path::Path;

use log::debug;
use model_helper_syntax::{JavaSyntaxTree, SyntaxTree, TypeDecl};

use crate::error::{ModelHelperError, ModelHelperResult};
use crate::model::{FieldDeclaration, TreeInfo};

/// Every variable declared by a field declaration inside `scope`, before any filtering.
pub fn field_declarations<T: SyntaxTree + ?Sized>(tree: &T, scope: &TypeDecl) -> Vec<FieldDeclaration> {
    let mut declarations = Vec::new();
    for field in tree.find_field_declarations(scope) {
        let annotations: BTreeSet<String> = field.annotations.iter().cloned().collect();
        for variable in tree.find_variable_declarators(&field) {
            declarations.push(FieldDeclaration {
                name: variable.name,
                declared_type: field.declared_type.clone(),
                modifiers: field.modifiers.clone(),
                annotations: annotations.clone(),
            });
        }
    }
    declarations
}

/// Extracts the primary type, its supertype and its persistent fields.
pub fn extract_tree<T: SyntaxTree + ?Sized>(tree: &T) -> ModelHelperResult<TreeInfo> {
    let primary = tree
        .find_primary_type()
        .ok_or(ModelHelperError::NoPrimaryType)?;
    let mut info = TreeInfo::new(
        primary.name.clone(),
        primary.supertype.clone().unwrap_or_default(),
    );

    for declaration in field_declarations(tree, &primary) {
        if !declaration.is_persistent() {
            debug!(
                "skipping {}.{}: constant or transient",
                info.type_name, declaration.name
            );
            continue;
        }
        info.fields.insert(declaration.name, declaration.declared_type);
    }

    debug!(
        "extracted {} (parent {:?}) with {} fields",
        info.type_name,
        info.parent_type_name,
        info.fields.len()
    );
    Ok(info)
}

/// Parses Java source text and extracts its [`TreeInfo`].
pub fn extract(source_text: &str) -> ModelHelperResult<TreeInfo> {
    let tree = JavaSyntaxTree::parse(source_text)?;
    extract_tree(&tree)
}

/// Reads and extracts a Java source file. An empty path means no file was chosen.
pub fn extract_file(path: impl AsRef<Path>) -> ModelHelperResult<TreeInfo> {
    let path = path.as_ref();
    if path.as_os_str().is_empty() {
        return Err(ModelHelperError::NoFileSelected);
    }
    debug!("reading {}", path.display());
    let source = std::fs::read_to_string(path).map_err(|source| ModelHelperError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    extract(&source)
}
