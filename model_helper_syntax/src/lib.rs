//! # model_helper_syntax
//!
//! Structural queries over a parsed Java compilation unit.
//!
//! The [`SyntaxTree`] trait is the only thing the extractor in `model_helper`
//! depends on. [`JavaSyntaxTree`] implements it on top of `tree-sitter-java`.
//!
//! ```rust,ignore
//! use model_helper_syntax::{JavaSyntaxTree, SyntaxTree};
//!
//! let tree = JavaSyntaxTree::parse("public class Widget { private String name; }")?;
//! let widget = tree.find_primary_type().unwrap();
//! for field in tree.find_field_declarations(&widget) {
//!     for var in tree.find_variable_declarators(&field) {
//!         println!("{}: {}", var.name, field.declared_type);
//!     }
//! }
//! ```

pub mod errors;
pub mod item_info;
pub mod java;
pub mod tree;
pub mod utils;

pub use errors::{SyntaxError, SyntaxResult};
pub use item_info::{FieldDecl, Span, TypeDecl, TypeKind, VariableDecl};
pub use java::JavaSyntaxTree;
pub use tree::SyntaxTree;
