//! Prelude module for convenient imports.
//!
//! ```rust,ignore
//! use model_helper::prelude::*;
//! ```

pub use crate::config::{ContentLineRule, GeneratorConfig};
pub use crate::error::{ModelHelperError, ModelHelperResult};
pub use crate::extractor::{extract, extract_file, extract_tree, field_declarations};
pub use crate::generator::{
    Generator, generate_all, generate_messages, generate_metadata, generate_param_body,
    generate_reset_body,
};
pub use crate::model::{ArtifactKind, FieldDeclaration, FieldMap, GeneratedArtifacts, TreeInfo};
pub use crate::pipeline::{process_file, process_source};
pub use crate::utils::humanize;
pub use model_helper_syntax::{JavaSyntaxTree, SyntaxTree};
