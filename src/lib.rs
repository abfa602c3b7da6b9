//! # Model Helper
//!
//! Boilerplate generator for Java model classes.
//!
//! A Java source file is parsed, its primary class, supertype and persistent
//! fields are extracted into a [`TreeInfo`], and four snippets are generated
//! from it:
//!
//! - **Messages**: `Type.field = Field` message catalog lines
//! - **Metadata**: a `@KRUDFields(edit={...}, include={...})` annotation
//! - **Reset body**: constructor lines resetting each field to its zero value
//! - **Param body**: `setupParams` lines copying each field into the parameter bag
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use model_helper::prelude::*;
//!
//! let info = extract("public class Widget { private String name; private int count; }")?;
//! let artifacts = generate_all(&info);
//! print!("{}", artifacts.messages);
//! // # ----------------------- Widget -----------------------
//! // Widget = Widget
//! // models.content.Widget = Widget
//! // Widget.name = Name
//! // Widget.count = Count
//! ```
//!
//! Fields declared `final` or annotated `@Transient` are not part of the model.

pub mod config;
pub mod error;
pub mod extractor;
pub mod generator;
pub mod model;
pub mod pipeline;
pub mod prelude;
pub mod utils;

pub use error::{ModelHelperError, ModelHelperResult};
pub use extractor::{extract, extract_file, extract_tree};
pub use generator::{Generator, generate_all};
pub use model::{ArtifactKind, FieldDeclaration, FieldMap, GeneratedArtifacts, TreeInfo};
pub use pipeline::{process_file, process_source};
