//! One extraction-then-generation run.
//!
//! The returned values are owned by the caller, which replaces them on the
//! next run; nothing is kept between runs.

use std::path::Path;

use crate::error::ModelHelperResult;
use crate::extractor::{extract, extract_file};
use crate::generator::Generator;
use crate::model::{GeneratedArtifacts, TreeInfo};

pub fn process_file(
    path: impl AsRef<Path>,
    generator: &Generator,
) -> ModelHelperResult<(TreeInfo, GeneratedArtifacts)> {
    let info = extract_file(path)?;
    let artifacts = generator.generate_all(&info);
    Ok((info, artifacts))
}

pub fn process_source(
    source_text: &str,
    generator: &Generator,
) -> ModelHelperResult<(TreeInfo, GeneratedArtifacts)> {
    let info = extract(source_text)?;
    let artifacts = generator.generate_all(&info);
    Ok((info, artifacts))
}
