//! Template generation: four independent snippets from one [`TreeInfo`].
//!
//! Every generator builds an explicit ordered list of entries first and
//! renders it second, so field order in the output always follows
//! [`TreeInfo::fields`].

pub mod defaults;
pub mod messages;
pub mod metadata;
pub mod params;

use log::debug;

use crate::config::GeneratorConfig;
use crate::model::{GeneratedArtifacts, TreeInfo};

pub use defaults::DefaultValue;
pub use messages::MessageEntry;

/// Generates artifacts according to a [`GeneratorConfig`].
#[derive(Debug, Clone, Default)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Message catalog block with a banner and a trailing blank line.
    pub fn messages(&self, info: &TreeInfo) -> String {
        messages::render(&info.type_name, &messages::entries(&self.config, info))
    }

    /// `@KRUDFields(edit={...}, include={...})` annotation block.
    pub fn metadata(&self, info: &TreeInfo) -> String {
        let include = metadata::include_entries(&self.config, info);
        let edit = metadata::edit_entries(&include);
        metadata::render(&include, &edit)
    }

    /// Constructor body resetting every field to its zero value.
    pub fn reset_body(&self, info: &TreeInfo) -> String {
        defaults::render(info)
    }

    /// `setupParams` body copying every field into the parameter bag.
    pub fn param_body(&self, info: &TreeInfo) -> String {
        params::render(&self.config, info)
    }

    pub fn generate_all(&self, info: &TreeInfo) -> GeneratedArtifacts {
        debug!("generating artifacts for {}", info.type_name);
        GeneratedArtifacts {
            messages: self.messages(info),
            metadata: self.metadata(info),
            reset_body: self.reset_body(info),
            param_body: self.param_body(info),
        }
    }
}

pub fn generate_messages(info: &TreeInfo) -> String {
    Generator::default().messages(info)
}

pub fn generate_metadata(info: &TreeInfo) -> String {
    Generator::default().metadata(info)
}

pub fn generate_reset_body(info: &TreeInfo) -> String {
    Generator::default().reset_body(info)
}

pub fn generate_param_body(info: &TreeInfo) -> String {
    Generator::default().param_body(info)
}

pub fn generate_all(info: &TreeInfo) -> GeneratedArtifacts {
    Generator::default().generate_all(info)
}

/// Joins lines, terminating each with `\n`.
fn join_lines<I, S>(lines: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines.into_iter().fold(String::new(), |mut out, line| {
        out.push_str(line.as_ref());
        out.push('\n');
        out
    })
}
