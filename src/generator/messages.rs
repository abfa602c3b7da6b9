use std::fmt;

use log::debug;

use crate::config::{ContentLineRule, GeneratorConfig};
use crate::model::TreeInfo;
use crate::utils::humanize;

use super::join_lines;

/// One `key = Label` line of the message catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageEntry {
    pub key: String,
    pub label: String,
}

impl MessageEntry {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

impl fmt::Display for MessageEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.key, self.label)
    }
}

pub fn entries(config: &GeneratorConfig, info: &TreeInfo) -> Vec<MessageEntry> {
    let type_name = &info.type_name;
    let type_label = humanize(type_name);
    let mut entries = vec![MessageEntry::new(type_name.clone(), type_label.clone())];

    let recognized = config.is_content_parent(&info.parent_type_name);
    let content_line = match config.content_line {
        ContentLineRule::Always => {
            if !recognized {
                debug!(
                    "content message for {type_name} emitted although {:?} is not a content parent",
                    info.parent_type_name
                );
            }
            true
        }
        ContentLineRule::RecognizedParents => recognized,
    };
    if content_line {
        entries.push(MessageEntry::new(
            format!("models.content.{type_name}"),
            type_label,
        ));
    }

    if config.is_configurable(&info.parent_type_name) {
        entries.push(MessageEntry::new(format!("{type_name}.configHandle"), "Style"));
    }

    entries.extend(
        info.fields
            .names()
            .map(|field| MessageEntry::new(format!("{type_name}.{field}"), humanize(field))),
    );
    entries
}

/// Banner, one line per entry, then a blank line so blocks can be concatenated.
pub fn render(type_name: &str, entries: &[MessageEntry]) -> String {
    let banner = format!("# ----------------------- {type_name} -----------------------");
    let mut out = join_lines(std::iter::once(banner).chain(entries.iter().map(ToString::to_string)));
    out.push('\n');
    out
}
