//! Generator configuration.
//!
//! The supertype names that switch on the extra style/content entries are
//! configurable, built via `typed-builder`.

use strum::{AsRefStr, EnumString};
use typed_builder::TypedBuilder;

/// Supertype whose subclasses get the style/config entries.
pub const CONFIGURABLE_CONTENT: &str = "FoundationConfigurableContent";
/// Supertype of plain content models.
pub const GENERIC_CONTENT: &str = "GenericContent";

/// When the `models.content.<Type>` message line is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, AsRefStr, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum ContentLineRule {
    /// For every type, whatever its supertype.
    #[default]
    Always,
    /// Only when the supertype is one of [`GeneratorConfig::content_parents`].
    RecognizedParents,
}

/// Configuration for the template generator.
///
/// # Examples
///
/// ```
/// use model_helper::config::{ContentLineRule, GeneratorConfig};
///
/// // Create with defaults
/// let config = GeneratorConfig::builder().build();
/// assert_eq!(config.configurable_parent, "FoundationConfigurableContent");
///
/// // Customize options
/// let config = GeneratorConfig::builder()
///     .configurable_parent("StyledContent")
///     .content_line(ContentLineRule::RecognizedParents)
///     .build();
/// ```
#[derive(Debug, Clone, TypedBuilder)]
#[builder(doc)]
pub struct GeneratorConfig {
    /// Supertype that adds `config`, `configHandle`, `localConfig` and the style tab
    #[builder(default = CONFIGURABLE_CONTENT.to_string(), setter(into))]
    pub configurable_parent: String,

    /// Supertypes treated as content-bearing for the content message line
    #[builder(default = vec![GENERIC_CONTENT.to_string(), CONFIGURABLE_CONTENT.to_string()])]
    pub content_parents: Vec<String>,

    /// Rule for the `models.content.<Type>` message line
    #[builder(default)]
    pub content_line: ContentLineRule,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl GeneratorConfig {
    pub fn is_configurable(&self, parent_type_name: &str) -> bool {
        !parent_type_name.is_empty() && parent_type_name == self.configurable_parent
    }

    pub fn is_content_parent(&self, parent_type_name: &str) -> bool {
        self.content_parents.iter().any(|p| p == parent_type_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_generator_config_defaults() {
        let config = GeneratorConfig::default();
        assert_eq!(config.configurable_parent, CONFIGURABLE_CONTENT);
        assert_eq!(config.content_parents, [GENERIC_CONTENT, CONFIGURABLE_CONTENT]);
        assert_eq!(config.content_line, ContentLineRule::Always);
    }

    #[test]
    fn test_generator_config_builder() {
        let config = GeneratorConfig::builder()
            .configurable_parent("StyledContent")
            .content_parents(vec!["Page".to_string()])
            .content_line(ContentLineRule::RecognizedParents)
            .build();

        assert!(config.is_configurable("StyledContent"));
        assert!(!config.is_configurable(CONFIGURABLE_CONTENT));
        assert!(config.is_content_parent("Page"));
        assert!(!config.is_content_parent(GENERIC_CONTENT));
    }

    #[test]
    fn test_empty_parent_is_never_configurable() {
        let config = GeneratorConfig::builder().configurable_parent("").build();
        assert!(!config.is_configurable(""));
    }

    #[test]
    fn test_content_line_rule_names() {
        assert_eq!(
            ContentLineRule::from_str("recognized-parents").unwrap(),
            ContentLineRule::RecognizedParents
        );
        assert_eq!(ContentLineRule::Always.as_ref(), "always");
    }
}
