//! Records passed between the extractor, the generators and the caller.

use std::collections::BTreeSet;

use serde::ser::{Serialize, SerializeMap, Serializer};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Modifier marking a field as a constant.
pub const FINAL_MODIFIER: &str = "final";
/// Annotation marking a field as not persisted.
pub const TRANSIENT_ANNOTATION: &str = "Transient";

/// One declared variable of a field declaration.
///
/// A declaration such as `private int a, b;` yields two of these sharing
/// the same type, modifiers and annotations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDeclaration {
    pub name: String,
    pub declared_type: String,
    pub modifiers: BTreeSet<String>,
    pub annotations: BTreeSet<String>,
}

impl FieldDeclaration {
    /// `final` fields and fields annotated exactly `@Transient` are left out of
    /// every generated artifact.
    pub fn is_persistent(&self) -> bool {
        !self.modifiers.contains(FINAL_MODIFIER) && !self.annotations.contains(TRANSIENT_ANNOTATION)
    }
}

/// Field name to declared type, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMap {
    entries: Vec<(String, String)>,
}

impl FieldMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a field. A name that is already present keeps its position
    /// and gets the new type; the old type is returned.
    pub fn insert(&mut self, name: impl Into<String>, declared_type: impl Into<String>) -> Option<String> {
        let name = name.into();
        let declared_type = declared_type.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, ty)) => Some(std::mem::replace(ty, declared_type)),
            None => {
                self.entries.push((name, declared_type));
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, ty)| ty.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(name, ty)| (name.as_str(), ty.as_str()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FieldMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = FieldMap::new();
        for (name, ty) in iter {
            map.insert(name, ty);
        }
        map
    }
}

impl Serialize for FieldMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, ty) in &self.entries {
            map.serialize_entry(name, ty)?;
        }
        map.end()
    }
}

/// What the extractor found in one source file.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct TreeInfo {
    pub type_name: String,
    /// Simple name of the supertype, empty when there is none.
    pub parent_type_name: String,
    pub fields: FieldMap,
}

impl TreeInfo {
    pub fn new(type_name: impl Into<String>, parent_type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            parent_type_name: parent_type_name.into(),
            fields: FieldMap::new(),
        }
    }

    pub fn with_field(mut self, name: impl Into<String>, declared_type: impl Into<String>) -> Self {
        self.fields.insert(name, declared_type);
        self
    }
}

/// The four generated snippets.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct GeneratedArtifacts {
    pub messages: String,
    pub metadata: String,
    pub reset_body: String,
    pub param_body: String,
}

impl GeneratedArtifacts {
    pub fn get(&self, kind: ArtifactKind) -> &str {
        match kind {
            ArtifactKind::Messages => &self.messages,
            ArtifactKind::Metadata => &self.metadata,
            ArtifactKind::ResetBody => &self.reset_body,
            ArtifactKind::ParamBody => &self.param_body,
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString, serde::Serialize,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    #[strum(to_string = "messages")]
    Messages,
    #[strum(to_string = "metadata", serialize = "annotations")]
    Metadata,
    #[strum(to_string = "reset", serialize = "constructor")]
    ResetBody,
    #[strum(to_string = "params", serialize = "setup-params")]
    ParamBody,
}

impl ArtifactKind {
    /// Heading shown above the artifact.
    pub fn title(&self) -> &'static str {
        match self {
            ArtifactKind::Messages => "Messages",
            ArtifactKind::Metadata => "Annotations",
            ArtifactKind::ResetBody => "Constructor Body",
            ArtifactKind::ParamBody => "setupParams Body",
        }
    }
}
