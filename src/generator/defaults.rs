use crate::model::TreeInfo;

use super::join_lines;

/// Zero value a field is reset to, chosen by its declared type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultValue {
    EmptyString,
    EmptyList,
    False,
    Null,
}

impl DefaultValue {
    /// Case-insensitive on the simple type name; unknown types are `Null`.
    pub fn for_type(declared_type: &str) -> Self {
        match declared_type.to_lowercase().as_str() {
            "string" => DefaultValue::EmptyString,
            "list" => DefaultValue::EmptyList,
            "boolean" => DefaultValue::False,
            _ => DefaultValue::Null,
        }
    }

    pub fn literal(&self) -> &'static str {
        match self {
            DefaultValue::EmptyString => "\"\"",
            DefaultValue::EmptyList => "new ArrayList<>()",
            DefaultValue::False => "false",
            DefaultValue::Null => "null",
        }
    }
}

pub fn render(info: &TreeInfo) -> String {
    join_lines(info.fields.iter().map(|(name, ty)| {
        format!("this.{name} = {};", DefaultValue::for_type(ty).literal())
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_value_for_type() {
        assert_eq!(DefaultValue::for_type("String"), DefaultValue::EmptyString);
        assert_eq!(DefaultValue::for_type("STRING"), DefaultValue::EmptyString);
        assert_eq!(DefaultValue::for_type("List"), DefaultValue::EmptyList);
        assert_eq!(DefaultValue::for_type("list"), DefaultValue::EmptyList);
        assert_eq!(DefaultValue::for_type("boolean"), DefaultValue::False);
        assert_eq!(DefaultValue::for_type("Boolean"), DefaultValue::False);
        assert_eq!(DefaultValue::for_type("int"), DefaultValue::Null);
        assert_eq!(DefaultValue::for_type("CustomType"), DefaultValue::Null);
        assert_eq!(DefaultValue::for_type(""), DefaultValue::Null);
    }
}
