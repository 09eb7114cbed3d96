use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which checks a [`ShapeValidator`](crate::ShapeValidator) runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationDialect {
    /// Only the model's `"required"` list, checked by key presence.
    RequiredFields,
    /// Only the recursive key-presence and primitive-type comparison.
    TypeShape,
    /// The required list first, then the type-shape comparison.
    #[default]
    Combined,
    /// The required list, then a type-shape comparison that is strict only at
    /// the top level. Nested objects are checked from the document towards
    /// the model: every nested document key must appear in the model with
    /// the same type, but model keys may be missing from the document.
    OpenNested,
}

impl ValidationDialect {
    pub fn checks_required(&self) -> bool {
        matches!(self, Self::RequiredFields | Self::Combined | Self::OpenNested)
    }

    pub fn checks_types(&self) -> bool {
        matches!(self, Self::TypeShape | Self::Combined | Self::OpenNested)
    }

    /// Whether nested objects may omit keys the model names.
    pub fn open_nested(&self) -> bool {
        matches!(self, Self::OpenNested)
    }
}

impl fmt::Display for ValidationDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RequiredFields => write!(f, "required_fields"),
            Self::TypeShape => write!(f, "type_shape"),
            Self::Combined => write!(f, "combined"),
            Self::OpenNested => write!(f, "open_nested"),
        }
    }
}

impl FromStr for ValidationDialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "required_fields" | "required" => Ok(Self::RequiredFields),
            "type_shape" | "types" => Ok(Self::TypeShape),
            "combined" => Ok(Self::Combined),
            "open_nested" => Ok(Self::OpenNested),
            other => Err(format!("unknown validation dialect: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_combined() {
        assert_eq!(ValidationDialect::default(), ValidationDialect::Combined);
    }

    #[test]
    fn check_selection() {
        assert!(ValidationDialect::RequiredFields.checks_required());
        assert!(!ValidationDialect::RequiredFields.checks_types());
        assert!(!ValidationDialect::TypeShape.checks_required());
        assert!(ValidationDialect::TypeShape.checks_types());
        assert!(ValidationDialect::Combined.checks_required());
        assert!(ValidationDialect::Combined.checks_types());
        assert!(ValidationDialect::OpenNested.checks_required());
        assert!(ValidationDialect::OpenNested.checks_types());
        assert!(ValidationDialect::OpenNested.open_nested());
        assert!(!ValidationDialect::Combined.open_nested());
    }

    #[test]
    fn parse_and_display_agree() {
        for dialect in [
            ValidationDialect::RequiredFields,
            ValidationDialect::TypeShape,
            ValidationDialect::Combined,
            ValidationDialect::OpenNested,
        ] {
            assert_eq!(dialect.to_string().parse::<ValidationDialect>(), Ok(dialect));
        }
        assert!("strict".parse::<ValidationDialect>().is_err());
    }

    #[test]
    fn serde_names() {
        let json = serde_json::to_string(&ValidationDialect::TypeShape).unwrap();
        assert_eq!(json, "\"type_shape\"");
        let parsed: ValidationDialect = serde_json::from_str("\"open_nested\"").unwrap();
        assert_eq!(parsed, ValidationDialect::OpenNested);
    }
}
