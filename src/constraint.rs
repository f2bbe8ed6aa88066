use crate::errors::InvalidConstraintConstruction;
use serde_derive::{Deserialize, Serialize};
use serde_json::Value;

/// A named, typed value attached to an uploaded version, e.g. a minimum OS
/// version.
///
/// `kind` is the backend's `type` tag. The set of valid tags belongs to the
/// backend, so it is passed through without checking it against `value`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(try_from = "ConstraintEntry")]
pub struct Constraint {
    name: String,
    #[serde(rename = "type")]
    kind: String,
    value: Value,
}

impl Constraint {
    pub fn new(
        name: impl Into<String>,
        kind: impl Into<String>,
        value: impl Into<Value>,
    ) -> Result<Self, InvalidConstraintConstruction> {
        let name = name.into();
        let kind = kind.into();
        if name.is_empty() {
            return Err(InvalidConstraintConstruction::EmptyName);
        }
        if kind.is_empty() {
            return Err(InvalidConstraintConstruction::EmptyType { name });
        }
        Ok(Self {
            name,
            kind,
            value: value.into(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}

/// Unchecked constraint as entered in a job configuration.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstraintEntry {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub value: Value,
}

impl TryFrom<ConstraintEntry> for Constraint {
    type Error = InvalidConstraintConstruction;

    fn try_from(entry: ConstraintEntry) -> Result<Self, Self::Error> {
        Constraint::new(entry.name, entry.kind, entry.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_accessors() {
        let constraint = Constraint::new("minOsVersion", "string", "8.0").unwrap();

        assert_eq!(constraint.name(), "minOsVersion");
        assert_eq!(constraint.kind(), "string");
        assert_eq!(constraint.value(), "8.0");
    }

    #[test]
    fn test_empty_name() {
        assert_eq!(
            Constraint::new("", "string", "x"),
            Err(InvalidConstraintConstruction::EmptyName)
        );
    }

    #[test]
    fn test_empty_type() {
        assert_eq!(
            Constraint::new("minOsVersion", "", "x"),
            Err(InvalidConstraintConstruction::EmptyType {
                name: "minOsVersion".to_owned()
            })
        );
    }

    #[test]
    fn test_type_is_not_checked_against_value() {
        let constraint = Constraint::new("minOsVersion", "version-range", json!([8, 12])).unwrap();
        assert_eq!(constraint.value(), &json!([8, 12]));

        assert!(Constraint::new("flag", "number", "not a number").is_ok());
        assert!(Constraint::new("flag", "unknown", Value::Null).is_ok());
    }

    #[test]
    fn test_equality() {
        let a = Constraint::new("minOsVersion", "string", "8.0").unwrap();
        let b = Constraint::new("minOsVersion", "string", "8.0").unwrap();
        assert_eq!(a, b);

        assert_ne!(a, Constraint::new("maxOsVersion", "string", "8.0").unwrap());
        assert_ne!(a, Constraint::new("minOsVersion", "version", "8.0").unwrap());
        assert_ne!(a, Constraint::new("minOsVersion", "string", "9.0").unwrap());
        // "8" the string is not 8 the number
        assert_ne!(
            Constraint::new("minOsVersion", "string", "8").unwrap(),
            Constraint::new("minOsVersion", "string", 8).unwrap()
        );
    }

    #[test]
    fn test_serialize_shape() {
        let constraint = Constraint::new("minOsVersion", "string", "8.0").unwrap();
        assert_eq!(
            serde_json::to_value(&constraint).unwrap(),
            json!({ "name": "minOsVersion", "type": "string", "value": "8.0" })
        );
    }

    #[test]
    fn test_deserialize_checks_fields() {
        let constraint: Constraint =
            serde_json::from_str(r#"{"name":"minOsVersion","type":"number","value":14}"#).unwrap();
        assert_eq!(constraint, Constraint::new("minOsVersion", "number", 14).unwrap());

        let err = serde_json::from_str::<Constraint>(r#"{"name":"","type":"string","value":"x"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("Constraint name must not be empty"));

        assert!(serde_json::from_str::<Constraint>(r#"{"name":"minOsVersion","value":"x"}"#).is_err());
    }

    #[test]
    fn test_missing_value_is_null() {
        let constraint: Constraint =
            serde_json::from_str(r#"{"name":"tablet","type":"boolean"}"#).unwrap();
        assert_eq!(constraint.value(), &Value::Null);
    }
}
