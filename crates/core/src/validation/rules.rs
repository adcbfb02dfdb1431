//! Validation rule types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Expected primitive type of a field.
///
/// Serialized as its lowercase name (`"string"`, `"number"`, `"bool"`).
/// Names outside that set deserialize into [`FieldType::Unknown`], which no
/// value ever satisfies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldType {
    String,
    Number,
    Bool,
    Unknown(String),
}

impl FieldType {
    pub fn as_str(&self) -> &str {
        match self {
            FieldType::String => "string",
            FieldType::Number => "number",
            FieldType::Bool => "bool",
            FieldType::Unknown(name) => name,
        }
    }
}

impl From<&str> for FieldType {
    fn from(name: &str) -> Self {
        match name {
            "string" => FieldType::String,
            "number" => FieldType::Number,
            "bool" => FieldType::Bool,
            other => FieldType::Unknown(other.to_string()),
        }
    }
}

impl From<String> for FieldType {
    fn from(name: String) -> Self {
        match FieldType::from(name.as_str()) {
            FieldType::Unknown(_) => FieldType::Unknown(name),
            known => known,
        }
    }
}

impl From<FieldType> for String {
    fn from(field_type: FieldType) -> Self {
        match field_type {
            FieldType::Unknown(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single field rule: which key, which type, and whether it must be present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationRule {
    pub field: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub required: bool,
}

impl ValidationRule {
    pub fn new(field: impl Into<String>, field_type: FieldType, required: bool) -> Self {
        Self {
            field: field.into(),
            field_type,
            required,
        }
    }

    /// Rule whose absence or type mismatch aborts validation.
    pub fn required(field: impl Into<String>, field_type: FieldType) -> Self {
        Self::new(field, field_type, true)
    }

    /// Rule whose absence or type mismatch only drops the field.
    pub fn optional(field: impl Into<String>, field_type: FieldType) -> Self {
        Self::new(field, field_type, false)
    }
}

/// Rule set served by the HTTP endpoint.
///
/// ```text
/// a  string  required
/// b  number  required
/// c  bool    required
/// d  string  optional
/// ```
pub fn default_rule_set() -> Vec<ValidationRule> {
    vec![
        ValidationRule::required("a", FieldType::String),
        ValidationRule::required("b", FieldType::Number),
        ValidationRule::required("c", FieldType::Bool),
        ValidationRule::optional("d", FieldType::String),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn field_type_parses_known_names() {
        assert_eq!(FieldType::from("string"), FieldType::String);
        assert_eq!(FieldType::from("number"), FieldType::Number);
        assert_eq!(FieldType::from("bool"), FieldType::Bool);
    }

    #[test]
    fn field_type_keeps_unknown_names() {
        assert_eq!(
            FieldType::from("boolean"),
            FieldType::Unknown("boolean".to_string())
        );
        assert_eq!(FieldType::from("int".to_string()).as_str(), "int");
    }

    #[test]
    fn rule_deserializes_from_wire_shape() {
        let rule: ValidationRule =
            serde_json::from_value(json!({"field": "b", "type": "number", "required": true}))
                .unwrap();
        assert_eq!(rule, ValidationRule::required("b", FieldType::Number));
    }

    #[test]
    fn rule_serializes_type_as_name() {
        let rule = ValidationRule::optional("d", FieldType::String);
        let value = serde_json::to_value(&rule).unwrap();
        assert_eq!(value, json!({"field": "d", "type": "string", "required": false}));
    }

    #[test]
    fn unknown_type_survives_serialization() {
        let rule = ValidationRule::required("x", FieldType::from("date"));
        let value = serde_json::to_value(&rule).unwrap();
        assert_eq!(value["type"], "date");
    }

    #[test]
    fn default_rule_set_matches_endpoint_contract() {
        let rules = default_rule_set();
        let summary: Vec<(&str, &str, bool)> = rules
            .iter()
            .map(|r| (r.field.as_str(), r.field_type.as_str(), r.required))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("a", "string", true),
                ("b", "number", true),
                ("c", "bool", true),
                ("d", "string", false),
            ]
        );
    }
}
