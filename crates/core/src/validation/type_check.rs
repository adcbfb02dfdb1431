//! Dynamic-kind inspection of decoded JSON values.

use serde_json::Value;

use super::rules::FieldType;

/// Runtime category of a decoded JSON value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl ValueKind {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
        }
    }
}

/// Whether `value` has the kind named by `expected`.
///
/// Integer and floating-point numbers both satisfy [`FieldType::Number`].
/// [`FieldType::Unknown`] is never satisfied, and `null` satisfies nothing.
pub fn is_valid_type(value: &Value, expected: &FieldType) -> bool {
    let kind = ValueKind::of(value);
    match expected {
        FieldType::String => kind == ValueKind::String,
        FieldType::Number => kind == ValueKind::Number,
        FieldType::Bool => kind == ValueKind::Bool,
        FieldType::Unknown(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn kind_of_each_variant() {
        assert_eq!(ValueKind::of(&Value::Null), ValueKind::Null);
        assert_eq!(ValueKind::of(&json!(false)), ValueKind::Bool);
        assert_eq!(ValueKind::of(&json!(1)), ValueKind::Number);
        assert_eq!(ValueKind::of(&json!("x")), ValueKind::String);
        assert_eq!(ValueKind::of(&json!([1])), ValueKind::Array);
        assert_eq!(ValueKind::of(&json!({"k": 1})), ValueKind::Object);
    }

    #[test]
    fn string_matches_only_strings() {
        assert!(is_valid_type(&json!("hi"), &FieldType::String));
        assert!(is_valid_type(&json!(""), &FieldType::String));
        assert!(!is_valid_type(&json!(5), &FieldType::String));
        assert!(!is_valid_type(&json!(true), &FieldType::String));
    }

    #[test]
    fn number_accepts_integers_and_floats() {
        assert!(is_valid_type(&json!(5), &FieldType::Number));
        assert!(is_valid_type(&json!(-5), &FieldType::Number));
        assert!(is_valid_type(&json!(5.25), &FieldType::Number));
        assert!(is_valid_type(&json!(u64::MAX), &FieldType::Number));
        assert!(!is_valid_type(&json!("5"), &FieldType::Number));
    }

    #[test]
    fn bool_matches_only_booleans() {
        assert!(is_valid_type(&json!(true), &FieldType::Bool));
        assert!(is_valid_type(&json!(false), &FieldType::Bool));
        assert!(!is_valid_type(&json!(0), &FieldType::Bool));
        assert!(!is_valid_type(&json!("true"), &FieldType::Bool));
    }

    #[test]
    fn unknown_type_is_never_valid() {
        let expected = FieldType::from("object");
        assert!(!is_valid_type(&json!({}), &expected));
        assert!(!is_valid_type(&json!("x"), &expected));
    }

    #[test]
    fn null_matches_nothing() {
        for expected in [FieldType::String, FieldType::Number, FieldType::Bool] {
            assert!(!is_valid_type(&Value::Null, &expected));
        }
    }

    #[test]
    fn containers_match_nothing() {
        for expected in [FieldType::String, FieldType::Number, FieldType::Bool] {
            assert!(!is_valid_type(&json!([]), &expected));
            assert!(!is_valid_type(&json!({}), &expected));
        }
    }
}
