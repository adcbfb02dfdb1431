//! Field validation engine.
//!
//! Provides rule types, the dynamic-kind type predicate, and the validator
//! itself -- all pure functions over `serde_json` values.

pub mod rules;
pub mod type_check;
pub mod validator;

pub use rules::{default_rule_set, FieldType, ValidationRule};
pub use type_check::{is_valid_type, ValueKind};
pub use validator::{validate, validate_all, validate_with_mode, ValidationMode};
