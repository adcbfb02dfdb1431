//! Rule validator -- pure logic, no I/O.

use serde_json::{Map, Value};

use super::rules::ValidationRule;
use super::type_check::is_valid_type;
use crate::error::ValidationError;

/// How required-field failures are reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ValidationMode {
    /// Stop at the first failing required rule.
    #[default]
    FailFast,
    /// Evaluate every rule and report all required-rule failures in rule order.
    CollectAll,
}

enum RuleOutcome<'a> {
    Accept(&'a Value),
    Skip,
    Fail(ValidationError),
}

fn check_rule<'a>(rule: &ValidationRule, input: &'a Map<String, Value>) -> RuleOutcome<'a> {
    match (input.get(&rule.field), rule.required) {
        (Some(value), _) if is_valid_type(value, &rule.field_type) => RuleOutcome::Accept(value),
        (None, true) => RuleOutcome::Fail(ValidationError::MissingRequiredField(rule.field.clone())),
        (Some(_), true) => {
            RuleOutcome::Fail(ValidationError::InvalidRequiredFieldType(rule.field.clone()))
        }
        (_, false) => RuleOutcome::Skip,
    }
}

/// Filter `input` down to the fields approved by `rules`.
///
/// Rules are applied in order. A required rule whose field is absent or
/// mistyped aborts with an error and no output. An optional rule whose field
/// is absent or mistyped is skipped. Keys without a rule are dropped. When
/// two rules name the same field, the last accepting one wins.
pub fn validate(
    input: &Map<String, Value>,
    rules: &[ValidationRule],
) -> Result<Map<String, Value>, ValidationError> {
    let mut validated = Map::new();

    for rule in rules {
        match check_rule(rule, input) {
            RuleOutcome::Accept(value) => {
                validated.insert(rule.field.clone(), value.clone());
            }
            RuleOutcome::Skip => {}
            RuleOutcome::Fail(err) => return Err(err),
        }
    }

    Ok(validated)
}

/// Like [`validate`], but evaluates every rule and returns all required-rule
/// failures instead of only the first.
pub fn validate_all(
    input: &Map<String, Value>,
    rules: &[ValidationRule],
) -> Result<Map<String, Value>, Vec<ValidationError>> {
    let mut validated = Map::new();
    let mut errors = Vec::new();

    for rule in rules {
        match check_rule(rule, input) {
            RuleOutcome::Accept(value) => {
                validated.insert(rule.field.clone(), value.clone());
            }
            RuleOutcome::Skip => {}
            RuleOutcome::Fail(err) => errors.push(err),
        }
    }

    if errors.is_empty() {
        Ok(validated)
    } else {
        Err(errors)
    }
}

/// Dispatch to [`validate`] or [`validate_all`]. In fail-fast mode the error
/// list holds exactly one entry.
pub fn validate_with_mode(
    input: &Map<String, Value>,
    rules: &[ValidationRule],
    mode: ValidationMode,
) -> Result<Map<String, Value>, Vec<ValidationError>> {
    match mode {
        ValidationMode::FailFast => validate(input, rules).map_err(|err| vec![err]),
        ValidationMode::CollectAll => validate_all(input, rules),
    }
}
