//! Validation Engine
//!
//! Core validation logic separated from rule definitions and reporting
//! concerns. Two signaling channels are kept deliberately distinct: per-check
//! outcomes (missing field, failed rule, validator failure) are recorded as
//! [`CheckResult`] data, while configuration faults abort the run as a
//! [`ValidationError`].

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::document::{Resolution, resolve};
use crate::rules::{FieldRules, RuleRegistry, RuleSpec};

/// Rule name recorded on the single result emitted for a missing field.
pub const EXISTS_RULE: &str = "exists";

/// Outcome of one rule check (or one missing-field check).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckResult {
    pub field: String,
    pub rule: String,
    pub passed: bool,
    /// The resolved value; `None` means the field was absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual: Option<Value>,
    pub expected: Value,
    pub message: String,
}

impl CheckResult {
    /// The single failed result recorded when a field is absent.
    fn missing(field: &str) -> Self {
        Self {
            field: field.to_string(),
            rule: EXISTS_RULE.to_string(),
            passed: false,
            actual: None,
            expected: Value::String("field present".to_string()),
            message: "Field not found in response".to_string(),
        }
    }
}

/// A configuration fault that aborts the whole validation run.
///
/// Never downgraded to a failed [`CheckResult`]; misconfiguration must stay
/// loud instead of being scored as a validation failure.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("unknown validation rule '{rule}' configured for field '{field}'")]
    UnknownRule { field: String, rule: String },
}

/// Validate a single field of the document against its configured rules.
///
/// An absent field yields exactly one failed `exists` result and suppresses
/// the configured rules. A validator that cannot evaluate (incomparable
/// operands, malformed expected value) is recorded as a failed result and
/// the run continues. An unregistered rule name aborts with
/// [`ValidationError::UnknownRule`].
pub fn validate_field(
    document: &Value,
    field_path: &str,
    rules: &FieldRules,
    registry: &RuleRegistry,
) -> Result<Vec<CheckResult>, ValidationError> {
    let actual = match resolve(document, field_path) {
        Resolution::Found(value) => value,
        Resolution::NotFound => {
            log::debug!("field '{}' not present in document", field_path);
            return Ok(vec![CheckResult::missing(field_path)]);
        }
    };

    let mut results = Vec::with_capacity(rules.len());

    for (rule_name, expected) in rules.iter() {
        let validator =
            registry
                .get(rule_name)
                .ok_or_else(|| ValidationError::UnknownRule {
                    field: field_path.to_string(),
                    rule: rule_name.clone(),
                })?;

        let (passed, message) = match validator.check(actual, expected) {
            Ok(true) => (true, "OK".to_string()),
            Ok(false) => (false, "Validation failed".to_string()),
            Err(diagnostic) => {
                log::warn!(
                    "rule '{}' on field '{}' could not evaluate: {}",
                    rule_name,
                    field_path,
                    diagnostic
                );
                (false, format!("Validator error: {}", diagnostic))
            }
        };

        results.push(CheckResult {
            field: field_path.to_string(),
            rule: rule_name.clone(),
            passed,
            actual: Some(actual.clone()),
            expected: expected.clone(),
            message,
        });
    }

    Ok(results)
}

/// Validate an entire document against a rule spec.
///
/// Fields are validated in spec order and results concatenated; an unknown
/// rule name anywhere aborts the run without validating remaining fields.
pub fn validate_document(
    document: &Value,
    spec: &RuleSpec,
    registry: &RuleRegistry,
) -> Result<Vec<CheckResult>, ValidationError> {
    let mut all_results = Vec::new();

    for (field_path, rules) in spec.iter() {
        let field_results = validate_field(document, field_path, rules, registry)?;
        all_results.extend(field_results);
    }

    Ok(all_results)
}
