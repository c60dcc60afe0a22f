//! Built-in Rules
//!
//! The standard validators installed by `RuleRegistry::with_builtins`. All
//! comparisons are strict: mismatched operand types are reported as validator
//! failures, never coerced.

use regex::Regex;
use serde_json::Value;

use super::registry::{RuleRegistry, Validator};

/// Register every built-in rule on the given registry.
pub fn install(registry: &mut RuleRegistry) {
    registry.register("equals", Box::new(Equals));
    registry.register("in", Box::new(In));
    registry.register("range", Box::new(Range));
    registry.register("type", Box::new(TypeOf));
    registry.register("matches", Box::new(Matches));
}

/// Human-readable kind of a JSON value, used in diagnostics.
fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// `equals`: structural equality of JSON values.
pub struct Equals;

impl Validator for Equals {
    fn check(&self, actual: &Value, expected: &Value) -> Result<bool, String> {
        Ok(actual == expected)
    }
}

/// `in`: membership of the actual value in the expected array.
pub struct In;

impl Validator for In {
    fn check(&self, actual: &Value, expected: &Value) -> Result<bool, String> {
        let allowed = expected
            .as_array()
            .ok_or_else(|| format!("'in' expects an array of allowed values, got {}", kind(expected)))?;
        Ok(allowed.contains(actual))
    }
}

/// `range`: `lo <= actual <= hi` with `expected = [lo, hi]`.
pub struct Range;

impl Validator for Range {
    fn check(&self, actual: &Value, expected: &Value) -> Result<bool, String> {
        let bounds = expected
            .as_array()
            .filter(|b| b.len() == 2)
            .ok_or_else(|| format!("'range' expects [lo, hi] bounds, got {}", expected))?;

        let lo = bounds[0]
            .as_f64()
            .ok_or_else(|| format!("'range' lower bound is not numeric: {}", bounds[0]))?;
        let hi = bounds[1]
            .as_f64()
            .ok_or_else(|| format!("'range' upper bound is not numeric: {}", bounds[1]))?;

        let value = actual
            .as_f64()
            .ok_or_else(|| format!("cannot range-check a {} value: {}", kind(actual), actual))?;

        Ok(lo <= value && value <= hi)
    }
}

/// `type`: the actual value's structural kind matches the expected name.
///
/// Accepted names: `integer`, `number`, `string`, `boolean`, `array`,
/// `object`. `number` accepts both integer and floating-point values.
pub struct TypeOf;

impl Validator for TypeOf {
    fn check(&self, actual: &Value, expected: &Value) -> Result<bool, String> {
        let name = expected
            .as_str()
            .ok_or_else(|| format!("'type' expects a type name string, got {}", kind(expected)))?;

        match name {
            "integer" => Ok(actual.is_i64() || actual.is_u64()),
            "number" => Ok(actual.is_number()),
            "string" => Ok(actual.is_string()),
            "boolean" => Ok(actual.is_boolean()),
            "array" => Ok(actual.is_array()),
            "object" => Ok(actual.is_object()),
            other => Err(format!(
                "unknown type name '{}' (expected one of integer, number, string, boolean, array, object)",
                other
            )),
        }
    }
}

/// `matches`: the actual string matches the expected regex pattern.
pub struct Matches;

impl Validator for Matches {
    fn check(&self, actual: &Value, expected: &Value) -> Result<bool, String> {
        let pattern = expected
            .as_str()
            .ok_or_else(|| format!("'matches' expects a pattern string, got {}", kind(expected)))?;
        let regex =
            Regex::new(pattern).map_err(|e| format!("invalid pattern '{}': {}", pattern, e))?;
        let text = actual
            .as_str()
            .ok_or_else(|| format!("cannot pattern-match a {} value: {}", kind(actual), actual))?;

        Ok(regex.is_match(text))
    }
}
