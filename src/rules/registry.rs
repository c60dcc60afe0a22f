//! Rule Registry
//!
//! Simple in-memory registry mapping rule names to validator implementations.

use std::collections::HashMap;

use serde_json::Value;

use super::builtin;

/// A single named check applied to a resolved field value.
///
/// `Ok(passed)` is the normal outcome. `Err(diagnostic)` signals that the
/// validator itself could not evaluate (incomparable operands, malformed
/// expected value); callers record it as a failed check rather than
/// propagating it.
pub trait Validator: Send + Sync {
    fn check(&self, actual: &Value, expected: &Value) -> Result<bool, String>;
}

// Plain functions satisfy the trait, so rules can be registered without a
// dedicated struct.
impl<F> Validator for F
where
    F: Fn(&Value, &Value) -> Result<bool, String> + Send + Sync,
{
    fn check(&self, actual: &Value, expected: &Value) -> Result<bool, String> {
        self(actual, expected)
    }
}

/// In-memory rule registry.
///
/// Immutable once validation starts; registration is the open extension
/// point and happens before the registry is handed to the engine. Looking up
/// an unregistered name is a configuration error surfaced by the engine, not
/// a silent pass.
pub struct RuleRegistry {
    validators: HashMap<String, Box<dyn Validator>>,
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl RuleRegistry {
    /// Create an empty registry with no rules at all.
    pub fn new() -> Self {
        Self {
            validators: HashMap::new(),
        }
    }

    /// Create a registry populated with the built-in rules
    /// (`equals`, `in`, `range`, `type`, `matches`).
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        builtin::install(&mut registry);
        registry
    }

    /// Register a validator under a rule name.
    ///
    /// Re-registering a name replaces the previous validator.
    pub fn register(&mut self, name: impl Into<String>, validator: Box<dyn Validator>) {
        self.validators.insert(name.into(), validator);
    }

    /// Look up a validator by rule name.
    pub fn get(&self, name: &str) -> Option<&dyn Validator> {
        self.validators.get(name).map(|v| v.as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.validators.contains_key(name)
    }

    /// Names of all registered rules, sorted for stable diagnostics.
    pub fn rule_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.validators.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }
}

impl std::fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("rules", &self.rule_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_registry() {
        let registry = RuleRegistry::new();
        assert!(registry.rule_names().is_empty());
        assert!(registry.get("equals").is_none());
    }

    #[test]
    fn test_builtins_registered() {
        let registry = RuleRegistry::with_builtins();
        for name in ["equals", "in", "range", "type", "matches"] {
            assert!(registry.contains(name), "missing builtin '{}'", name);
        }
    }

    #[test]
    fn test_register_custom_rule() {
        let mut registry = RuleRegistry::new();
        registry.register(
            "non_empty",
            Box::new(|actual: &Value, _expected: &Value| -> Result<bool, String> {
                Ok(actual.as_str().is_some_and(|s| !s.is_empty()))
            }),
        );

        let validator = registry.get("non_empty").expect("registered rule");
        assert_eq!(validator.check(&json!("hello"), &json!(true)), Ok(true));
        assert_eq!(validator.check(&json!(""), &json!(true)), Ok(false));
    }

    #[test]
    fn test_nonexistent_rule() {
        let registry = RuleRegistry::with_builtins();
        assert!(registry.get("foo").is_none());
    }

    #[test]
    fn test_rule_names_sorted() {
        let registry = RuleRegistry::with_builtins();
        let names = registry.rule_names();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
    }
}
