//! Rule Spec Types
//!
//! The user-authored mapping of field paths to their configured rules.
//! Insertion order is load-bearing: it defines the order of results, so the
//! maps are `IndexMap`-backed and both loaders preserve document order.

use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

/// Rules configured for a single field: rule name -> expected value,
/// in configured order.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct FieldRules(IndexMap<String, Value>);

impl FieldRules {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, rule: impl Into<String>, expected: Value) {
        self.0.insert(rule.into(), expected);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The complete rule spec: field path -> configured rules, in authored order.
///
/// ```toml
/// [id]
/// type = "integer"
/// equals = 123
///
/// [status]
/// in = ["ACTIVE", "PENDING"]
///
/// ["user.address.city"]
/// equals = "São Paulo"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct RuleSpec(IndexMap<String, FieldRules>);

impl RuleSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rule for a field, creating the field entry on first use.
    /// Field and rule ordering follow insertion order.
    pub fn insert_rule(
        &mut self,
        field: impl Into<String>,
        rule: impl Into<String>,
        expected: Value,
    ) {
        self.0.entry(field.into()).or_default().insert(rule, expected);
    }

    /// Field paths and their rules, in authored order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldRules)> {
        self.0.iter()
    }

    /// Number of configured field paths.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Parse a rule spec from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).context("failed to parse TOML rule spec")
    }

    /// Parse a rule spec from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("failed to parse JSON rule spec")
    }

    /// Load a rule spec from disk, picking the format by file extension
    /// (`.json` for JSON, anything else is treated as TOML).
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read rules file {}", path.display()))?;

        let spec = if path.extension().is_some_and(|ext| ext == "json") {
            Self::from_json_str(&text)
        } else {
            Self::from_toml_str(&text)
        }
        .with_context(|| format!("in rules file {}", path.display()))?;

        log::debug!(
            "loaded {} field rule(s) from {}",
            spec.len(),
            path.display()
        );
        Ok(spec)
    }
}
