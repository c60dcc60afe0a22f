//! fieldcheck
//!
//! Declarative validation of nested JSON documents against per-field rules.
//!
//! This library provides:
//! - Dot-path resolution into nested documents
//! - An extensible rule registry with built-in checks
//! - A validation engine producing structured per-rule results
//! - Result aggregation and report rendering

pub mod config;
pub mod document;
pub mod report;
pub mod rules;
pub mod validation;

// Re-exports for clean public API
pub use document::{Resolution, resolve};
pub use rules::{FieldRules, RuleRegistry, RuleSpec, Validator};
pub use validation::{
    CheckResult, Summary, ValidationError, summarize, validate_document, validate_field,
};
