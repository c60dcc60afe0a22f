//! Validation Engine
//!
//! Clean separation of validation logic from rule definitions and reporting.

pub mod engine;
pub mod summary;

pub use engine::{EXISTS_RULE, validate_document, validate_field};
pub use summary::summarize;

// Re-export common types
pub use engine::{CheckResult, ValidationError};
pub use summary::Summary;
