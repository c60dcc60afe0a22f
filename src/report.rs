//! Report Rendering
//!
//! Turns results and a summary into caller-facing output. The engine itself
//! prescribes no serialization; this module is the CLI's view of it.

use std::fmt::Write;

use serde_json::json;

use crate::validation::{CheckResult, Summary};

/// Render results and summary as a human-readable text report.
pub fn render_text(results: &[CheckResult], summary: &Summary) -> String {
    let mut out = String::new();

    for result in results {
        let status = if result.passed { "PASS" } else { "FAIL" };
        let _ = writeln!(
            out,
            "{}  {} {}: {}",
            status, result.field, result.rule, result.message
        );

        if !result.passed {
            match &result.actual {
                Some(actual) => {
                    let _ = writeln!(
                        out,
                        "      actual: {}, expected: {}",
                        actual, result.expected
                    );
                }
                None => {
                    let _ = writeln!(out, "      expected: {}", result.expected);
                }
            }
        }
    }

    let _ = writeln!(out, "\nSummary:");
    let _ = writeln!(out, "- Total checks: {}", summary.total);
    let _ = writeln!(out, "- Passed: {}", summary.passed);
    let _ = writeln!(out, "- Failed: {}", summary.failed);

    out
}

/// Render results and summary as a pretty-printed JSON document.
pub fn render_json(results: &[CheckResult], summary: &Summary) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&json!({
        "results": results,
        "summary": summary,
    }))
}
