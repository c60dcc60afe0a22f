//! Result Aggregation
//!
//! Pure arithmetic over a sequence of check results; never fails and is
//! recomputable from any result slice, including partial ones.

use serde::Serialize;

use super::engine::CheckResult;

/// Aggregate pass/fail counts over a sequence of check results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub success: bool,
}

/// Summarize a result sequence. The empty sequence is a success.
pub fn summarize(results: &[CheckResult]) -> Summary {
    let total = results.len();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = total - passed;

    Summary {
        total,
        passed,
        failed,
        success: failed == 0,
    }
}
