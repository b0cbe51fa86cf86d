//! Aggregate pass/fail/skip bookkeeping for a harness run.
//!
//! Every assertion bumps the `total` counters. When a test set finishes,
//! the runner folds the set's deltas into exactly one of the `graded` or
//! `non_graded` buckets, so the bucket sums always match the totals.

use serde::Serialize;

/// One bucket of outcome counters.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
    pub expected: usize,
}

/// Outcome counters for one run, split by grading label.
#[derive(Debug, Default, Clone)]
pub struct ResultAccumulator {
    pub total: Tally,
    pub graded: Tally,
    pub non_graded: Tally,
    /// Labels of failed assertions, in the order they failed.
    pub failures: Vec<String>,
}

impl ResultAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear every counter, as if no test set had run yet.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn record_pass(&mut self) {
        self.total.passed += 1;
    }

    pub fn record_fail(&mut self, label: &str) {
        self.total.failed += 1;
        self.failures.push(label.to_string());
    }

    /// Fold one test set's reconciled counts into the graded or non-graded
    /// bucket. `passed`/`failed` are already present in `total` (they were
    /// recorded assertion by assertion), so only skip and expected totals
    /// are added there.
    pub fn apply_batch_delta(
        &mut self,
        graded: bool,
        passed: usize,
        failed: usize,
        skipped: usize,
        declared: usize,
    ) {
        self.total.skipped += skipped;
        self.total.expected += declared;

        let bucket = if graded {
            &mut self.graded
        } else {
            &mut self.non_graded
        };
        bucket.expected += declared;
        bucket.passed += passed;
        bucket.failed += failed;
        bucket.skipped += skipped;
    }

    /// Graded assertions that count against the grade: failures plus skips.
    pub fn incorrect_graded(&self) -> usize {
        self.graded.failed + self.graded.skipped
    }

    /// True when every total equals the sum of its graded and non-graded parts.
    pub fn is_balanced(&self) -> bool {
        self.total.passed == self.graded.passed + self.non_graded.passed
            && self.total.failed == self.graded.failed + self.non_graded.failed
            && self.total.skipped == self.graded.skipped + self.non_graded.skipped
    }
}

#[cfg(test)]
#[path = "accumulator_test.rs"]
mod tests;
