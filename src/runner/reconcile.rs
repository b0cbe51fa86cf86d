//! Reconciliation of a test set's declared assertion count against the
//! assertions it actually ran.
//!
//! A test set reports how many assertions it *expects* to run as its return
//! value. A disabled set still returns that count while running nothing,
//! which shows up as skipped. Any other disagreement is an authoring error
//! in the test set itself and is flagged as a mismatch.

use serde::Serialize;

/// Which consistency check tripped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mismatch {
    /// More assertions ran than were declared. Skips are clamped to zero.
    OverRun,
    /// Some, but not all, declared assertions ran.
    UnderRun,
}

/// Final classification of one test set invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Ran exactly the declared number of assertions (possibly zero).
    Consistent,
    /// Ran nothing while declaring a positive count: a disabled set.
    FullySkipped,
    /// Declared and actual counts disagree.
    Inconsistent,
}

impl Outcome {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Consistent => "consistent",
            Self::FullySkipped => "skipped",
            Self::Inconsistent => "inconsistent",
        }
    }
}

/// Counts for one test set, measured as deltas across its invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BatchResult {
    pub declared: usize,
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
    pub mismatch: Option<Mismatch>,
}

impl BatchResult {
    pub fn tried(&self) -> usize {
        self.passed + self.failed
    }

    pub fn outcome(&self) -> Outcome {
        match (self.mismatch, self.skipped) {
            (Some(_), _) => Outcome::Inconsistent,
            (None, 0) => Outcome::Consistent,
            (None, _) => Outcome::FullySkipped,
        }
    }
}

/// Compare `declared` against the observed pass/fail deltas.
///
/// The over-run check comes first and clamps the skip count to zero; the
/// partial-run check only sees non-negative skip counts.
pub fn reconcile(declared: usize, passed: usize, failed: usize) -> BatchResult {
    let tried = passed + failed;

    let (skipped, mismatch) = match declared.checked_sub(tried) {
        None => (0, Some(Mismatch::OverRun)),
        Some(skipped) if tried > 0 && tried != declared => (skipped, Some(Mismatch::UnderRun)),
        Some(skipped) => (skipped, None),
    };

    BatchResult {
        declared,
        passed,
        failed,
        skipped,
        mismatch,
    }
}

#[cfg(test)]
#[path = "reconcile_test.rs"]
mod tests;
