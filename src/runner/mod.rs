//! Test set execution and result accounting.
//!
//! A [`Session`] owns the [`ResultAccumulator`] and the console. Test set
//! bodies receive `&mut Session`, record assertions through
//! [`Session::verify`], and return the number of assertions they declare.
//! [`Session::run_test_set`] measures the pass/fail deltas around the call,
//! reconciles them with the declared count, and folds the result into the
//! graded or non-graded bucket.

pub mod reconcile;
pub mod report;

use std::collections::BTreeSet;
use std::fmt;
use std::io::{self, Write};

use serde::Serialize;
use tracing::{debug, warn};

use crate::accumulator::ResultAccumulator;
use reconcile::{BatchResult, Outcome, reconcile};

/// A test set body. Returns the number of assertions it declares, even when
/// it skipped them because the set is disabled.
pub type TestSetFn = fn(&mut Session) -> usize;

/// What one test set invocation produced, kept for the JSON report.
#[derive(Debug, Clone, Serialize)]
pub struct BatchRecord {
    pub name: String,
    pub graded: bool,
    pub declared: usize,
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
    pub outcome: Outcome,
    pub mismatch: Option<reconcile::Mismatch>,
}

impl BatchRecord {
    fn new(name: &str, graded: bool, result: &BatchResult) -> Self {
        Self {
            name: name.to_string(),
            graded,
            declared: result.declared,
            passed: result.passed,
            failed: result.failed,
            skipped: result.skipped,
            outcome: result.outcome(),
            mismatch: result.mismatch,
        }
    }
}

pub struct Session {
    acc: ResultAccumulator,
    out: Box<dyn Write>,
    disabled: BTreeSet<String>,
    batch_enabled: bool,
    history: Vec<BatchRecord>,
}

impl Session {
    pub fn new(out: Box<dyn Write>) -> Self {
        Self {
            acc: ResultAccumulator::new(),
            out,
            disabled: BTreeSet::new(),
            batch_enabled: true,
            history: Vec::new(),
        }
    }

    /// Session writing to stdout.
    pub fn stdout() -> Self {
        Self::new(Box::new(io::stdout()))
    }

    /// Session whose console text is discarded (used for `--json`).
    pub fn quiet() -> Self {
        Self::new(Box::new(io::sink()))
    }

    /// Mark test sets (by label) as disabled. Their bodies still run, but
    /// [`Session::batch_enabled`] reports `false` while they do.
    pub fn with_disabled<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.disable(labels);
        self
    }

    pub fn disable<I, S>(&mut self, labels: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.disabled.extend(labels.into_iter().map(Into::into));
    }

    pub fn accumulator(&self) -> &ResultAccumulator {
        &self.acc
    }

    pub fn history(&self) -> &[BatchRecord] {
        &self.history
    }

    /// Drop all counters and history; disabled labels are kept.
    pub fn reset(&mut self) {
        self.acc.reset();
        self.history.clear();
        self.batch_enabled = true;
    }

    pub fn is_disabled(&self, label: &str) -> bool {
        self.disabled.contains(label)
    }

    /// Whether the currently running test set should execute its assertions.
    pub fn batch_enabled(&self) -> bool {
        self.batch_enabled
    }

    /// Write one line of console text. Write errors are not fatal.
    pub fn emit(&mut self, text: impl fmt::Display) {
        if let Err(err) = writeln!(self.out, "{text}") {
            debug!(%err, "console write failed");
        }
    }

    pub fn record_pass(&mut self) {
        self.acc.record_pass();
    }

    pub fn record_fail(&mut self, label: &str) {
        self.acc.record_fail(label);
        self.emit(report::failure_line(label));
    }

    /// Record one assertion outcome.
    pub fn verify(&mut self, ok: bool, label: &str) {
        if ok {
            self.record_pass();
        } else {
            self.record_fail(label);
        }
    }

    /// Run one test set, reconcile its declared count with what it actually
    /// did, and fold the result into the accumulator.
    pub fn run_test_set<F>(&mut self, graded: bool, batch: F, label: &str) -> BatchResult
    where
        F: FnOnce(&mut Session) -> usize,
    {
        self.emit("");
        self.emit(report::header_line(graded, label));

        let passed_before = self.acc.total.passed;
        let failed_before = self.acc.total.failed;

        self.batch_enabled = !self.is_disabled(label);
        let declared = batch(self);
        self.batch_enabled = true;

        let passed = self.acc.total.passed - passed_before;
        let failed = self.acc.total.failed - failed_before;
        let result = reconcile(declared, passed, failed);

        if let Some(kind) = result.mismatch {
            warn!(
                set = label,
                declared,
                tried = result.tried(),
                ?kind,
                "declared assertion count disagrees with assertions run"
            );
            self.emit(report::mismatch_banner(label, declared, result.tried()));
        }

        self.acc.apply_batch_delta(
            graded,
            result.passed,
            result.failed,
            result.skipped,
            result.declared,
        );

        debug_assert!(self.acc.is_balanced());

        self.emit(report::summary_line(&result));
        if let Err(err) = self.out.flush() {
            debug!(%err, "console flush failed");
        }

        debug!(
            set = label,
            graded,
            declared,
            passed,
            failed,
            skipped = result.skipped,
            outcome = result.outcome().as_str(),
            "test set finished"
        );

        self.history.push(BatchRecord::new(label, graded, &result));
        result
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
