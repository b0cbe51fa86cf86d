//! Assignment grade computation.
//!
//! The grade starts at 100 and loses a fixed number of points for every
//! graded assertion that failed or was skipped, floored at 0. Non-graded
//! test sets never affect it.

pub mod report;

use serde::Serialize;

use crate::accumulator::ResultAccumulator;

pub const DEFAULT_POINTS_PER_INCORRECT: u32 = 2;
const FULL_MARKS: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradePolicy {
    pub points_per_incorrect: u32,
}

impl Default for GradePolicy {
    fn default() -> Self {
        Self {
            points_per_incorrect: DEFAULT_POINTS_PER_INCORRECT,
        }
    }
}

/// Inputs and result of one grade computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GradeSummary {
    pub incorrect: usize,
    pub points_per_incorrect: u32,
    pub penalty: u64,
    pub grade: u32,
}

impl GradePolicy {
    pub fn new(points_per_incorrect: u32) -> Self {
        Self {
            points_per_incorrect,
        }
    }

    fn penalty(&self, incorrect: usize) -> u64 {
        u64::from(self.points_per_incorrect).saturating_mul(incorrect as u64)
    }

    /// Percentage grade for the graded figures in `acc`. Only meaningful once
    /// every test set has run.
    pub fn compute_grade(&self, acc: &ResultAccumulator) -> u32 {
        let penalty = self.penalty(acc.incorrect_graded());
        u64::from(FULL_MARKS).saturating_sub(penalty) as u32
    }

    pub fn summarize(&self, acc: &ResultAccumulator) -> GradeSummary {
        let incorrect = acc.incorrect_graded();
        GradeSummary {
            incorrect,
            points_per_incorrect: self.points_per_incorrect,
            penalty: self.penalty(incorrect),
            grade: self.compute_grade(acc),
        }
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
