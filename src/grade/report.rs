use serde::Serialize;

use super::GradeSummary;
use crate::accumulator::{ResultAccumulator, Tally};
use crate::runner::BatchRecord;

const RULE_WIDTH: usize = 88;

/// Final results block: graded and non-graded counts plus the grade line.
pub fn final_report(acc: &ResultAccumulator, summary: &GradeSummary) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut lines = Vec::new();

    lines.push(String::new());
    lines.push(rule.clone());
    lines.push(format!(
        "  Number of GRADED tests passed: {}",
        tally_line(&acc.graded)
    ));
    lines.push(format!(
        "  Number of non-graded tests passed: {}",
        tally_line(&acc.non_graded)
    ));
    lines.push(String::new());
    lines.push(format!(
        "  Assignment grade is calculated as: 100 minus {} point(s) per incorrect graded test.",
        summary.points_per_incorrect
    ));
    lines.push(String::new());
    lines.push(grade_line(summary));
    lines.push(rule);
    lines.push(String::new());

    lines.join("\n")
}

pub fn grade_line(summary: &GradeSummary) -> String {
    format!(
        "  Grade for assignment: 100 - ({} incorrect x {}-point penalty each) = {}%",
        summary.incorrect, summary.points_per_incorrect, summary.grade
    )
}

fn tally_line(t: &Tally) -> String {
    format!(
        "{} of {} ({} failed, {} skipped)",
        t.passed, t.expected, t.failed, t.skipped
    )
}

/// JSON-serializable representation of a complete run.
#[derive(Serialize)]
pub struct JsonRun<'a> {
    pub total: Tally,
    pub graded: Tally,
    pub non_graded: Tally,
    pub test_sets: &'a [BatchRecord],
    pub failures: &'a [String],
    pub grade: GradeSummary,
}

impl<'a> JsonRun<'a> {
    pub fn new(
        acc: &'a ResultAccumulator,
        history: &'a [BatchRecord],
        summary: GradeSummary,
    ) -> Self {
        Self {
            total: acc.total,
            graded: acc.graded,
            non_graded: acc.non_graded,
            test_sets: history,
            failures: &acc.failures,
            grade: summary,
        }
    }
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
