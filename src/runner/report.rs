use super::reconcile::BatchResult;

const SET_RULE_WIDTH: usize = 100;
const MISMATCH_RULE_WIDTH: usize = 88;

/// Line announcing a test set before it runs.
pub fn header_line(graded: bool, label: &str) -> String {
    let graded_text = if graded { "graded" } else { "non-graded" };
    format!("Running {graded_text} test set \"{label}\"... ")
}

/// Multi-line banner for a test set whose declared count is wrong.
pub fn mismatch_banner(label: &str, declared: usize, tried: usize) -> String {
    let rule = "#".repeat(MISMATCH_RULE_WIDTH);
    format!(
        "\n\n{rule}\n\
         ERROR: Test set \"{label}\"\n  \
         said it expected {declared} test(s), but it actually ran {tried} test(s)!\n  \
         Please change the return value for that test set function from {declared} to {tried}.\n\
         {rule}"
    )
}

/// One-line outcome summary. Empty when assertions failed: each failure
/// already printed its own line.
pub fn summary_line(result: &BatchResult) -> String {
    if result.declared == 0 {
        "(0 tests)".to_string()
    } else if result.skipped > 0 {
        format!("test set DISABLED; {} tests SKIPPED", result.skipped)
    } else if result.failed == 0 {
        format!("all {} tests passed", result.passed)
    } else {
        String::new()
    }
}

/// Start/end banner a test set prints around its own assertions.
pub fn set_banner(id: &str, edge: &str) -> String {
    let rule = "#".repeat(SET_RULE_WIDTH);
    format!("{rule}\n(TestSet_{id})({edge})\n{rule}")
}

/// Start/end banner printed around a whole group of test sets.
pub fn group_banner(group: &str, edge: &str) -> String {
    let rule = "/".repeat(SET_RULE_WIDTH);
    format!("{rule}\n(UnitTests_{group})({edge})\n{rule}")
}

pub fn failure_line(label: &str) -> String {
    format!("TEST FAILED: {label}")
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
