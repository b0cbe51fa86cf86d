use super::*;
use crate::grade::GradePolicy;
use crate::test_support::captured_session;

fn sample() -> ResultAccumulator {
    let mut acc = ResultAccumulator::new();
    for _ in 0..10 {
        acc.record_pass();
    }
    acc.record_fail("Vec2 normalize");
    acc.apply_batch_delta(true, 8, 1, 2, 11);
    acc.apply_batch_delta(false, 2, 0, 0, 2);
    acc
}

#[test]
fn grade_line_literal_format() {
    let summary = GradePolicy::default().summarize(&sample());
    assert_eq!(
        grade_line(&summary),
        "  Grade for assignment: 100 - (3 incorrect x 2-point penalty each) = 94%"
    );
}

#[test]
fn final_report_lists_both_buckets() {
    let acc = sample();
    let summary = GradePolicy::default().summarize(&acc);
    let text = final_report(&acc, &summary);
    assert!(text.contains("  Number of GRADED tests passed: 8 of 11 (1 failed, 2 skipped)"));
    assert!(text.contains("  Number of non-graded tests passed: 2 of 2 (0 failed, 0 skipped)"));
    assert!(text.contains("100 minus 2 point(s) per incorrect graded test."));
    assert!(text.contains("= 94%"));
    assert_eq!(text.matches(&"=".repeat(88)).count(), 2);
}

#[test]
fn final_report_zero_grade() {
    let mut acc = ResultAccumulator::new();
    acc.apply_batch_delta(true, 0, 0, 60, 60);
    let summary = GradePolicy::default().summarize(&acc);
    assert!(final_report(&acc, &summary).contains("(60 incorrect x 2-point penalty each) = 0%"));
}

#[test]
fn json_run_serializes() {
    let (mut s, _out) = captured_session();
    s.run_test_set(
        true,
        |s| {
            s.verify(false, "broken");
            2
        },
        "partial",
    );
    let summary = GradePolicy::default().summarize(s.accumulator());
    let json = serde_json::to_value(JsonRun::new(s.accumulator(), s.history(), summary)).unwrap();

    assert_eq!(json["graded"]["failed"], 1);
    assert_eq!(json["graded"]["skipped"], 1);
    assert_eq!(json["test_sets"][0]["name"], "partial");
    assert_eq!(json["test_sets"][0]["outcome"], "inconsistent");
    assert_eq!(json["test_sets"][0]["mismatch"], "under_run");
    assert_eq!(json["failures"][0], "broken");
    assert_eq!(json["grade"]["grade"], 96);
}
