use super::*;
use crate::runner::reconcile::reconcile;

#[test]
fn header_graded_and_non_graded() {
    assert_eq!(
        header_line(true, "Vec2 - Constructors"),
        "Running graded test set \"Vec2 - Constructors\"... "
    );
    assert_eq!(
        header_line(false, "Vec2 - Performance Tests"),
        "Running non-graded test set \"Vec2 - Performance Tests\"... "
    );
}

#[test]
fn summary_zero_tests() {
    assert_eq!(summary_line(&reconcile(0, 0, 0)), "(0 tests)");
}

#[test]
fn summary_disabled() {
    assert_eq!(
        summary_line(&reconcile(4, 0, 0)),
        "test set DISABLED; 4 tests SKIPPED"
    );
}

#[test]
fn summary_partial_run_reports_disabled_too() {
    assert_eq!(
        summary_line(&reconcile(5, 2, 0)),
        "test set DISABLED; 3 tests SKIPPED"
    );
}

#[test]
fn summary_all_passed() {
    assert_eq!(summary_line(&reconcile(3, 3, 0)), "all 3 tests passed");
}

#[test]
fn summary_silent_on_failures() {
    assert_eq!(summary_line(&reconcile(5, 3, 2)), "");
}

#[test]
fn mismatch_banner_names_counts() {
    let banner = mismatch_banner("AABB2 - Mutators", 2, 3);
    assert!(banner.contains("ERROR: Test set \"AABB2 - Mutators\""));
    assert!(banner.contains("said it expected 2 test(s), but it actually ran 3 test(s)!"));
    assert!(banner.contains("from 2 to 3."));
    assert_eq!(banner.matches(&"#".repeat(88)).count(), 2);
}

#[test]
fn set_and_group_banners() {
    let set = set_banner("Vec2_Constructors", "start");
    assert!(set.contains("(TestSet_Vec2_Constructors)(start)"));
    assert_eq!(set.lines().count(), 3);

    let group = group_banner("Vec2", "End");
    assert!(group.contains("(UnitTests_Vec2)(End)"));
    assert!(group.starts_with(&"/".repeat(100)));
}

#[test]
fn failure_line_format() {
    assert_eq!(failure_line("x"), "TEST FAILED: x");
}
