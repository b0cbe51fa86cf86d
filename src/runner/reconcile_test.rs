use super::*;

#[test]
fn exact_run_is_consistent() {
    let r = reconcile(5, 3, 2);
    assert_eq!(r.skipped, 0);
    assert_eq!(r.mismatch, None);
    assert_eq!(r.outcome(), Outcome::Consistent);
}

#[test]
fn fully_disabled_set_is_skipped_not_mismatched() {
    let r = reconcile(4, 0, 0);
    assert_eq!(r.skipped, 4);
    assert_eq!(r.mismatch, None);
    assert_eq!(r.outcome(), Outcome::FullySkipped);
}

#[test]
fn partial_run_is_flagged_and_keeps_shortfall() {
    let r = reconcile(6, 2, 1);
    assert_eq!(r.skipped, 3);
    assert_eq!(r.mismatch, Some(Mismatch::UnderRun));
    assert_eq!(r.outcome(), Outcome::Inconsistent);
}

#[test]
fn over_run_is_flagged_and_clamped() {
    let r = reconcile(2, 3, 0);
    assert_eq!(r.skipped, 0);
    assert_eq!(r.mismatch, Some(Mismatch::OverRun));
    assert_eq!(r.outcome(), Outcome::Inconsistent);
}

#[test]
fn over_run_with_zero_declared() {
    let r = reconcile(0, 0, 1);
    assert_eq!(r.skipped, 0);
    assert_eq!(r.mismatch, Some(Mismatch::OverRun));
}

#[test]
fn empty_set_is_consistent() {
    let r = reconcile(0, 0, 0);
    assert_eq!(r.skipped, 0);
    assert_eq!(r.mismatch, None);
    assert_eq!(r.outcome(), Outcome::Consistent);
}

#[test]
fn tried_sums_pass_and_fail() {
    assert_eq!(reconcile(10, 4, 3).tried(), 7);
}

#[test]
fn matching_counts_never_mismatch() {
    for declared in 0..20 {
        for failed in 0..=declared {
            let r = reconcile(declared, declared - failed, failed);
            assert_eq!(r.mismatch, None, "declared={declared} failed={failed}");
            assert_eq!(r.skipped, 0);
        }
    }
}

#[test]
fn skipped_is_never_more_than_declared() {
    for declared in 0..10 {
        for tried in 0..15 {
            let r = reconcile(declared, tried, 0);
            assert!(r.skipped <= declared);
            if tried > declared {
                assert_eq!(r.mismatch, Some(Mismatch::OverRun));
            }
        }
    }
}

#[test]
fn outcome_labels() {
    assert_eq!(Outcome::Consistent.as_str(), "consistent");
    assert_eq!(Outcome::FullySkipped.as_str(), "skipped");
    assert_eq!(Outcome::Inconsistent.as_str(), "inconsistent");
}
