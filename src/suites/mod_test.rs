use super::*;
use crate::grade::GradePolicy;
use crate::runner::reconcile::Outcome;
use crate::test_support::captured_session;

#[test]
fn bundled_sets_declare_exactly_what_they_run() {
    let (mut s, _out) = captured_session();
    for group in builtin() {
        run_group(&mut s, &group);
    }
    for rec in s.history() {
        assert_eq!(rec.mismatch, None, "{} declared {}", rec.name, rec.declared);
        assert_eq!(rec.outcome, Outcome::Consistent, "{}", rec.name);
    }
    assert!(s.accumulator().is_balanced());
}

#[test]
fn bundled_subjects_earn_full_marks() {
    let (mut s, _out) = captured_session();
    for group in builtin() {
        run_group(&mut s, &group);
    }
    assert_eq!(s.accumulator().total.failed, 0, "{:?}", s.accumulator().failures);
    assert_eq!(GradePolicy::default().compute_grade(s.accumulator()), 100);
}

#[test]
fn disabled_bundled_set_is_skipped_and_penalized() {
    let (s, out) = captured_session();
    let mut s = s.with_disabled(["Vec2 - Accessor Methods"]);
    let groups = builtin();
    let vec2 = groups.iter().find(|g| g.name == "Vec2").unwrap();
    run_group(&mut s, vec2);

    assert_eq!(s.accumulator().graded.skipped, 6);
    assert_eq!(GradePolicy::default().compute_grade(s.accumulator()), 88);
    let text = out.contents();
    assert!(text.contains("test set DISABLED; 6 tests SKIPPED"));
    assert!(!text.contains("(TestSet_Vec2_AccessorMethods)(start)"));
    assert!(text.contains("(TestSet_Vec2_Constructors)(start)"));
}

#[test]
fn group_banners_bracket_sets() {
    let (mut s, out) = captured_session();
    let groups = builtin();
    let int_vec2 = groups.iter().find(|g| g.name == "IntVec2").unwrap();
    run_group(&mut s, int_vec2);
    let text = out.contents();
    let start = text.find("(UnitTests_IntVec2)(Start)").unwrap();
    let first_set = text.find("Running graded test set \"IntVec2 - Constructors\"").unwrap();
    let end = text.find("(UnitTests_IntVec2)(End)").unwrap();
    assert!(start < first_set && first_set < end);
}

#[test]
fn declared_count_skips_assertions() {
    let groups = builtin();
    let aabb2 = groups.iter().find(|g| g.name == "AABB2").unwrap();
    let counts: Vec<usize> = aabb2.sets.iter().map(declared_count).collect();
    assert_eq!(counts, vec![4, 1, 10, 5, 3, 1, 1]);
}

#[test]
fn performance_sets_are_non_graded() {
    for group in builtin() {
        for set in &group.sets {
            if set.name.ends_with("Performance Tests") {
                assert!(!set.graded, "{}", set.name);
            }
        }
    }
}

#[test]
fn set_names_are_unique() {
    let groups = builtin();
    let names: BTreeSet<&str> = groups.iter().flat_map(|g| &g.sets).map(|s| s.name).collect();
    let total: usize = groups.iter().map(|g| g.sets.len()).sum();
    assert_eq!(names.len(), total);
}

#[test]
fn select_all_by_default() {
    let groups = builtin();
    assert_eq!(select(&groups, &[]).unwrap().len(), groups.len());
}

#[test]
fn select_is_case_insensitive() {
    let groups = builtin();
    let picked = select(&groups, &["vec2".to_string()]).unwrap();
    assert_eq!(picked.len(), 1);
    assert_eq!(picked[0].name, "Vec2");
}

#[test]
fn select_unknown_group() {
    let groups = builtin();
    let err = select(&groups, &["Vec9".to_string()]).err().unwrap();
    assert!(matches!(err, HarnessError::UnknownGroup(_)));
}

#[test]
fn check_labels_accepts_known_and_rejects_unknown() {
    let groups = builtin();
    assert!(check_labels(&groups, &["AABB2 - Constructors".to_string()]).is_ok());
    let err = check_labels(&groups, &["AABB2 - Nope".to_string()]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "unknown test set \"AABB2 - Nope\" (see `gk list`)"
    );
}

#[test]
fn builtin_groups_in_run_order() {
    let names: Vec<&str> = builtin().iter().map(|g| g.name).collect();
    assert_eq!(names, ["AABB2", "Vec2", "IntVec2", "Vec3", "IntVec3", "Vec4"]);
}

#[test]
fn every_group_has_operator_and_acknowledgment_sets() {
    for group in builtin() {
        let ops = format!("{} - Operators", group.name);
        let ack = format!("{} - Unimplemented Methods", group.name);
        assert!(group.sets.iter().any(|s| s.name == ops), "{ops}");
        let ack_set = group.sets.iter().find(|s| s.name == ack).unwrap();
        assert!(ack_set.graded);
        assert_eq!(declared_count(ack_set), 1, "{ack}");
    }
}

#[test]
fn acknowledgment_set_passes_once() {
    let (mut s, out) = captured_session();
    let groups = builtin();
    let vec4 = groups.iter().find(|g| g.name == "Vec4").unwrap();
    let ack = vec4.sets.iter().find(|s| s.name == "Vec4 - Unimplemented Methods").unwrap();
    let result = s.run_test_set(ack.graded, ack.run, ack.name);

    assert_eq!((result.declared, result.passed, result.failed), (1, 1, 0));
    assert!(out.contents().contains("(TestSet_Vec4_UnimplementedMethods)(start)"));
}

#[test]
fn int_vec3_declared_counts() {
    let groups = builtin();
    let int_vec3 = groups.iter().find(|g| g.name == "IntVec3").unwrap();
    let counts: Vec<usize> = int_vec3.sets.iter().map(declared_count).collect();
    assert_eq!(counts, vec![5, 3, 2, 4, 3, 5, 7, 1]);
}
