use super::*;
use crate::test_support::captured_session;

fn opts() -> RunOptions {
    RunOptions {
        json: false,
        penalty: 2,
        disable: vec![],
        groups: vec!["intvec2".to_string()],
    }
}

fn disabling(label: &str) -> RunOptions {
    RunOptions {
        disable: vec![label.to_string()],
        ..opts()
    }
}

#[test]
fn run_into_prints_final_report_after_sets() {
    let (mut s, out) = captured_session();
    let summary = run_into(&mut s, &opts()).unwrap();
    assert_eq!(summary.grade, 100);

    let text = out.contents();
    assert!(text.contains("Number of GRADED tests passed: 21 of 21 (0 failed, 0 skipped)"));
    assert!(text.contains("  Grade for assignment: 100 - (0 incorrect x 2-point penalty each) = 100%"));
    let group_end = text.find("(UnitTests_IntVec2)(End)").unwrap();
    let grade = text.find("Grade for assignment").unwrap();
    assert!(group_end < grade, "grade block comes last");
}

#[test]
fn run_into_disabled_label_lowers_grade() {
    let (mut s, out) = captured_session();
    let summary = run_into(&mut s, &disabling("IntVec2 - Constructors")).unwrap();

    assert_eq!(summary.incorrect, 4);
    assert_eq!(summary.grade, 92);
    assert_eq!(s.accumulator().graded.skipped, 4);
    let text = out.contents();
    assert!(text.contains("test set DISABLED; 4 tests SKIPPED"));
    assert!(text.contains("(4 incorrect x 2-point penalty each) = 92%"));
}

#[test]
fn run_into_applies_custom_penalty() {
    let (mut s, _out) = captured_session();
    let summary = run_into(
        &mut s,
        &RunOptions {
            penalty: 5,
            ..disabling("IntVec2 - Constructors")
        },
    )
    .unwrap();
    assert_eq!(summary.penalty, 20);
    assert_eq!(summary.grade, 80);
}

#[test]
fn run_into_json_mode_feeds_the_json_report() {
    let (mut s, out) = captured_session();
    let summary = run_into(
        &mut s,
        &RunOptions {
            json: true,
            ..disabling("IntVec2 - Constructors")
        },
    )
    .unwrap();
    assert!(!out.contents().contains("Grade for assignment"));

    let v = serde_json::to_value(JsonRun::new(s.accumulator(), s.history(), summary)).unwrap();
    assert_eq!(v["grade"]["grade"], 92);
    assert_eq!(v["grade"]["incorrect"], 4);
    assert_eq!(v["graded"]["skipped"], 4);
    assert_eq!(v["graded"]["expected"], 21);
    assert_eq!(v["total"]["passed"], 17);
    let sets = v["test_sets"].as_array().unwrap();
    assert_eq!(sets.len(), 7);
    assert_eq!(sets[0]["name"], "IntVec2 - Constructors");
    assert_eq!(sets[0]["outcome"], "fully_skipped");
    assert_eq!(sets[1]["outcome"], "consistent");
    assert!(v["failures"].as_array().unwrap().is_empty());
}

#[test]
fn run_into_starts_from_zeroed_counters() {
    let (mut s, _out) = captured_session();
    run_into(&mut s, &opts()).unwrap();
    let summary = run_into(&mut s, &disabling("IntVec2 - Operators")).unwrap();

    assert_eq!(s.history().len(), 7);
    assert_eq!(s.accumulator().graded.expected, 21);
    assert_eq!(summary.grade, 92);
}

#[test]
fn run_into_rejects_unknown_disable_label() {
    let (mut s, out) = captured_session();
    let err = run_into(&mut s, &disabling("Nope")).unwrap_err();
    assert!(matches!(err, HarnessError::UnknownTestSet(ref l) if l == "Nope"));
    assert!(out.contents().is_empty(), "nothing runs on a bad label");
}

#[test]
fn run_into_rejects_unknown_group() {
    let (mut s, _out) = captured_session();
    let err = run_into(
        &mut s,
        &RunOptions {
            groups: vec!["Vec7".to_string()],
            ..opts()
        },
    )
    .unwrap_err();
    assert_eq!(err.to_string(), "unknown group \"vec7\" (see `gk list`)");
}

#[test]
fn execute_selected_groups_in_order() {
    let groups = suites::builtin();
    let selected = suites::select(&groups, &["IntVec2".to_string(), "AABB2".to_string()]).unwrap();
    let (mut s, out) = captured_session();
    execute(&mut s, &selected);

    let text = out.contents();
    let aabb = text.find("(UnitTests_AABB2)(Start)").unwrap();
    let ivec = text.find("(UnitTests_IntVec2)(Start)").unwrap();
    assert!(aabb < ivec, "groups keep bundled order");
    assert!(!text.contains("(UnitTests_Vec2)"));
    assert_eq!(GradePolicy::default().compute_grade(s.accumulator()), 100);
}

#[test]
fn list_rows_cover_every_set() {
    let groups = suites::builtin();
    let rows = list_rows(&groups);
    let total: usize = groups.iter().map(|g| g.sets.len()).sum();
    assert_eq!(rows.len(), total);
    let ctor = rows
        .iter()
        .find(|r| r.name == "IntVec2 - Constructors")
        .unwrap();
    assert_eq!(ctor.declared, 4);
    assert!(ctor.graded);
}

#[test]
fn write_list_table_and_total() {
    let groups = suites::builtin();
    let int_vec2: Vec<JsonSet> = list_rows(&groups)
        .into_iter()
        .filter(|r| r.group == "IntVec2")
        .collect();
    let mut buf = Vec::new();
    write_list(&mut buf, &int_vec2).unwrap();

    let text = String::from_utf8(buf).unwrap();
    let ctor = text
        .lines()
        .find(|l| l.contains("IntVec2 - Constructors"))
        .unwrap();
    assert!(ctor.contains("graded"));
    assert!(ctor.trim_end().ends_with('4'));
    assert!(text.trim_end().ends_with("21 graded tests declared"));
}

#[test]
fn list_rows_json_shape() {
    let groups = suites::builtin();
    let v = serde_json::to_value(list_rows(&groups)).unwrap();
    let perf = v
        .as_array()
        .unwrap()
        .iter()
        .find(|r| r["name"] == "Vec3 - Performance Tests")
        .unwrap();
    assert_eq!(perf["group"], "Vec3");
    assert_eq!(perf["graded"], false);
    assert_eq!(perf["declared"], 1);
}

#[test]
fn completions_name_the_binary() {
    let mut buf = Vec::new();
    write_completions(Shell::Bash, &mut buf);
    let script = String::from_utf8(buf).unwrap();
    assert!(script.contains("gk"));
}
