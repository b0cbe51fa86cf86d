use super::*;

#[test]
fn max_label_width_with_labels() {
    let labels = ["Vec2 - Constructors", "AABB2 - Accessor Methods"];
    let w = max_label_width(labels.iter().copied(), 4);
    assert_eq!(w, "AABB2 - Accessor Methods".len());
}

#[test]
fn max_label_width_empty() {
    let w = max_label_width(std::iter::empty(), 4);
    assert_eq!(w, 4);
}

#[test]
fn max_label_width_min_enforced() {
    let w = max_label_width(["a"].iter().copied(), 10);
    assert_eq!(w, 10);
}

#[test]
fn pad_right_uses_display_width() {
    assert_eq!(pad_right("ab", 4), "ab  ");
    // CJK characters take two cells each
    assert_eq!(pad_right("日本", 6), "日本  ");
    assert_eq!(pad_right("toolong", 3), "toolong");
}

#[test]
fn separator_width() {
    let s = separator(5);
    // Each ─ is 3 bytes in UTF-8
    assert_eq!(s.chars().count(), 5);
}

#[test]
fn print_json_stdout_works() {
    let data = vec![1, 2, 3];
    print_json_stdout(&data).unwrap();
}
