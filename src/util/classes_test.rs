use super::*;

#[test]
fn replaces_in_place() {
    assert_eq!(replace_class("fas fa-moon text-lg", "fa-moon", "fa-sun").as_deref(), Some("fas fa-sun text-lg"));
}

#[test]
fn absent_class_leaves_element_untouched() {
    assert_eq!(replace_class("fas fa-star", "fa-bars", "fa-times"), None);
    assert_eq!(replace_class("", "fa-moon", "fa-sun"), None);
}

#[test]
fn target_already_present_is_not_duplicated() {
    assert_eq!(replace_class("fa-bars fa-times", "fa-bars", "fa-times").as_deref(), Some("fa-times"));
}

#[test]
fn extra_whitespace_is_normalized() {
    assert_eq!(replace_class("  fa-sun   fas ", "fa-sun", "fa-moon").as_deref(), Some("fa-moon fas"));
}
