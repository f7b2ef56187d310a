use super::*;

fn sections() -> Vec<SectionMark> {
    vec![
        SectionMark::new("home", 0.0),
        SectionMark::new("about", 700.0),
        SectionMark::new("skills", 1400.0),
        SectionMark::new("contact", 2100.0),
    ]
}

#[test]
fn top_of_page_selects_first_section() {
    assert_eq!(active_section(&sections(), 0.0, 64.0, 50.0), Some("home"));
}

#[test]
fn section_activates_before_reaching_its_top() {
    // 700 - 64 - 50 = 586
    assert_eq!(active_section(&sections(), 585.0, 64.0, 50.0), Some("home"));
    assert_eq!(active_section(&sections(), 586.0, 64.0, 50.0), Some("about"));
}

#[test]
fn deepest_passed_section_wins() {
    assert_eq!(active_section(&sections(), 5000.0, 64.0, 50.0), Some("contact"));
}

#[test]
fn no_section_when_all_below_scroll() {
    let late = vec![SectionMark::new("about", 900.0)];
    assert_eq!(active_section(&late, 0.0, 64.0, 50.0), None);
    assert_eq!(active_section(&[], 0.0, 64.0, 50.0), None);
}

#[test]
fn link_targets_matches_hash_href() {
    assert!(link_targets("#about", Some("about")));
    assert!(!link_targets("#skills", Some("about")));
    assert!(!link_targets("/about", Some("about")));
}

#[test]
fn bare_hash_never_matches_missing_section() {
    assert!(!link_targets("#", None));
    assert!(!link_targets("#about", None));
}
