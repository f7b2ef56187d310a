use super::*;

#[test]
fn claim_is_true_only_once_per_key() {
    let mut set = RevealSet::new();
    assert!(set.claim(3));
    assert!(!set.claim(3));
    assert!(!set.claim(3));
    assert!(set.claim(4));
    assert!(set.is_revealed(&3));
    assert!(set.is_revealed(&4));
}

#[test]
fn new_set_has_nothing_revealed() {
    let set: RevealSet<usize> = RevealSet::new();
    assert!(!set.is_revealed(&0));
}

#[test]
fn repeated_visibility_animates_each_element_once() {
    let mut set = RevealSet::new();
    let mut animations = 0;
    for _scroll in 0..10 {
        for bar in 0..3usize {
            if set.claim(bar) {
                animations += 1;
            }
        }
    }
    assert_eq!(animations, 3);
}

#[test]
fn inline_width_reads_percentage() {
    assert_eq!(inline_width_percent("width: 85%"), Some("85%"));
    assert_eq!(inline_width_percent("background: red; width:60%;"), Some("60%"));
}

#[test]
fn inline_width_ignores_other_width_properties() {
    assert_eq!(inline_width_percent("max-width: 90%"), None);
    assert_eq!(inline_width_percent("min-width: 10%; width: 40%"), Some("40%"));
}

#[test]
fn inline_width_rejects_non_percent_values() {
    assert_eq!(inline_width_percent("width: 120px"), None);
    assert_eq!(inline_width_percent("width: %"), None);
    assert_eq!(inline_width_percent(""), None);
}
