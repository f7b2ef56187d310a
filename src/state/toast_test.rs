use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ToastState::default();
    let a = state.push("one", ToastKind::Success);
    let b = state.push("two", ToastKind::Error);
    assert!(b > a);
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.items[1].message, "two");
}

#[test]
fn new_toast_is_entering_and_hidden() {
    let mut state = ToastState::default();
    let id = state.push("hello", ToastKind::Success);
    let toast = state.get(id).expect("toast exists");
    assert_eq!(toast.phase, ToastPhase::Entering);
    assert_eq!(toast.class(), "notification success");
}

#[test]
fn toast_walks_through_phases_and_is_removed() {
    let mut state = ToastState::default();
    let id = state.push("bad input", ToastKind::Error);

    state.show(id);
    assert_eq!(state.get(id).map(Toast::class).as_deref(), Some("notification error show"));

    state.dismiss(id);
    assert_eq!(state.get(id).map(|t| t.phase), Some(ToastPhase::Leaving));
    assert_eq!(state.get(id).map(Toast::class).as_deref(), Some("notification error"));

    state.remove(id);
    assert!(state.get(id).is_none());
    assert!(state.items.is_empty());
}

#[test]
fn removing_one_toast_keeps_others() {
    let mut state = ToastState::default();
    let a = state.push("a", ToastKind::Success);
    let b = state.push("b", ToastKind::Success);
    state.remove(a);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, b);
}

#[test]
fn unknown_ids_are_ignored() {
    let mut state = ToastState::default();
    state.show(42);
    state.dismiss(42);
    state.remove(42);
    assert!(state.items.is_empty());
}

#[test]
fn default_timing_matches_page() {
    let timing = ToastTiming::default();
    assert_eq!(timing.show_delay_ms, 100);
    assert_eq!(timing.visible_ms, 3000);
    assert_eq!(timing.exit_ms, 300);
}
