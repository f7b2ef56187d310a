#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn read_stored_is_light_outside_the_browser() {
    assert_eq!(read_stored(), Theme::Light);
}

#[test]
fn toggle_flips_theme() {
    assert_eq!(toggle(Theme::Light), Theme::Dark);
    assert_eq!(toggle(Theme::Dark), Theme::Light);
}

#[test]
fn toggling_twice_restores_original() {
    let start = read_stored();
    assert_eq!(toggle(toggle(start)), start);
}

#[test]
fn apply_and_persist_are_callable_noops() {
    apply(Theme::Dark);
    persist(Theme::Light);
}
