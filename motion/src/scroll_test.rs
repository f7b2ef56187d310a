#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn anchor_id_strips_hash() {
    assert_eq!(anchor_id("#about"), Some("about"));
    assert_eq!(anchor_id("#"), None);
    assert_eq!(anchor_id("https://example.com/#about"), None);
}

#[test]
fn anchor_scroll_top_subtracts_header_and_offset() {
    assert_eq!(anchor_scroll_top(1000.0, 64.0, 80.0), 856.0);
}

#[test]
fn anchor_scroll_top_never_negative() {
    assert_eq!(anchor_scroll_top(20.0, 64.0, 80.0), 0.0);
}

#[test]
fn visible_when_rect_overlaps_viewport() {
    assert!(is_in_viewport(100.0, 200.0, 800.0));
    assert!(is_in_viewport(-50.0, 10.0, 800.0));
}

#[test]
fn hidden_when_rect_outside_viewport() {
    assert!(!is_in_viewport(800.0, 900.0, 800.0));
    assert!(!is_in_viewport(-200.0, 0.0, 800.0));
}

#[test]
fn parallax_moves_at_half_speed() {
    assert_eq!(parallax_offset(300.0, 0.5), 150.0);
    assert_eq!(parallax_offset(0.0, 0.5), 0.0);
}

#[test]
fn translate_y_formats_pixels() {
    assert_eq!(translate_y(150.0), "translateY(150px)");
    assert_eq!(translate_y(12.5), "translateY(12.5px)");
}
