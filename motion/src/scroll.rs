//! Scroll geometry: anchor targets, viewport visibility, parallax.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Element id named by an in-page anchor `href` (`"#about"` → `"about"`).
///
/// Returns `None` for external links and for a bare `"#"`.
#[must_use]
pub fn anchor_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Document offset to scroll to so `target_top` lands below the fixed header.
///
/// Clamped at 0; the browser would clamp anyway, but callers log this value.
#[must_use]
pub fn anchor_scroll_top(target_top: f64, nav_height: f64, offset: f64) -> f64 {
    (target_top - nav_height - offset).max(0.0)
}

/// Whether a bounding rect overlaps the viewport vertically.
#[must_use]
pub fn is_in_viewport(rect_top: f64, rect_bottom: f64, viewport_height: f64) -> bool {
    rect_top < viewport_height && rect_bottom > 0.0
}

/// Vertical parallax shift for the given scroll position.
#[must_use]
pub fn parallax_offset(scroll_y: f64, factor: f64) -> f64 {
    scroll_y * factor
}

/// CSS `transform` value for a vertical translation in pixels.
#[must_use]
pub fn translate_y(offset_px: f64) -> String {
    format!("translateY({offset_px}px)")
}
