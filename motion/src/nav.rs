//! Active navigation link selection.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// A page section as seen by the highlighter: its id and document offset.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionMark {
    pub id: String,
    pub top: f64,
}

impl SectionMark {
    #[must_use]
    pub fn new(id: impl Into<String>, top: f64) -> Self {
        Self { id: id.into(), top }
    }
}

/// Id of the section the reader is in.
///
/// Sections are given in document order; the last one whose top (less the
/// header height and `margin`) is at or above `scroll_y` wins.
#[must_use]
pub fn active_section(sections: &[SectionMark], scroll_y: f64, nav_height: f64, margin: f64) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|s| scroll_y >= s.top - nav_height - margin)
        .map(|s| s.id.as_str())
}

/// Whether a nav link `href` points at the active section.
#[must_use]
pub fn link_targets(href: &str, active: Option<&str>) -> bool {
    match (href.strip_prefix('#'), active) {
        (Some(id), Some(active)) => id == active,
        _ => false,
    }
}
