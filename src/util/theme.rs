//! Theme persistence and application.
//!
//! Reads the saved theme from `localStorage`, applies the `dark-mode` class
//! to `<body>` and swaps the toggle glyph. Requires a browser environment;
//! native builds keep the pure toggle and no-op the rest.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::state::theme::Theme;
#[cfg(feature = "csr")]
use crate::state::theme::{DARK_CLASS, STORAGE_KEY};
#[cfg(feature = "csr")]
use crate::util::dom;

/// Id of the theme toggle button.
pub const TOGGLE_ID: &str = "darkModeToggle";

/// Read the saved theme. No storage or no saved value means light.
pub fn read_stored() -> Theme {
    #[cfg(feature = "csr")]
    {
        let stored = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|s| s.get_item(STORAGE_KEY).ok().flatten());
        Theme::from_stored(stored.as_deref())
    }
    #[cfg(not(feature = "csr"))]
    {
        Theme::default()
    }
}

/// Apply `theme` to `<body>` and the toggle icon.
pub fn apply(theme: Theme) {
    #[cfg(feature = "csr")]
    {
        let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        if let Some(body) = doc.body() {
            let _ = body.class_list().toggle_with_force(DARK_CLASS, theme.is_dark());
        }
        if let Some(icon) = doc.get_element_by_id(TOGGLE_ID).as_ref().and_then(dom::icon_of) {
            dom::swap_class(&icon, theme.toggled().icon_class(), theme.icon_class());
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = theme;
    }
}

/// Write `theme` to `localStorage`.
pub fn persist(theme: Theme) {
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(STORAGE_KEY, theme.as_str());
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = theme;
    }
}

/// Flip the theme, apply it, persist it and return the new value.
pub fn toggle(current: Theme) -> Theme {
    let next = current.toggled();
    apply(next);
    persist(next);
    next
}
