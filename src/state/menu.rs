//! Mobile navigation menu open/closed state.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

/// Class that hides the menu panel.
pub const HIDDEN_CLASS: &str = "hidden";

/// Entry animation class added when the panel opens.
pub const ENTER_CLASS: &str = "mobile-menu-enter";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

impl MenuState {
    /// Flip the menu and return the new open flag.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Icon on the toggle button: a cross while open, a hamburger while closed.
    #[must_use]
    pub fn icon_class(self) -> &'static str {
        if self.open { "fa-times" } else { "fa-bars" }
    }

    /// The icon class to replace when moving into the current state.
    #[must_use]
    pub fn stale_icon_class(self) -> &'static str {
        if self.open { "fa-bars" } else { "fa-times" }
    }
}
