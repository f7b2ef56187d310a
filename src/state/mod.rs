//! Client-side UI state.
//!
//! DESIGN
//! ======
//! Each behavior owns a small plain-data model. The wiring layer holds these
//! in `Rc<RefCell<_>>` or Leptos signals; nothing here touches the DOM.

pub mod menu;
pub mod theme;
pub mod toast;
