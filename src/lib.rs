//! # portfolio
//!
//! Leptos + WASM interactivity for a static personal portfolio page.
//!
//! The page markup ships as plain HTML. This crate attaches behavior to it:
//! the hero typewriter, dark mode, the mobile menu, smooth in-page scrolling,
//! reveal animations, contact-form validation with toasts, active nav
//! highlighting and hero parallax. Pure state machines live in the `motion`
//! crate and in [`state`]; the browser-only [`wiring`] layer (feature `csr`)
//! binds them to DOM events.

pub mod components;
pub mod config;
pub mod state;
pub mod util;
#[cfg(feature = "csr")]
pub mod wiring;

/// WASM entry point: install logging, then boot once the DOM is parsed.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    wiring::boot_when_ready();
}
