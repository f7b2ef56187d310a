//! Leptos islands mounted into the static page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page markup is plain HTML; these components are mounted into existing
//! elements (or `<body>`) by the wiring layer and own their reactive state.

pub mod toast_host;
pub mod typing_text;
