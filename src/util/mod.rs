//! Helpers shared by the wiring layer.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser access (storage, element lookup, listeners) is isolated here so the
//! behaviors in `wiring` stay short and the pure parts stay testable natively.

pub mod classes;
pub mod contact;
#[cfg(feature = "csr")]
pub mod dom;
pub mod theme;
