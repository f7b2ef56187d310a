//! Browser-free motion logic for the portfolio page.
//!
//! Everything here is plain data and arithmetic so it can be tested natively.
//! The `portfolio` crate owns the DOM side: it feeds scroll positions and
//! element geometry in, and applies the returned text, offsets and flags.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`typewriter`] | Playlist, cursor state machine and the infinite typing cycle |
//! | [`reveal`] | Once-only bookkeeping for scroll/intersection animations |
//! | [`scroll`] | Smooth-scroll targets, viewport visibility, parallax offsets |
//! | [`nav`] | Active-section selection for navigation highlighting |
//! | [`consts`] | Default timings and geometry shared with the front end |

pub mod consts;
pub mod nav;
pub mod reveal;
pub mod scroll;
pub mod typewriter;
