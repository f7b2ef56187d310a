//! Hero typewriter text.
//!
//! Renders the current frame of a [`TypewriterCycle`] as a bare text node.
//! Each tick schedules exactly one follow-up timeout, so ticks never overlap.

use leptos::prelude::*;
use motion::typewriter::TypewriterCycle;

/// Text node cycling through the typewriter playlist forever.
#[component]
pub fn TypingText(mut cycle: TypewriterCycle) -> impl IntoView {
    // First frame renders synchronously; later frames come from timeouts.
    let (first, delay_ms) = cycle.tick();
    let text = RwSignal::new(first);

    #[cfg(feature = "csr")]
    schedule_tick(cycle, text, delay_ms);
    #[cfg(not(feature = "csr"))]
    let _ = (cycle, delay_ms);

    move || text.get()
}

#[cfg(feature = "csr")]
fn schedule_tick(mut cycle: TypewriterCycle, text: RwSignal<String>, delay_ms: u32) {
    gloo_timers::callback::Timeout::new(delay_ms, move || {
        let (frame, next_delay) = cycle.tick();
        // Disposed signal: the island was unmounted, stop ticking.
        if text.try_set(frame).is_some() {
            return;
        }
        schedule_tick(cycle, text, next_delay);
    })
    .forget();
}
