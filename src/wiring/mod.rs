//! DOM wiring: attaches each page behavior to the static markup.
//!
//! ARCHITECTURE
//! ============
//! Every behavior is an independent `attach` function returning
//! `Result<(), DomError>`. Missing markup is `Ok(())` with a debug log; a
//! JavaScript failure is logged and the remaining behaviors still attach.
//! State lives in the closures each `attach` registers, never in globals.

pub mod active_nav;
pub mod contact;
pub mod fade_in;
pub mod menu;
pub mod parallax;
pub mod polish;
pub mod skill_bars;
pub mod smooth_scroll;
pub mod theme;
pub mod typing;

use leptos::prelude::*;

use crate::config::{CONFIG_ELEMENT_ID, SiteConfig};
use crate::state::toast::ToastState;
use crate::util::dom::{self, DomError};

/// Shared handles passed to each behavior.
#[derive(Clone)]
pub struct PageContext {
    pub config: SiteConfig,
    pub toasts: RwSignal<ToastState>,
}

/// Boot now if the DOM is parsed, otherwise on `DOMContentLoaded`.
pub fn boot_when_ready() {
    let doc = match dom::document() {
        Ok(doc) => doc,
        Err(e) => {
            log::warn!("portfolio: not booting: {e}");
            return;
        }
    };
    if doc.ready_state() != "loading" {
        boot();
        return;
    }
    if let Err(e) = dom::listen(&doc, "DOMContentLoaded", |_| boot()) {
        log::warn!("portfolio: cannot wait for DOMContentLoaded: {e}");
    }
}

/// Attach every behavior to the current document.
pub fn boot() {
    let owner = Owner::new();
    owner.with(|| {
        let config = load_config();
        let toasts = RwSignal::new(ToastState::default());
        let ctx = PageContext { config, toasts };

        report("toasts", contact::mount_toasts(&ctx));
        report("typing", typing::attach(&ctx));
        report("theme", theme::attach());
        report("menu", menu::attach());
        report("smooth-scroll", smooth_scroll::attach(&ctx));
        report("skill-bars", skill_bars::attach(&ctx));
        report("fade-in", fade_in::attach(&ctx));
        report("contact", contact::attach(&ctx));
        report("active-nav", active_nav::attach(&ctx));
        report("parallax", parallax::attach(&ctx));
        report("polish", polish::attach());
    });
    // The page never tears down; keep every signal alive.
    std::mem::forget(owner);
    log::info!("portfolio: interactivity ready");
}

fn report(name: &str, result: Result<(), DomError>) {
    if let Err(e) = result {
        log::warn!("portfolio: {name} failed to attach: {e}");
    }
}

/// Read the JSON configuration island, falling back to defaults.
fn load_config() -> SiteConfig {
    let raw = dom::document()
        .ok()
        .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());
    let Some(raw) = raw else {
        return SiteConfig::default();
    };
    SiteConfig::from_json(&raw).unwrap_or_else(|e| {
        log::warn!("portfolio: {e}; using defaults");
        SiteConfig::default()
    })
}
