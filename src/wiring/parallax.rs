//! Hero decorations drift at half the scroll speed.

use motion::scroll::{parallax_offset, translate_y};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use super::PageContext;
use crate::util::dom::{self, DomError};

pub const HERO_ID: &str = "home";

pub fn attach(ctx: &PageContext) -> Result<(), DomError> {
    let window = dom::window()?;
    let doc = dom::document()?;
    let Some(hero) = doc.get_element_by_id(HERO_ID) else {
        log::debug!("parallax: #{HERO_ID} not found, skipping");
        return Ok(());
    };

    let factor = ctx.config.parallax_factor;
    let scroll_window = window.clone();
    dom::listen(&window, "scroll", move |_| {
        let transform = translate_y(parallax_offset(scroll_window.scroll_y().unwrap_or(0.0), factor));
        // Re-queried each time: `.fade-in` is added lazily by the fade-in observer.
        let Ok(elements) = dom::query_all_in(&hero, ".fade-in") else {
            return;
        };
        for el in elements.into_iter().filter_map(|el| el.dyn_into::<HtmlElement>().ok()) {
            let _ = el.style().set_property("transform", &transform);
        }
    })
}
