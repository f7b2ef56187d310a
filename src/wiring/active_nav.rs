//! Highlights the nav link of the section currently being read.

use motion::nav::{SectionMark, active_section, link_targets};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use super::PageContext;
use crate::util::dom::{self, DomError};

pub const LINK_SELECTOR: &str = ".nav-link";

pub fn attach(ctx: &PageContext) -> Result<(), DomError> {
    let window = dom::window()?;
    let doc = dom::document()?;
    let sections: Vec<HtmlElement> = dom::query_all(&doc, "section[id]")?
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .collect();
    let links: Vec<Element> = dom::query_all(&doc, LINK_SELECTOR)?;
    if sections.is_empty() || links.is_empty() {
        log::debug!("active-nav: no sections or links, skipping");
        return Ok(());
    }

    let margin = ctx.config.nav_highlight_margin;
    let active_class = ctx.config.active_link_class.clone();
    let scroll_window = window.clone();
    dom::listen(&window, "scroll", move |_| {
        let marks: Vec<SectionMark> = sections
            .iter()
            .map(|s| SectionMark::new(s.id(), f64::from(s.offset_top())))
            .collect();
        let scroll_y = scroll_window.scroll_y().unwrap_or(0.0);
        let current = active_section(&marks, scroll_y, dom::nav_height(&doc), margin);
        for link in &links {
            let href = link.get_attribute("href").unwrap_or_default();
            let _ = link.class_list().toggle_with_force(&active_class, link_targets(&href, current));
        }
    })
}
