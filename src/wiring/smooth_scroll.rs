//! Smooth scrolling for in-page anchors.

use motion::scroll::{anchor_id, anchor_scroll_top};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

use super::PageContext;
use crate::util::dom::{self, DomError};

pub fn attach(ctx: &PageContext) -> Result<(), DomError> {
    let doc = dom::document()?;
    let offset = ctx.config.scroll_offset;

    for link in dom::query_all(&doc, r##"a[href^="#"]"##)? {
        let href = link.get_attribute("href").unwrap_or_default();
        let doc = doc.clone();
        dom::listen(&link, "click", move |ev| {
            ev.prevent_default();
            let Some(target) = anchor_id(&href)
                .and_then(|id| doc.get_element_by_id(id))
                .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            else {
                return;
            };
            let top = anchor_scroll_top(f64::from(target.offset_top()), dom::nav_height(&doc), offset);
            if let Ok(window) = dom::window() {
                let options = ScrollToOptions::new();
                options.set_top(top);
                options.set_behavior(ScrollBehavior::Smooth);
                window.scroll_to_with_scroll_to_options(&options);
            }
        })?;
    }
    Ok(())
}
