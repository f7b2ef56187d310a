//! Sections fade in once when they first intersect the viewport.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use motion::reveal::RevealSet;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::PageContext;
use crate::util::dom::{self, DomError};

pub const FADE_CLASS: &str = "fade-in";

pub fn attach(ctx: &PageContext) -> Result<(), DomError> {
    let doc = dom::document()?;
    let sections = dom::query_all(&doc, "section")?;
    if sections.is_empty() {
        log::debug!("fade-in: no sections, skipping");
        return Ok(());
    }

    let revealed = Rc::new(RefCell::new(RevealSet::<usize>::new()));
    let observed: Rc<Vec<Element>> = Rc::new(sections);

    let tracked = Rc::clone(&observed);
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter().filter_map(|e| e.dyn_into::<IntersectionObserverEntry>().ok()) {
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                observer.unobserve(&target);
                let Some(idx) = tracked.iter().position(|s| *s == target) else {
                    continue;
                };
                if revealed.borrow_mut().claim(idx) {
                    let _ = target.class_list().add_1(FADE_CLASS);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(ctx.config.animation_threshold));
    options.set_root_margin(&ctx.config.fade_root_margin);
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    for section in observed.iter() {
        observer.observe(section);
    }
    Ok(())
}
