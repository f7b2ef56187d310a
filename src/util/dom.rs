//! Thin `web-sys` helpers: element lookup, listeners, class swaps.
//!
//! Lookups return `Option` so a behavior whose markup is missing can bail out
//! with `Ok(())`. Only JavaScript exceptions become [`DomError`].

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, Window};

use crate::util::classes::replace_class;

/// Failure inside a wiring function.
#[derive(Debug, thiserror::Error)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

/// All elements matching `selector`, in document order.
pub fn query_all(root: &Document, selector: &str) -> Result<Vec<Element>, DomError> {
    let list = root.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// All elements under `root` matching `selector`.
pub fn query_all_in(root: &Element, selector: &str) -> Result<Vec<Element>, DomError> {
    let list = root.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Element by id, cast to `HtmlElement`.
pub fn html_by_id(doc: &Document, id: &str) -> Option<HtmlElement> {
    doc.get_element_by_id(id).and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

/// Height of the first `<nav>`, or 0 when the page has none.
pub fn nav_height(doc: &Document) -> f64 {
    doc.query_selector("nav")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .map_or(0.0, |nav| f64::from(nav.offset_height()))
}

/// Register `handler` for `event` on `target` for the lifetime of the page.
pub fn listen<T, F>(target: &T, event: &str, handler: F) -> Result<(), DomError>
where
    T: AsRef<EventTarget>,
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .as_ref()
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Replace class `from` with `to` on `el`; no change when `from` is absent.
pub fn swap_class(el: &Element, from: &str, to: &str) {
    if let Some(next) = replace_class(&el.class_name(), from, to) {
        el.set_class_name(&next);
    }
}

/// The `<i>` glyph inside a button, if any.
pub fn icon_of(el: &Element) -> Option<Element> {
    el.query_selector("i").ok().flatten()
}
