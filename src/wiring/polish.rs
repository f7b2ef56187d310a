//! Small page-level touches: a `loaded` body class, no context menu on
//! images, and GPU compositing hints for animated elements.

use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::util::dom::{self, DomError};

pub const LOADED_CLASS: &str = "loaded";
pub const GPU_CLASS: &str = "gpu-accelerated";

pub fn attach() -> Result<(), DomError> {
    let window = dom::window()?;
    let doc = dom::document()?;

    let load_doc = doc.clone();
    dom::listen(&window, "load", move |_| {
        if let Some(body) = load_doc.body() {
            let _ = body.class_list().add_1(LOADED_CLASS);
        }
    })?;

    dom::listen(&doc, "contextmenu", |ev| {
        let is_image = ev
            .target()
            .and_then(|t| t.dyn_into::<Element>().ok())
            .is_some_and(|el| el.tag_name().eq_ignore_ascii_case("img"));
        if is_image {
            ev.prevent_default();
        }
    })?;

    for el in dom::query_all(&doc, ".card-hover, .fade-in")? {
        let _ = el.class_list().add_1(GPU_CLASS);
    }
    Ok(())
}
