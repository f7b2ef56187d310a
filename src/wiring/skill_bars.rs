//! Skill bars grow from 0% to their inline width the first time they scroll
//! into view.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use motion::reveal::{RevealSet, inline_width_percent};
use motion::scroll::is_in_viewport;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, Window};

use super::PageContext;
use crate::util::dom::{self, DomError};

pub const SELECTOR: &str = ".skill-bar";

struct SkillBars {
    bars: Vec<HtmlElement>,
    animated: RevealSet<usize>,
    delay_ms: u32,
}

impl SkillBars {
    fn check(&mut self, window: &Window) {
        let viewport = window.inner_height().ok().and_then(|h| h.as_f64()).unwrap_or(0.0);
        for (idx, bar) in self.bars.iter().enumerate() {
            if self.animated.is_revealed(&idx) {
                continue;
            }
            let rect = bar.get_bounding_client_rect();
            if !is_in_viewport(rect.top(), rect.bottom(), viewport) {
                continue;
            }
            self.animated.claim(idx);
            animate(bar, self.delay_ms);
        }
    }
}

/// Target width: the inline `width` style, or a `width: N%` in the style attribute.
fn target_width(bar: &HtmlElement) -> Option<String> {
    let inline = bar.style().get_property_value("width").unwrap_or_default();
    if !inline.is_empty() {
        return Some(inline);
    }
    let attr = bar.get_attribute("style")?;
    inline_width_percent(&attr).map(str::to_owned)
}

fn animate(bar: &HtmlElement, delay_ms: u32) {
    let Some(width) = target_width(bar) else {
        return;
    };
    let style = bar.style();
    let _ = style.set_property("width", "0%");
    Timeout::new(delay_ms, move || {
        let _ = style.set_property("width", &width);
    })
    .forget();
}

pub fn attach(ctx: &PageContext) -> Result<(), DomError> {
    let window = dom::window()?;
    let doc = dom::document()?;
    let bars: Vec<HtmlElement> = dom::query_all(&doc, SELECTOR)?
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .collect();
    if bars.is_empty() {
        log::debug!("skill-bars: no {SELECTOR} elements, skipping");
        return Ok(());
    }

    let state = Rc::new(RefCell::new(SkillBars {
        bars,
        animated: RevealSet::new(),
        delay_ms: ctx.config.skill_bar_delay_ms,
    }));
    state.borrow_mut().check(&window);

    let on_scroll = Rc::clone(&state);
    let scroll_window = window.clone();
    dom::listen(&window, "scroll", move |_| on_scroll.borrow_mut().check(&scroll_window))
}
