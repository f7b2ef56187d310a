//! Contact form: validate on submit, toast the outcome, reset on success.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};

use super::PageContext;
use crate::components::toast_host::{ToastHost, notify};
use crate::util::contact::ContactSubmission;
use crate::util::dom::{self, DomError};

pub const FORM_ID: &str = "contactForm";

/// Mount the toast stack at the end of `<body>`.
pub fn mount_toasts(ctx: &PageContext) -> Result<(), DomError> {
    let Some(body) = dom::document()?.body() else {
        return Ok(());
    };
    let toasts = ctx.toasts;
    leptos::mount::mount_to(body, move || view! { <ToastHost toasts/> }).forget();
    Ok(())
}

/// Value of an `<input>` or `<textarea>` by id; empty when missing.
fn field_value(doc: &Document, id: &str) -> String {
    let Some(el) = doc.get_element_by_id(id) else {
        return String::new();
    };
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        return input.value();
    }
    el.dyn_ref::<HtmlTextAreaElement>().map(HtmlTextAreaElement::value).unwrap_or_default()
}

pub fn attach(ctx: &PageContext) -> Result<(), DomError> {
    let doc = dom::document()?;
    let Some(form) = doc.get_element_by_id(FORM_ID).and_then(|el| el.dyn_into::<HtmlFormElement>().ok()) else {
        log::debug!("contact: #{FORM_ID} not found, skipping");
        return Ok(());
    };

    let toasts = ctx.toasts;
    let timing = ctx.config.toast;
    let submit_form = form.clone();
    dom::listen(&form, "submit", move |ev| {
        ev.prevent_default();
        let submission = ContactSubmission::new(
            field_value(&doc, "name"),
            field_value(&doc, "email"),
            field_value(&doc, "message"),
        );
        let outcome = submission.outcome();
        if outcome.reset_form {
            log::info!("contact: accepted message from {}", submission.name);
            submit_form.reset();
        }
        notify(toasts, timing, outcome.message, outcome.kind);
    })
}
