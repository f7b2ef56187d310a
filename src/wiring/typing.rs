//! Hero typewriter: mounts [`TypingText`] into `#typingText`.

use leptos::prelude::*;

use super::PageContext;
use crate::components::typing_text::TypingText;
use crate::util::dom::{self, DomError};

pub const TARGET_ID: &str = "typingText";

pub fn attach(ctx: &PageContext) -> Result<(), DomError> {
    let doc = dom::document()?;
    let Some(target) = dom::html_by_id(&doc, TARGET_ID) else {
        log::debug!("typing: #{TARGET_ID} not found, skipping");
        return Ok(());
    };
    let cycle = match ctx.config.typewriter() {
        Ok(cycle) => cycle,
        Err(e) => {
            log::warn!("typing: {e}");
            return Ok(());
        }
    };

    target.set_text_content(None);
    leptos::mount::mount_to(target, move || view! { <TypingText cycle/> }).forget();
    Ok(())
}
