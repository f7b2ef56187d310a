//! Dark-mode toggle on `#darkModeToggle`.

use std::cell::Cell;
use std::rc::Rc;

use crate::util::dom::{self, DomError};
use crate::util::theme::{self, TOGGLE_ID};

pub fn attach() -> Result<(), DomError> {
    let doc = dom::document()?;
    let Some(toggle) = doc.get_element_by_id(TOGGLE_ID) else {
        log::debug!("theme: #{TOGGLE_ID} not found, skipping");
        return Ok(());
    };

    let current = Rc::new(Cell::new(theme::read_stored()));
    theme::apply(current.get());

    dom::listen(&toggle, "click", move |_| {
        current.set(theme::toggle(current.get()));
    })
}
