//! Mobile navigation menu.
//!
//! `#mobileMenuToggle` opens and closes `#mobileMenu`; following any link
//! inside the panel closes it again.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::Element;

use crate::state::menu::{ENTER_CLASS, HIDDEN_CLASS, MenuState};
use crate::util::dom::{self, DomError};

pub const TOGGLE_ID: &str = "mobileMenuToggle";
pub const MENU_ID: &str = "mobileMenu";

struct MenuDom {
    panel: Element,
    icon: Option<Element>,
    state: MenuState,
}

impl MenuDom {
    fn render(&self) {
        let classes = self.panel.class_list();
        if self.state.open {
            let _ = classes.remove_1(HIDDEN_CLASS);
            let _ = classes.add_1(ENTER_CLASS);
        } else {
            let _ = classes.add_1(HIDDEN_CLASS);
        }
        if let Some(icon) = &self.icon {
            dom::swap_class(icon, self.state.stale_icon_class(), self.state.icon_class());
        }
    }
}

pub fn attach() -> Result<(), DomError> {
    let doc = dom::document()?;
    let (Some(toggle), Some(panel)) = (doc.get_element_by_id(TOGGLE_ID), doc.get_element_by_id(MENU_ID)) else {
        log::debug!("menu: #{TOGGLE_ID} or #{MENU_ID} not found, skipping");
        return Ok(());
    };

    let links = dom::query_all_in(&panel, "a")?;
    let menu = Rc::new(RefCell::new(MenuDom { icon: dom::icon_of(&toggle), panel, state: MenuState::default() }));

    let on_toggle = Rc::clone(&menu);
    dom::listen(&toggle, "click", move |_| {
        let mut menu = on_toggle.borrow_mut();
        menu.state.toggle();
        menu.render();
    })?;

    for link in links {
        let on_link = Rc::clone(&menu);
        dom::listen(&link, "click", move |_| {
            let mut menu = on_link.borrow_mut();
            menu.state.close();
            menu.render();
        })?;
    }
    Ok(())
}
