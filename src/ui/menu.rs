use crate::dom;
use crate::smooth::ScrollLock;
use std::cell::Cell;
use std::rc::Rc;
use web_sys as web;

const OPEN_CLASS: &str = "is-open";

#[derive(Clone)]
struct MobileMenu {
    button: web::Element,
    menu: web::Element,
    open: Rc<Cell<bool>>,
    lock: ScrollLock,
}

impl MobileMenu {
    fn set_open(&self, open: bool) {
        self.open.set(open);
        for el in [&self.menu, &self.button] {
            let cl = el.class_list();
            if open {
                _ = cl.add_1(OPEN_CLASS);
            } else {
                _ = cl.remove_1(OPEN_CLASS);
            }
        }
        if open {
            self.lock.lock(false);
        } else {
            self.lock.unlock();
        }
    }
}

/// Wire `#mobile-menu-btn` to toggle `#mobile-menu`; links inside close it.
pub fn wire(document: &web::Document, lock: ScrollLock) -> anyhow::Result<()> {
    let button = document
        .get_element_by_id("mobile-menu-btn")
        .ok_or_else(|| anyhow::anyhow!("missing #mobile-menu-btn"))?;
    let menu = document
        .get_element_by_id("mobile-menu")
        .ok_or_else(|| anyhow::anyhow!("missing #mobile-menu"))?;
    let state = MobileMenu {
        button,
        menu,
        open: Rc::new(Cell::new(false)),
        lock,
    };

    let toggle = state.clone();
    dom::add_element_click_listener(&state.button, move || {
        toggle.set_open(!toggle.open.get());
    });

    for link in dom::query_all(&state.menu, "a") {
        let close = state.clone();
        dom::add_element_click_listener(&link, move || close.set_open(false));
    }
    Ok(())
}
