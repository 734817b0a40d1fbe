use crate::canvas::HeroCanvas;
use crate::dom;
use crate::ui::scrollbar::Scrollbar;
use crate::ui::sections::{HorizontalScroll, Reveal};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Everything that re-lays itself out on scroll or resize.
#[derive(Clone, Default)]
pub struct ViewportTargets {
    pub hero: Option<HeroCanvas>,
    pub horizontal: Option<HorizontalScroll>,
    pub reveal: Option<Reveal>,
    pub scrollbar: Rc<RefCell<Option<Scrollbar>>>,
}

impl ViewportTargets {
    fn on_scroll(&self) {
        if let Some(h) = &self.horizontal {
            h.update();
        }
        if let Some(r) = &self.reveal {
            r.update();
        }
        if let Some(s) = self.scrollbar.borrow().as_ref() {
            s.update();
        }
    }

    fn on_resize(&self) {
        if let Some(h) = &self.hero {
            h.resize();
        }
        self.on_scroll();
    }
}

pub fn wire_viewport(targets: ViewportTargets) {
    let scroll = targets.clone();
    dom::add_window_listener("scroll", move |_ev: web::Event| scroll.on_scroll());
    dom::add_window_listener("resize", move |_ev: web::Event| targets.on_resize());
}
