use crate::cursor::{translate3d, CursorFollower, HoverTarget};
use crate::dom;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

const INTERACTIVE_SELECTOR: &str = "a, button, input, textarea, .cursor-interactive, [onclick]";

/// The `#cursor` dot and `#cursor-trail` ring.
#[derive(Clone)]
pub struct CursorView {
    cursor: web::HtmlElement,
    trail: web::HtmlElement,
    label: Option<web::Element>,
    pub follower: Rc<RefCell<CursorFollower>>,
}

impl CursorView {
    pub fn mount(document: &web::Document) -> anyhow::Result<Self> {
        let cursor: web::HtmlElement = dom::element_by_id(document, "cursor")
            .ok_or_else(|| anyhow::anyhow!("missing #cursor"))?;
        let trail: web::HtmlElement = dom::element_by_id(document, "cursor-trail")
            .ok_or_else(|| anyhow::anyhow!("missing #cursor-trail"))?;
        let label = cursor.query_selector(".cursor-label").ok().flatten();
        Ok(Self {
            cursor,
            trail,
            label,
            follower: Rc::new(RefCell::new(CursorFollower::default())),
        })
    }

    #[inline]
    pub fn set_target(&self, client: Vec2) {
        self.follower.borrow_mut().set_target(client);
    }

    pub fn step(&self) {
        let f = {
            let mut f = self.follower.borrow_mut();
            f.step();
            *f
        };
        dom::set_style(&self.cursor, "transform", &translate3d(f.cursor));
        dom::set_style(&self.trail, "transform", &translate3d(f.trail));
    }

    /// Update hover styling and label for whatever is now under the pointer.
    pub fn hover(&self, target: &web::Element) {
        let hit = classify(target);
        if let Some(label) = &self.label {
            label.set_text_content(Some(hit.label()));
        }
        for el in [&self.cursor, &self.trail] {
            let cl = el.class_list();
            if hit.interactive {
                _ = cl.add_1("is-hovering");
            } else {
                _ = cl.remove_1("is-hovering");
            }
        }
    }
}

fn classify(target: &web::Element) -> HoverTarget {
    let near = |selector: &str| target.closest(selector).ok().flatten().is_some();
    HoverTarget {
        interactive: near(INTERACTIVE_SELECTOR),
        project: near("[data-cursor=\"project\"]"),
        drag: near("[data-cursor=\"drag\"]"),
        mailto: near("[href^=\"mailto:\"]"),
    }
}

/// Resolve a mouse event's target to an element, if it is one.
pub fn event_element(ev: &web::Event) -> Option<web::Element> {
    ev.target().and_then(|t| t.dyn_into::<web::Element>().ok())
}
