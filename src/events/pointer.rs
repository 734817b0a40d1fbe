use crate::canvas::HeroCanvas;
use crate::dom;
use crate::smooth::ScrollLock;
use crate::ui::cursor::{event_element, CursorView};
use crate::ui::modal;
use glam::Vec2;
use web_sys as web;

/// Feed pointer moves to the hero simulation and the custom cursor.
pub fn wire_pointer(hero: Option<HeroCanvas>, cursor: Option<CursorView>) {
    if hero.is_none() && cursor.is_none() {
        return;
    }
    let hover_cursor = cursor.clone();
    dom::add_window_listener("pointermove", move |ev: web::PointerEvent| {
        let client = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        if let Some(h) = &hero {
            h.on_pointer_move(client);
        }
        if let Some(c) = &cursor {
            c.set_target(client);
        }
    });

    if let Some(cursor) = hover_cursor {
        dom::add_window_listener("mouseover", move |ev: web::MouseEvent| {
            if let Some(target) = event_element(&ev) {
                cursor.hover(&target);
            }
        });
    }
}

/// Clicking a modal's backdrop closes it.
pub fn wire_backdrop_click(document: &web::Document, lock: ScrollLock) {
    dom::add_document_listener(document, "click", move |ev: web::MouseEvent| {
        if let Some(target) = event_element(&ev) {
            modal::close_if_backdrop(&target, &lock);
        }
    });
}
