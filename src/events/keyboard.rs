use crate::dom;
use crate::smooth::ScrollLock;
use crate::ui::modal;
use web_sys as web;

/// Escape closes every open modal.
pub fn wire_escape(document: &web::Document, lock: ScrollLock) {
    let doc = document.clone();
    dom::add_document_listener(document, "keydown", move |ev: web::KeyboardEvent| {
        if ev.key() == "Escape" {
            modal::close_all(&doc, &lock);
        }
    });
}
