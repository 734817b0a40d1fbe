use crate::dom;
use crate::smooth::ScrollLock;
use web_sys as web;

const ACTIVE_CLASS: &str = "active";

#[inline]
pub fn modal_id(project_id: &str) -> String {
    format!("modal-{}", project_id)
}

pub fn open(document: &web::Document, project_id: &str, lock: &ScrollLock) -> bool {
    let Some(modal) = document.get_element_by_id(&modal_id(project_id)) else {
        log::warn!("[modal] no modal for {:?}", project_id);
        return false;
    };
    _ = modal.class_list().add_1(ACTIVE_CLASS);
    lock.lock(true);
    true
}

pub fn close(document: &web::Document, project_id: &str, lock: &ScrollLock) -> bool {
    let Some(modal) = document.get_element_by_id(&modal_id(project_id)) else {
        return false;
    };
    _ = modal.class_list().remove_1(ACTIVE_CLASS);
    lock.unlock();
    true
}

/// Close every open modal (Escape).
pub fn close_all(document: &web::Document, lock: &ScrollLock) {
    for modal in dom::query_document_all(document, ".modal.active") {
        _ = modal.class_list().remove_1(ACTIVE_CLASS);
    }
    lock.unlock();
}

/// Close a modal when its backdrop (the `.modal` element itself) is clicked.
pub fn close_if_backdrop(target: &web::Element, lock: &ScrollLock) -> bool {
    let cl = target.class_list();
    if !cl.contains("modal") {
        return false;
    }
    _ = cl.remove_1(ACTIVE_CLASS);
    lock.unlock();
    true
}
