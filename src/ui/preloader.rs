use crate::constants::{PRELOADER_HIDE_DELAY_MS, PRELOADER_REVEAL_DELAY_MS, PRELOADER_TICK_MS};
use crate::dom;
use crate::preloader::{Preloader, PreloaderTick};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

struct PreloaderView {
    root: web::HtmlElement,
    percent: Option<web::Element>,
    status: Option<web::Element>,
    bar: Option<web::HtmlElement>,
}

impl PreloaderView {
    fn render(&self, tick: &PreloaderTick) {
        if let Some(el) = &self.percent {
            el.set_text_content(Some(&format!("{}%", tick.progress)));
        }
        if let Some(bar) = &self.bar {
            dom::set_style(bar, "width", &format!("{}%", tick.progress));
        }
        if let Some(el) = &self.status {
            el.set_text_content(Some(&format!("> {}", tick.status)));
        }
    }
}

/// Run the preloader if the page has one, then call `on_ready`.
///
/// Returns `false` (without calling `on_ready`) when there is no `#preloader`.
pub fn run(document: &web::Document, on_ready: impl FnOnce() + 'static) -> bool {
    let Some(root) = dom::element_by_id::<web::HtmlElement>(document, "preloader") else {
        return false;
    };
    let view = PreloaderView {
        root,
        percent: document.get_element_by_id("preloader-percent"),
        status: document.get_element_by_id("preloader-status"),
        bar: dom::element_by_id(document, "preloader-bar"),
    };
    let Some(window) = web::window() else {
        return false;
    };
    dom::set_body_scroll_locked(true);

    let state = Rc::new(RefCell::new(Preloader::new(StdRng::from_entropy())));
    let interval_id = Rc::new(Cell::new(None::<i32>));
    let on_ready = Rc::new(RefCell::new(Some(on_ready)));

    let interval_for_tick = interval_id.clone();
    let tick = Closure::wrap(Box::new(move || {
        let t = state.borrow_mut().tick();
        view.render(&t);
        if !t.done {
            return;
        }
        if let (Some(id), Some(w)) = (interval_for_tick.take(), web::window()) {
            w.clear_interval_with_handle(id);
        }
        let Some(ready) = on_ready.borrow_mut().take() else {
            return;
        };
        let root = view.root.clone();
        dom::set_timeout(PRELOADER_REVEAL_DELAY_MS, move || {
            _ = root.class_list().add_1("loaded");
            dom::set_body_scroll_locked(false);
            dom::set_timeout(PRELOADER_HIDE_DELAY_MS, move || {
                dom::set_style(&root, "display", "none");
                log::info!("[preloader] done");
                ready();
            });
        });
    }) as Box<dyn FnMut()>);

    match window.set_interval_with_callback_and_timeout_and_arguments_0(
        tick.as_ref().unchecked_ref(),
        PRELOADER_TICK_MS as i32,
    ) {
        Ok(id) => interval_id.set(Some(id)),
        Err(e) => {
            log::warn!("[preloader] setInterval failed: {:?}", e);
            dom::set_body_scroll_locked(false);
            return false;
        }
    }
    tick.forget();
    true
}
