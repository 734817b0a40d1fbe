#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod canvas;
pub mod constants;
pub mod cursor;
mod dom;
mod events;
mod frame;
pub mod hero;
mod nav;
pub mod preloader;
pub mod scroll;
mod smooth;
mod ui;

use canvas::HeroCanvas;
use constants::SCROLLBAR_CREATE_DELAY_MS;
use events::viewport::ViewportTargets;
use frame::{FrameContext, LoopHandle};
use smooth::{ScrollLock, SmoothScroll};
use ui::cursor::CursorView;
use ui::scrollbar::Scrollbar;
use ui::sections::{HorizontalScroll, Reveal};

/// Page-lifetime handles reachable from the JS exports below.
#[derive(Default)]
struct Site {
    lock: ScrollLock,
    frame_loop: Option<LoopHandle>,
}

thread_local! {
    static SITE: RefCell<Site> = RefCell::new(Site::default());
}

fn site_lock() -> ScrollLock {
    SITE.with(|s| s.borrow().lock.clone())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Open `#modal-{project_id}` and freeze page scrolling.
#[wasm_bindgen(js_name = openModal)]
pub fn open_modal(project_id: &str) -> bool {
    dom::window_document()
        .map(|d| ui::modal::open(&d, project_id, &site_lock()))
        .unwrap_or(false)
}

#[wasm_bindgen(js_name = closeModal)]
pub fn close_modal(project_id: &str) -> bool {
    dom::window_document()
        .map(|d| ui::modal::close(&d, project_id, &site_lock()))
        .unwrap_or(false)
}

/// Tear down the animation loop (hero canvas, cursor, smooth scroll ticker).
#[wasm_bindgen]
pub fn stop() {
    let handle = SITE.with(|s| s.borrow_mut().frame_loop.take());
    if let Some(h) = handle {
        h.stop();
    }
}

async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    dom::dom_ready(&document).await;

    nav::set_active_nav_link(&document);

    let scrollbar: Rc<RefCell<Option<Scrollbar>>> = Rc::new(RefCell::new(None));
    schedule_scrollbar(&document, scrollbar.clone());

    let doc_ready = document.clone();
    let scrollbar_ready = scrollbar.clone();
    let has_preloader = ui::preloader::run(&document, move || {
        init_features(&doc_ready, scrollbar_ready);
    });
    if !has_preloader {
        init_features(&document, scrollbar);
    }
    Ok(())
}

fn schedule_scrollbar(document: &web::Document, slot: Rc<RefCell<Option<Scrollbar>>>) {
    let doc = document.clone();
    dom::set_timeout(SCROLLBAR_CREATE_DELAY_MS, move || {
        match Scrollbar::create(&doc, site_lock().smooth().cloned()) {
            Ok(sb) => *slot.borrow_mut() = Some(sb),
            Err(e) => log::warn!("[scrollbar] disabled: {:?}", e),
        }
    });
}

/// Start every interactive feature the page has markup for. Each one is
/// independent: a missing element disables that feature only.
fn init_features(document: &web::Document, scrollbar: Rc<RefCell<Option<Scrollbar>>>) {
    let smooth = match SmoothScroll::init() {
        Ok(s) => {
            log::info!("[scroll] smooth scrolling enabled");
            Some(s)
        }
        Err(e) => {
            log::info!("[scroll] native scrolling: {}", e);
            None
        }
    };
    let lock = ScrollLock::new(smooth.clone());
    SITE.with(|s| s.borrow_mut().lock = lock.clone());

    let hero = HeroCanvas::mount(document)
        .map_err(|e| log::warn!("[hero] disabled: {:?}", e))
        .ok();
    let horizontal = HorizontalScroll::mount(document)
        .map_err(|e| log::info!("[horizontal] disabled: {}", e))
        .ok();
    let cursor = CursorView::mount(document)
        .map_err(|e| log::info!("[cursor] disabled: {}", e))
        .ok();
    if let Err(e) = ui::menu::wire(document, lock.clone()) {
        log::info!("[menu] disabled: {}", e);
    }
    let reveal = Reveal::mount(document);

    events::pointer::wire_pointer(hero.clone(), cursor.clone());
    events::pointer::wire_backdrop_click(document, lock.clone());
    events::keyboard::wire_escape(document, lock);
    events::viewport::wire_viewport(ViewportTargets {
        hero: hero.clone(),
        horizontal,
        reveal,
        scrollbar,
    });

    let frame_ctx = Rc::new(RefCell::new(FrameContext::new(hero, cursor, smooth)));
    let handle = frame::start_loop(frame_ctx);
    SITE.with(|s| s.borrow_mut().frame_loop = Some(handle));
}
