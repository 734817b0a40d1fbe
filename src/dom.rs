use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn element_by_id<T: JsCast>(document: &web::Document, id: &str) -> Option<T> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
}

/// Every element matching `selector`, skipping non-element nodes.
pub fn query_all(root: &web::Element, selector: &str) -> Vec<web::Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect()
}

pub fn query_document_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    match document.document_element() {
        Some(root) => query_all(&root, selector),
        None => Vec::new(),
    }
}

pub fn add_element_click_listener(el: &web::Element, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Register a window-level listener for the lifetime of the page.
pub fn add_window_listener<E: FromWasmAbi + 'static>(
    event: &str,
    handler: impl FnMut(E) + 'static,
) {
    let Some(window) = web::window() else {
        return;
    };
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    _ = window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn add_document_listener<E: FromWasmAbi + 'static>(
    document: &web::Document,
    event: &str,
    handler: impl FnMut(E) + 'static,
) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    _ = document.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

/// Toggle `overflow: hidden` on `<body>`; used while overlays own the page.
pub fn set_body_scroll_locked(locked: bool) {
    if let Some(body) = window_document().and_then(|d| d.body()) {
        set_style(&body, "overflow", if locked { "hidden" } else { "" });
    }
}

pub fn set_timeout(ms: i32, f: impl FnOnce() + 'static) {
    let Some(window) = web::window() else {
        return;
    };
    let closure = Closure::once_into_js(f);
    _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.unchecked_ref(),
        ms,
    );
}

#[inline]
pub fn viewport_size() -> (f64, f64) {
    let Some(w) = web::window() else {
        return (0.0, 0.0);
    };
    let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (width, height)
}

#[inline]
pub fn device_pixel_ratio() -> f64 {
    web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0)
}

/// Resolve once the document has finished parsing.
pub async fn dom_ready(document: &web::Document) {
    if document.ready_state() != "loading" {
        return;
    }
    let doc = document.clone();
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        _ = doc.add_event_listener_with_callback("DOMContentLoaded", &resolve);
    });
    _ = wasm_bindgen_futures::JsFuture::from(promise).await;
}
