use wasm_bindgen::JsCast;
use web_sys as web;

/// Last path segment of `pathname`, defaulting to the site index.
#[inline]
pub fn current_page(pathname: &str) -> &str {
    match pathname.rsplit('/').next() {
        Some(seg) if !seg.is_empty() => seg,
        _ => "index.html",
    }
}

#[inline]
pub fn is_active_link(href: Option<&str>, page: &str) -> bool {
    href == Some(page)
}

/// Mark the `.nav-link` pointing at the current page and copy each link's
/// text into `data-text` for the hover effect.
pub fn set_active_nav_link(document: &web::Document) {
    let pathname = document
        .location()
        .and_then(|l| l.pathname().ok())
        .unwrap_or_default();
    let page = current_page(&pathname);
    let Ok(links) = document.query_selector_all(".nav-link") else {
        return;
    };
    for i in 0..links.length() {
        let Some(link) = links.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) else {
            continue;
        };
        let text = link.text_content().unwrap_or_default();
        _ = link.set_attribute("data-text", &text);
        if is_active_link(link.get_attribute("href").as_deref(), page) {
            _ = link.class_list().add_1("is-active");
        }
    }
}
