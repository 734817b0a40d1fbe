use crate::dom;
use crate::scroll::{drag_scroll_target, thumb_geometry};
use crate::smooth::SmoothScroll;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone, Copy, Default)]
struct Drag {
    start_y: f64,
    start_scroll: f64,
}

/// Overlay scrollbar appended to `<body>`, draggable by its thumb.
#[derive(Clone)]
pub struct Scrollbar {
    thumb: web::HtmlElement,
    smooth: Option<SmoothScroll>,
    drag: Rc<Cell<Option<Drag>>>,
}

impl Scrollbar {
    pub fn create(
        document: &web::Document,
        smooth: Option<SmoothScroll>,
    ) -> anyhow::Result<Self> {
        let body = document.body().ok_or_else(|| anyhow::anyhow!("no body"))?;
        let bar = document
            .create_element("div")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        bar.set_class_name("custom-scrollbar");
        let thumb = document
            .create_element("div")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .dyn_into::<web::HtmlElement>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        thumb.set_class_name("custom-scrollbar-thumb");
        bar.append_child(&thumb)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        body.append_child(&bar)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;

        let sb = Self {
            thumb,
            smooth,
            drag: Rc::new(Cell::new(None)),
        };
        sb.wire_drag();
        sb.update();
        Ok(sb)
    }

    /// Resize and reposition the thumb for the current scroll offset.
    pub fn update(&self) {
        let (scroll_height, client_height) = document_metrics();
        let g = thumb_geometry(scroll_height, client_height, self.scroll_top());
        dom::set_style(&self.thumb, "height", &format!("{}px", g.height));
        dom::set_style(&self.thumb, "transform", &format!("translateY({}px)", g.top));
    }

    fn scroll_top(&self) -> f64 {
        let native = web::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);
        if native > 0.0 {
            return native;
        }
        self.smooth.as_ref().and_then(|s| s.scroll()).unwrap_or(native)
    }

    fn scroll_to(&self, y: f64) {
        match &self.smooth {
            Some(s) => s.scroll_to_immediate(y),
            None => {
                if let Some(w) = web::window() {
                    w.scroll_to_with_x_and_y(0.0, y);
                }
            }
        }
    }

    fn wire_drag(&self) {
        let down = self.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            let start_scroll = down
                .smooth
                .as_ref()
                .and_then(|s| s.scroll())
                .unwrap_or_else(|| down.scroll_top());
            down.drag.set(Some(Drag {
                start_y: ev.client_y() as f64,
                start_scroll,
            }));
            _ = down.thumb.class_list().add_1("is-dragging");
            set_user_select(false);
        }) as Box<dyn FnMut(_)>);
        _ = self
            .thumb
            .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
        closure.forget();

        let moving = self.clone();
        dom::add_window_listener("mousemove", move |ev: web::MouseEvent| {
            let Some(drag) = moving.drag.get() else {
                return;
            };
            let (scroll_height, client_height) = document_metrics();
            let delta = ev.client_y() as f64 - drag.start_y;
            moving.scroll_to(drag_scroll_target(
                drag.start_scroll,
                delta,
                scroll_height,
                client_height,
            ));
        });

        let up = self.clone();
        dom::add_window_listener("mouseup", move |_ev: web::MouseEvent| {
            if up.drag.take().is_some() {
                _ = up.thumb.class_list().remove_1("is-dragging");
                set_user_select(true);
            }
        });
    }
}

fn document_metrics() -> (f64, f64) {
    let scroll_height = dom::window_document()
        .and_then(|d| d.document_element())
        .map(|el| el.scroll_height() as f64)
        .unwrap_or(0.0);
    let (_, client_height) = dom::viewport_size();
    (scroll_height, client_height)
}

fn set_user_select(enabled: bool) {
    if let Some(body) = dom::window_document().and_then(|d| d.body()) {
        dom::set_style(&body, "user-select", if enabled { "" } else { "none" });
    }
}
