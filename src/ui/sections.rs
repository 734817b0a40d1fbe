use crate::dom;
use crate::scroll::{horizontal_enabled, horizontal_offset, is_revealed, scrub_progress};
use web_sys as web;

const REVEAL_SELECTOR: &str = ".animate-fade-in-up";
const REVEALED_CLASS: &str = "is-revealed";

/// Pinned section whose track slides left as the page scrolls through it.
#[derive(Clone)]
pub struct HorizontalScroll {
    section: web::Element,
    track: web::HtmlElement,
    progress_bar: Option<web::HtmlElement>,
}

impl HorizontalScroll {
    pub fn mount(document: &web::Document) -> anyhow::Result<Self> {
        let (vw, _) = dom::viewport_size();
        if !horizontal_enabled(vw) {
            anyhow::bail!("viewport {}px too narrow for horizontal scroll", vw);
        }
        let section = document
            .get_element_by_id("horizontal-scroll-section")
            .ok_or_else(|| anyhow::anyhow!("missing #horizontal-scroll-section"))?;
        let track: web::HtmlElement = dom::element_by_id(document, "horizontal-track")
            .ok_or_else(|| anyhow::anyhow!("missing #horizontal-track"))?;
        let hs = Self {
            section,
            track,
            progress_bar: dom::element_by_id(document, "scroll-progress"),
        };
        hs.update();
        Ok(hs)
    }

    /// Recompute from current layout; also called on resize.
    pub fn update(&self) {
        let (vw, vh) = dom::viewport_size();
        let rect = self.section.get_bounding_client_rect();
        let progress = scrub_progress(rect.top(), rect.height(), vh);
        let x = horizontal_offset(progress, self.track.scroll_width() as f64, vw);
        dom::set_style(&self.track, "transform", &format!("translate3d({}px, 0, 0)", x));
        if let Some(bar) = &self.progress_bar {
            dom::set_style(bar, "width", &format!("{}%", progress * 100.0));
        }
    }
}

/// Elements that fade in once their top passes the reveal line.
#[derive(Clone)]
pub struct Reveal {
    elements: Vec<web::Element>,
}

impl Reveal {
    pub fn mount(document: &web::Document) -> Option<Self> {
        let elements = dom::query_document_all(document, REVEAL_SELECTOR);
        if elements.is_empty() {
            return None;
        }
        let reveal = Self { elements };
        reveal.update();
        Some(reveal)
    }

    pub fn update(&self) {
        let (_, vh) = dom::viewport_size();
        for el in &self.elements {
            let top = el.get_bounding_client_rect().top();
            let cl = el.class_list();
            if is_revealed(top, vh) {
                _ = cl.add_1(REVEALED_CLASS);
            } else {
                _ = cl.remove_1(REVEALED_CLASS);
            }
        }
    }
}
