use crate::dom;
use crate::hero::{FieldConfig, PointerTracker, Rgb, StringField, Surface};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub const HERO_CANVAS_ID: &str = "hero-canvas";

impl Surface for web::CanvasRenderingContext2d {
    #[inline]
    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        web::CanvasRenderingContext2d::clear_rect(self, x, y, w, h);
    }
    #[inline]
    fn begin_path(&mut self) {
        web::CanvasRenderingContext2d::begin_path(self);
    }
    #[inline]
    fn move_to(&mut self, x: f64, y: f64) {
        web::CanvasRenderingContext2d::move_to(self, x, y);
    }
    #[inline]
    fn line_to(&mut self, x: f64, y: f64) {
        web::CanvasRenderingContext2d::line_to(self, x, y);
    }
    #[inline]
    fn quadratic_curve_to(&mut self, cpx: f64, cpy: f64, x: f64, y: f64) {
        web::CanvasRenderingContext2d::quadratic_curve_to(self, cpx, cpy, x, y);
    }
    #[inline]
    fn set_stroke_color(&mut self, color: Rgb) {
        self.set_stroke_style_str(&color.to_string());
    }
    #[inline]
    fn set_line_width(&mut self, width: f64) {
        web::CanvasRenderingContext2d::set_line_width(self, width);
    }
    #[inline]
    fn stroke(&mut self) {
        web::CanvasRenderingContext2d::stroke(self);
    }
}

/// The hero canvas and the simulation state shared with event handlers.
#[derive(Clone)]
pub struct HeroCanvas {
    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,
    pub field: Rc<RefCell<StringField>>,
    pub pointer: Rc<RefCell<PointerTracker>>,
}

impl HeroCanvas {
    pub fn mount(document: &web::Document) -> anyhow::Result<Self> {
        let canvas: web::HtmlCanvasElement = dom::element_by_id(document, HERO_CANVAS_ID)
            .ok_or_else(|| anyhow::anyhow!("missing #{}", HERO_CANVAS_ID))?;
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|_| anyhow::anyhow!("not a 2d context"))?;

        let config = FieldConfig::default().with_overrides(
            canvas.get_attribute("data-strings").as_deref(),
            canvas.get_attribute("data-segments").as_deref(),
        );
        let hero = Self {
            canvas,
            ctx,
            field: Rc::new(RefCell::new(StringField::new(config, 0.0, 0.0, 1.0))),
            pointer: Rc::new(RefCell::new(PointerTracker::default())),
        };
        hero.resize();
        {
            let f = hero.field.borrow();
            log::info!(
                "[hero] mounted strings={} segments={} size={}x{} @{}x",
                f.strings.len(),
                f.config.segments,
                f.width,
                f.height,
                f.dpr
            );
        }
        Ok(hero)
    }

    /// Match the backing store to the container's size and rebuild the strings.
    pub fn resize(&self) {
        let (width, height) = self.container_size();
        let dpr = dom::device_pixel_ratio();
        let mut field = self.field.borrow_mut();
        field.resize(width as f32, height as f32, dpr as f32);
        let (bw, bh) = field.backing_size();
        self.canvas.set_width(bw);
        self.canvas.set_height(bh);
        // Resizing resets the context transform; keep drawing in CSS pixels.
        _ = self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
    }

    pub fn on_pointer_move(&self, client: Vec2) {
        let rect = self.canvas.get_bounding_client_rect();
        let origin = Vec2::new(rect.left() as f32, rect.top() as f32);
        self.pointer.borrow_mut().set_from_viewport(client, origin);
    }

    /// Clear, tick and draw one frame. Returns the number of moving strings.
    pub fn frame(&self) -> usize {
        let mut ctx = self.ctx.clone();
        let mut pointer = self.pointer.borrow_mut();
        self.field.borrow_mut().frame(&mut pointer, &mut ctx)
    }

    fn container_size(&self) -> (f64, f64) {
        match self.canvas.parent_element() {
            Some(parent) => (parent.client_width() as f64, parent.client_height() as f64),
            None => {
                let rect = self.canvas.get_bounding_client_rect();
                (rect.width(), rect.height())
            }
        }
    }
}
