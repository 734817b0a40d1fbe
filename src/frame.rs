use crate::canvas::HeroCanvas;
use crate::constants::FRAME_STATS_INTERVAL_SEC;
use crate::smooth::SmoothScroll;
use crate::ui::cursor::CursorView;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything advanced once per display refresh.
pub struct FrameContext {
    pub hero: Option<HeroCanvas>,
    pub cursor: Option<CursorView>,
    pub smooth: Option<SmoothScroll>,

    pub stats_since: Instant,
    pub frames: u32,
    pub moving_strings: usize,
}

impl FrameContext {
    pub fn new(
        hero: Option<HeroCanvas>,
        cursor: Option<CursorView>,
        smooth: Option<SmoothScroll>,
    ) -> Self {
        Self {
            hero,
            cursor,
            smooth,
            stats_since: Instant::now(),
            frames: 0,
            moving_strings: 0,
        }
    }

    pub fn frame(&mut self, time_ms: f64) {
        if let Some(s) = &self.smooth {
            s.raf(time_ms);
        }
        if let Some(hero) = &self.hero {
            self.moving_strings = hero.frame();
        }
        if let Some(c) = &self.cursor {
            c.step();
        }
        self.record_stats();
    }

    fn record_stats(&mut self) {
        self.frames += 1;
        let elapsed = self.stats_since.elapsed().as_secs_f32();
        if elapsed >= FRAME_STATS_INTERVAL_SEC {
            log::debug!(
                "[frame] {:.1} fps, {} strings moving",
                self.frames as f32 / elapsed,
                self.moving_strings
            );
            self.frames = 0;
            self.stats_since = Instant::now();
        }
    }
}

type TickClosure = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Stops a running frame loop. Dropping the handle leaves the loop running.
#[derive(Clone)]
pub struct LoopHandle {
    running: Rc<Cell<bool>>,
    pending: Rc<Cell<Option<i32>>>,
    tick: TickClosure,
}

impl LoopHandle {
    /// Cancel the pending frame and release the callback.
    pub fn stop(&self) {
        if !self.running.replace(false) {
            return;
        }
        if let (Some(id), Some(w)) = (self.pending.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        self.tick.borrow_mut().take();
        log::info!("[frame] loop stopped");
    }
}

fn request_frame(tick: &TickClosure, pending: &Cell<Option<i32>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        if let Ok(id) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            pending.set(Some(id));
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> LoopHandle {
    let tick: TickClosure = Rc::new(RefCell::new(None));
    let running = Rc::new(Cell::new(true));
    let pending = Rc::new(Cell::new(None));

    let tick_clone = tick.clone();
    let running_tick = running.clone();
    let pending_tick = pending.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |time_ms: f64| {
        pending_tick.set(None);
        if !running_tick.get() {
            return;
        }
        frame_ctx.borrow_mut().frame(time_ms);
        request_frame(&tick_clone, &pending_tick);
    }) as Box<dyn FnMut(f64)>));

    request_frame(&tick, &pending);
    LoopHandle {
        running,
        pending,
        tick,
    }
}
